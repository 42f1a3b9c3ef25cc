use crate::utils::{SimConfig, SimulationError};
use approx::assert_relative_eq;

#[test]
fn test_default_config_is_valid() {
    assert!(SimConfig::default().validate().is_ok());
}

#[test]
fn test_non_positive_time_step_rejected() {
    let config = SimConfig {
        time_step: 0.0,
        ..SimConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(SimulationError::InvalidTimeStep)
    ));

    let config = SimConfig {
        time_step: -1.0,
        ..SimConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(SimulationError::InvalidTimeStep)
    ));
}

#[test]
fn test_zero_body_count_rejected() {
    let config = SimConfig {
        num_bodies: 0,
        ..SimConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(SimulationError::InvalidBodyCount)
    ));
}

#[test]
fn test_non_positive_opening_angle_rejected() {
    let config = SimConfig {
        opening_angle_threshold: 0.0,
        ..SimConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(SimulationError::InvalidOpeningAngle)
    ));
}

#[test]
fn test_non_positive_domain_rejected() {
    let config = SimConfig {
        comoving_size: -5e23,
        ..SimConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(SimulationError::InvalidDomainSize)
    ));
}

#[test]
fn test_zero_mesh_resolution_rejected() {
    let config = SimConfig {
        mesh_resolution: 0,
        ..SimConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(SimulationError::InvalidMeshResolution)
    ));
}

#[test]
fn test_derived_quantities() {
    let config = SimConfig::default();

    // Expansion over the full run should bring the initial size back to the
    // comoving size: initsize * exp(hubble * total_time) == comoving_size.
    let grown = config.initial_domain_size() * (config.hubble_rate * config.total_time).exp();
    assert_relative_eq!(grown, config.comoving_size, max_relative = 1e-12);

    // Total mass equals density times comoving volume.
    let total_mass = config.body_mass() * config.num_bodies as f64;
    assert_relative_eq!(
        total_mass,
        config.comoving_size.powi(3) * config.density,
        max_relative = 1e-12
    );
}
