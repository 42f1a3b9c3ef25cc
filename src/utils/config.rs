use crate::utils::SimulationError;

/// Physical parameters of the simulated universe. `domain_size` is the only
/// field that changes during a run, growing under metric expansion.
#[derive(Debug, Clone, Copy)]
pub struct UniverseParams {
    /// Current side length of the periodic domain, in meters.
    pub domain_size: f64,
    /// Expansion rate, in 1/s.
    pub hubble_rate: f64,
    /// Plummer softening length, in meters.
    pub plummer_softening: f64,
    /// Gravitational constant, in m^3 kg^-1 s^-2.
    pub gravitational_constant: f64,
}

/// Numerical parameters of a run. Immutable once the simulation starts.
#[derive(Debug, Clone, Copy)]
pub struct SimParams {
    /// Opening-angle threshold: a tree node is accepted as a point mass when
    /// `distance / sqrt(spread)` exceeds this value.
    pub opening_angle_threshold: f64,
    /// Separations beyond this many mesh cells use the precomputed periodic
    /// field instead of the direct pairwise law.
    pub grid_cutoff: f64,
    /// Time step, in seconds.
    pub time_step: f64,
    /// Total simulated time, in seconds.
    pub total_time: f64,
}

/// Full configuration record for a simulation run.
///
/// Defaults describe a 5e23 m comoving box of 4096 bodies at a mean density
/// of 1e-26 kg/m^3, evolved over 5e17 s in 5e14 s steps.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// Mean mass density of the domain, in kg/m^3.
    pub density: f64,
    /// Comoving domain size at the end of the run, in meters.
    pub comoving_size: f64,
    pub plummer_softening: f64,
    pub gravitational_constant: f64,
    pub hubble_rate: f64,
    pub total_time: f64,
    pub time_step: f64,
    pub opening_angle_threshold: f64,
    /// Side length of the periodic force mesh, in cells.
    pub mesh_resolution: usize,
    /// Periodic images are summed for offsets in `[-tiling_radius, tiling_radius]`.
    pub tiling_radius: i32,
    /// Mesh-lookup cutoff, in mesh cells.
    pub grid_cutoff: f64,
    pub num_bodies: usize,
    /// Initial grid jitter as a fraction of the grid spacing.
    pub displacement_ratio: f64,
    /// Magnitude of the initial velocity jitter, in m/s.
    pub max_velocity: f64,
    /// Side length of the rendering raster, in pixels.
    pub draw_size: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            density: 1e-26,
            comoving_size: 5e23,
            plummer_softening: 5e21,
            gravitational_constant: 6.67e-11,
            hubble_rate: 2.25e-18,
            total_time: 5e17,
            time_step: 5e14,
            opening_angle_threshold: 3.0,
            mesh_resolution: 1024,
            tiling_radius: 15,
            grid_cutoff: 8.0,
            num_bodies: 4096,
            displacement_ratio: 0.2,
            max_velocity: 1e5,
            draw_size: 1024,
        }
    }
}

impl SimConfig {
    /// Rejects physically meaningless configurations before any simulation
    /// state is built.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.density <= 0.0 {
            return Err(SimulationError::InvalidMass);
        }
        if self.comoving_size <= 0.0 {
            return Err(SimulationError::InvalidDomainSize);
        }
        if self.time_step <= 0.0 || self.total_time <= 0.0 {
            return Err(SimulationError::InvalidTimeStep);
        }
        if self.num_bodies == 0 {
            return Err(SimulationError::InvalidBodyCount);
        }
        if self.opening_angle_threshold <= 0.0 {
            return Err(SimulationError::InvalidOpeningAngle);
        }
        if self.mesh_resolution == 0 || self.tiling_radius < 0 {
            return Err(SimulationError::InvalidMeshResolution);
        }
        if self.grid_cutoff <= 0.0 {
            return Err(SimulationError::InvalidCutoff);
        }
        if self.plummer_softening < 0.0 {
            return Err(SimulationError::InvalidSoftening);
        }
        Ok(())
    }

    /// Domain size at the start of the run, chosen so that expansion over the
    /// full simulated time ends at the comoving size.
    pub fn initial_domain_size(&self) -> f64 {
        self.comoving_size * (-self.hubble_rate * self.total_time).exp()
    }

    /// Per-body mass giving the configured mean density.
    pub fn body_mass(&self) -> f64 {
        self.comoving_size.powi(3) * self.density / self.num_bodies as f64
    }

    pub fn universe_params(&self) -> UniverseParams {
        UniverseParams {
            domain_size: self.initial_domain_size(),
            hubble_rate: self.hubble_rate,
            plummer_softening: self.plummer_softening,
            gravitational_constant: self.gravitational_constant,
        }
    }

    pub fn sim_params(&self) -> SimParams {
        SimParams {
            opening_angle_threshold: self.opening_angle_threshold,
            grid_cutoff: self.grid_cutoff,
            time_step: self.time_step,
            total_time: self.total_time,
        }
    }
}
