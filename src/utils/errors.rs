use std::error::Error;
use std::fmt;

/// Represents errors that can occur while configuring or running a simulation.
#[derive(Debug, Clone)]
pub enum SimulationError {
    /// Indicates a non-positive mass or mass density.
    InvalidMass,
    /// Indicates a non-positive time step or total simulation time.
    InvalidTimeStep,
    /// Indicates a non-positive domain size.
    InvalidDomainSize,
    /// Indicates a zero body count.
    InvalidBodyCount,
    /// Indicates a non-positive opening-angle threshold.
    InvalidOpeningAngle,
    /// Indicates a zero mesh resolution or a negative tiling radius.
    InvalidMeshResolution,
    /// Indicates a non-positive grid cutoff.
    InvalidCutoff,
    /// Indicates a negative Plummer softening length.
    InvalidSoftening,
    /// A general error for calculations that produce invalid results.
    CalculationError(String),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SimulationError::InvalidMass => write!(f, "Invalid mass value"),
            SimulationError::InvalidTimeStep => write!(f, "Invalid time step or total time"),
            SimulationError::InvalidDomainSize => write!(f, "Invalid domain size"),
            SimulationError::InvalidBodyCount => write!(f, "Invalid body count"),
            SimulationError::InvalidOpeningAngle => write!(f, "Invalid opening-angle threshold"),
            SimulationError::InvalidMeshResolution => write!(f, "Invalid mesh resolution"),
            SimulationError::InvalidCutoff => write!(f, "Invalid grid cutoff"),
            SimulationError::InvalidSoftening => write!(f, "Invalid softening length"),
            SimulationError::CalculationError(msg) => write!(f, "Calculation error: {}", msg),
        }
    }
}

impl Error for SimulationError {}
