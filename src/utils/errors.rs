use std::fmt;
use std::error::Error;

/// Represents configuration errors rejected before a simulation starts.
///
/// A validated simulation never produces one of these while stepping; numerical
/// trouble inside a step is absorbed by softening and sanitizing instead.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Indicates an invalid mass value (zero, negative or non-finite).
    InvalidMass,
    /// Indicates an invalid time step (zero, negative or non-finite frame rate).
    InvalidTimeStep,
    /// Indicates a domain with a non-positive or non-finite extent.
    InvalidDomain,
    /// Indicates a softening constant that is not strictly positive.
    InvalidSoftening,
    /// A force-law or modulation parameter outside its valid range.
    InvalidParameter(String),
    /// Per-particle storage whose length disagrees with the particle count.
    LengthMismatch { expected: usize, found: usize },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SimulationError::InvalidMass => write!(f, "Invalid mass value"),
            SimulationError::InvalidTimeStep => write!(f, "Invalid time step"),
            SimulationError::InvalidDomain => write!(f, "Invalid domain bounds"),
            SimulationError::InvalidSoftening => write!(f, "Invalid softening constant"),
            SimulationError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            SimulationError::LengthMismatch { expected, found } => {
                write!(f, "Length mismatch: expected {} particles, found {}", expected, found)
            }
        }
    }
}

impl Error for SimulationError {}
