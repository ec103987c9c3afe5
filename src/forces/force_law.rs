use crate::utils::{is_positive_finite, SimulationError};

/// A pairwise interaction evaluated once per ordered pair `(i, j)`, `i != j`.
///
/// `magnitude` returns the signed radial acceleration felt by particle `i`
/// along `Dir[i][j] = (p_i - p_j) / (D + softening)`: positive values push `i`
/// away from `j`, negative values pull it towards `j`. The caller multiplies by
/// the direction and sums over `j`; non-finite results are dropped there.
pub trait ForceLaw {
    fn magnitude(&self, distance: f64, mass_i: f64, mass_j: f64) -> f64;

    fn name(&self) -> &'static str;
}

/// Softened inverse-square attraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonianGravity {
    pub g: f64,
    pub softening: f64,
}

impl ForceLaw for NewtonianGravity {
    /// `-G * m_j / (D^2 + softening)`, the gravitational force divided by `m_i`.
    ///
    /// `m_i` cancels before any product is formed, so very large masses do not
    /// overflow on the way to a finite acceleration.
    ///
    /// # Example
    /// ```
    /// use particle_dynamics::forces::{ForceLaw, NewtonianGravity};
    ///
    /// let gravity = NewtonianGravity { g: 1.0, softening: 0.0 };
    /// // Attractive, and independent of the receiving particle's own mass.
    /// assert_eq!(gravity.magnitude(2.0, 5.0, 8.0), -2.0);
    /// assert_eq!(gravity.magnitude(2.0, 1.0, 8.0), -2.0);
    /// ```
    fn magnitude(&self, distance: f64, _mass_i: f64, mass_j: f64) -> f64 {
        -(self.g * mass_j / (distance * distance + self.softening))
    }

    fn name(&self) -> &'static str {
        "newtonian-gravity"
    }
}

/// Lennard-Jones interaction: steep short-range repulsion, weaker attraction
/// beyond `sigma * 2^(1/6)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LennardJones {
    pub sigma: f64,
    pub epsilon: f64,
    pub softening: f64,
}

impl LennardJones {
    /// Separation at which repulsion and attraction cancel.
    pub fn equilibrium_distance(&self) -> f64 {
        self.sigma * 2f64.powf(1.0 / 6.0)
    }
}

impl ForceLaw for LennardJones {
    /// `(48 / m_i) * (epsilon / sigma) * ((sigma / r)^13 - 0.5 * (sigma / r)^7)` with
    /// `r = D + softening`.
    fn magnitude(&self, distance: f64, mass_i: f64, _mass_j: f64) -> f64 {
        let s = self.sigma / (distance + self.softening);
        (48.0 / mass_i) * (self.epsilon / self.sigma) * (s.powi(13) - s.powi(7) * 0.5)
    }

    fn name(&self) -> &'static str {
        "lennard-jones"
    }
}

/// Which force law a run uses. Chosen once when the simulation is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ForceLawConfig {
    Gravity { g: f64 },
    LennardJones { sigma: f64, epsilon: f64 },
}

impl ForceLawConfig {
    pub fn validate(&self) -> Result<(), SimulationError> {
        match *self {
            ForceLawConfig::Gravity { g } => {
                if !g.is_finite() {
                    return Err(SimulationError::InvalidParameter(
                        "gravitational constant must be finite".to_string(),
                    ));
                }
            }
            ForceLawConfig::LennardJones { sigma, epsilon } => {
                if !is_positive_finite(sigma) {
                    return Err(SimulationError::InvalidParameter(
                        "Lennard-Jones sigma must be positive".to_string(),
                    ));
                }
                if !epsilon.is_finite() || epsilon < 0.0 {
                    return Err(SimulationError::InvalidParameter(
                        "Lennard-Jones epsilon must be non-negative".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Builds the concrete law with the run's softening constant.
    pub fn build(&self, softening: f64) -> Box<dyn ForceLaw + Send + Sync> {
        match *self {
            ForceLawConfig::Gravity { g } => Box::new(NewtonianGravity { g, softening }),
            ForceLawConfig::LennardJones { sigma, epsilon } => {
                Box::new(LennardJones { sigma, epsilon, softening })
            }
        }
    }
}
