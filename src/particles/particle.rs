use crate::utils::{is_positive_finite, SimulationError};

/// Display color of a particle, passed through untouched to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

/// A single point particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Position represented as (x, y).
    pub position: (f64, f64),
    /// Velocity represented as (vx, vy).
    pub velocity: (f64, f64),
    /// Particle's mass.
    pub mass: f64,
    pub color: Color,
}

impl Particle {
    /// Creates a new Particle.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidMass`] if `mass` is non-positive or not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use particle_dynamics::particles::{Color, Particle};
    ///
    /// let particle = Particle::new((100.0, 450.0), (0.0, 0.0), 1e9, Color::WHITE)
    ///     .expect("Failed to create particle");
    /// assert_eq!(particle.mass, 1e9);
    ///
    /// assert!(Particle::new((0.0, 0.0), (0.0, 0.0), 0.0, Color::WHITE).is_err());
    /// ```
    pub fn new(
        position: (f64, f64),
        velocity: (f64, f64),
        mass: f64,
        color: Color,
    ) -> Result<Self, SimulationError> {
        if !is_positive_finite(mass) {
            return Err(SimulationError::InvalidMass);
        }
        Ok(Particle {
            position,
            velocity,
            mass,
            color,
        })
    }

    /// Creates a white particle at rest.
    pub fn at_rest(position: (f64, f64), mass: f64) -> Result<Self, SimulationError> {
        Self::new(position, (0.0, 0.0), mass, Color::WHITE)
    }
}
