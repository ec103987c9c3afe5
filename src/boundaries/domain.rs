use std::f64::consts::PI;

use crate::utils::{is_positive_finite, SimulationError};

/// The rectangle `[0, width] x [0, height]` particles are kept inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainBounds {
    pub width: f64,
    pub height: f64,
}

impl DomainBounds {
    pub fn new(width: f64, height: f64) -> Result<Self, SimulationError> {
        let bounds = DomainBounds { width, height };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        if !is_positive_finite(self.width) || !is_positive_finite(self.height) {
            return Err(SimulationError::InvalidDomain);
        }
        Ok(())
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

/// Slow periodic breathing of the domain, driven by the elapsed step count.
///
/// Both extents follow `base * (1 + amplitude * sin(2 pi step / period_steps))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainModulation {
    pub amplitude: f64,
    pub period_steps: f64,
}

impl DomainModulation {
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !(self.amplitude.is_finite() && (0.0..1.0).contains(&self.amplitude)) {
            return Err(SimulationError::InvalidParameter(
                "modulation amplitude must be in [0, 1)".to_string(),
            ));
        }
        if !is_positive_finite(self.period_steps) {
            return Err(SimulationError::InvalidParameter(
                "modulation period must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Bounds after `step` elapsed steps.
    ///
    /// # Example
    /// ```
    /// use particle_dynamics::boundaries::{DomainBounds, DomainModulation};
    ///
    /// let base = DomainBounds::new(900.0, 900.0).unwrap();
    /// let breathing = DomainModulation { amplitude: 0.1, period_steps: 400.0 };
    ///
    /// assert_eq!(breathing.bounds_at(base, 0), base);
    /// let peak = breathing.bounds_at(base, 100);
    /// assert!((peak.width - 990.0).abs() < 1e-9);
    /// ```
    pub fn bounds_at(&self, base: DomainBounds, step: u64) -> DomainBounds {
        let scale = 1.0 + self.amplitude * (2.0 * PI * step as f64 / self.period_steps).sin();
        DomainBounds {
            width: base.width * scale,
            height: base.height * scale,
        }
    }
}
