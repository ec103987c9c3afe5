use log::warn;

use crate::boundaries::{BoundaryPolicy, DomainBounds, DomainModulation};
use crate::forces::ForceLawConfig;
use crate::utils::{
    is_positive_finite, SimulationError, CLAMP_TOLERANCE, FRAME_RATE, GRAVITATIONAL_CONSTANT,
    GRAVITY_ANCHOR_FACTOR, GRAVITY_DOMAIN, GRAVITY_PARTICLE_COUNT, GRAVITY_PARTICLE_MASS,
    GRAVITY_SPEED_SCALE, LJ_DOMAIN, LJ_EPSILON, LJ_PARTICLE_COUNT, LJ_PARTICLE_MASS, LJ_SIGMA,
    MODULATION_AMPLITUDE, MODULATION_PERIOD_STEPS, SOFTENING,
};

/// Parameters fixed for the lifetime of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub particle_count: usize,
    pub force_law: ForceLawConfig,
    pub softening: f64,
    /// Mass given to every particle created by random initialisation.
    pub mass: f64,
    /// When set, particle 0 starts at the domain centre, at rest, this many times heavier.
    pub anchor_mass_factor: Option<f64>,
    /// Scale applied to the integer initial velocity components.
    pub initial_speed_scale: f64,
    /// Steps per unit of simulated time.
    pub frame_rate: f64,
    pub domain: DomainBounds,
    pub modulation: Option<DomainModulation>,
    pub boundary: BoundaryPolicy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::gravity_preset()
    }
}

impl SimulationConfig {
    /// Nine bodies around a heavy anchor in a 900x900 box.
    pub fn gravity_preset() -> Self {
        SimulationConfig {
            particle_count: GRAVITY_PARTICLE_COUNT,
            force_law: ForceLawConfig::Gravity { g: GRAVITATIONAL_CONSTANT },
            softening: SOFTENING,
            mass: GRAVITY_PARTICLE_MASS,
            anchor_mass_factor: Some(GRAVITY_ANCHOR_FACTOR),
            initial_speed_scale: GRAVITY_SPEED_SCALE,
            frame_rate: FRAME_RATE,
            domain: DomainBounds { width: GRAVITY_DOMAIN.0, height: GRAVITY_DOMAIN.1 },
            modulation: None,
            boundary: BoundaryPolicy::SimpleReflect,
        }
    }

    /// Three hundred Lennard-Jones particles released at rest in a 1600x900 box.
    pub fn lennard_jones_preset() -> Self {
        SimulationConfig {
            particle_count: LJ_PARTICLE_COUNT,
            force_law: ForceLawConfig::LennardJones { sigma: LJ_SIGMA, epsilon: LJ_EPSILON },
            softening: SOFTENING,
            mass: LJ_PARTICLE_MASS,
            anchor_mass_factor: None,
            initial_speed_scale: 0.0,
            frame_rate: FRAME_RATE,
            domain: DomainBounds { width: LJ_DOMAIN.0, height: LJ_DOMAIN.1 },
            modulation: None,
            boundary: BoundaryPolicy::SimpleReflect,
        }
    }

    /// Gravity preset inside a breathing domain with clamping walls.
    pub fn breathing_gravity_preset() -> Self {
        Self::gravity_preset()
            .with_boundary(BoundaryPolicy::Clamp { tolerance: CLAMP_TOLERANCE })
            .with_modulation(DomainModulation {
                amplitude: MODULATION_AMPLITUDE,
                period_steps: MODULATION_PERIOD_STEPS,
            })
    }

    /// Overrides the given fields of the gravity preset and keeps the rest.
    ///
    /// # Example
    /// ```
    /// use particle_dynamics::simulation::SimulationConfig;
    ///
    /// let config = SimulationConfig::new(Some(2), None, None, None, None, None);
    /// assert_eq!(config.particle_count, 2);
    /// assert_eq!(config.mass, SimulationConfig::default().mass);
    /// ```
    pub fn new(
        particle_count: Option<usize>,
        force_law: Option<ForceLawConfig>,
        mass: Option<f64>,
        frame_rate: Option<f64>,
        domain: Option<DomainBounds>,
        boundary: Option<BoundaryPolicy>,
    ) -> Self {
        let default = Self::default();
        Self {
            particle_count: particle_count.unwrap_or(default.particle_count),
            force_law: force_law.unwrap_or(default.force_law),
            mass: mass.unwrap_or(default.mass),
            frame_rate: frame_rate.unwrap_or(default.frame_rate),
            domain: domain.unwrap_or(default.domain),
            boundary: boundary.unwrap_or(default.boundary),
            ..default
        }
    }

    pub fn with_particle_count(mut self, particle_count: usize) -> Self {
        self.particle_count = particle_count;
        self
    }

    pub fn with_force_law(mut self, force_law: ForceLawConfig) -> Self {
        self.force_law = force_law;
        self
    }

    pub fn with_domain(mut self, width: f64, height: f64) -> Self {
        self.domain = DomainBounds { width, height };
        self
    }

    pub fn with_modulation(mut self, modulation: DomainModulation) -> Self {
        self.modulation = Some(modulation);
        self
    }

    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn with_frame_rate(mut self, frame_rate: f64) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    /// Seconds of simulated time per step.
    ///
    /// # Example
    /// ```
    /// use particle_dynamics::simulation::SimulationConfig;
    ///
    /// assert_eq!(SimulationConfig::default().time_step(), 1.0 / 144.0);
    /// ```
    pub fn time_step(&self) -> f64 {
        1.0 / self.frame_rate
    }

    /// Rejects configurations a run could not honour.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let result = self.check();
        if let Err(ref err) = result {
            warn!("Rejected simulation configuration: {}", err);
        }
        result
    }

    fn check(&self) -> Result<(), SimulationError> {
        if !is_positive_finite(self.mass) {
            return Err(SimulationError::InvalidMass);
        }
        if let Some(factor) = self.anchor_mass_factor {
            if !is_positive_finite(factor) || !is_positive_finite(self.mass * factor) {
                return Err(SimulationError::InvalidMass);
            }
        }
        if !is_positive_finite(self.frame_rate) {
            return Err(SimulationError::InvalidTimeStep);
        }
        if !is_positive_finite(self.softening) {
            return Err(SimulationError::InvalidSoftening);
        }
        if !self.initial_speed_scale.is_finite() {
            return Err(SimulationError::InvalidParameter(
                "initial speed scale must be finite".to_string(),
            ));
        }
        if let BoundaryPolicy::Clamp { tolerance } = self.boundary {
            if !tolerance.is_finite() || tolerance < 0.0 {
                return Err(SimulationError::InvalidParameter(
                    "clamp tolerance must be non-negative".to_string(),
                ));
            }
        }
        self.domain.validate()?;
        if let Some(modulation) = self.modulation {
            modulation.validate()?;
        }
        self.force_law.validate()
    }
}
