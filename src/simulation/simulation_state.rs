//! The owned aggregate that advances a particle population one frame at a time.
//!
//! Each call to [`SimulationState::advance`] runs, in this order:
//!
//! 1. pairwise distances and directions over the current positions,
//! 2. the configured force law for every ordered pair, reduced to accelerations,
//! 3. the semi-implicit Euler update,
//! 4. the boundary policy against the bounds for the new step count.
//!
//! # Example
//!
//! ```
//! use particle_dynamics::particles::{Particle, ParticleSet};
//! use particle_dynamics::simulation::{SimulationConfig, SimulationState};
//!
//! let config = SimulationConfig::gravity_preset().with_particle_count(2);
//! let particles = ParticleSet::from_particles(vec![
//!     Particle::at_rest((100.0, 450.0), 1e9).unwrap(),
//!     Particle::at_rest((800.0, 450.0), 1e9).unwrap(),
//! ]);
//! let mut sim = SimulationState::new(config, particles).expect("Failed to build simulation");
//!
//! sim.simulate(10);
//! assert_eq!(sim.step_count(), 10);
//! assert!(sim.particles().positions_x[0] > 100.0);
//!
//! let frame = sim.render_frame();
//! assert_eq!((frame[1].x, frame[1].y), (799, 450));
//! ```
use std::fmt;

use log::{debug, trace};
use rand::Rng;

use crate::boundaries::DomainBounds;
use crate::field::PairwiseField;
use crate::forces::ForceLaw;
use crate::integrators::{accumulate_accelerations, semi_implicit_euler};
use crate::particles::{Color, ParticleSet};
use crate::simulation::SimulationConfig;
use crate::utils::SimulationError;

/// One particle as handed to the renderer: truncated screen coordinates and a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderPoint {
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

pub struct SimulationState {
    config: SimulationConfig,
    particles: ParticleSet,
    force_law: Box<dyn ForceLaw + Send + Sync>,
    bounds: DomainBounds,
    step: u64,
}

impl fmt::Debug for SimulationState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SimulationState")
            .field("force_law", &self.force_law.name())
            .field("particles", &self.particles.len())
            .field("bounds", &self.bounds)
            .field("step", &self.step)
            .finish()
    }
}

impl SimulationState {
    /// Builds a simulation over an existing particle set.
    ///
    /// # Errors
    ///
    /// Returns the first configuration problem found: an invalid config, a
    /// particle with a non-positive mass, or mismatched per-particle arrays.
    /// The particle count of `config` is not enforced here; the set decides N.
    pub fn new(config: SimulationConfig, particles: ParticleSet) -> Result<Self, SimulationError> {
        config.validate()?;
        particles.validate()?;

        let force_law = config.force_law.build(config.softening);
        debug!(
            "Built {} simulation: {} particles, dt = {}, boundary = {:?}",
            force_law.name(),
            particles.len(),
            config.time_step(),
            config.boundary
        );

        let bounds = match config.modulation {
            Some(modulation) => modulation.bounds_at(config.domain, 0),
            None => config.domain,
        };

        Ok(SimulationState {
            config,
            particles,
            force_law,
            bounds,
            step: 0,
        })
    }

    /// Builds a simulation with `config.particle_count` randomly placed particles.
    pub fn random<R: Rng + ?Sized>(config: SimulationConfig, rng: &mut R) -> Result<Self, SimulationError> {
        let particles = ParticleSet::random(&config, rng)?;
        Self::new(config, particles)
    }

    /// Advances every particle by one time step and returns the updated set.
    pub fn advance(&mut self) -> &ParticleSet {
        let dt = self.config.time_step();

        let field = PairwiseField::compute(
            &self.particles.positions_x,
            &self.particles.positions_y,
            self.config.softening,
        );
        let accelerations = accumulate_accelerations(&field, &self.particles.masses, self.force_law.as_ref());
        if accelerations.sanitized > 0 {
            debug!(
                "Step {}: dropped {} non-finite pair contributions",
                self.step, accelerations.sanitized
            );
        }

        semi_implicit_euler(&mut self.particles, &accelerations, dt);

        self.step += 1;
        if let Some(modulation) = self.config.modulation {
            self.bounds = modulation.bounds_at(self.config.domain, self.step);
        }
        self.config.boundary.apply_all(&mut self.particles, self.bounds);

        trace!("Step {} complete, bounds {}x{}", self.step, self.bounds.width, self.bounds.height);
        &self.particles
    }

    /// Runs `steps` consecutive calls to [`advance`](Self::advance).
    pub fn simulate(&mut self, steps: usize) -> &ParticleSet {
        for _ in 0..steps {
            self.advance();
        }
        &self.particles
    }

    /// Screen-space view of the current state, one entry per particle.
    ///
    /// Coordinates are truncated toward zero, matching an integer cast.
    pub fn render_frame(&self) -> Vec<RenderPoint> {
        let p = &self.particles;
        (0..p.len())
            .map(|i| RenderPoint {
                x: p.positions_x[i] as i32,
                y: p.positions_y[i] as i32,
                color: p.colors[i],
            })
            .collect()
    }

    /// Total kinetic energy, `sum(m v^2 / 2)`.
    pub fn kinetic_energy(&self) -> f64 {
        let p = &self.particles;
        (0..p.len())
            .map(|i| 0.5 * p.masses[i] * (p.velocities_x[i].powi(2) + p.velocities_y[i].powi(2)))
            .sum()
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Bounds in effect for the most recent step.
    pub fn bounds(&self) -> DomainBounds {
        self.bounds
    }

    pub fn step_count(&self) -> u64 {
        self.step
    }

    pub fn force_law_name(&self) -> &'static str {
        self.force_law.name()
    }
}
