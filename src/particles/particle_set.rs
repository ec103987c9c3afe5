//! Structure-of-arrays storage for a fixed population of particles.
//!
//! Every per-particle vector shares one index space and always has the same
//! length. The set is created once at simulation start and then mutated in
//! place by the integrator and the boundary policy; particles are never removed.
use log::debug;
use rand::Rng;

use crate::particles::{Color, Particle};
use crate::simulation::SimulationConfig;
use crate::utils::{
    is_positive_finite, SimulationError, COLOR_CHANNEL_RANGE, INITIAL_VELOCITY_RANGE,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleSet {
    pub positions_x: Vec<f64>,
    pub positions_y: Vec<f64>,
    pub velocities_x: Vec<f64>,
    pub velocities_y: Vec<f64>,
    pub masses: Vec<f64>,
    pub colors: Vec<Color>,
}

impl ParticleSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set with room for `capacity` particles.
    pub fn with_capacity(capacity: usize) -> Self {
        ParticleSet {
            positions_x: Vec::with_capacity(capacity),
            positions_y: Vec::with_capacity(capacity),
            velocities_x: Vec::with_capacity(capacity),
            velocities_y: Vec::with_capacity(capacity),
            masses: Vec::with_capacity(capacity),
            colors: Vec::with_capacity(capacity),
        }
    }

    /// Builds a set from individual particle records, preserving their order.
    ///
    /// # Examples
    ///
    /// ```
    /// use particle_dynamics::particles::{Particle, ParticleSet};
    ///
    /// let set = ParticleSet::from_particles(vec![
    ///     Particle::at_rest((100.0, 450.0), 1e9).unwrap(),
    ///     Particle::at_rest((800.0, 450.0), 1e9).unwrap(),
    /// ]);
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(set.get(1).unwrap().position, (800.0, 450.0));
    /// ```
    pub fn from_particles<I>(particles: I) -> Self
    where
        I: IntoIterator<Item = Particle>,
    {
        let particles = particles.into_iter();
        let mut set = Self::with_capacity(particles.size_hint().0);
        for particle in particles {
            set.push(particle);
        }
        set
    }

    /// Populates a set the way a fresh run starts.
    ///
    /// Positions are integer coordinates uniform over the domain, velocity
    /// components are integers in `[-50, 50)` scaled by `initial_speed_scale`,
    /// and every color channel is drawn from `[150, 255)`. If the configuration
    /// names an anchor factor, particle 0 sits at rest in the middle of the
    /// domain with its mass multiplied by that factor.
    pub fn random<R: Rng + ?Sized>(
        config: &SimulationConfig,
        rng: &mut R,
    ) -> Result<Self, SimulationError> {
        config.validate()?;

        let n = config.particle_count;
        let width = config.domain.width;
        let height = config.domain.height;
        let x_span = (width as i64).max(1);
        let y_span = (height as i64).max(1);
        let (v_lo, v_hi) = INITIAL_VELOCITY_RANGE;
        let (c_lo, c_hi) = COLOR_CHANNEL_RANGE;

        let mut set = Self::with_capacity(n);
        for _ in 0..n {
            let position = (
                rng.random_range(0..x_span) as f64,
                rng.random_range(0..y_span) as f64,
            );
            let velocity = (
                rng.random_range(v_lo..v_hi) as f64 * config.initial_speed_scale,
                rng.random_range(v_lo..v_hi) as f64 * config.initial_speed_scale,
            );
            let color = Color::new(
                rng.random_range(c_lo..c_hi),
                rng.random_range(c_lo..c_hi),
                rng.random_range(c_lo..c_hi),
            );
            set.push(Particle::new(position, velocity, config.mass, color)?);
        }

        if let Some(factor) = config.anchor_mass_factor {
            if n > 0 {
                let (cx, cy) = config.domain.center();
                set.positions_x[0] = cx;
                set.positions_y[0] = cy;
                set.velocities_x[0] = 0.0;
                set.velocities_y[0] = 0.0;
                set.masses[0] *= factor;
            }
        }

        debug!("Initialised {} particles in a {}x{} domain", n, width, height);
        Ok(set)
    }

    /// Appends a particle.
    pub fn push(&mut self, particle: Particle) {
        self.positions_x.push(particle.position.0);
        self.positions_y.push(particle.position.1);
        self.velocities_x.push(particle.velocity.0);
        self.velocities_y.push(particle.velocity.1);
        self.masses.push(particle.mass);
        self.colors.push(particle.color);
    }

    /// Returns a copy of particle `index`, or `None` if it is out of range.
    pub fn get(&self, index: usize) -> Option<Particle> {
        if index >= self.len() {
            return None;
        }
        Some(Particle {
            position: (self.positions_x[index], self.positions_y[index]),
            velocity: (self.velocities_x[index], self.velocities_y[index]),
            mass: self.masses[index],
            color: self.colors[index],
        })
    }

    pub fn len(&self) -> usize {
        self.masses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    /// Iterates over copies of every particle in index order.
    pub fn iter(&self) -> impl Iterator<Item = Particle> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    /// Checks that every per-particle array has the same length and every mass is valid.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let expected = self.masses.len();
        for found in [
            self.positions_x.len(),
            self.positions_y.len(),
            self.velocities_x.len(),
            self.velocities_y.len(),
            self.colors.len(),
        ] {
            if found != expected {
                return Err(SimulationError::LengthMismatch { expected, found });
            }
        }
        if !self.masses.iter().all(|&m| is_positive_finite(m)) {
            return Err(SimulationError::InvalidMass);
        }
        Ok(())
    }

    /// Returns true when every position and velocity component is finite.
    pub fn is_finite(&self) -> bool {
        self.positions_x
            .iter()
            .chain(&self.positions_y)
            .chain(&self.velocities_x)
            .chain(&self.velocities_y)
            .all(|v| v.is_finite())
    }
}
