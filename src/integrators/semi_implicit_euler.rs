//! Force reduction and the semi-implicit Euler update.
//!
//! The outer loop over receiving particles is partitioned across Rayon workers
//! when the `parallel` feature is enabled. Each worker owns its row's
//! accumulator and only reads positions and masses, so the result does not
//! depend on the thread count.
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::field::PairwiseField;
use crate::forces::ForceLaw;
use crate::particles::ParticleSet;
use crate::utils::sanitize;

/// Net acceleration per particle for one step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Accelerations {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// Pair contributions that were non-finite and replaced by zero.
    pub sanitized: usize,
}

impl Accelerations {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Sums `F(i, j) * Dir[i][j]` over every `j != i`.
///
/// The diagonal is skipped explicitly. Any non-finite magnitude or
/// contribution is replaced by zero before it reaches the sum, and a sum that
/// overflows is zeroed as well.
///
/// # Examples
///
/// ```
/// use particle_dynamics::field::PairwiseField;
/// use particle_dynamics::forces::NewtonianGravity;
/// use particle_dynamics::integrators::accumulate_accelerations;
///
/// let field = PairwiseField::compute(&[0.0, 10.0], &[0.0, 0.0], 1e-20);
/// let gravity = NewtonianGravity { g: 1.0, softening: 1e-20 };
/// let acc = accumulate_accelerations(&field, &[1.0, 1.0], &gravity);
///
/// // Pulled towards each other.
/// assert!(acc.x[0] > 0.0 && acc.x[1] < 0.0);
/// assert_eq!(acc.sanitized, 0);
/// ```
pub fn accumulate_accelerations<L>(field: &PairwiseField, masses: &[f64], law: &L) -> Accelerations
where
    L: ForceLaw + Sync + ?Sized,
{
    let n = field.len();
    debug_assert_eq!(n, masses.len());

    let row = |i: usize| -> (f64, f64, usize) {
        let distances = field.distance_row(i);
        let (dir_x, dir_y) = field.direction_row(i);
        let mass_i = masses[i];
        let mut ax = 0.0;
        let mut ay = 0.0;
        let mut dropped = 0;
        for j in 0..n {
            if j == i {
                continue;
            }
            let raw = law.magnitude(distances[j], mass_i, masses[j]);
            let magnitude = sanitize(raw);
            let cx = magnitude * dir_x[j];
            let cy = magnitude * dir_y[j];
            if !(raw.is_finite() && cx.is_finite() && cy.is_finite()) {
                dropped += 1;
            }
            ax += sanitize(cx);
            ay += sanitize(cy);
        }
        (sanitize(ax), sanitize(ay), dropped)
    };

    #[cfg(feature = "parallel")]
    let rows: Vec<(f64, f64, usize)> = (0..n).into_par_iter().map(row).collect();
    #[cfg(not(feature = "parallel"))]
    let rows: Vec<(f64, f64, usize)> = (0..n).map(row).collect();

    let mut acc = Accelerations {
        x: Vec::with_capacity(n),
        y: Vec::with_capacity(n),
        sanitized: 0,
    };
    for (ax, ay, dropped) in rows {
        acc.x.push(ax);
        acc.y.push(ay);
        acc.sanitized += dropped;
    }
    acc
}

/// Advances velocities from `accelerations`, then positions from the new velocities.
///
/// The order matters: the position update must see the velocity computed in
/// the same step.
///
/// # Examples
///
/// ```
/// use particle_dynamics::integrators::{semi_implicit_euler, Accelerations};
/// use particle_dynamics::particles::{Particle, ParticleSet};
///
/// let mut set = ParticleSet::from_particles(vec![Particle::at_rest((0.0, 0.0), 1.0).unwrap()]);
/// let acc = Accelerations { x: vec![2.0], y: vec![0.0], sanitized: 0 };
/// semi_implicit_euler(&mut set, &acc, 0.5);
///
/// assert_eq!(set.velocities_x[0], 1.0);
/// assert_eq!(set.positions_x[0], 0.5);
/// ```
pub fn semi_implicit_euler(set: &mut ParticleSet, accelerations: &Accelerations, dt: f64) {
    debug_assert_eq!(set.len(), accelerations.len());

    #[cfg(feature = "parallel")]
    {
        set.positions_x
            .par_iter_mut()
            .zip(set.positions_y.par_iter_mut())
            .zip(set.velocities_x.par_iter_mut())
            .zip(set.velocities_y.par_iter_mut())
            .zip(accelerations.x.par_iter().zip(accelerations.y.par_iter()))
            .for_each(|((((px, py), vx), vy), (ax, ay))| {
                *vx += ax * dt;
                *vy += ay * dt;
                *px += *vx * dt;
                *py += *vy * dt;
            });
    }

    #[cfg(not(feature = "parallel"))]
    {
        set.positions_x
            .iter_mut()
            .zip(set.positions_y.iter_mut())
            .zip(set.velocities_x.iter_mut())
            .zip(set.velocities_y.iter_mut())
            .zip(accelerations.x.iter().zip(accelerations.y.iter()))
            .for_each(|((((px, py), vx), vy), (ax, ay))| {
                *vx += ax * dt;
                *vy += ay * dt;
                *px += *vx * dt;
                *py += *vy * dt;
            });
    }
}
