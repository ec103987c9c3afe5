//! Post-integration correction of particles that left the domain.
//!
//! Every policy is a pure function of one particle's position, velocity and
//! the current bounds; nothing is remembered between steps.
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::boundaries::DomainBounds;
use crate::particles::ParticleSet;
use crate::utils::CLAMP_TOLERANCE;

/// Distance from each wall at which the reflecting policies trigger.
const WALL_MARGIN: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryPolicy {
    /// Negates a velocity component whenever the coordinate is past a wall,
    /// regardless of direction. A particle that lingers outside flips every
    /// step.
    SimpleReflect,
    /// Negates a velocity component only while it carries the particle
    /// further past the wall.
    GatedReflect,
    /// Snaps coordinates more than `tolerance` past a wall back onto it, then
    /// applies the gated reflection to the velocity.
    Clamp { tolerance: f64 },
}

impl Default for BoundaryPolicy {
    fn default() -> Self {
        BoundaryPolicy::Clamp { tolerance: CLAMP_TOLERANCE }
    }
}

impl BoundaryPolicy {
    /// Corrects one particle.
    ///
    /// # Examples
    ///
    /// ```
    /// use particle_dynamics::boundaries::{BoundaryPolicy, DomainBounds};
    ///
    /// let bounds = DomainBounds::new(900.0, 900.0).unwrap();
    ///
    /// // At the wall and still moving out: reflected.
    /// let (_, v) = BoundaryPolicy::GatedReflect.apply((900.0, 450.0), (5.0, 0.0), bounds);
    /// assert_eq!(v, (-5.0, 0.0));
    ///
    /// // Far past the wall: snapped back onto it.
    /// let (p, _) = BoundaryPolicy::Clamp { tolerance: 10.0 }.apply((950.0, 450.0), (5.0, 0.0), bounds);
    /// assert_eq!(p, (900.0, 450.0));
    /// ```
    pub fn apply(
        &self,
        position: (f64, f64),
        velocity: (f64, f64),
        bounds: DomainBounds,
    ) -> ((f64, f64), (f64, f64)) {
        match *self {
            BoundaryPolicy::SimpleReflect => (
                position,
                (
                    reflect_always(position.0, velocity.0, bounds.width),
                    reflect_always(position.1, velocity.1, bounds.height),
                ),
            ),
            BoundaryPolicy::GatedReflect => (
                position,
                (
                    reflect_gated(position.0, velocity.0, bounds.width),
                    reflect_gated(position.1, velocity.1, bounds.height),
                ),
            ),
            BoundaryPolicy::Clamp { tolerance } => (
                (
                    clamp_overflow(position.0, bounds.width, tolerance),
                    clamp_overflow(position.1, bounds.height, tolerance),
                ),
                // The gate looks at the integrated position, before snapping.
                (
                    reflect_gated(position.0, velocity.0, bounds.width),
                    reflect_gated(position.1, velocity.1, bounds.height),
                ),
            ),
        }
    }

    /// Applies the policy to every particle of the set.
    pub fn apply_all(&self, set: &mut ParticleSet, bounds: DomainBounds) {
        let policy = *self;
        let correct = move |((px, py), (vx, vy)): ((&mut f64, &mut f64), (&mut f64, &mut f64))| {
            let ((x, y), (u, v)) = policy.apply((*px, *py), (*vx, *vy), bounds);
            *px = x;
            *py = y;
            *vx = u;
            *vy = v;
        };

        #[cfg(feature = "parallel")]
        {
            set.positions_x
                .par_iter_mut()
                .zip(set.positions_y.par_iter_mut())
                .zip(set.velocities_x.par_iter_mut().zip(set.velocities_y.par_iter_mut()))
                .for_each(correct);
        }

        #[cfg(not(feature = "parallel"))]
        {
            set.positions_x
                .iter_mut()
                .zip(set.positions_y.iter_mut())
                .zip(set.velocities_x.iter_mut().zip(set.velocities_y.iter_mut()))
                .for_each(correct);
        }
    }
}

// Each wall contributes its own sign factor, so on a domain narrower than
// twice the margin both walls fire and cancel out.
fn reflect_always(x: f64, v: f64, extent: f64) -> f64 {
    let upper = if x > extent - WALL_MARGIN { -1.0 } else { 1.0 };
    let lower = if x < WALL_MARGIN { -1.0 } else { 1.0 };
    v * upper * lower
}

fn reflect_gated(x: f64, v: f64, extent: f64) -> f64 {
    if (x > extent - WALL_MARGIN && v > 0.0) || (x < WALL_MARGIN && v < 0.0) {
        -v
    } else {
        v
    }
}

fn clamp_overflow(x: f64, extent: f64, tolerance: f64) -> f64 {
    if x > extent + tolerance {
        extent
    } else if x < -tolerance {
        0.0
    } else {
        x
    }
}
