mod particle;
mod particle_set;

pub use particle::*;
pub use particle_set::*;
