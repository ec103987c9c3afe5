// Defaults for the two reference setups: an anchored gravity swarm and a
// Lennard-Jones gas.

/// Added to raw and squared separations so coincident particles never divide by zero.
pub const SOFTENING: f64 = 1e-20;
/// Steps per second of simulated time; the time step is its reciprocal.
pub const FRAME_RATE: f64 = 144.0;
/// Radius, in pixels, of the circle drawn for each particle.
pub const RENDER_RADIUS: u32 = 3;

pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11;
pub const GRAVITY_PARTICLE_COUNT: usize = 9;
pub const GRAVITY_PARTICLE_MASS: f64 = 1e9;
/// Particle 0 of the gravity preset is this many times heavier than the rest.
pub const GRAVITY_ANCHOR_FACTOR: f64 = 1e6;
pub const GRAVITY_SPEED_SCALE: f64 = 0.4;
pub const GRAVITY_DOMAIN: (f64, f64) = (900.0, 900.0);

pub const LJ_SIGMA: f64 = 2.6e-3;
pub const LJ_EPSILON: f64 = 3e-5;
pub const LJ_PARTICLE_MASS: f64 = 4.65e-27;
pub const LJ_PARTICLE_COUNT: usize = 300;
pub const LJ_DOMAIN: (f64, f64) = (1600.0, 900.0);

/// Overshoot tolerated by the clamp policy before a coordinate is snapped.
pub const CLAMP_TOLERANCE: f64 = 10.0;
pub const MODULATION_AMPLITUDE: f64 = 0.1;
pub const MODULATION_PERIOD_STEPS: f64 = 1440.0;

/// Initial velocity components are drawn from this integer range before scaling.
pub const INITIAL_VELOCITY_RANGE: (i32, i32) = (-50, 50);
/// Color channels are drawn from this range so particles stay visible on black.
pub const COLOR_CHANNEL_RANGE: (u8, u8) = (150, 255);
