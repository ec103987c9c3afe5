//! All-pairs 2D particle dynamics.
//!
//! A [`simulation::SimulationState`] owns a fixed population of particles and
//! advances it one frame per call: dense pairwise distances, a pluggable force
//! law (softened Newtonian gravity or Lennard-Jones), a semi-implicit Euler
//! update and a boundary policy that keeps particles inside a rectangle.
//! Windowing, drawing and frame pacing are left to the caller, which reads
//! [`simulation::SimulationState::render_frame`] after each step.
pub mod utils;
pub mod particles;
pub mod field;
pub mod forces;
pub mod integrators;
pub mod boundaries;
pub mod simulation;
