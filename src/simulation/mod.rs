mod simulation_config;
mod simulation_state;

pub use simulation_config::*;
pub use simulation_state::*;

#[cfg(test)]
mod simulation_state_tests;
