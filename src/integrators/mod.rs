mod semi_implicit_euler;

pub use semi_implicit_euler::*;
