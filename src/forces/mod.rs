mod force_law;

pub use force_law::*;
