mod domain;
mod boundary_policy;

pub use domain::*;
pub use boundary_policy::*;
