mod errors;
mod constants;
mod math_helpers;

pub use errors::*;
pub use constants::*;
pub use math_helpers::*;
