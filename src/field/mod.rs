mod vector_field;

pub use vector_field::*;
