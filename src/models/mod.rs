mod body;
mod vectors;

pub use body::*;
pub use vectors::*;

#[cfg(test)]
mod vectors_tests;
