mod config;
mod errors;

pub use config::*;
pub use errors::*;

#[cfg(test)]
mod config_tests;
