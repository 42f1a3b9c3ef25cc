//! 2D cosmological N-body simulation.
//!
//! Forces are approximated with a Barnes-Hut quadtree for near and mid-range
//! interactions and a precomputed periodic force mesh for the long-range tail
//! of the infinitely tiled domain. Positions evolve under leapfrog integration
//! with periodic wrap-around and uniform metric expansion.

pub mod models;
pub mod utils;
pub mod gravity;
pub mod simulation;
