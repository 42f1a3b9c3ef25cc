mod forces;
mod periodic_mesh;
mod quadtree;

pub use forces::*;
pub use periodic_mesh::*;
pub use quadtree::*;

#[cfg(test)]
mod periodic_mesh_tests;
