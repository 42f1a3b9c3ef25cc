mod init;
mod nbody;
mod render;

pub use init::*;
pub use nbody::*;
pub use render::*;
