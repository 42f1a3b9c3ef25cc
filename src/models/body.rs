use crate::models::Vec2;

/// A single point mass. The `id` stays stable for the whole run and is used
/// to exclude self-interaction during force evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub id: usize,
    pub mass: f64,
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Body {
    pub fn new(id: usize, mass: f64, position: Vec2, velocity: Vec2) -> Self {
        Body {
            id,
            mass,
            position,
            velocity,
        }
    }
}
