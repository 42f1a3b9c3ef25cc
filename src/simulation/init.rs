use crate::models::{Body, Vec2};
use rand::Rng;

/// Places bodies on a jittered square grid covering the initial domain.
///
/// The grid side is `floor(sqrt(n))`, so the returned count is the largest
/// perfect square not exceeding `n`. Each body is displaced from its grid
/// point by `displacement_ratio` grid spacings along a random direction and
/// given a velocity of magnitude up to `max_velocity` along the same
/// direction. Positions are wrapped back into `[0, domain_size)`.
pub fn initial_bodies<R: Rng>(
    n: usize,
    domain_size: f64,
    mass: f64,
    displacement_ratio: f64,
    max_velocity: f64,
    rng: &mut R,
) -> Vec<Body> {
    debug_assert!(n >= 1, "a simulation needs at least one body");
    let side = (n as f64).sqrt() as usize;
    let spacing = domain_size / side as f64;
    let mut bodies = Vec::with_capacity(side * side);
    for i in 0..side {
        for j in 0..side {
            let dir = random_jitter(rng);
            let p = Vec2::new(
                i as f64 + 0.5 + dir.x * displacement_ratio,
                j as f64 + 0.5 + dir.y * displacement_ratio,
            ) * spacing;
            let position = Vec2::new(p.x.rem_euclid(domain_size), p.y.rem_euclid(domain_size));
            let velocity = dir * max_velocity;
            bodies.push(Body::new(i * side + j, mass, position, velocity));
        }
    }
    bodies
}

/// Random vector with components uniform in `[-1, 1]`.
fn random_jitter<R: Rng>(rng: &mut R) -> Vec2 {
    Vec2::new(rng.random_range(-1.0..=1.0), rng.random_range(-1.0..=1.0))
}
