use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A 2D vector with `f64` components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Vec2 { x, y }
    }

    /// Squared Euclidean norm.
    pub fn norm_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn norm(&self) -> f64 {
        self.norm_sq().sqrt()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, scalar: f64) -> Vec2 {
        Vec2::new(self.x * scalar, self.y * scalar)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

/// An axis-aligned rectangle with half-open containment `[low, high)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub low: Vec2,
    pub high: Vec2,
}

impl Rect {
    pub fn new(low: Vec2, high: Vec2) -> Self {
        Rect { low, high }
    }

    /// The square `[0, size) x [0, size)`.
    pub fn square(size: f64) -> Self {
        Rect::new(Vec2::ZERO, Vec2::new(size, size))
    }

    /// Half-open containment test: low edges inclusive, high edges exclusive.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.low.x && p.x < self.high.x && p.y >= self.low.y && p.y < self.high.y
    }

    pub fn midpoint(&self) -> Vec2 {
        Vec2::new(
            (self.low.x + self.high.x) / 2.0,
            (self.low.y + self.high.y) / 2.0,
        )
    }

    /// Splits this rectangle into four equal quadrants at its midpoint,
    /// ordered SW, SE, NW, NE. Together they cover the rectangle exactly
    /// under the half-open containment rule.
    pub fn quadrants(&self) -> [Rect; 4] {
        let mid = self.midpoint();
        [
            Rect::new(self.low, mid),
            Rect::new(Vec2::new(mid.x, self.low.y), Vec2::new(self.high.x, mid.y)),
            Rect::new(Vec2::new(self.low.x, mid.y), Vec2::new(mid.x, self.high.y)),
            Rect::new(mid, self.high),
        ]
    }
}
