//! # Barnes-Hut Quadtree (2D)
//!
//! Recursive spatial decomposition of the body set, rebuilt from scratch
//! every simulation step and read-only during force evaluation.
//!
//! Each internal node aggregates the total mass, the mass-weighted center,
//! and a scalar `spread`: the mass-weighted variance of the contained
//! positions about the aggregate center. The force evaluator uses `spread`
//! as a size proxy in the opening-angle test instead of the classical
//! width-to-distance ratio; it is deterministic and continuous in the body
//! positions, but its accuracy behavior differs from textbook Barnes-Hut.
//!
//! Empty quadrants are never materialized: an internal node owns between one
//! and four children. Leaves normally hold exactly one body; a leaf holds
//! several only when coincident positions make further splitting pointless.

use crate::models::{Body, Rect, Vec2};

/// Quadrant groups below this size are built sequentially; larger ones are
/// handed to rayon as independent subtree jobs.
const PARALLEL_BUILD_THRESHOLD: usize = 512;

/// A node of the Barnes-Hut quadtree. Owns its children outright; there are
/// no parent back-references, so traversal uses an explicit frontier.
#[derive(Debug)]
pub enum QuadNode {
    /// One body, or several bodies whose positions could not be separated by
    /// further quadrant splits.
    Leaf {
        rect: Rect,
        mass: f64,
        center: Vec2,
        bodies: Vec<Body>,
    },
    /// An aggregated region with 1 to 4 non-empty children.
    Internal {
        rect: Rect,
        mass: f64,
        center: Vec2,
        spread: f64,
        children: Vec<QuadNode>,
    },
}

impl QuadNode {
    pub fn rect(&self) -> Rect {
        match self {
            QuadNode::Leaf { rect, .. } => *rect,
            QuadNode::Internal { rect, .. } => *rect,
        }
    }

    /// Total mass of every body in this subtree.
    pub fn mass(&self) -> f64 {
        match self {
            QuadNode::Leaf { mass, .. } => *mass,
            QuadNode::Internal { mass, .. } => *mass,
        }
    }

    /// Mass-weighted mean position of every body in this subtree.
    pub fn center(&self) -> Vec2 {
        match self {
            QuadNode::Leaf { center, .. } => *center,
            QuadNode::Internal { center, .. } => *center,
        }
    }

    /// Mass-weighted position variance about [`QuadNode::center`]. Zero for
    /// leaves, which have no internal structure left to resolve.
    pub fn spread(&self) -> f64 {
        match self {
            QuadNode::Leaf { .. } => 0.0,
            QuadNode::Internal { spread, .. } => *spread,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, QuadNode::Leaf { .. })
    }

    /// Number of direct children (0 for leaves, 1..=4 for internal nodes).
    pub fn num_children(&self) -> usize {
        match self {
            QuadNode::Leaf { .. } => 0,
            QuadNode::Internal { children, .. } => children.len(),
        }
    }

    pub fn count_bodies(&self) -> usize {
        match self {
            QuadNode::Leaf { bodies, .. } => bodies.len(),
            QuadNode::Internal { children, .. } => {
                children.iter().map(|c| c.count_bodies()).sum()
            }
        }
    }
}

/// Builds the quadtree for a non-empty set of bodies bounded by `rect`.
///
/// Bodies are partitioned among the four midpoint quadrants using the
/// half-open containment rule, so midpoint ties resolve deterministically.
/// Quadrants that receive no bodies are omitted. When the rectangle is too
/// small for its midpoint to make progress, or all positions coincide, the
/// node becomes a multi-body leaf instead of recursing forever.
pub fn build(rect: Rect, bodies: Vec<Body>) -> QuadNode {
    debug_assert!(!bodies.is_empty(), "empty quadrants are never materialized");

    if bodies.len() == 1 {
        let body = bodies[0];
        return QuadNode::Leaf {
            rect,
            mass: body.mass,
            center: body.position,
            bodies,
        };
    }

    if !split_makes_progress(&rect) || all_coincident(&bodies) {
        return degenerate_leaf(rect, bodies);
    }

    let quads = rect.quadrants();
    let mid = rect.midpoint();
    let mut groups: [Vec<Body>; 4] = [Vec::new(), Vec::new(), Vec::new(), Vec::new()];
    let total = bodies.len();
    for body in bodies {
        // Index matches the half-open quadrant layout of Rect::quadrants:
        // low-inclusive comparisons against the midpoint on each axis.
        let east = (body.position.x >= mid.x) as usize;
        let north = (body.position.y >= mid.y) as usize;
        groups[north * 2 + east].push(body);
    }

    let parts: Vec<(Rect, Vec<Body>)> = quads
        .into_iter()
        .zip(groups)
        .filter(|(_, group)| !group.is_empty())
        .collect();

    let children: Vec<QuadNode> = if total >= PARALLEL_BUILD_THRESHOLD {
        use rayon::prelude::*;
        parts
            .into_par_iter()
            .map(|(quad, group)| build(quad, group))
            .collect()
    } else {
        parts
            .into_iter()
            .map(|(quad, group)| build(quad, group))
            .collect()
    };

    let (mass, center, spread) = aggregate(&children);
    QuadNode::Internal {
        rect,
        mass,
        center,
        spread,
        children,
    }
}

/// Combines child aggregates into the parent's mass, center, and spread.
/// Spread follows the law of total variance: each child contributes its own
/// spread plus the squared displacement of its center from the combined one,
/// weighted by its mass fraction.
fn aggregate(children: &[QuadNode]) -> (f64, Vec2, f64) {
    let mass: f64 = children.iter().map(|c| c.mass()).sum();
    let mut center = Vec2::ZERO;
    for child in children {
        center += child.center() * (child.mass() / mass);
    }
    let mut spread = 0.0;
    for child in children {
        let dc = child.center() - center;
        spread += (child.mass() / mass) * (child.spread() + dc.norm_sq());
    }
    (mass, center, spread)
}

/// True while the midpoint still strictly separates the rectangle on both
/// axes. Near the floating-point resolution limit the midpoint collapses
/// onto an edge and a split would reproduce the parent rectangle.
fn split_makes_progress(rect: &Rect) -> bool {
    let mid = rect.midpoint();
    mid.x > rect.low.x && mid.x < rect.high.x && mid.y > rect.low.y && mid.y < rect.high.y
}

fn all_coincident(bodies: &[Body]) -> bool {
    let first = bodies[0].position;
    bodies.iter().all(|b| b.position == first)
}

/// Multi-body leaf fallback for coincident (or unseparable) bodies. Spread is
/// zero: the positions carry no geometry worth resolving, so the opening test
/// always accepts the node.
fn degenerate_leaf(rect: Rect, bodies: Vec<Body>) -> QuadNode {
    let mass: f64 = bodies.iter().map(|b| b.mass).sum();
    let mut center = Vec2::ZERO;
    for body in &bodies {
        center += body.position * (body.mass / mass);
    }
    QuadNode::Leaf {
        rect,
        mass,
        center,
        bodies,
    }
}
