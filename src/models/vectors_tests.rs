use crate::models::{Rect, Vec2};

#[test]
fn test_vec2_arithmetic() {
    let a = Vec2::new(1.0, 2.0);
    let b = Vec2::new(3.0, -4.0);

    assert_eq!(a + b, Vec2::new(4.0, -2.0));
    assert_eq!(a - b, Vec2::new(-2.0, 6.0));
    assert_eq!(b * 0.5, Vec2::new(1.5, -2.0));
    assert_eq!(-a, Vec2::new(-1.0, -2.0));

    let mut c = a;
    c += b;
    assert_eq!(c, Vec2::new(4.0, -2.0));
}

#[test]
fn test_vec2_norm() {
    let v = Vec2::new(3.0, 4.0);
    assert_eq!(v.norm_sq(), 25.0);
    assert_eq!(v.norm(), 5.0);
    assert_eq!(Vec2::ZERO.norm(), 0.0);
}

#[test]
fn test_rect_contains_half_open() {
    let rect = Rect::new(Vec2::ZERO, Vec2::new(2.0, 2.0));

    // Low edges are inclusive
    assert!(rect.contains(Vec2::ZERO));
    assert!(rect.contains(Vec2::new(0.0, 1.0)));
    assert!(rect.contains(Vec2::new(1.9, 1.9)));

    // High edges are exclusive
    assert!(!rect.contains(Vec2::new(2.0, 0.0)));
    assert!(!rect.contains(Vec2::new(0.0, 2.0)));
    assert!(!rect.contains(Vec2::new(2.0, 2.0)));

    assert!(!rect.contains(Vec2::new(-0.1, 1.0)));
}

#[test]
fn test_rect_quadrants_partition() {
    let rect = Rect::new(Vec2::ZERO, Vec2::new(4.0, 4.0));
    let quads = rect.quadrants();

    // Every interior point belongs to exactly one quadrant
    let samples = [
        Vec2::new(0.0, 0.0),
        Vec2::new(2.0, 2.0), // midpoint: low-inclusive, lands in the NE quadrant
        Vec2::new(1.0, 3.0),
        Vec2::new(3.999, 0.0),
        Vec2::new(2.0, 0.0),
    ];
    for p in samples {
        let owners = quads.iter().filter(|q| q.contains(p)).count();
        assert_eq!(owners, 1, "point {:?} owned by {} quadrants", p, owners);
    }

    // Quadrants split exactly at the midpoint
    assert_eq!(quads[0].high, rect.midpoint());
    assert_eq!(quads[3].low, rect.midpoint());
}
