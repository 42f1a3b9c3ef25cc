use crate::gravity::PeriodicField;
use crate::models::Vec2;
use approx::assert_relative_eq;

#[test]
fn test_center_cell_cancels_by_symmetry() {
    // Odd resolution puts a cell center exactly at (0.5, 0.5). With tiling
    // radius 1 the image offsets form a set symmetric about the origin, so
    // the net acceleration cancels.
    let field = PeriodicField::build(9, 1);
    let center = field.cell(4, 4);
    assert!(
        center.norm() < 1e-12,
        "expected cancellation at the domain center, got {:?}",
        center
    );
}

#[test]
fn test_mirrored_cells_are_antisymmetric() {
    // Point reflection through the source maps cell (i, j) to
    // (res-1-i, res-1-j); the truncation window is centered on the offset,
    // so the mirrored cell sees the negated image set.
    let field = PeriodicField::build(8, 1);

    let a = field.cell(1, 2);
    let b = field.cell(6, 5);
    assert_relative_eq!(b.x, -a.x, epsilon = 1e-12, max_relative = 1e-12);
    assert_relative_eq!(b.y, -a.y, epsilon = 1e-12, max_relative = 1e-12);
}

#[test]
fn test_lookup_wraps_out_of_range_offsets() {
    let field = PeriodicField::build(8, 1);
    let domain = 8.0;

    // Offsets differing by whole domain lengths hit the same cell.
    let base = field.acceleration(Vec2::new(3.0, 5.0), 1.0, 1.0, domain);
    let shifted = field.acceleration(Vec2::new(11.0, -3.0), 1.0, 1.0, domain);
    assert_eq!(base, shifted);
}

#[test]
fn test_lookup_scales_with_source_mass() {
    let field = PeriodicField::build(8, 1);
    let dp = Vec2::new(2.0, 6.0);

    let unit = field.acceleration(dp, 1.0, 1.0, 8.0);
    let double = field.acceleration(dp, 2.0, 1.0, 8.0);
    assert_relative_eq!(double.x, 2.0 * unit.x, max_relative = 1e-15);
    assert_relative_eq!(double.y, 2.0 * unit.y, max_relative = 1e-15);
}

#[test]
fn test_lookup_scales_with_domain_size() {
    // The table is normalized to the unit cell: doubling the domain size
    // quarters the looked-up acceleration for the same normalized offset.
    let field = PeriodicField::build(8, 1);

    let small = field.acceleration(Vec2::new(2.0, 6.0), 1.0, 1.0, 8.0);
    let large = field.acceleration(Vec2::new(4.0, 12.0), 1.0, 1.0, 16.0);
    assert_relative_eq!(large.x, small.x / 4.0, max_relative = 1e-12);
    assert_relative_eq!(large.y, small.y / 4.0, max_relative = 1e-12);
}

#[test]
fn test_zero_tiling_matches_single_source() {
    // With no images the field reduces to the bare inverse-square law at the
    // cell center.
    let field = PeriodicField::build(4, 0);
    let dp = Vec2::new(0.125, 0.125);
    let dist_sq = dp.norm_sq();
    let expected = dp * (1.0 / (dist_sq * dist_sq.sqrt()));

    let cell = field.cell(0, 0);
    assert_relative_eq!(cell.x, expected.x, max_relative = 1e-15);
    assert_relative_eq!(cell.y, expected.y, max_relative = 1e-15);
}

#[test]
fn test_more_tiling_pulls_harder_off_center() {
    // Off-center cells gain net acceleration from the nearest image ring.
    let near = PeriodicField::build(8, 0);
    let far = PeriodicField::build(8, 2);

    // A cell near the domain corner is pulled differently once images exist.
    assert!((far.cell(0, 0) - near.cell(0, 0)).norm() > 0.0);
}
