//! Precomputed long-range force field for the periodic tiling.
//!
//! The field maps a normalized `[0,1)^2` offset to the summed unit-mass,
//! unit-G acceleration contributed by the nearest image of the source and
//! every further periodic image out to the configured tiling radius around
//! the offset. It is built once,
//! before the first step, and stays valid under metric expansion because
//! queries are rescaled by the current domain size rather than the table
//! being rebuilt.

use crate::models::Vec2;
use rayon::prelude::*;

/// Immutable lookup table of per-unit-mass accelerations over one periodic
/// cell. Shared read-only across all steps.
#[derive(Debug, Clone)]
pub struct PeriodicField {
    resolution: usize,
    cells: Vec<Vec2>,
}

impl PeriodicField {
    /// Sums, for every cell center `((i+0.5)/res, (j+0.5)/res)`, the
    /// unsoftened point-mass acceleration from the nearest image of the
    /// source and every further image within `tiling_radius + 0.5` per axis.
    ///
    /// The truncation window is centered on the query offset, not on the
    /// source lattice: the offset is wrapped into `[-0.5, 0.5)` per axis and
    /// images are kept by distance, so mirror-image pairs survive truncation
    /// together and the field cancels exactly at the domain's symmetry
    /// points.
    ///
    /// Cell centers never coincide with a lattice point, so the unsoftened
    /// law stays finite here.
    pub fn build(resolution: usize, tiling_radius: i32) -> Self {
        let reach = tiling_radius as f64 + 0.5;
        let mut cells = vec![Vec2::ZERO; resolution * resolution];
        cells
            .par_chunks_mut(resolution)
            .enumerate()
            .for_each(|(i, row)| {
                for (j, cell) in row.iter_mut().enumerate() {
                    let du = wrap_centered((i as f64 + 0.5) / resolution as f64);
                    let dv = wrap_centered((j as f64 + 0.5) / resolution as f64);
                    let mut sum = Vec2::ZERO;
                    for n in -(tiling_radius + 1)..=(tiling_radius + 1) {
                        let x = du + n as f64;
                        if x.abs() > reach {
                            continue;
                        }
                        for m in -(tiling_radius + 1)..=(tiling_radius + 1) {
                            let y = dv + m as f64;
                            if y.abs() > reach {
                                continue;
                            }
                            sum += unit_acceleration(Vec2::new(x, y));
                        }
                    }
                    *cell = sum;
                }
            });
        log::debug!(
            "precomputed periodic field: {res}x{res} cells, tiling radius {tiling_radius}",
            res = resolution
        );
        PeriodicField { resolution, cells }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Raw normalized table value at cell `(i, j)`.
    pub fn cell(&self, i: usize, j: usize) -> Vec2 {
        self.cells[i * self.resolution + j]
    }

    /// Acceleration on a target from a source of mass `source_mass` displaced
    /// by `dp` in a periodic domain of side `domain_size`.
    ///
    /// The offset is normalized by the domain size and wrapped into `[0,1)^2`
    /// (the table represents one periodic cell), then the table value is
    /// rescaled by `g * m / L^2`: the field stores unit-mass, unit-G values
    /// over the unit cell, and the inverse-square law scales as `1/L^2`.
    pub fn acceleration(&self, dp: Vec2, source_mass: f64, g: f64, domain_size: f64) -> Vec2 {
        let res = self.resolution as f64;
        let u = (dp.x / domain_size).rem_euclid(1.0);
        let v = (dp.y / domain_size).rem_euclid(1.0);
        let i = ((u * res) as usize).min(self.resolution - 1);
        let j = ((v * res) as usize).min(self.resolution - 1);
        self.cell(i, j) * (g * source_mass / (domain_size * domain_size))
    }
}

/// Wraps a normalized coordinate into `[-0.5, 0.5)`, the displacement to the
/// nearest periodic image.
fn wrap_centered(u: f64) -> f64 {
    u - (u + 0.5).floor()
}

/// Unsoftened acceleration toward a unit mass at normalized offset `dp`.
fn unit_acceleration(dp: Vec2) -> Vec2 {
    let dist_sq = dp.norm_sq();
    let dist = dist_sq.sqrt();
    dp * (1.0 / (dist_sq * dist))
}
