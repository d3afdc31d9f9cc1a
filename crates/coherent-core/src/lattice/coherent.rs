//! Single-octave coherent noise: hash the four corners of the enclosing
//! lattice cell and blend them with the quality-selected curve.

use std::f64::consts::FRAC_1_SQRT_2;

use super::hash::{value_noise_2d, vector_index_hash};
use super::interp::{floor_cell, linear_interp};
use super::vectors::gradient;
use crate::params::NoiseQuality;

/// Gradient noise contribution of lattice corner `(ix, iy)` at `(fx, fy)`.
///
/// Dot product of the corner's gradient with the offset vector, scaled by
/// `1/√2` so any point within one cell of the corner maps into `[-1, 1]`.
/// Exactly zero when `(fx, fy)` sits on the corner.
pub fn gradient_noise_2d(fx: f64, fy: f64, ix: i32, iy: i32, seed: i32) -> f64 {
    let (gx, gy) = gradient(vector_index_hash(ix, iy, seed));
    let px = fx - f64::from(ix);
    let py = fy - f64::from(iy);
    (gx * px + gy * py) * FRAC_1_SQRT_2
}

/// Bilinearly blend a corner function over the cell enclosing `(x, y)`.
#[inline]
fn blend_cell<F>(x: f64, y: f64, quality: NoiseQuality, corner: F) -> f64
where
    F: Fn(i32, i32) -> f64,
{
    let x0 = floor_cell(x);
    let x1 = x0.wrapping_add(1);
    let y0 = floor_cell(y);
    let y1 = y0.wrapping_add(1);

    let xs = quality.smooth(x - f64::from(x0));
    let ys = quality.smooth(y - f64::from(y0));

    let ix0 = linear_interp(corner(x0, y0), corner(x1, y0), xs);
    let ix1 = linear_interp(corner(x0, y1), corner(x1, y1), xs);
    linear_interp(ix0, ix1, ys)
}

/// Gradient coherent noise at `(x, y)`.
pub fn gradient_coherent_noise_2d(x: f64, y: f64, seed: i32, quality: NoiseQuality) -> f64 {
    blend_cell(x, y, quality, |ix, iy| gradient_noise_2d(x, y, ix, iy, seed))
}

/// Value coherent noise at `(x, y)`, blending hashed corner heights.
pub fn value_coherent_noise_2d(x: f64, y: f64, seed: i32, quality: NoiseQuality) -> f64 {
    blend_cell(x, y, quality, |ix, iy| value_noise_2d(ix, iy, seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const QUALITIES: [NoiseQuality; 3] =
        [NoiseQuality::Fast, NoiseQuality::Standard, NoiseQuality::Best];

    #[test]
    fn gradient_noise_vanishes_on_its_corner() {
        for ix in -20..20 {
            for iy in -20..20 {
                let v = gradient_noise_2d(f64::from(ix), f64::from(iy), ix, iy, 9);
                assert_eq!(v, 0.0);
            }
        }
    }

    #[test]
    fn gradient_noise_bounded_within_a_cell() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let ix = rng.gen_range(-1000..1000);
            let iy = rng.gen_range(-1000..1000);
            let fx = f64::from(ix) + rng.gen_range(-1.0..=1.0);
            let fy = f64::from(iy) + rng.gen_range(-1.0..=1.0);
            let v = gradient_noise_2d(fx, fy, ix, iy, rng.gen());
            assert!(v.abs() <= 1.0 + 1e-12, "corner value {v}");
        }
    }

    #[test]
    fn coherent_noise_is_zero_at_lattice_points() {
        for q in QUALITIES {
            for (x, y) in [(0.0, 0.0), (3.0, -2.0), (-5.0, 7.0), (12.0, 12.0)] {
                assert_eq!(gradient_coherent_noise_2d(x, y, 1, q), 0.0);
            }
        }
    }

    #[test]
    fn value_noise_reproduces_corner_heights() {
        for q in QUALITIES {
            for (ix, iy) in [(1, 1), (4, -3), (-6, 2)] {
                let v = value_coherent_noise_2d(f64::from(ix), f64::from(iy), 5, q);
                assert_abs_diff_eq!(v, value_noise_2d(ix, iy, 5), epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn cell_center_blends_four_corners_evenly() {
        let (x, y, seed) = (2.5, -3.5, 11);
        let corners = [
            gradient_noise_2d(x, y, 2, -4, seed),
            gradient_noise_2d(x, y, 3, -4, seed),
            gradient_noise_2d(x, y, 2, -3, seed),
            gradient_noise_2d(x, y, 3, -3, seed),
        ];
        let mean = corners.iter().sum::<f64>() / 4.0;
        for q in QUALITIES {
            assert_abs_diff_eq!(gradient_coherent_noise_2d(x, y, seed, q), mean, epsilon = 1e-12);
        }
    }

    #[test]
    fn continuous_across_cell_edges() {
        let eps = 1e-7;
        for q in QUALITIES {
            for edge in [-3.0, -1.0, 0.0, 1.0, 4.0] {
                for y in [0.25, 1.6, -2.3] {
                    let left = gradient_coherent_noise_2d(edge - eps, y, 3, q);
                    let right = gradient_coherent_noise_2d(edge + eps, y, 3, q);
                    assert!((left - right).abs() < 1e-5, "gradient jump at x={edge}");
                    let left = value_coherent_noise_2d(y, edge - eps, 3, q);
                    let right = value_coherent_noise_2d(y, edge + eps, 3, q);
                    assert!((left - right).abs() < 1e-5, "value jump at y={edge}");
                }
            }
        }
    }

    #[test]
    fn coherent_samples_stay_in_unit_range() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..20_000 {
            let x = rng.gen_range(-500.0..500.0);
            let y = rng.gen_range(-500.0..500.0);
            let seed = rng.gen();
            for q in QUALITIES {
                assert!(gradient_coherent_noise_2d(x, y, seed, q).abs() <= 1.0);
                assert!(value_coherent_noise_2d(x, y, seed, q).abs() <= 1.0);
            }
        }
    }
}
