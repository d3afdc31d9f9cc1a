//! Interpolation kernels and coordinate helpers shared by the coherent
//! noise evaluators.

/// Half the range of a signed 32-bit integer, as a float.
const INT32_HALF_RANGE: f64 = 1_073_741_824.0;

/// Cubic S-curve `3t² − 2t³`.
#[inline]
pub fn s_curve3(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Quintic S-curve `6t⁵ − 15t⁴ + 10t³`.
#[inline]
pub fn s_curve5(t: f64) -> f64 {
    let t3 = t * t * t;
    t3 * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear blend of `n0` and `n1`; `a = 0` yields `n0` exactly.
#[inline]
pub fn linear_interp(n0: f64, n1: f64, a: f64) -> f64 {
    (1.0 - a) * n0 + a * n1
}

/// Lower corner of the unit lattice cell that contains `v`.
///
/// Truncating conversion steps one cell down for anything not strictly
/// positive, so `floor_cell(-0.5) == -1` and `floor_cell(0.0) == -1`.
#[inline]
pub fn floor_cell(v: f64) -> i32 {
    if v > 0.0 {
        v as i32
    } else {
        (v as i32).wrapping_sub(1)
    }
}

/// Fold `n` into the range of a 32-bit integer.
///
/// Coordinates are stepped by lacunarity every octave and quickly leave the
/// range where the lattice hash can index them. Values inside
/// `(-2^30, 2^30)` pass through untouched. Non-finite values, which appear
/// once octave scaling overflows `f64`, fold to the origin.
#[inline]
pub fn make_int32_range(n: f64) -> f64 {
    if !n.is_finite() {
        0.0
    } else if n >= INT32_HALF_RANGE {
        2.0 * (n % INT32_HALF_RANGE) - INT32_HALF_RANGE
    } else if n <= -INT32_HALF_RANGE {
        2.0 * (n % INT32_HALF_RANGE) + INT32_HALF_RANGE
    } else {
        n
    }
}
