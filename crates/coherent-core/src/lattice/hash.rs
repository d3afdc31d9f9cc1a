//! Integer lattice hashes.
//!
//! All arithmetic is wrapping `i32`, so results are bit-identical on every
//! platform. These hashes define the whole noise field: changing a constant
//! here changes every generated value.

// Prime multipliers; they must stay pairwise coprime and away from 256.
const X_NOISE_GEN: i32 = 1619;
const Y_NOISE_GEN: i32 = 31337;
const SEED_NOISE_GEN: i32 = 1013;
const SHIFT_NOISE_GEN: u32 = 8;

/// Divisor mapping a 31-bit hash onto `[0, 2)`.
#[cfg(not(feature = "xxhash"))]
const INT_HASH_SCALE: f64 = 1_073_741_824.0;

#[inline]
fn lattice_mix(x: i32, y: i32, seed: i32) -> i32 {
    X_NOISE_GEN
        .wrapping_mul(x)
        .wrapping_add(Y_NOISE_GEN.wrapping_mul(y))
        .wrapping_add(SEED_NOISE_GEN.wrapping_mul(seed))
}

/// Pseudo-random 31-bit integer for the lattice point `(x, y)`.
pub fn int_hash(x: i32, y: i32, seed: i32) -> i32 {
    let mut n = lattice_mix(x, y, seed) & 0x7fff_ffff;
    n ^= n >> 13;
    let poly = n.wrapping_mul(n).wrapping_mul(60493).wrapping_add(19_990_303);
    n.wrapping_mul(poly).wrapping_add(1_376_312_589) & 0x7fff_ffff
}

/// Index into the gradient table for the lattice point `(ix, iy)`.
pub fn vector_index_hash(ix: i32, iy: i32, seed: i32) -> usize {
    let mut idx = lattice_mix(ix, iy, seed);
    idx ^= idx >> SHIFT_NOISE_GEN;
    (idx & 0xff) as usize
}

/// Scalar height at lattice point `(x, y)`, in `[-1, 1]`.
#[cfg(not(feature = "xxhash"))]
pub fn value_noise_2d(x: i32, y: i32, seed: i32) -> f64 {
    1.0 - f64::from(int_hash(x, y, seed)) / INT_HASH_SCALE
}

/// Scalar height at lattice point `(x, y)`, in `[-1, 1]`.
///
/// xxHash32 of the packed point, seeded by `seed`.
#[cfg(feature = "xxhash")]
pub fn value_noise_2d(x: i32, y: i32, seed: i32) -> f64 {
    const FACTOR: f64 = 2.0 / 4_294_967_296.0;
    let packed = ((x as i64 as u64) << 32) | u64::from(y as u32);
    let hash = xxhash_rust::xxh32::xxh32(&packed.to_le_bytes(), seed as u32);
    1.0 - f64::from(hash) * FACTOR
}
