//! Shared octave walk.
//!
//! Every module scales the input by its base frequency, then for each octave
//! folds the coordinates into 32-bit range, derives the octave seed, asks the
//! module for that octave's contribution, and steps frequency by lacunarity.
//! Modules only decide what an octave contributes.

use crate::lattice::interp::make_int32_range;

/// One octave handed to a module's contribution closure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Octave {
    pub index: usize,
    /// `seed + index`, wrapping.
    pub seed: i32,
    /// Range-folded coordinates at this octave's frequency.
    pub x: f64,
    pub y: f64,
}

/// Loop parameters common to all octave generators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OctaveWalk {
    pub frequency: f64,
    pub lacunarity: f64,
    pub octaves: usize,
    pub seed: i32,
}

impl OctaveWalk {
    /// Sum the contributions of every octave at `(x, y)`.
    ///
    /// `contribute` may carry state between octaves (persistence ladders,
    /// ridged feedback weights); it is called in octave order.
    pub fn sum<F>(&self, x: f64, y: f64, mut contribute: F) -> f64
    where
        F: FnMut(Octave) -> f64,
    {
        let mut x = x * self.frequency;
        let mut y = y * self.frequency;
        let mut value = 0.0;
        for index in 0..self.octaves {
            let octave = Octave {
                index,
                seed: octave_seed(self.seed, index),
                x: make_int32_range(x),
                y: make_int32_range(y),
            };
            value += contribute(octave);
            x *= self.lacunarity;
            y *= self.lacunarity;
        }
        value
    }
}

/// Seed for octave `index`, decorrelating successive octaves.
#[inline]
pub fn octave_seed(seed: i32, index: usize) -> i32 {
    seed.wrapping_add(index as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(octaves: usize) -> OctaveWalk {
        OctaveWalk { frequency: 0.5, lacunarity: 3.0, octaves, seed: 10 }
    }

    #[test]
    fn octaves_step_by_lacunarity_and_seed() {
        let mut seen = Vec::new();
        walk(3).sum(2.0, -4.0, |o| {
            seen.push(o);
            0.0
        });
        assert_eq!(seen.len(), 3);
        assert_eq!((seen[0].x, seen[0].y, seen[0].seed), (1.0, -2.0, 10));
        assert_eq!((seen[1].x, seen[1].y, seen[1].seed), (3.0, -6.0, 11));
        assert_eq!((seen[2].x, seen[2].y, seen[2].seed), (9.0, -18.0, 12));
    }

    #[test]
    fn contributions_are_summed() {
        let total = walk(4).sum(1.0, 1.0, |o| o.index as f64);
        assert_eq!(total, 6.0);
    }

    #[test]
    fn zero_octaves_sum_to_zero() {
        assert_eq!(walk(0).sum(1.0, 1.0, |_| 1.0), 0.0);
    }

    #[test]
    fn octave_seed_wraps() {
        assert_eq!(octave_seed(i32::MAX, 1), i32::MIN);
    }

    #[test]
    fn far_coordinates_are_folded() {
        let far = OctaveWalk { frequency: 1.0, lacunarity: 2.0, octaves: 1, seed: 0 };
        far.sum(5.0e12, -5.0e12, |o| {
            assert!(o.x.abs() <= 1_073_741_824.0);
            assert!(o.y.abs() <= 1_073_741_824.0);
            0.0
        });
    }
}
