//! Billowy noise: every octave is folded through `2|s| − 1`, giving
//! rounded lumps suited to clouds and rocks.

use super::fractal::OctaveWalk;
use super::Generator;
use crate::config::{BillowConfig, ModuleConfig};
use crate::error::{check_range, Result};
use crate::lattice::gradient_coherent_noise_2d;
use crate::params::{
    NoiseQuality, DEFAULT_FREQUENCY, DEFAULT_LACUNARITY, DEFAULT_OCTAVE_COUNT,
    DEFAULT_PERSISTENCE, DEFAULT_SEED, MAX_OCTAVE,
};

/// Fold a coherent sample in `[-1, 1]` into a billow ridge in `[-1, 1]`.
#[inline]
pub fn billow_transform(signal: f64) -> f64 {
    2.0 * signal.abs() - 1.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct Billow {
    frequency: f64,
    lacunarity: f64,
    quality: NoiseQuality,
    octave_count: usize,
    octave_count_tmp: usize,
    persistence: f64,
    seed: i32,
    norm: f64,
}

impl Default for Billow {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_FREQUENCY,
            lacunarity: DEFAULT_LACUNARITY,
            quality: NoiseQuality::Standard,
            octave_count: DEFAULT_OCTAVE_COUNT,
            octave_count_tmp: DEFAULT_OCTAVE_COUNT,
            persistence: DEFAULT_PERSISTENCE,
            seed: DEFAULT_SEED,
            norm: 1.0,
        }
    }
}

impl Billow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn lacunarity(&self) -> f64 {
        self.lacunarity
    }

    pub fn quality(&self) -> NoiseQuality {
        self.quality
    }

    pub fn octave_count(&self) -> usize {
        self.octave_count
    }

    pub fn temporary_octave_count(&self) -> usize {
        self.octave_count_tmp
    }

    pub fn persistence(&self) -> f64 {
        self.persistence
    }

    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// Scale applied to the octave sum.
    ///
    /// Starts at 1.0 and becomes `1 − persistence` once the octave count is
    /// set. This is a loose stand-in for the geometric series bound, kept as
    /// is because callers depend on the resulting output range.
    pub fn normalization(&self) -> f64 {
        self.norm
    }

    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
    }

    pub fn set_lacunarity(&mut self, lacunarity: f64) {
        self.lacunarity = lacunarity;
    }

    pub fn set_quality(&mut self, quality: NoiseQuality) {
        self.quality = quality;
    }

    /// Set the number of octaves and recompute the normalization factor.
    pub fn set_octave_count(&mut self, octave_count: usize) -> Result<()> {
        check_range("octave_count", octave_count, 1, MAX_OCTAVE)?;
        self.octave_count = octave_count;
        self.octave_count_tmp = octave_count;
        self.norm = 1.0 - self.persistence;
        tracing::debug!(octave_count, norm = self.norm, "billow normalization recomputed");
        Ok(())
    }

    pub fn set_temporary_octave_count(&mut self, octave_count: usize) -> Result<()> {
        check_range("temporary_octave_count", octave_count, 1, MAX_OCTAVE)?;
        self.octave_count_tmp = octave_count;
        Ok(())
    }

    /// Does not touch the normalization factor; call
    /// [`set_octave_count`](Self::set_octave_count) afterwards to refresh it.
    pub fn set_persistence(&mut self, persistence: f64) {
        self.persistence = persistence;
    }

    pub fn set_seed(&mut self, seed: i32) {
        self.seed = seed;
    }

    pub fn config(&self) -> ModuleConfig {
        ModuleConfig::Billow(BillowConfig {
            frequency: self.frequency,
            lacunarity: self.lacunarity,
            quality: self.quality,
            octave_count: self.octave_count,
            persistence: self.persistence,
            seed: self.seed,
        })
    }
}

impl Generator for Billow {
    fn get_value(&self, x: f64, y: f64) -> f64 {
        let walk = OctaveWalk {
            frequency: self.frequency,
            lacunarity: self.lacunarity,
            octaves: self.octave_count_tmp,
            seed: self.seed,
        };
        let mut amplitude = 1.0;
        let value = walk.sum(x, y, |o| {
            let signal = gradient_coherent_noise_2d(o.x, o.y, o.seed, self.quality);
            let signal = billow_transform(signal) * amplitude;
            amplitude *= self.persistence;
            signal
        });
        value * self.norm
    }

    fn source_module_count(&self) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn transform_stays_in_unit_range() {
        for i in -100..=100 {
            let s = i as f64 / 100.0;
            let t = billow_transform(s);
            assert!((-1.0..=1.0).contains(&t), "2|{s}|-1 = {t}");
        }
        assert_eq!(billow_transform(0.0), -1.0);
        assert_eq!(billow_transform(-1.0), 1.0);
    }

    #[test]
    fn lattice_corner_single_octave_is_minus_one() {
        let mut b = Billow::new();
        b.set_persistence(0.0);
        b.set_octave_count(1).unwrap();
        // norm = 1 - 0 = 1, so the octave-0 contribution is returned as is.
        for (x, y) in [(0.0, 0.0), (3.0, -4.0), (-7.0, 11.0)] {
            assert_eq!(b.get_value(x, y), -1.0);
        }
    }

    #[test]
    fn octave_zero_contributes_minus_one_at_corners() {
        let b = Billow::new();
        let mut tail = b.clone();
        tail.set_frequency(2.0);
        tail.set_seed(1);
        // Octave 0 of `b` at an integer corner is exactly -1; the rest of the
        // sum is the same walk shifted by one octave at half amplitude.
        let (x, y) = (2.0, 3.0);
        let mut rest = tail.clone();
        rest.set_temporary_octave_count(5).unwrap();
        assert_abs_diff_eq!(b.get_value(x, y), -1.0 + 0.5 * rest.get_value(x, y), epsilon = 1e-12);
    }

    #[test]
    fn normalization_tracks_octave_setter_only() {
        let mut b = Billow::new();
        assert_eq!(b.normalization(), 1.0);
        b.set_persistence(0.25);
        assert_eq!(b.normalization(), 1.0);
        b.set_octave_count(4).unwrap();
        assert_eq!(b.normalization(), 0.75);
    }

    #[test]
    fn octave_count_validation() {
        let mut b = Billow::new();
        assert!(b.set_octave_count(0).is_err());
        assert!(b.set_octave_count(31).is_err());
        assert_eq!(b.octave_count(), 6);
        assert_eq!(b.normalization(), 1.0);
        assert!(b.set_octave_count(30).is_ok());
    }

    #[test]
    fn deterministic_and_finite() {
        let mut b = Billow::new();
        b.set_seed(-77);
        b.set_octave_count(8).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let (x, y) = (rng.gen_range(-1e6..1e6), rng.gen_range(-1e6..1e6));
            let v = b.get_value(x, y);
            assert!(v.is_finite());
            assert_eq!(v.to_bits(), b.get_value(x, y).to_bits());
        }
    }
}
