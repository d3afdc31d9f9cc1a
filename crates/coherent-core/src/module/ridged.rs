//! Ridged-multifractal noise.
//!
//! Each octave takes `(offset − |s|)²`, scaled by a feedback weight derived
//! from the previous octave's signal, then by a per-octave spectral weight
//! `lacunarity^(−i·H)`. Sharp ridges form where the underlying gradient noise
//! crosses zero. A single octave ranges over `[-1, 0]`.

use super::fractal::OctaveWalk;
use super::Generator;
use crate::config::{ModuleConfig, RidgedMultiConfig};
use crate::error::{check_range, Result};
use crate::lattice::gradient_coherent_noise_2d;
use crate::params::{
    NoiseQuality, DEFAULT_FREQUENCY, DEFAULT_LACUNARITY, DEFAULT_OCTAVE_COUNT, DEFAULT_SEED,
    MAX_OCTAVE,
};

/// Subtracted from `|s|` before squaring; also the level mapped to zero output.
pub const RIDGED_OFFSET: f64 = 1.0;
/// Multiplier turning an octave's signal into the next octave's weight.
pub const RIDGED_GAIN: f64 = 2.0;
/// Fractal increment used for the spectral weights.
pub const RIDGED_H: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct RidgedMulti {
    frequency: f64,
    lacunarity: f64,
    quality: NoiseQuality,
    octave_count: usize,
    octave_count_tmp: usize,
    seed: i32,
    norm: f64,
    spectral_weights: [f64; MAX_OCTAVE],
}

impl Default for RidgedMulti {
    fn default() -> Self {
        let mut module = Self {
            frequency: DEFAULT_FREQUENCY,
            lacunarity: DEFAULT_LACUNARITY,
            quality: NoiseQuality::Standard,
            octave_count: DEFAULT_OCTAVE_COUNT,
            octave_count_tmp: DEFAULT_OCTAVE_COUNT,
            seed: DEFAULT_SEED,
            norm: 1.0,
            spectral_weights: [0.0; MAX_OCTAVE],
        };
        module.calc_spectral_weights();
        module.calc_normalization();
        module
    }
}

impl RidgedMulti {
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

    pub fn seed(&self) -> i32 {
        self.seed
    }

    pub fn normalization(&self) -> f64 {
        self.norm
    }

    pub fn spectral_weights(&self) -> &[f64; MAX_OCTAVE] {
        &self.spectral_weights
    }

    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
    }

    /// Set the lacunarity; spectral weights and normalization are rebuilt
    /// before this returns.
    pub fn set_lacunarity(&mut self, lacunarity: f64) {
        self.lacunarity = lacunarity;
        self.calc_spectral_weights();
        self.calc_normalization();
    }

    pub fn set_quality(&mut self, quality: NoiseQuality) {
        self.quality = quality;
    }

    /// Fails unless `1 <= octave_count <= MAX_OCTAVE`.
    pub fn set_octave_count(&mut self, octave_count: usize) -> Result<()> {
        check_range("octave_count", octave_count, 1, MAX_OCTAVE)?;
        self.octave_count = octave_count;
        self.octave_count_tmp = octave_count;
        self.calc_normalization();
        Ok(())
    }

    pub fn set_temporary_octave_count(&mut self, octave_count: usize) -> Result<()> {
        check_range("temporary_octave_count", octave_count, 1, MAX_OCTAVE)?;
        self.octave_count_tmp = octave_count;
        Ok(())
    }

    pub fn set_seed(&mut self, seed: i32) {
        self.seed = seed;
    }

    pub fn config(&self) -> ModuleConfig {
        ModuleConfig::RidgedMulti(RidgedMultiConfig {
            frequency: self.frequency,
            lacunarity: self.lacunarity,
            quality: self.quality,
            octave_count: self.octave_count,
            seed: self.seed,
        })
    }

    fn calc_spectral_weights(&mut self) {
        for (i, weight) in self.spectral_weights.iter_mut().enumerate() {
            *weight = self.lacunarity.powf(-(i as f64) * RIDGED_H);
        }
        tracing::debug!(lacunarity = self.lacunarity, "ridged spectral weights recomputed");
    }

    // 2 / Σ_{i=0..=K} L^-i, written as the closed-form geometric sum.
    fn calc_normalization(&mut self) {
        let inv = 1.0 / self.lacunarity;
        self.norm = 2.0 * (inv - 1.0) / (inv.powi(self.octave_count as i32 + 1) - 1.0);
        tracing::debug!(
            octave_count = self.octave_count,
            lacunarity = self.lacunarity,
            norm = self.norm,
            "ridged normalization recomputed"
        );
    }
}

impl Generator for RidgedMulti {
    fn get_value(&self, x: f64, y: f64) -> f64 {
        let walk = OctaveWalk {
            frequency: self.frequency,
            lacunarity: self.lacunarity,
            octaves: self.octave_count_tmp,
            seed: self.seed,
        };
        let mut weight = 1.0;
        let value = walk.sum(x, y, |o| {
            let signal = gradient_coherent_noise_2d(o.x, o.y, o.seed, self.quality);
            let signal = RIDGED_OFFSET - signal.abs();
            let signal = signal * signal * weight;
            weight = (signal * RIDGED_GAIN).clamp(0.0, 1.0);
            signal * self.spectral_weights[o.index]
        });
        (value - RIDGED_OFFSET) * self.norm
    }

    fn source_module_count(&self) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_points(seed: u64, n: usize) -> Vec<(f64, f64)> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n)
            .map(|_| (rng.gen_range(-200.0..200.0), rng.gen_range(-200.0..200.0)))
            .collect()
    }

    #[test]
    fn spectral_weights_follow_lacunarity() {
        let r = RidgedMulti::new();
        assert_eq!(r.spectral_weights()[0], 1.0);
        assert_relative_eq!(r.spectral_weights()[1], 0.5);
        assert_relative_eq!(r.spectral_weights()[5], 1.0 / 32.0);
    }

    #[test]
    fn lacunarity_change_rebuilds_weights_before_next_evaluation() {
        let mut r = RidgedMulti::new();
        let before = r.get_value(0.37, 1.91);
        r.set_lacunarity(3.0);
        assert_relative_eq!(r.spectral_weights()[2], 1.0 / 9.0);

        let mut fresh = RidgedMulti::new();
        fresh.set_lacunarity(3.0);
        fresh.set_octave_count(6).unwrap();
        for (x, y) in random_points(21, 200) {
            assert_eq!(r.get_value(x, y).to_bits(), fresh.get_value(x, y).to_bits());
        }
        assert_ne!(before, r.get_value(0.37, 1.91));
    }

    #[test]
    fn normalization_formula() {
        let mut r = RidgedMulti::new();
        r.set_octave_count(1).unwrap();
        assert_relative_eq!(r.normalization(), 4.0 / 3.0);
        r.set_lacunarity(4.0);
        // 2 (1/4 - 1) / ((1/4)^2 - 1)
        assert_relative_eq!(r.normalization(), 1.6);
    }

    #[test]
    fn single_octave_lies_in_minus_one_to_zero() {
        let mut r = RidgedMulti::new();
        r.set_octave_count(1).unwrap();
        for (x, y) in random_points(8, 20_000) {
            let v = r.get_value(x, y);
            assert!((-1.0..=0.0).contains(&v), "ridged single octave {v} at ({x}, {y})");
        }
    }

    #[test]
    fn single_octave_ridge_peaks_on_lattice() {
        let mut r = RidgedMulti::new();
        r.set_octave_count(1).unwrap();
        assert_abs_diff_eq!(r.get_value(4.0, -9.0), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn default_output_roughly_unit_bounded() {
        let r = RidgedMulti::new();
        for (x, y) in random_points(2, 10_000) {
            let v = r.get_value(x, y);
            assert!(v.is_finite() && v.abs() <= 1.0, "ridged value {v}");
        }
    }

    #[test]
    fn octave_count_bounds() {
        let mut r = RidgedMulti::new();
        let norm = r.normalization();
        assert!(r.set_octave_count(0).is_err());
        assert!(r.set_octave_count(31).is_err());
        assert_eq!(r.octave_count(), 6);
        assert_eq!(r.normalization(), norm);
        assert!(r.set_octave_count(30).is_ok());
        assert!(r.get_value(1.3, 2.7).is_finite());
    }

    #[test]
    fn temporary_count_keeps_full_normalization() {
        let mut r = RidgedMulti::new();
        let norm = r.normalization();
        r.set_temporary_octave_count(2).unwrap();
        assert_eq!(r.normalization(), norm);
        assert_eq!(r.temporary_octave_count(), 2);
        assert_eq!(r.octave_count(), 6);
    }

    #[test]
    fn feedback_couples_octaves() {
        // Octave 1 is scaled by clamp(2 * octave-0 signal); at a lattice point
        // octave 0 is fully ridged (signal 1), so the weight saturates at 1.
        let mut two = RidgedMulti::new();
        two.set_octave_count(2).unwrap();
        let (x, y) = (3.0, 5.0);
        let v = two.get_value(x, y);
        // Both octaves sit on lattice points: each contributes 1 * weight.
        let expected = (1.0 + 0.5 - RIDGED_OFFSET) * two.normalization();
        assert_abs_diff_eq!(v, expected, epsilon = 1e-12);
    }
}
