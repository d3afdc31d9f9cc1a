//! Perlin-style fractal noise: plain sum of octaves with amplitude
//! `persistence^i`.
//!
//! The raw octave sum is returned (normalization factor fixed at 1.0), so the
//! output is only statistically bounded; with the defaults it mostly stays
//! within `[-1, 1]`.

use super::fractal::OctaveWalk;
use super::Generator;
use crate::config::{ModuleConfig, PerlinConfig};
use crate::error::{check_range, Result};
use crate::lattice::{gradient_coherent_noise_2d, value_coherent_noise_2d};
use crate::params::{
    NoiseQuality, NoiseType, DEFAULT_FREQUENCY, DEFAULT_LACUNARITY, DEFAULT_OCTAVE_COUNT,
    DEFAULT_PERSISTENCE, DEFAULT_SEED, MAX_OCTAVE,
};

/// Signature shared by both coherent-noise flavors.
pub(crate) type CoherentFn = fn(f64, f64, i32, NoiseQuality) -> f64;

pub(crate) fn coherent_for(noise_type: NoiseType) -> CoherentFn {
    match noise_type {
        NoiseType::Gradient => gradient_coherent_noise_2d,
        NoiseType::Value => value_coherent_noise_2d,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Perlin {
    frequency: f64,
    lacunarity: f64,
    quality: NoiseQuality,
    noise_type: NoiseType,
    octave_count: usize,
    octave_count_tmp: usize,
    persistence: f64,
    seed: i32,
    norm: f64,
}

impl Default for Perlin {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_FREQUENCY,
            lacunarity: DEFAULT_LACUNARITY,
            quality: NoiseQuality::Standard,
            noise_type: NoiseType::Gradient,
            octave_count: DEFAULT_OCTAVE_COUNT,
            octave_count_tmp: DEFAULT_OCTAVE_COUNT,
            persistence: DEFAULT_PERSISTENCE,
            seed: DEFAULT_SEED,
            norm: 1.0,
        }
    }
}

impl Perlin {
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

    pub fn noise_type(&self) -> NoiseType {
        self.noise_type
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

    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
    }

    /// Frequency multiplier between octaves; 1.5–3.5 gives the best results.
    pub fn set_lacunarity(&mut self, lacunarity: f64) {
        self.lacunarity = lacunarity;
    }

    pub fn set_quality(&mut self, quality: NoiseQuality) {
        self.quality = quality;
    }

    pub fn set_noise_type(&mut self, noise_type: NoiseType) {
        self.noise_type = noise_type;
    }

    /// Set the number of octaves, resetting the temporary count to match.
    ///
    /// Fails unless `1 <= octave_count <= MAX_OCTAVE`.
    pub fn set_octave_count(&mut self, octave_count: usize) -> Result<()> {
        check_range("octave_count", octave_count, 1, MAX_OCTAVE)?;
        self.octave_count = octave_count;
        self.octave_count_tmp = octave_count;
        Ok(())
    }

    /// Evaluate fewer octaves without touching the full configuration.
    pub fn set_temporary_octave_count(&mut self, octave_count: usize) -> Result<()> {
        check_range("temporary_octave_count", octave_count, 1, MAX_OCTAVE)?;
        self.octave_count_tmp = octave_count;
        Ok(())
    }

    /// Amplitude multiplier between octaves; usually in `[0, 1]`.
    pub fn set_persistence(&mut self, persistence: f64) {
        self.persistence = persistence;
    }

    pub fn set_seed(&mut self, seed: i32) {
        self.seed = seed;
    }

    /// Snapshot of the current settings.
    pub fn config(&self) -> ModuleConfig {
        ModuleConfig::Perlin(PerlinConfig {
            frequency: self.frequency,
            lacunarity: self.lacunarity,
            quality: self.quality,
            noise_type: self.noise_type,
            octave_count: self.octave_count,
            persistence: self.persistence,
            seed: self.seed,
        })
    }

    fn walk(&self) -> OctaveWalk {
        OctaveWalk {
            frequency: self.frequency,
            lacunarity: self.lacunarity,
            octaves: self.octave_count_tmp,
            seed: self.seed,
        }
    }
}

impl Generator for Perlin {
    fn get_value(&self, x: f64, y: f64) -> f64 {
        let coherent = coherent_for(self.noise_type);
        let mut amplitude = 1.0;
        let value = self.walk().sum(x, y, |o| {
            let signal = coherent(o.x, o.y, o.seed, self.quality) * amplitude;
            amplitude *= self.persistence;
            signal
        });
        value * self.norm
    }

    fn source_module_count(&self) -> usize {
        0
    }
}
