//! Serializable module settings.
//!
//! `ModuleConfig::build` goes through the modules' own setters, so a config
//! file is validated exactly like programmatic configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::module::{Billow, Generator, Perlin, RidgedMulti};
use crate::params::{
    NoiseQuality, NoiseType, DEFAULT_FREQUENCY, DEFAULT_LACUNARITY, DEFAULT_OCTAVE_COUNT,
    DEFAULT_PERSISTENCE, DEFAULT_SEED,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "module", rename_all = "snake_case")]
pub enum ModuleConfig {
    Perlin(PerlinConfig),
    Billow(BillowConfig),
    RidgedMulti(RidgedMultiConfig),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerlinConfig {
    pub frequency: f64,
    pub lacunarity: f64,
    pub quality: NoiseQuality,
    pub noise_type: NoiseType,
    pub octave_count: usize,
    pub persistence: f64,
    pub seed: i32,
}

impl Default for PerlinConfig {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_FREQUENCY,
            lacunarity: DEFAULT_LACUNARITY,
            quality: NoiseQuality::Standard,
            noise_type: NoiseType::Gradient,
            octave_count: DEFAULT_OCTAVE_COUNT,
            persistence: DEFAULT_PERSISTENCE,
            seed: DEFAULT_SEED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillowConfig {
    pub frequency: f64,
    pub lacunarity: f64,
    pub quality: NoiseQuality,
    pub octave_count: usize,
    pub persistence: f64,
    pub seed: i32,
}

impl Default for BillowConfig {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_FREQUENCY,
            lacunarity: DEFAULT_LACUNARITY,
            quality: NoiseQuality::Standard,
            octave_count: DEFAULT_OCTAVE_COUNT,
            persistence: DEFAULT_PERSISTENCE,
            seed: DEFAULT_SEED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RidgedMultiConfig {
    pub frequency: f64,
    pub lacunarity: f64,
    pub quality: NoiseQuality,
    pub octave_count: usize,
    pub seed: i32,
}

impl Default for RidgedMultiConfig {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_FREQUENCY,
            lacunarity: DEFAULT_LACUNARITY,
            quality: NoiseQuality::Standard,
            octave_count: DEFAULT_OCTAVE_COUNT,
            seed: DEFAULT_SEED,
        }
    }
}

impl PerlinConfig {
    pub fn build(&self) -> Result<Perlin> {
        let mut m = Perlin::new();
        m.set_frequency(self.frequency);
        m.set_lacunarity(self.lacunarity);
        m.set_quality(self.quality);
        m.set_noise_type(self.noise_type);
        m.set_persistence(self.persistence);
        m.set_seed(self.seed);
        m.set_octave_count(self.octave_count)?;
        Ok(m)
    }
}

impl BillowConfig {
    pub fn build(&self) -> Result<Billow> {
        let mut m = Billow::new();
        m.set_frequency(self.frequency);
        m.set_lacunarity(self.lacunarity);
        m.set_quality(self.quality);
        // Persistence before octaves: the octave setter derives normalization from it.
        m.set_persistence(self.persistence);
        m.set_seed(self.seed);
        m.set_octave_count(self.octave_count)?;
        Ok(m)
    }
}

impl RidgedMultiConfig {
    pub fn build(&self) -> Result<RidgedMulti> {
        let mut m = RidgedMulti::new();
        m.set_frequency(self.frequency);
        m.set_lacunarity(self.lacunarity);
        m.set_quality(self.quality);
        m.set_seed(self.seed);
        m.set_octave_count(self.octave_count)?;
        Ok(m)
    }
}

impl ModuleConfig {
    /// Short module name, as used in the `module` tag.
    pub fn name(&self) -> &'static str {
        match self {
            ModuleConfig::Perlin(_) => "perlin",
            ModuleConfig::Billow(_) => "billow",
            ModuleConfig::RidgedMulti(_) => "ridged_multi",
        }
    }

    pub fn build(&self) -> Result<Box<dyn Generator>> {
        Ok(match self {
            ModuleConfig::Perlin(c) => Box::new(c.build()?),
            ModuleConfig::Billow(c) => Box::new(c.build()?),
            ModuleConfig::RidgedMulti(c) => Box::new(c.build()?),
        })
    }
}

impl Default for ModuleConfig {
    fn default() -> Self {
        ModuleConfig::Perlin(PerlinConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NoiseError;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: ModuleConfig = serde_json::from_str(r#"{"module": "billow", "seed": 9}"#).unwrap();
        let ModuleConfig::Billow(b) = &cfg else { panic!("expected billow, got {cfg:?}") };
        assert_eq!(b.seed, 9);
        assert_eq!(b.octave_count, DEFAULT_OCTAVE_COUNT);
        assert_eq!(b.persistence, DEFAULT_PERSISTENCE);
    }

    #[test]
    fn built_module_matches_programmatic_one() {
        let json = r#"{"module": "perlin", "octave_count": 3, "quality": "best",
                       "noise_type": "value", "seed": -4, "frequency": 0.25}"#;
        let built = serde_json::from_str::<ModuleConfig>(json).unwrap().build().unwrap();

        let mut p = Perlin::new();
        p.set_octave_count(3).unwrap();
        p.set_quality(NoiseQuality::Best);
        p.set_noise_type(NoiseType::Value);
        p.set_seed(-4);
        p.set_frequency(0.25);
        for (x, y) in [(0.1, 0.2), (13.7, -8.4), (-100.5, 3.3)] {
            assert_eq!(built.get_value(x, y), p.get_value(x, y));
        }
    }

    #[test]
    fn invalid_octaves_rejected_at_build() {
        let cfg = ModuleConfig::RidgedMulti(RidgedMultiConfig { octave_count: 31, ..Default::default() });
        let err = cfg.build().err().expect("31 octaves must be rejected");
        assert!(matches!(err, NoiseError::InvalidParam { value: 31, .. }));
    }

    #[test]
    fn module_settings_round_trip_through_json() {
        let mut r = RidgedMulti::new();
        r.set_lacunarity(2.5);
        r.set_octave_count(9).unwrap();
        r.set_seed(31337);
        let json = serde_json::to_string(&r.config()).unwrap();
        assert!(json.contains(r#""module":"ridged_multi""#));
        let back: ModuleConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r.config());
        assert_eq!(back.build().unwrap().get_value(0.6, 0.9), r.get_value(0.6, 0.9));
    }

    #[test]
    fn billow_config_applies_normalization() {
        let cfg = BillowConfig { persistence: 0.4, ..Default::default() };
        let b = cfg.build().unwrap();
        assert!((b.normalization() - 0.6).abs() < 1e-12);
    }
}
