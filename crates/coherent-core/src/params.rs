use serde::{Deserialize, Serialize};

/// Maximum number of octaves any generator accepts.
pub const MAX_OCTAVE: usize = 30;

pub const DEFAULT_FREQUENCY: f64 = 1.0;
pub const DEFAULT_LACUNARITY: f64 = 2.0;
pub const DEFAULT_OCTAVE_COUNT: usize = 6;
pub const DEFAULT_PERSISTENCE: f64 = 0.5;
pub const DEFAULT_SEED: i32 = 0;

/// Smoothing applied to the fractional cell offset before interpolation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseQuality {
    /// Linear interpolation; visible creasing at cell edges.
    Fast,
    /// Cubic S-curve `3t² − 2t³`.
    #[default]
    Standard,
    /// Quintic S-curve `6t⁵ − 15t⁴ + 10t³`; continuous second derivative.
    Best,
}

impl NoiseQuality {
    /// Map a fractional offset in `[0, 1]` onto this quality's curve.
    #[inline]
    pub fn smooth(self, t: f64) -> f64 {
        match self {
            NoiseQuality::Fast => t,
            NoiseQuality::Standard => crate::lattice::interp::s_curve3(t),
            NoiseQuality::Best => crate::lattice::interp::s_curve5(t),
        }
    }
}

/// Corner function used by the Perlin module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseType {
    /// Dot product of a lattice gradient with the offset vector.
    #[default]
    Gradient,
    /// Scalar height hashed from the lattice point.
    Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curves_fix_endpoints() {
        for q in [NoiseQuality::Fast, NoiseQuality::Standard, NoiseQuality::Best] {
            assert_eq!(q.smooth(0.0), 0.0);
            assert_eq!(q.smooth(1.0), 1.0);
            assert_eq!(q.smooth(0.5), 0.5);
        }
    }

    #[test]
    fn quality_serializes_snake_case() {
        let s = serde_json::to_string(&NoiseQuality::Best).unwrap();
        assert_eq!(s, "\"best\"");
        let t: NoiseType = serde_json::from_str("\"value\"").unwrap();
        assert_eq!(t, NoiseType::Value);
    }
}
