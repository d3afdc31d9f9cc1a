//! Deterministic 2D coherent noise: lattice primitives plus the Perlin,
//! Billow and ridged-multifractal octave generators built on them.

pub mod config;
pub mod error;
pub mod interop;
pub mod lattice;
pub mod map;
pub mod module;
pub mod params;

pub use config::ModuleConfig;
pub use error::{NoiseError, Result};
pub use map::{build_plane_map, NoiseMap, PlaneBounds};
pub use module::{Billow, Generator, Perlin, RidgedMulti};
pub use params::{NoiseQuality, NoiseType, MAX_OCTAVE};
