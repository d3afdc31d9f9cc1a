//! Octave generators and the evaluation contract they share.

pub mod billow;
pub mod fractal;
pub mod perlin;
pub mod ridged;

pub use billow::Billow;
pub use perlin::Perlin;
pub use ridged::RidgedMulti;

/// A noise module that can be evaluated at any 2D point.
///
/// Evaluation reads configuration only, so a configured module may be shared
/// by reference across threads. Setters take `&mut self`; the borrow checker
/// keeps them from racing readers.
pub trait Generator: Send + Sync {
    /// Noise value at `(x, y)`. Deterministic for a fixed configuration.
    fn get_value(&self, x: f64, y: f64) -> f64;

    /// Number of upstream modules consumed in a composition graph.
    fn source_module_count(&self) -> usize;
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    fn get_value(&self, x: f64, y: f64) -> f64 {
        (**self).get_value(x, y)
    }

    fn source_module_count(&self) -> usize {
        (**self).source_module_count()
    }
}
