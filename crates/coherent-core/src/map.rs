//! Rectangular grids of generator output.
//!
//! Row-major `f32` storage; coordinate math stays in `f64`.

use serde::{Deserialize, Serialize};

use crate::module::Generator;

/// Axis-aligned rectangle of the input plane covered by a [`NoiseMap`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneBounds {
    pub lower_x: f64,
    pub upper_x: f64,
    pub lower_y: f64,
    pub upper_y: f64,
}

impl Default for PlaneBounds {
    fn default() -> Self {
        Self { lower_x: 0.0, upper_x: 1.0, lower_y: 0.0, upper_y: 1.0 }
    }
}

impl PlaneBounds {
    pub fn new(lower_x: f64, upper_x: f64, lower_y: f64, upper_y: f64) -> Self {
        Self { lower_x, upper_x, lower_y, upper_y }
    }

    pub fn width(&self) -> f64 {
        self.upper_x - self.lower_x
    }

    pub fn height(&self) -> f64 {
        self.upper_y - self.lower_y
    }
}

/// Generator output sampled on a `width × height` grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseMap {
    pub width: usize,
    pub height: usize,
    pub bounds: PlaneBounds,
    /// Row-major samples; row `r` covers `y = lower_y + r · dy`.
    pub data: Vec<f32>,
}

impl NoiseMap {
    pub fn new(width: usize, height: usize, bounds: PlaneBounds) -> Self {
        Self { width, height, bounds, data: vec![0.0; width * height] }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.width + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, val: f32) {
        self.data[row * self.width + col] = val;
    }

    /// Plane coordinates of the sample at `(row, col)`.
    pub fn position(&self, row: usize, col: usize) -> (f64, f64) {
        let dx = self.bounds.width() / self.width as f64;
        let dy = self.bounds.height() / self.height as f64;
        (self.bounds.lower_x + col as f64 * dx, self.bounds.lower_y + row as f64 * dy)
    }

    /// Bilinear lookup at plane coordinates `(x, y)`.
    /// Returns `None` outside the sampled grid.
    pub fn sample(&self, x: f64, y: f64) -> Option<f32> {
        if self.data.is_empty() {
            return None;
        }
        let fx = (x - self.bounds.lower_x) / self.bounds.width() * self.width as f64;
        let fy = (y - self.bounds.lower_y) / self.bounds.height() * self.height as f64;
        if !(0.0..=(self.width - 1) as f64).contains(&fx) || !(0.0..=(self.height - 1) as f64).contains(&fy) {
            return None;
        }

        let x0 = fx.floor() as usize;
        let y0 = fy.floor() as usize;
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);
        let tx = (fx - x0 as f64) as f32;
        let ty = (fy - y0 as f64) as f32;

        let v00 = self.get(y0, x0);
        let v10 = self.get(y0, x1);
        let v01 = self.get(y1, x0);
        let v11 = self.get(y1, x1);

        Some(
            v00 * (1.0 - tx) * (1.0 - ty)
                + v10 * tx * (1.0 - ty)
                + v01 * (1.0 - tx) * ty
                + v11 * tx * ty,
        )
    }

    pub fn min_value(&self) -> f32 {
        self.data.iter().cloned().fold(f32::INFINITY, f32::min)
    }

    pub fn max_value(&self) -> f32 {
        self.data.iter().cloned().fold(f32::NEG_INFINITY, f32::max)
    }

    pub fn mean_value(&self) -> f32 {
        if self.data.is_empty() {
            return 0.0;
        }
        (self.data.iter().map(|&v| v as f64).sum::<f64>() / self.data.len() as f64) as f32
    }
}

fn fill_row<G: Generator + ?Sized>(
    generator: &G,
    bounds: &PlaneBounds,
    width: usize,
    dy: f64,
    row: usize,
    out: &mut [f32],
) {
    let dx = bounds.width() / width as f64;
    let y = bounds.lower_y + row as f64 * dy;
    for (col, v) in out.iter_mut().enumerate() {
        *v = generator.get_value(bounds.lower_x + col as f64 * dx, y) as f32;
    }
}

/// Sample `generator` over `bounds` on a `width × height` grid.
///
/// The generator is only borrowed, so with the `threading` feature rows are
/// evaluated in parallel against the same configuration.
pub fn build_plane_map<G: Generator + ?Sized>(
    generator: &G,
    width: usize,
    height: usize,
    bounds: PlaneBounds,
) -> NoiseMap {
    let mut map = NoiseMap::new(width, height, bounds);
    if width == 0 || height == 0 {
        map.data.clear();
        return map;
    }
    let dy = bounds.height() / height as f64;

    #[cfg(feature = "threading")]
    {
        use rayon::prelude::*;
        map.data
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(row, out)| fill_row(generator, &bounds, width, dy, row, out));
    }
    #[cfg(not(feature = "threading"))]
    {
        for (row, out) in map.data.chunks_mut(width).enumerate() {
            fill_row(generator, &bounds, width, dy, row, out);
        }
    }

    tracing::trace!(width, height, min = map.min_value(), max = map.max_value(), "plane map built");
    map
}
