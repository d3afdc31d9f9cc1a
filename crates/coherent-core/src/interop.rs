//! Bridges to the `noise` crate so these generators can feed its
//! combinator graph (selectors, warps, scale/bias and so on).

use noise::NoiseFn;

use crate::module::{Billow, Generator, Perlin, RidgedMulti};

macro_rules! impl_noise_fn {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl NoiseFn<f64, 2> for $ty {
                fn get(&self, point: [f64; 2]) -> f64 {
                    self.get_value(point[0], point[1])
                }
            }
        )+
    };
}

impl_noise_fn!(Perlin, Billow, RidgedMulti);
