pub mod coherent;
pub mod hash;
pub mod interp;
pub mod vectors;

pub use coherent::{gradient_coherent_noise_2d, gradient_noise_2d, value_coherent_noise_2d};
pub use hash::{int_hash, value_noise_2d, vector_index_hash};
