pub mod ifft;
pub mod initial_spectrum;
pub mod rescale;
pub mod time_dependent_spectrum;

pub use ifft::TransformEngine;
