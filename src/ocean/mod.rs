mod error;
mod grid;
mod ocean_parameters;
mod ocean_surface;
mod pipelines;

pub use error::OceanError;
pub use grid::{Grid, HeightField, HeightSample};
pub use ocean_parameters::{Normalization, WaveParameters};
pub use ocean_surface::OceanSurface;
pub use pipelines::TransformEngine;
