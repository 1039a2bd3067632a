//! Spectral ocean height-field synthesis on the CPU.
//!
//! A statistical wave spectrum is generated once from [`WaveParameters`],
//! evolved in phase over time with the deep-water dispersion relation,
//! brought to the spatial domain with a 2D inverse FFT and rescaled into
//! a bounded two-channel height field for a renderer to consume.

mod ocean;

pub use ocean::{
  Grid, HeightField, HeightSample, Normalization, OceanError, OceanSurface, TransformEngine,
  WaveParameters,
};
