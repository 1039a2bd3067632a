use rustfft::num_complex::Complex32;

use crate::ocean::grid::{Grid, HeightField, HeightSample};
use crate::ocean::ocean_parameters::Normalization;

/// Maps raw inverse-transform output into the final two-channel height
/// field.
///
/// `MinMax` scans once for the extrema over both channels (non-finite
/// samples are skipped), then remaps into `[0, 1]`. A degenerate field
/// with `max == min` passes through unchanged; that case is defined
/// behavior, not a divide-by-zero fault. `Amplitude` applies a fixed
/// scale instead, preserving relative amplitude across frames.
pub fn rescale(field: &Grid<Complex32>, normalization: Normalization) -> HeightField {
  match normalization {
    Normalization::Amplitude(scale) => map_samples(field, |v| v * scale),
    Normalization::MinMax => {
      let mut min = f32::MAX;
      let mut max = f32::MIN;
      for v in field.as_slice() {
        for channel in [v.re, v.im] {
          if channel.is_finite() {
            min = min.min(channel);
            max = max.max(channel);
          }
        }
      }

      let range = max - min;
      if range > 0.0 {
        map_samples(field, |v| (v - min) / range)
      } else {
        map_samples(field, |v| v)
      }
    }
  }
}

fn map_samples(field: &Grid<Complex32>, f: impl Fn(f32) -> f32) -> HeightField {
  let data = field
    .as_slice()
    .iter()
    .map(|v| HeightSample {
      re: f(v.re),
      im: f(v.im),
    })
    .collect();
  Grid::from_vec(field.size(), data)
}
