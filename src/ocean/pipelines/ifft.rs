use std::sync::Arc;

use rustfft::num_complex::Complex32;
use rustfft::{Fft, FftPlanner};

use crate::ocean::error::OceanError;
use crate::ocean::grid::Grid;

/// Planned 2D transforms for one grid size.
///
/// Planning happens once at simulation setup; the planned handles live for
/// the lifetime of the owning simulation and are released when it is
/// dropped. The engine is a single-owner resource: concurrent use from
/// multiple threads needs external synchronization.
pub struct TransformEngine {
  size: usize,
  forward: Arc<dyn Fft<f32>>,
  inverse: Arc<dyn Fft<f32>>,
}

impl TransformEngine {
  pub fn new(size: usize) -> Result<TransformEngine, OceanError> {
    // The radix-2 decomposition requires a power-of-two grid.
    if size == 0 || !size.is_power_of_two() {
      return Err(OceanError::InvalidGridSize { size });
    }

    let mut planner = FftPlanner::new();
    Ok(TransformEngine {
      size,
      forward: planner.plan_fft_forward(size),
      inverse: planner.plan_fft_inverse(size),
    })
  }

  pub fn size(&self) -> usize {
    self.size
  }

  /// 2D inverse DFT: rows, then columns, then `1/(N·N)` normalization so
  /// that `forward ∘ inverse` recovers the input.
  pub fn inverse(&self, field: &Grid<Complex32>) -> Grid<Complex32> {
    let mut data = self.transform_2d(field, &self.inverse);

    let scale = 1.0 / (self.size * self.size) as f32;
    for v in &mut data {
      *v *= scale;
    }

    Grid::from_vec(self.size, data)
  }

  /// Unnormalized 2D forward DFT, the inverse's round-trip counterpart.
  pub fn forward(&self, field: &Grid<Complex32>) -> Grid<Complex32> {
    let data = self.transform_2d(field, &self.forward);
    Grid::from_vec(self.size, data)
  }

  fn transform_2d(&self, field: &Grid<Complex32>, fft: &Arc<dyn Fft<f32>>) -> Vec<Complex32> {
    let n = self.size;
    assert_eq!(field.size(), n, "field size must match the planned transform size");

    let mut data = field.as_slice().to_vec();

    for row in data.chunks_exact_mut(n) {
      fft.process(row);
    }

    let mut column = vec![Complex32::new(0.0, 0.0); n];
    for col in 0..n {
      for row in 0..n {
        column[row] = data[row * n + col];
      }
      fft.process(&mut column);
      for row in 0..n {
        data[row * n + col] = column[row];
      }
    }

    data
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::prelude::*;

  fn random_grid(size: usize, seed: u64) -> Grid<Complex32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..size * size)
      .map(|_| Complex32::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5))
      .collect();
    Grid::from_vec(size, data)
  }

  #[test]
  fn rejects_non_power_of_two_sizes() {
    for size in [0, 3, 6, 12] {
      assert!(matches!(
        TransformEngine::new(size),
        Err(OceanError::InvalidGridSize { .. })
      ));
    }
  }

  #[test]
  fn accepts_power_of_two_sizes() {
    for size in [1, 2, 4, 256] {
      assert!(TransformEngine::new(size).is_ok());
    }
  }

  #[test]
  fn forward_of_inverse_round_trips() {
    let engine = TransformEngine::new(8).unwrap();
    let original = random_grid(8, 11);

    let round_trip = engine.forward(&engine.inverse(&original));

    for (a, b) in round_trip.as_slice().iter().zip(original.as_slice()) {
      assert!((a.re - b.re).abs() < 1e-4, "{} vs {}", a.re, b.re);
      assert!((a.im - b.im).abs() < 1e-4, "{} vs {}", a.im, b.im);
    }
  }

  #[test]
  fn inverse_of_impulse_is_uniform() {
    // A single unit impulse at DC transforms to a constant 1/(N·N) field.
    let n = 4;
    let mut field = Grid::new(n);
    field[(0, 0)] = Complex32::new(1.0, 0.0);

    let engine = TransformEngine::new(n).unwrap();
    let spatial = engine.inverse(&field);

    let expected = 1.0 / (n * n) as f32;
    for v in spatial.as_slice() {
      assert!((v.re - expected).abs() < 1e-6);
      assert!(v.im.abs() < 1e-6);
    }
  }
}
