use cgmath::InnerSpace;
use rustfft::num_complex::Complex32;

use crate::ocean::grid::Grid;
use crate::ocean::ocean_parameters::WaveParameters;

/// Advances the base spectrum to absolute time `time` (seconds).
///
/// Each component oscillates at the deep-water dispersion frequency
/// `ω(k) = sqrt(g·|k|)`: the base amplitude is rotated by `exp(i·ω·t)`.
/// The field at any instant is a function of the immutable base spectrum
/// and absolute time only, so there is no drift across frames and equal
/// inputs produce bit-identical output.
pub fn evolve(base: &Grid<Complex32>, time: f32, params: &WaveParameters) -> Grid<Complex32> {
  let n = params.size as usize;
  assert_eq!(base.size(), n, "base spectrum size must match params.size");

  let mut data = Vec::with_capacity(n * n);
  for row in 0..n {
    for col in 0..n {
      let k = params.wave_vector(row, col).magnitude();
      let omega = (params.gravity * k).sqrt();

      let (sin, cos) = (omega * time).sin_cos();
      data.push(base[(row, col)] * Complex32::new(cos, sin));
    }
  }

  Grid::from_vec(n, data)
}
