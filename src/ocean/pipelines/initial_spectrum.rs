use cgmath::InnerSpace;
use rustfft::num_complex::Complex32;

use crate::ocean::grid::Grid;
use crate::ocean::ocean_parameters::WaveParameters;

/// Builds the base wave spectrum: one complex amplitude per
/// frequency-grid cell, with magnitude `sqrt(S(k) / 2)` and a uniformly
/// random phase in [0, 2π). The `sqrt(S/2)` normalization makes amplitude
/// scale linearly with the square root of spectral energy.
///
/// The random source is injected so a fixed seed reproduces the spectrum
/// exactly.
pub fn generate(params: &WaveParameters, rng: &mut impl rand::Rng) -> Grid<Complex32> {
  let n = params.size as usize;
  let mut data = Vec::with_capacity(n * n);

  for row in 0..n {
    for col in 0..n {
      let k = params.wave_vector(row, col).magnitude();

      // The DC cell sits at the grid center; S(k) divides by k, so it is
      // pinned to exactly zero amplitude.
      if k == 0.0 {
        data.push(Complex32::new(0.0, 0.0));
        continue;
      }

      let amplitude = (spectral_energy(k, params) / 2.0).sqrt();
      let phase = rng.gen::<f32>() * 2.0 * std::f32::consts::PI;
      data.push(Complex32::from_polar(amplitude, phase));
    }
  }

  Grid::from_vec(n, data)
}

/// JONSWAP spectral density sampled on the wavenumber grid.
///
/// The frequency-space form
/// `S(ω) = α g² / ω⁵ · exp(−5/4 (ωp/ω)⁴) · γ^r` is evaluated at
/// `ω(k) = sqrt(g·k)` (deep-water dispersion) and mapped onto the
/// wavenumber grid with the Jacobian `dω/dk = ½·sqrt(g/k)`.
fn spectral_energy(k: f32, params: &WaveParameters) -> f32 {
  let omega = (params.gravity * k).sqrt();
  let omega_p = (params.gravity * params.peak_wavenumber).sqrt();

  let sigma = if omega <= omega_p { 0.07 } else { 0.09 };
  let r = (-(omega - omega_p).powi(2) / (2.0 * sigma * sigma * omega_p * omega_p)).exp();

  let density = params.alpha * params.gravity.powi(2) / omega.powi(5)
    * (-1.25 * (omega_p / omega).powi(4)).exp()
    * params.peak_enhancement.powf(r);

  density * 0.5 * (params.gravity / k).sqrt()
}
