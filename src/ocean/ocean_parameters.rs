use cgmath::Vector2;

use crate::ocean::error::OceanError;

/// Policy for mapping raw inverse-transform output into the final height
/// field.
///
/// `MinMax` remaps each frame into `[0, 1]` from that frame's own extrema,
/// which is convenient for display but rescales wave amplitude
/// inconsistently across frames. `Amplitude` multiplies by a fixed factor
/// and keeps relative amplitude between frames intact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Normalization {
  MinMax,
  Amplitude(f32),
}

#[derive(Clone, Copy, Debug)]
pub struct WaveParameters {
  /// Grid resolution N. Must be a positive power of two.
  pub size: u32,
  /// Physical side length L of the simulated patch, in meters.
  pub length_scale: f32,
  /// Spectrum energy scale (the JONSWAP alpha).
  pub alpha: f32,
  pub gravity: f32,
  /// Wavenumber of the spectral peak, rad/m.
  pub peak_wavenumber: f32,
  /// JONSWAP peak-sharpening factor gamma.
  pub peak_enhancement: f32,
  pub normalization: Normalization,
}

impl Default for WaveParameters {
  fn default() -> WaveParameters {
    WaveParameters {
      size: 256u32,
      length_scale: 150.0,
      alpha: 0.0081,
      gravity: 9.81,
      peak_wavenumber: 0.03,
      peak_enhancement: 3.3,
      normalization: Normalization::MinMax,
    }
  }
}

impl WaveParameters {
  pub fn validate(&self) -> Result<(), OceanError> {
    let invalid = |message: String| OceanError::InvalidConfiguration { message };

    if self.size == 0 || !self.size.is_power_of_two() {
      return Err(invalid(format!(
        "size must be a positive power of two, got {}",
        self.size
      )));
    }
    if !(self.length_scale > 0.0) || !self.length_scale.is_finite() {
      return Err(invalid(format!("length_scale must be > 0, got {}", self.length_scale)));
    }
    if !(self.alpha > 0.0) {
      return Err(invalid(format!("alpha must be > 0, got {}", self.alpha)));
    }
    if !(self.gravity > 0.0) {
      return Err(invalid(format!("gravity must be > 0, got {}", self.gravity)));
    }
    if !(self.peak_wavenumber > 0.0) {
      return Err(invalid(format!(
        "peak_wavenumber must be > 0, got {}",
        self.peak_wavenumber
      )));
    }

    Ok(())
  }

  /// Wavevector of the frequency-grid cell at (row, col). The grid is
  /// centered: k = 2π·(index − N/2) / L per axis, DC at the center cell.
  pub fn wave_vector(&self, row: usize, col: usize) -> Vector2<f32> {
    let tau = 2.0 * std::f32::consts::PI;
    let half = (self.size / 2) as f32;

    Vector2::new(
      tau * (col as f32 - half) / self.length_scale,
      tau * (row as f32 - half) / self.length_scale,
    )
  }
}
