use rand::prelude::*;
use rustfft::num_complex::Complex32;

use crate::ocean::error::OceanError;
use crate::ocean::grid::{Grid, HeightField};
use crate::ocean::ocean_parameters::WaveParameters;
use crate::ocean::pipelines::{ifft, initial_spectrum, rescale, time_dependent_spectrum};

/// Simulation handle: owns the base spectrum and the planned transforms.
///
/// The base spectrum is computed once at creation and never mutated;
/// every `step` re-evolves it from absolute time, so frames never
/// accumulate drift. Dropping the surface releases the transform plans.
pub struct OceanSurface {
  params: WaveParameters,
  base_spectrum: Grid<Complex32>,
  engine: ifft::TransformEngine,
}

impl OceanSurface {
  /// Validates the parameters, seeds the phase generator and builds the
  /// base spectrum. With `seed` set, the spectrum is fully reproducible.
  pub fn new(params: WaveParameters, seed: Option<u64>) -> Result<OceanSurface, OceanError> {
    params.validate()?;

    let engine = ifft::TransformEngine::new(params.size as usize)?;

    let mut rng = match seed {
      Some(seed) => StdRng::seed_from_u64(seed),
      None => StdRng::from_entropy(),
    };
    let base_spectrum = initial_spectrum::generate(&params, &mut rng);

    log::debug!(
      "ocean surface ready: {0}x{0} grid, patch {1}m",
      params.size,
      params.length_scale
    );

    Ok(OceanSurface {
      params,
      base_spectrum,
      engine,
    })
  }

  /// One synchronous pipeline pass for absolute time `time` (seconds):
  /// evolve → inverse transform → rescale.
  pub fn step(&self, time: f32) -> HeightField {
    let started = std::time::Instant::now();

    let evolved = time_dependent_spectrum::evolve(&self.base_spectrum, time, &self.params);
    let spatial = self.engine.inverse(&evolved);
    let height = rescale::rescale(&spatial, self.params.normalization);

    log::debug!("step t={:.3}s took {:?}", time, started.elapsed());
    height
  }

  pub fn parameters(&self) -> &WaveParameters {
    &self.params
  }

  pub fn base_spectrum(&self) -> &Grid<Complex32> {
    &self.base_spectrum
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn small_params() -> WaveParameters {
    WaveParameters {
      size: 4,
      length_scale: 10.0,
      alpha: 0.0081,
      gravity: 9.81,
      peak_wavenumber: 0.03,
      peak_enhancement: 3.3,
      ..Default::default()
    }
  }

  #[test]
  fn rejects_invalid_configuration() {
    let params = WaveParameters {
      size: 6,
      ..small_params()
    };
    assert!(matches!(
      OceanSurface::new(params, Some(42)),
      Err(OceanError::InvalidConfiguration { .. })
    ));
  }

  #[test]
  fn repeated_steps_at_equal_time_are_bit_identical() {
    let surface = OceanSurface::new(small_params(), Some(42)).unwrap();

    let a = surface.step(0.0);
    let b = surface.step(0.0);
    assert_eq!(a.as_bytes(), b.as_bytes());
  }

  #[test]
  fn field_changes_over_time() {
    let surface = OceanSurface::new(small_params(), Some(42)).unwrap();

    let at_rest = surface.step(0.0);
    let later = surface.step(1.0);
    assert_ne!(at_rest.as_bytes(), later.as_bytes());
  }

  #[test]
  fn stepping_does_not_mutate_the_base_spectrum() {
    let surface = OceanSurface::new(small_params(), Some(42)).unwrap();
    let snapshot = surface.base_spectrum().clone();

    surface.step(2.5);
    assert_eq!(*surface.base_spectrum(), snapshot);
  }

  #[test]
  fn same_seed_reproduces_the_same_surface() {
    let a = OceanSurface::new(small_params(), Some(42)).unwrap();
    let b = OceanSurface::new(small_params(), Some(42)).unwrap();

    assert_eq!(a.step(0.5).as_bytes(), b.step(0.5).as_bytes());
  }
}
