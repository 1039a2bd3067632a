use thiserror::Error;

/// Errors produced while setting up a simulation. The per-frame pipeline
/// itself has no recoverable failure modes; stage-to-stage size mismatches
/// are contract violations and assert instead.
#[derive(Debug, Error)]
pub enum OceanError {
  #[error("invalid configuration: {message}")]
  InvalidConfiguration { message: String },

  #[error("grid size must be a positive power of two, got {size}")]
  InvalidGridSize { size: usize },
}
