//! Build errors for the stepper builder.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a stepper.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Renderer not specified. Call .renderer(renderer) before .build()")]
    MissingRenderer,

    #[error(transparent)]
    Config(#[from] ConfigError),
}
