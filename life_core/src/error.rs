// error.rs - Configuration errors, raised before any simulation state exists

use thiserror::Error;

/// The only error class of the core: a grid that cannot be built.
///
/// Once a `SimulationState` exists every command on it is total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid width must be positive")]
    ZeroWidth,

    #[error("grid height must be positive")]
    ZeroHeight,

    #[error("grid of {width}x{height} cells is too large")]
    TooLarge { width: usize, height: usize },
}
