use std::time::Duration;

use crate::config::ConfigError;
use crate::layer::LayerId;
use crate::provider::ProviderError;

/// Errors surfaced by the snapping controller.
#[derive(Debug, thiserror::Error)]
pub enum SnappingError {
    /// The scene view never reported ready.
    #[error("scene view was not ready after {}s", waited.as_secs())]
    ViewTimeout { waited: Duration },
    /// The scene layers never finished loading.
    #[error("layers did not finish loading after {}s", waited.as_secs())]
    LoadTimeout { waited: Duration },
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),
    /// A layer toggle named a layer that has no checkbox.
    #[error("unknown snapping layer: {0}")]
    UnknownLayer(LayerId),
    /// Layer rows are built once per panel.
    #[error("snapping layers were already initialized")]
    AlreadyInitialized,
    #[error(transparent)]
    Config(#[from] ConfigError),
}
