//! Scene provider: the external collaborator that owns the view and its layers.
//!
//! DESIGN
//! ======
//! The controller needs exactly two things from the scene: to know when the
//! view is ready (so the panel can be mounted) and the full list of layers
//! once the scene and every layer in it have loaded. [`SceneProvider`] is that
//! seam. Rendering, geometry editing and asset loading stay behind it.
//!
//! [`StaticScene`] is an in-process provider backed by a JSON scene
//! description. It is what the CLI mounts, and an optional load delay lets it
//! stand in for a slow network scene.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::layer::{GeometryType, LayerId, LayerInfo};

/// Error reported by a [`SceneProvider`].
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("scene failed to load: {0}")]
    SceneLoad(String),
    #[error("view failed to initialize: {0}")]
    View(String),
    #[error("invalid scene description: {0}")]
    InvalidScene(#[from] serde_json::Error),
    #[error("failed to read scene description: {0}")]
    Io(#[from] std::io::Error),
}

/// Provider-neutral async access to the scene. Enables mocking in tests.
#[async_trait::async_trait]
pub trait SceneProvider: Send + Sync {
    /// Resolve once the view can host widgets.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::View`] if the view cannot be created.
    async fn when_view_ready(&self) -> Result<(), ProviderError>;

    /// Resolve with every layer in the scene once the scene and all of its
    /// layers have finished loading.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::SceneLoad`] if the scene or a layer fails to load.
    async fn load_all(&self) -> Result<Vec<LayerInfo>, ProviderError>;
}

// =============================================================================
// SCENE DESCRIPTION
// =============================================================================

/// JSON scene description accepted by [`StaticScene`].
#[derive(Debug, Clone, Deserialize)]
pub struct SceneDescription {
    /// Portal item the scene is hosted as, if any.
    #[serde(default)]
    pub portal_item: Option<String>,
    #[serde(default)]
    pub layers: Vec<SceneLayer>,
    /// Simulated time for the scene and its layers to load.
    #[serde(default)]
    pub load_delay_ms: u64,
}

/// One layer entry in a [`SceneDescription`].
#[derive(Debug, Clone, Deserialize)]
pub struct SceneLayer {
    /// Stable id; generated when absent.
    #[serde(default)]
    pub id: Option<LayerId>,
    pub title: String,
    #[serde(default)]
    pub geometry_type: Option<GeometryType>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl From<SceneLayer> for LayerInfo {
    fn from(layer: SceneLayer) -> Self {
        Self {
            id: layer.id.unwrap_or_else(LayerId::generate),
            title: layer.title,
            geometry_type: layer.geometry_type,
            visible: layer.visible,
        }
    }
}

// =============================================================================
// STATIC SCENE
// =============================================================================

/// Scene whose layers are known up front.
#[derive(Debug, Clone, Default)]
pub struct StaticScene {
    portal_item: Option<String>,
    layers: Vec<LayerInfo>,
    load_delay: Duration,
}

impl StaticScene {
    #[must_use]
    pub fn new(layers: Vec<LayerInfo>) -> Self {
        Self { layers, ..Self::default() }
    }

    #[must_use]
    pub fn from_description(description: SceneDescription) -> Self {
        Self {
            portal_item: description.portal_item,
            layers: description.layers.into_iter().map(LayerInfo::from).collect(),
            load_delay: Duration::from_millis(description.load_delay_ms),
        }
    }

    /// Parse a JSON scene description.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::InvalidScene`] for malformed JSON.
    pub fn from_json(json: &str) -> Result<Self, ProviderError> {
        let description: SceneDescription = serde_json::from_str(json)?;
        Ok(Self::from_description(description))
    }

    /// Read and parse a JSON scene description file.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Io`] if the file cannot be read and
    /// [`ProviderError::InvalidScene`] for malformed JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    #[must_use]
    pub fn with_load_delay(mut self, delay: Duration) -> Self {
        self.load_delay = delay;
        self
    }

    /// Add a layer on top of the described ones, like an editable layer the page adds itself.
    pub fn add_layer(&mut self, layer: LayerInfo) {
        self.layers.push(layer);
    }

    #[must_use]
    pub fn portal_item(&self) -> Option<&str> {
        self.portal_item.as_deref()
    }

    #[must_use]
    pub fn layers(&self) -> &[LayerInfo] {
        &self.layers
    }
}

#[async_trait::async_trait]
impl SceneProvider for StaticScene {
    async fn when_view_ready(&self) -> Result<(), ProviderError> {
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<LayerInfo>, ProviderError> {
        if !self.load_delay.is_zero() {
            tokio::time::sleep(self.load_delay).await;
        }
        tracing::debug!(layers = self.layers.len(), "static scene loaded");
        Ok(self.layers.clone())
    }
}
