//! Layer model: what the scene provider reports per loaded layer, and which of
//! those layers can serve as feature snapping targets.
//!
//! A [`LayerInfo`] is the provider's view of any layer in the scene (feature
//! layers, scene layers, basemap tiles). [`discover_candidates`] filters that
//! list down to [`LayerCandidate`]s: visible layers whose geometry is a point,
//! polyline or polygon. Candidates are discovered once, after the scene and all
//! of its layers finish loading, and never change afterwards.

#[cfg(test)]
#[path = "layer_test.rs"]
mod layer_test;

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stable unique identifier of a layer, as assigned by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerId(String);

impl LayerId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh id for a layer the provider did not name.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LayerId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LayerId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Geometry kind of a feature layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryType {
    Point,
    Multipoint,
    Polyline,
    Polygon,
    Multipatch,
    Mesh,
}

impl GeometryType {
    /// Name as reported by the provider, e.g. `"polyline"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Multipoint => "multipoint",
            Self::Polyline => "polyline",
            Self::Polygon => "polygon",
            Self::Multipatch => "multipatch",
            Self::Mesh => "mesh",
        }
    }

    /// Whether features of this kind can be snapped to.
    #[must_use]
    pub fn supports_feature_snapping(self) -> bool {
        matches!(self, Self::Point | Self::Polyline | Self::Polygon)
    }
}

/// Error for a geometry name no provider reports.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown geometry type '{0}'")]
pub struct UnknownGeometryType(pub String);

impl FromStr for GeometryType {
    type Err = UnknownGeometryType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Point, Self::Multipoint, Self::Polyline, Self::Polygon, Self::Multipatch, Self::Mesh]
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownGeometryType(s.to_owned()))
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A loaded layer as reported by the scene provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerInfo {
    pub id: LayerId,
    pub title: String,
    /// `None` for layers without feature geometry (basemaps, mesh scene layers).
    pub geometry_type: Option<GeometryType>,
    pub visible: bool,
}

impl LayerInfo {
    #[must_use]
    pub fn new(id: impl Into<LayerId>, title: impl Into<String>, geometry_type: Option<GeometryType>, visible: bool) -> Self {
        Self { id: id.into(), title: title.into(), geometry_type, visible }
    }

    /// Visible, and its geometry supports feature snapping.
    #[must_use]
    pub fn is_snapping_candidate(&self) -> bool {
        self.visible && self.geometry_type.is_some_and(GeometryType::supports_feature_snapping)
    }
}

/// A layer eligible for feature snapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayerCandidate {
    pub id: LayerId,
    pub title: String,
    pub geometry_type: GeometryType,
}

impl LayerCandidate {
    /// Build a candidate from provider metadata, or `None` if the layer is not eligible.
    #[must_use]
    pub fn from_info(info: &LayerInfo) -> Option<Self> {
        if !info.visible {
            return None;
        }
        let geometry_type = info.geometry_type.filter(|g| g.supports_feature_snapping())?;
        Some(Self { id: info.id.clone(), title: info.title.clone(), geometry_type })
    }

    /// Checkbox label, `"<title> (<geometryType>)"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.title, self.geometry_type)
    }
}

/// Select the snapping candidates from a fully loaded layer list.
///
/// Keeps provider order. A layer id reported twice yields a single candidate.
#[must_use]
pub fn discover_candidates(layers: &[LayerInfo]) -> Vec<LayerCandidate> {
    let mut seen = HashSet::new();
    layers
        .iter()
        .filter_map(LayerCandidate::from_info)
        .filter(|candidate| seen.insert(candidate.id.clone()))
        .collect()
}
