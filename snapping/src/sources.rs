//! Feature snapping sources: the layers edited vertices may snap to.
//!
//! [`FeatureSourceSet`] is ordered for presentation but set-like: inserting a
//! layer that is already present is a no-op. Removal looks the layer up by id
//! with a linear scan and removes the first match.

#[cfg(test)]
#[path = "sources_test.rs"]
mod sources_test;

use serde::Serialize;

use crate::layer::{LayerCandidate, LayerId};

/// A single feature snapping source, referencing one candidate layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureSource {
    pub layer: LayerCandidate,
}

impl FeatureSource {
    #[must_use]
    pub fn new(layer: LayerCandidate) -> Self {
        Self { layer }
    }

    #[must_use]
    pub fn layer_id(&self) -> &LayerId {
        &self.layer.id
    }
}

/// Ordered collection of feature sources without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureSourceSet {
    sources: Vec<FeatureSource>,
}

impl FeatureSourceSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a source. Returns `false` if its layer was already present.
    pub fn insert(&mut self, source: FeatureSource) -> bool {
        if self.contains(source.layer_id()) {
            return false;
        }
        self.sources.push(source);
        true
    }

    /// Remove the first source for `layer_id`, returning it if one was present.
    pub fn remove(&mut self, layer_id: &LayerId) -> Option<FeatureSource> {
        let index = self.sources.iter().position(|s| s.layer_id() == layer_id)?;
        Some(self.sources.remove(index))
    }

    #[must_use]
    pub fn contains(&self, layer_id: &LayerId) -> bool {
        self.sources.iter().any(|s| s.layer_id() == layer_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeatureSource> {
        self.sources.iter()
    }

    /// Layer ids in insertion order.
    #[must_use]
    pub fn layer_ids(&self) -> Vec<LayerId> {
        self.sources.iter().map(|s| s.layer_id().clone()).collect()
    }

    /// Copy of the full collection, for whole-collection reassignment onto the options.
    #[must_use]
    pub fn to_vec(&self) -> Vec<FeatureSource> {
        self.sources.clone()
    }
}
