//! Snapping options as owned by the editing widget, with per-property watches.
//!
//! `SnappingOptions` is the configuration the editor consults while the user
//! draws: global snapping, self snapping, feature snapping and the layers used
//! as feature snapping sources. It is written both by the panel controller and
//! by the editor itself (holding the snapping modifier key flips `enabled`).
//!
//! Observers subscribe per property with [`SnappingOptions::watch`]. Writes do
//! not call back into observers; they enqueue an [`OptionChange`] that the
//! owner drains with [`SnappingOptions::next_change`] once the write has
//! completed. Handlers therefore never run re-entrantly inside the assignment
//! that triggered them.

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

use std::collections::{HashSet, VecDeque};

use serde::Serialize;

use crate::layer::LayerId;
use crate::sources::FeatureSource;

/// A watchable field of [`SnappingOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnappingProperty {
    Enabled,
    SelfEnabled,
    FeatureEnabled,
    FeatureSources,
}

impl SnappingProperty {
    /// Property name as exposed by the editor API.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::SelfEnabled => "selfEnabled",
            Self::FeatureEnabled => "featureEnabled",
            Self::FeatureSources => "featureSources",
        }
    }
}

/// How a new watch behaves at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchMode {
    /// Notify once immediately with the current value, then on every change.
    Init,
    /// Notify on changes only.
    Change,
}

/// A change notification for a watched property, carrying the new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionChange {
    Enabled(bool),
    SelfEnabled(bool),
    FeatureEnabled(bool),
    FeatureSources(Vec<LayerId>),
}

impl OptionChange {
    #[must_use]
    pub fn property(&self) -> SnappingProperty {
        match self {
            Self::Enabled(_) => SnappingProperty::Enabled,
            Self::SelfEnabled(_) => SnappingProperty::SelfEnabled,
            Self::FeatureEnabled(_) => SnappingProperty::FeatureEnabled,
            Self::FeatureSources(_) => SnappingProperty::FeatureSources,
        }
    }
}

/// Plain copy of the option values, for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionsSnapshot {
    pub enabled: bool,
    pub self_enabled: bool,
    pub feature_enabled: bool,
    pub feature_sources: Vec<LayerId>,
}

/// The editor's snapping configuration.
///
/// Defaults match the editor: snapping off, self and feature snapping on, no
/// feature sources.
#[derive(Debug)]
pub struct SnappingOptions {
    enabled: bool,
    self_enabled: bool,
    feature_enabled: bool,
    feature_sources: Vec<FeatureSource>,
    watched: HashSet<SnappingProperty>,
    pending: VecDeque<OptionChange>,
}

impl Default for SnappingOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            self_enabled: true,
            feature_enabled: true,
            feature_sources: Vec::new(),
            watched: HashSet::new(),
            pending: VecDeque::new(),
        }
    }
}

impl SnappingOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with explicit starting values and no watches.
    #[must_use]
    pub fn with_values(enabled: bool, self_enabled: bool, feature_enabled: bool) -> Self {
        Self { enabled, self_enabled, feature_enabled, ..Self::default() }
    }

    // --- Values ---

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn self_enabled(&self) -> bool {
        self.self_enabled
    }

    #[must_use]
    pub fn feature_enabled(&self) -> bool {
        self.feature_enabled
    }

    #[must_use]
    pub fn feature_sources(&self) -> &[FeatureSource] {
        &self.feature_sources
    }

    #[must_use]
    pub fn snapshot(&self) -> OptionsSnapshot {
        OptionsSnapshot {
            enabled: self.enabled,
            self_enabled: self.self_enabled,
            feature_enabled: self.feature_enabled,
            feature_sources: self.feature_source_ids(),
        }
    }

    fn feature_source_ids(&self) -> Vec<LayerId> {
        self.feature_sources.iter().map(|s| s.layer_id().clone()).collect()
    }

    // --- Writes ---

    pub fn set_enabled(&mut self, value: bool) {
        if self.enabled != value {
            self.enabled = value;
            self.notify(OptionChange::Enabled(value));
        }
    }

    pub fn set_self_enabled(&mut self, value: bool) {
        if self.self_enabled != value {
            self.self_enabled = value;
            self.notify(OptionChange::SelfEnabled(value));
        }
    }

    pub fn set_feature_enabled(&mut self, value: bool) {
        if self.feature_enabled != value {
            self.feature_enabled = value;
            self.notify(OptionChange::FeatureEnabled(value));
        }
    }

    /// Replace the whole source collection.
    ///
    /// Always notifies, even when the contents are unchanged: the editor only
    /// picks up source changes through reassignment.
    pub fn set_feature_sources(&mut self, sources: Vec<FeatureSource>) {
        self.feature_sources = sources;
        let ids = self.feature_source_ids();
        self.notify(OptionChange::FeatureSources(ids));
    }

    // --- Watches ---

    /// Subscribe to changes of `property`.
    pub fn watch(&mut self, property: SnappingProperty, mode: WatchMode) {
        self.watched.insert(property);
        if mode == WatchMode::Init {
            let current = self.current(property);
            self.pending.push_back(current);
        }
    }

    /// Stop notifying for `property`. Already queued changes stay queued.
    pub fn unwatch(&mut self, property: SnappingProperty) {
        self.watched.remove(&property);
    }

    #[must_use]
    pub fn is_watched(&self, property: SnappingProperty) -> bool {
        self.watched.contains(&property)
    }

    /// Pop the oldest undelivered change notification.
    pub fn next_change(&mut self) -> Option<OptionChange> {
        self.pending.pop_front()
    }

    #[must_use]
    pub fn has_pending_changes(&self) -> bool {
        !self.pending.is_empty()
    }

    fn current(&self, property: SnappingProperty) -> OptionChange {
        match property {
            SnappingProperty::Enabled => OptionChange::Enabled(self.enabled),
            SnappingProperty::SelfEnabled => OptionChange::SelfEnabled(self.self_enabled),
            SnappingProperty::FeatureEnabled => OptionChange::FeatureEnabled(self.feature_enabled),
            SnappingProperty::FeatureSources => OptionChange::FeatureSources(self.feature_source_ids()),
        }
    }

    fn notify(&mut self, change: OptionChange) {
        if self.watched.contains(&change.property()) {
            self.pending.push_back(change);
        }
    }
}
