//! Shared constants: panel labels, user-facing messages and timeout defaults.

/// Seconds to wait for the scene view before giving up on mounting the panel.
pub const DEFAULT_VIEW_TIMEOUT_SECS: u64 = 30;

/// Seconds to wait for every scene layer to finish loading.
pub const DEFAULT_LOAD_TIMEOUT_SECS: u64 = 60;

/// Label of the global snapping checkbox.
pub const ENABLED_LABEL: &str = "SnappingOptions.enabled";

/// Label of the self snapping checkbox.
pub const SELF_ENABLED_LABEL: &str = "SnappingOptions.selfEnabled";

/// Label of the feature snapping checkbox.
pub const FEATURE_ENABLED_LABEL: &str = "SnappingOptions.featureEnabled";

/// Heading shown above the per-layer rows.
pub const FEATURE_SOURCES_HEADING: &str = "SnappingOptions.featureSources";

/// Text of the info element shown while the panel is collapsed.
pub const INFO_TEXT: &str = "Snapping configuration \u{2192}";

/// Panel message shown when the layers never finish loading.
pub const LOAD_TIMEOUT_MESSAGE: &str = "Layers did not finish loading; feature snapping sources are unavailable.";

/// Prefix of the panel message shown when the provider fails to load layers.
pub const LOAD_FAILED_MESSAGE: &str = "Layers failed to load";
