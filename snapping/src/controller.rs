//! Snapping configuration controller.
//!
//! DESIGN
//! ======
//! The controller keeps three things consistent: the editor's
//! [`SnappingOptions`], the three global checkboxes, and one checkbox per
//! snapping-eligible layer. It owns the options on behalf of the editor, its
//! own view of every checkbox, and the feature source set; the concrete panel
//! is reached only through [`PanelUi`].
//!
//! Direct operations (`set_global_enabled`, `toggle_layer_source`, ...) write
//! the options and update the checkboxes they own. Two reactive rules run off
//! option change notifications instead, because the editor can flip those
//! options on its own (the snapping modifier key toggles `enabled`):
//!
//! - `enabled` changed: resync the global checkbox and reassign the sources.
//! - `featureEnabled` changed: layer checkboxes become actionable iff it is on.
//!
//! Notifications are drained by [`SnappingController::process_changes`] after
//! each write completes. A handler that writes the options again only queues
//! another notification, so no handler ever runs inside another.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::{InitialSources, SnappingConfig};
use crate::consts::{LOAD_FAILED_MESSAGE, LOAD_TIMEOUT_MESSAGE};
use crate::error::SnappingError;
use crate::layer::{LayerCandidate, LayerId, LayerInfo, discover_candidates};
use crate::options::{OptionChange, SnappingOptions, SnappingProperty, WatchMode};
use crate::provider::SceneProvider;
use crate::sources::{FeatureSource, FeatureSourceSet};
use crate::ui::{CheckboxId, CheckboxState, PanelUi, UiEvent};

/// Outcome of [`SnappingController::toggle_layer_source`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceToggle {
    Added,
    /// The layer was already a source; nothing was inserted.
    AlreadyPresent,
    Removed,
    /// The layer was not a source; nothing was removed.
    NotFound,
}

/// Progress of the one-time layer discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoadState {
    /// Waiting for the scene's layers.
    Pending,
    /// Layer rows were built for `rows` candidates.
    Loaded { rows: usize },
    /// Layers never arrived; the panel works without layer rows.
    Failed { reason: String },
}

/// A feature source layer row: the candidate and its checkbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerRow {
    pub candidate: LayerCandidate,
    pub checkbox: CheckboxState,
}

pub struct SnappingController<U: PanelUi> {
    options: SnappingOptions,
    ui: U,
    config: SnappingConfig,
    enabled_box: CheckboxState,
    self_box: CheckboxState,
    feature_box: CheckboxState,
    layers: Vec<LayerRow>,
    sources: FeatureSourceSet,
    expanded: bool,
    load_state: LoadState,
}

impl<U: PanelUi> SnappingController<U> {
    /// Attach a collapsed panel to the editor's snapping options.
    ///
    /// Registers the `enabled` watch in init mode, so the global checkbox is
    /// synced with the current options before this returns.
    #[must_use]
    pub fn new(mut options: SnappingOptions, ui: U, config: SnappingConfig) -> Self {
        options.watch(SnappingProperty::Enabled, WatchMode::Init);
        options.watch(SnappingProperty::FeatureEnabled, WatchMode::Change);

        let mut controller = Self {
            options,
            ui,
            config,
            enabled_box: CheckboxState::ENABLED,
            self_box: CheckboxState::DISABLED,
            feature_box: CheckboxState::DISABLED,
            layers: Vec::new(),
            sources: FeatureSourceSet::new(),
            expanded: false,
            load_state: LoadState::Pending,
        };
        controller.push_fixed_checkboxes();
        controller.ui.set_info_visible(true);
        controller.process_changes();
        controller
    }

    // --- Layer discovery ---

    /// Await the provider's full layer list and build the layer rows.
    ///
    /// On timeout or provider failure a message is shown in the panel, the
    /// load state records the reason, and the panel keeps working without
    /// layer rows.
    ///
    /// # Errors
    ///
    /// Returns [`SnappingError::LoadTimeout`] or [`SnappingError::Provider`]
    /// when the layers do not arrive, and [`SnappingError::AlreadyInitialized`]
    /// if the rows were already built.
    pub async fn load_layers<P>(&mut self, provider: &P) -> Result<usize, SnappingError>
    where
        P: SceneProvider + ?Sized,
    {
        if matches!(self.load_state, LoadState::Loaded { .. }) {
            return Err(SnappingError::AlreadyInitialized);
        }
        let waited = self.config.load_timeout;
        let layers = match tokio::time::timeout(waited, provider.load_all()).await {
            Ok(Ok(layers)) => layers,
            Ok(Err(e)) => {
                warn!(error = %e, "scene layers failed to load");
                self.ui.show_message(&format!("{LOAD_FAILED_MESSAGE}: {e}"));
                self.load_state = LoadState::Failed { reason: e.to_string() };
                return Err(e.into());
            }
            Err(_) => {
                let err = SnappingError::LoadTimeout { waited };
                warn!(waited_secs = waited.as_secs(), "scene layers did not finish loading");
                self.ui.show_message(LOAD_TIMEOUT_MESSAGE);
                self.load_state = LoadState::Failed { reason: err.to_string() };
                return Err(err);
            }
        };
        self.initialize_layers(&layers)
    }

    /// Build one disabled, unchecked row per snapping candidate in `layers`.
    ///
    /// With [`InitialSources::All`] every candidate also becomes a feature
    /// source right away. The resulting collection is assigned onto the options.
    ///
    /// # Errors
    ///
    /// Returns [`SnappingError::AlreadyInitialized`] if the rows were already built.
    pub fn initialize_layers(&mut self, layers: &[LayerInfo]) -> Result<usize, SnappingError> {
        if matches!(self.load_state, LoadState::Loaded { .. }) {
            return Err(SnappingError::AlreadyInitialized);
        }
        for candidate in discover_candidates(layers) {
            let checkbox = CheckboxState::DISABLED;
            self.ui.add_layer_row(&candidate.id, &candidate.label(), checkbox);
            if self.config.initial_sources == InitialSources::All {
                self.sources.insert(FeatureSource::new(candidate.clone()));
            }
            self.layers.push(LayerRow { candidate, checkbox });
        }
        let rows = self.layers.len();
        info!(rows, scanned = layers.len(), "feature snapping layers discovered");
        self.load_state = LoadState::Loaded { rows };
        self.publish_sources();
        self.process_changes();
        Ok(rows)
    }

    // --- Operations ---

    /// Turn snapping on or off from the global checkbox.
    ///
    /// Self, feature and every layer checkbox follow: checked and actionable
    /// when on, unchecked and disabled when off. Feature sources are left as is.
    pub fn set_global_enabled(&mut self, checked: bool) {
        self.options.set_enabled(checked);
        self.enabled_box.checked = checked;
        self.self_box = CheckboxState::mirroring(checked);
        self.feature_box = CheckboxState::mirroring(checked);
        for row in &mut self.layers {
            row.checkbox = CheckboxState::mirroring(checked);
        }
        self.push_fixed_checkboxes();
        self.push_layer_checkboxes();
        self.process_changes();
    }

    pub fn set_self_enabled(&mut self, checked: bool) {
        self.options.set_self_enabled(checked);
        self.self_box.checked = checked;
        self.ui.set_checkbox(&CheckboxId::SelfSnapping, self.self_box);
        self.process_changes();
    }

    /// Layer checkboxes follow through the `featureEnabled` watch.
    pub fn set_feature_enabled(&mut self, checked: bool) {
        self.options.set_feature_enabled(checked);
        self.feature_box.checked = checked;
        self.ui.set_checkbox(&CheckboxId::FeatureSnapping, self.feature_box);
        self.process_changes();
    }

    /// Add or remove a layer as a feature snapping source.
    ///
    /// Adding a layer that is already a source and removing one that is not
    /// are both no-ops; the latter is logged. Either way the full source
    /// collection is reassigned onto the options.
    ///
    /// # Errors
    ///
    /// Returns [`SnappingError::UnknownLayer`] if no row exists for `layer_id`.
    pub fn toggle_layer_source(&mut self, layer_id: &LayerId, checked: bool) -> Result<SourceToggle, SnappingError> {
        let row = self
            .layers
            .iter_mut()
            .find(|row| &row.candidate.id == layer_id)
            .ok_or_else(|| SnappingError::UnknownLayer(layer_id.clone()))?;
        row.checkbox.checked = checked;
        let state = row.checkbox;
        let candidate = row.candidate.clone();
        self.ui.set_checkbox(&CheckboxId::Layer(layer_id.clone()), state);

        let outcome = if checked {
            if self.sources.insert(FeatureSource::new(candidate)) {
                SourceToggle::Added
            } else {
                debug!(%layer_id, "layer is already a feature source");
                SourceToggle::AlreadyPresent
            }
        } else if self.sources.remove(layer_id).is_some() {
            SourceToggle::Removed
        } else {
            warn!(%layer_id, "feature source not found; nothing removed");
            SourceToggle::NotFound
        };

        self.publish_sources();
        self.process_changes();
        Ok(outcome)
    }

    /// Open or close the panel. The info element is shown only while closed.
    pub fn set_panel_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
        self.ui.set_info_visible(!expanded);
    }

    /// Dispatch a panel input event.
    ///
    /// Changes reported for a disabled checkbox are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SnappingError::UnknownLayer`] for a layer checkbox that does not exist.
    pub fn handle_event(&mut self, event: UiEvent) -> Result<(), SnappingError> {
        match event {
            UiEvent::CheckboxChanged { id, checked } => {
                if self.checkbox(&id).is_some_and(|state| state.disabled) {
                    debug!(?id, "ignoring change on a disabled checkbox");
                    return Ok(());
                }
                match id {
                    CheckboxId::Enabled => self.set_global_enabled(checked),
                    CheckboxId::SelfSnapping => self.set_self_enabled(checked),
                    CheckboxId::FeatureSnapping => self.set_feature_enabled(checked),
                    CheckboxId::Layer(layer_id) => {
                        self.toggle_layer_source(&layer_id, checked)?;
                    }
                }
                Ok(())
            }
            UiEvent::PanelToggled { expanded } => {
                self.set_panel_expanded(expanded);
                Ok(())
            }
        }
    }

    /// Apply a write made by the editor itself, then run the reactive rules.
    pub fn update_options<F>(&mut self, update: F)
    where
        F: FnOnce(&mut SnappingOptions),
    {
        update(&mut self.options);
        self.process_changes();
    }

    // --- Reactive rules ---

    /// Deliver queued option change notifications. Returns how many were handled.
    pub fn process_changes(&mut self) -> usize {
        let mut handled = 0;
        while let Some(change) = self.options.next_change() {
            handled += 1;
            match change {
                OptionChange::Enabled(value) => self.on_enabled_changed(value),
                OptionChange::FeatureEnabled(value) => self.on_feature_enabled_changed(value),
                other => debug!(property = other.property().as_str(), "unhandled snapping option change"),
            }
        }
        handled
    }

    fn on_enabled_changed(&mut self, value: bool) {
        debug!(value, "snapping enabled changed");
        self.enabled_box.checked = value;
        self.ui.set_checkbox(&CheckboxId::Enabled, self.enabled_box);
        self.publish_sources();
    }

    fn on_feature_enabled_changed(&mut self, value: bool) {
        debug!(value, "feature snapping changed");
        for row in &mut self.layers {
            row.checkbox.disabled = !value;
        }
        self.push_layer_checkboxes();
    }

    // --- Helpers ---

    fn publish_sources(&mut self) {
        self.options.set_feature_sources(self.sources.to_vec());
    }

    fn push_fixed_checkboxes(&mut self) {
        self.ui.set_checkbox(&CheckboxId::Enabled, self.enabled_box);
        self.ui.set_checkbox(&CheckboxId::SelfSnapping, self.self_box);
        self.ui.set_checkbox(&CheckboxId::FeatureSnapping, self.feature_box);
    }

    fn push_layer_checkboxes(&mut self) {
        for row in &self.layers {
            self.ui.set_checkbox(&CheckboxId::Layer(row.candidate.id.clone()), row.checkbox);
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn options(&self) -> &SnappingOptions {
        &self.options
    }

    #[must_use]
    pub fn ui(&self) -> &U {
        &self.ui
    }

    #[must_use]
    pub fn sources(&self) -> &FeatureSourceSet {
        &self.sources
    }

    #[must_use]
    pub fn layer_rows(&self) -> &[LayerRow] {
        &self.layers
    }

    #[must_use]
    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// The controller's view of a checkbox.
    #[must_use]
    pub fn checkbox(&self, id: &CheckboxId) -> Option<CheckboxState> {
        match id {
            CheckboxId::Enabled => Some(self.enabled_box),
            CheckboxId::SelfSnapping => Some(self.self_box),
            CheckboxId::FeatureSnapping => Some(self.feature_box),
            CheckboxId::Layer(layer_id) => {
                self.layers.iter().find(|row| &row.candidate.id == layer_id).map(|row| row.checkbox)
            }
        }
    }
}

/// Mount the panel once the view is ready, then discover the layers.
///
/// A layer load timeout or failure does not fail the mount: the panel is
/// returned with the message shown and [`LoadState::Failed`] recorded.
///
/// # Errors
///
/// Returns [`SnappingError::ViewTimeout`] or [`SnappingError::Provider`] if
/// the view never becomes ready.
pub async fn mount<P, U>(
    provider: &P,
    options: SnappingOptions,
    ui: U,
    config: SnappingConfig,
) -> Result<SnappingController<U>, SnappingError>
where
    P: SceneProvider + ?Sized,
    U: PanelUi,
{
    let waited = config.view_timeout;
    match tokio::time::timeout(waited, provider.when_view_ready()).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => return Err(e.into()),
        Err(_) => return Err(SnappingError::ViewTimeout { waited }),
    }

    let mut controller = SnappingController::new(options, ui, config);
    if let Err(e) = controller.load_layers(provider).await {
        warn!(error = %e, "snapping panel mounted without layer rows");
    }
    Ok(controller)
}
