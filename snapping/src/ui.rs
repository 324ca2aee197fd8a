//! UI model: checkbox ids and states, panel input events, and the adapter trait.
//!
//! The controller never touches a concrete widget toolkit. It keeps its own
//! view of every checkbox and pushes state to a [`PanelUi`] implementation;
//! user input comes back as [`UiEvent`]s. Swapping the adapter is all it takes
//! to drive the same controller from a browser page, a native panel or a test.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use serde::Serialize;

use crate::consts::{ENABLED_LABEL, FEATURE_ENABLED_LABEL, SELF_ENABLED_LABEL};
use crate::layer::LayerId;

/// Identifies one checkbox on the panel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckboxId {
    /// Global snapping (`enabled`).
    Enabled,
    /// Self snapping (`selfEnabled`).
    SelfSnapping,
    /// Feature snapping (`featureEnabled`).
    FeatureSnapping,
    /// Feature source toggle for one layer.
    Layer(LayerId),
}

impl CheckboxId {
    /// Label of a fixed checkbox; `None` for layer rows, whose label comes from the layer.
    #[must_use]
    pub fn fixed_label(&self) -> Option<&'static str> {
        match self {
            Self::Enabled => Some(ENABLED_LABEL),
            Self::SelfSnapping => Some(SELF_ENABLED_LABEL),
            Self::FeatureSnapping => Some(FEATURE_ENABLED_LABEL),
            Self::Layer(_) => None,
        }
    }
}

/// Visible state of a checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CheckboxState {
    pub checked: bool,
    pub disabled: bool,
}

impl CheckboxState {
    /// Unchecked and actionable.
    pub const ENABLED: Self = Self { checked: false, disabled: false };
    /// Unchecked and greyed out.
    pub const DISABLED: Self = Self { checked: false, disabled: true };

    #[must_use]
    pub fn new(checked: bool, disabled: bool) -> Self {
        Self { checked, disabled }
    }

    /// State that mirrors a parent toggle: checked and actionable iff `on`.
    #[must_use]
    pub fn mirroring(on: bool) -> Self {
        Self { checked: on, disabled: !on }
    }
}

/// User input from the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A checkbox was toggled to `checked`.
    CheckboxChanged { id: CheckboxId, checked: bool },
    /// The collapsible panel was opened or closed.
    PanelToggled { expanded: bool },
}

/// Output side of the panel. Implemented by whatever renders the checkboxes.
pub trait PanelUi {
    /// Append a row for a feature source layer.
    fn add_layer_row(&mut self, id: &LayerId, label: &str, state: CheckboxState);

    /// Update an existing checkbox.
    fn set_checkbox(&mut self, id: &CheckboxId, state: CheckboxState);

    /// Show or hide the info element next to the collapsed panel.
    fn set_info_visible(&mut self, visible: bool);

    /// Show a message inside the panel.
    fn show_message(&mut self, message: &str);
}
