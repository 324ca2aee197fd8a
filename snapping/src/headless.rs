//! Headless panel: a [`PanelUi`] that records what a real panel would show.
//!
//! Rows are kept in display order, the three fixed checkboxes first, then one
//! row per feature source layer in the order the controller added them. The
//! initial fixed states match the panel markup: global snapping actionable,
//! self and feature snapping greyed out.

#[cfg(test)]
#[path = "headless_test.rs"]
mod headless_test;

use serde::Serialize;

use crate::layer::LayerId;
use crate::ui::{CheckboxId, CheckboxState, PanelUi};

/// One checkbox row as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckboxRow {
    pub id: CheckboxId,
    pub label: String,
    pub state: CheckboxState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadlessUi {
    rows: Vec<CheckboxRow>,
    info_visible: bool,
    messages: Vec<String>,
}

impl Default for HeadlessUi {
    fn default() -> Self {
        let fixed = [
            (CheckboxId::Enabled, CheckboxState::ENABLED),
            (CheckboxId::SelfSnapping, CheckboxState::DISABLED),
            (CheckboxId::FeatureSnapping, CheckboxState::DISABLED),
        ];
        let rows = fixed
            .into_iter()
            .map(|(id, state)| {
                let label = id.fixed_label().unwrap_or_default().to_owned();
                CheckboxRow { id, label, state }
            })
            .collect();
        Self { rows, info_visible: true, messages: Vec::new() }
    }
}

impl HeadlessUi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rows(&self) -> &[CheckboxRow] {
        &self.rows
    }

    /// Rows for feature source layers only.
    pub fn layer_rows(&self) -> impl Iterator<Item = &CheckboxRow> {
        self.rows.iter().filter(|row| matches!(row.id, CheckboxId::Layer(_)))
    }

    #[must_use]
    pub fn checkbox(&self, id: &CheckboxId) -> Option<CheckboxState> {
        self.rows.iter().find(|row| &row.id == id).map(|row| row.state)
    }

    #[must_use]
    pub fn info_visible(&self) -> bool {
        self.info_visible
    }

    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl PanelUi for HeadlessUi {
    fn add_layer_row(&mut self, id: &LayerId, label: &str, state: CheckboxState) {
        let id = CheckboxId::Layer(id.clone());
        if let Some(row) = self.rows.iter_mut().find(|row| row.id == id) {
            row.label = label.to_owned();
            row.state = state;
            return;
        }
        self.rows.push(CheckboxRow { id, label: label.to_owned(), state });
    }

    fn set_checkbox(&mut self, id: &CheckboxId, state: CheckboxState) {
        if let Some(row) = self.rows.iter_mut().find(|row| &row.id == id) {
            row.state = state;
        } else {
            tracing::debug!(?id, "set_checkbox on a row that was never added");
        }
    }

    fn set_info_visible(&mut self, visible: bool) {
        self.info_visible = visible;
    }

    fn show_message(&mut self, message: &str) {
        self.messages.push(message.to_owned());
    }
}
