//! Snapping configuration panel for a 3D scene editor.
//!
//! This crate owns the one piece of logic that sits between an editing
//! widget's snapping options and the checkbox panel that drives them: a
//! controller that keeps the provider configuration, the three global
//! checkboxes and one checkbox per snapping-eligible layer consistent. Scene
//! loading and the actual UI surface are reached through traits so the
//! controller runs headless in tests and from the command line.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | [`controller::SnappingController`] and [`controller::mount`] |
//! | [`options`] | Provider-side snapping options with per-property change watches |
//! | [`sources`] | Set-like collection of feature snapping sources |
//! | [`layer`] | Layer metadata, geometry kinds and candidate discovery |
//! | [`ui`] | Checkbox ids/states, UI events and the [`ui::PanelUi`] adapter trait |
//! | [`headless`] | Recording [`ui::PanelUi`] implementation |
//! | [`provider`] | [`provider::SceneProvider`] trait and the JSON-backed static scene |
//! | [`config`] | Environment-driven controller configuration |
//! | [`consts`] | Labels, messages and timeout defaults |
//! | [`error`] | Controller error type |

pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod headless;
pub mod layer;
pub mod options;
pub mod provider;
pub mod sources;
pub mod ui;

pub use config::{InitialSources, SnappingConfig};
pub use controller::{LoadState, SnappingController, SourceToggle, mount};
pub use error::SnappingError;
pub use headless::HeadlessUi;
pub use layer::{GeometryType, LayerCandidate, LayerId, LayerInfo, UnknownGeometryType};
pub use options::{OptionChange, SnappingOptions, SnappingProperty, WatchMode};
pub use provider::{SceneProvider, StaticScene};
pub use sources::{FeatureSource, FeatureSourceSet};
pub use ui::{CheckboxId, CheckboxState, PanelUi, UiEvent};
