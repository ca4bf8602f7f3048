//! Dual listbox: a grouped two-panel selection widget.
//!
//! The widget renders two panels, "available" on the left and "selected" on
//! the right. Items are bucketed into named groups on each side and move
//! between the panels when checked and included or excluded. It provides:
//! - Grouped item storage with duplicate suppression and move semantics
//! - Checkbox selection per item, per group and per side
//! - Case-insensitive search filtering on each panel
//! - Live `Select All (checked/total)` counters and button enablement
//! - Form submission through hidden fields or a submit handler
//! - Class-name theming through built-in presets and partial overrides

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Widget Facade (widget.rs)                          │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Interaction controller
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - Selection summary and search                     │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Store Layer   │   │ Host Layer    │
//! │ (ui/)         │   │ (store/)      │   │ (host/)       │
//! │ - Markup tree │   │ - Group maps  │   │ - Mount target│
//! │ - Theming     │   │ - Moves       │   │ - Form fields │
//! │ - Components  │   │ - Dedup       │   │ - Submission  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Item records and field mapping                   │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Widget state, events, actions, search and summary
//! - [`domain`]: Core domain types (items, sides, errors)
//! - [`store`]: Two-sided grouped item store
//! - [`ui`]: Markup rendering with theme support
//! - [`host`]: Host page, form and submission types
//! - [`observability`]: OpenTelemetry tracing
//!
//! # Example
//!
//! ```rust
//! use dual_listbox::{init_dual_list_box, Event, HostForm, HostPage, MountTarget, Options, Side};
//!
//! let mut page = HostPage::new().with_target(MountTarget::new("picker").in_form(HostForm::new()));
//! let options = Options::from_json(r#"{
//!     "dataArray": [
//!         {"item": "Apple", "value": 1, "group": "Fruits"},
//!         {"item": "Orange", "value": 2, "group": "Fruits"}
//!     ],
//!     "inputName": "fruits"
//! }"#)?;
//!
//! let mut widget = init_dual_list_box(&mut page, "#picker", options)?;
//! widget.handle_event(&Event::GroupToggled {
//!     side: Side::Available,
//!     group: "Fruits".into(),
//!     checked: true,
//! })?;
//! widget.handle_event(&Event::Include)?;
//! widget.submit();
//!
//! let form = widget.mount().form.as_ref().unwrap();
//! assert_eq!(form.values_of("fruits[]"), vec!["1", "2"]);
//! # Ok::<(), dual_listbox::DualListBoxError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Explicit Theme Provider
//!
//! There is no process-wide default theme. A [`ThemeProvider`] is passed to
//! each constructor and the widget copies its resolved theme, so changing the
//! provider later only affects widgets built afterwards.
//!
//! ## Model-Derived Summary
//!
//! Checkbox state lives in the widget state, not in the rendered markup.
//! Counters, select-all states and button enablement are derived from it on
//! every render.
//!
//! ## Full Re-Render
//!
//! Every state change regenerates the whole markup tree. A move also resets
//! all checkboxes and both search boxes.

pub mod app;
pub mod domain;
pub mod host;
pub mod observability;
pub mod store;
pub mod ui;
mod widget;

pub use app::{handle_event, Action, Event, SelectionSummary, Settings, WidgetState};
pub use domain::{DualListBoxError, FieldNames, Item, Result, Side};
pub use host::{FieldKind, FormField, HostForm, HostPage, MountTarget, Submission, SubmitHandler, SubmitOutcome};
pub use store::GroupMap;
pub use ui::{Element, PartialTheme, Theme, ThemeProvider};
pub use widget::{init_dual_list_box, DualListBox, EventOutcome};

use serde::Deserialize;
use std::collections::BTreeMap;

/// Widget construction options.
///
/// Deserializes from JSON with camelCase keys; every key is optional.
///
/// # Example
///
/// ```rust
/// use dual_listbox::Options;
///
/// let options = Options::from_json(r#"{"inputName": "fruits", "hideEmptyGroups": true}"#)?;
/// assert_eq!(options.input_name, "fruits");
/// assert!(options.submit_form);
/// # Ok::<(), dual_listbox::DualListBoxError>(())
/// ```
#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Field holding an item's label. Default: `"item"`
    pub item_name: String,

    /// Field holding an item's group. Default: `"group"`
    pub group_name: String,

    /// Field holding an item's identity. Default: `"value"`
    pub value_name: String,

    /// Base name of the hidden fields written on submit. Default: `"selectedItems"`
    pub input_name: String,

    /// Available panel title. Default: `"Available Items"`
    pub tab_name_text: String,

    /// Selected panel title. Default: `"Selected Items"`
    pub right_tab_name_text: String,

    /// Search box placeholder. Default: `"Search..."`
    pub search_placeholder_text: String,

    /// Include button label. Default: `"Include >>"`
    pub include_button_text: String,

    /// Exclude button label. Default: `"<< Exclude"`
    pub exclude_button_text: String,

    /// The full catalog.
    pub data_array: Vec<Item>,

    /// Items pre-placed on the selected side.
    pub selected_items: Vec<Item>,

    /// Drop available-side groups once they become empty. Default: `false`
    pub hide_empty_groups: bool,

    /// Write hidden fields on submit when no handler is set. Default: `true`
    pub submit_form: bool,

    /// Move original records instead of re-synthesizing them. Default: `false`
    pub preserve_item_fields: bool,

    /// Per-instance theme override.
    pub theme: Option<PartialTheme>,

    /// Prefix for generated element ids. Default: random
    pub instance_id: Option<String>,

    /// Handler replacing native submission. Set with [`Options::on_submit`].
    #[serde(skip)]
    pub on_submit: Option<SubmitHandler>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            item_name: "item".to_string(),
            group_name: "group".to_string(),
            value_name: "value".to_string(),
            input_name: "selectedItems".to_string(),
            tab_name_text: "Available Items".to_string(),
            right_tab_name_text: "Selected Items".to_string(),
            search_placeholder_text: "Search...".to_string(),
            include_button_text: "Include >>".to_string(),
            exclude_button_text: "<< Exclude".to_string(),
            data_array: Vec::new(),
            selected_items: Vec::new(),
            hide_empty_groups: false,
            submit_form: true,
            preserve_item_fields: false,
            theme: None,
            instance_id: None,
            on_submit: None,
        }
    }
}

impl Options {
    /// Parses options from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`DualListBoxError::Config`] if the JSON is malformed or a key
    /// has the wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| DualListBoxError::Config(format!("Invalid options: {e}")))
    }

    /// Parses options from string attributes, such as `data-*` attributes.
    ///
    /// Keys are the camelCase option names.
    ///
    /// # Parsing Rules
    ///
    /// - Text options: taken as is
    /// - `hideEmptyGroups`, `submitForm`, `preserveItemFields`: `"true"` / `"false"`
    /// - `dataArray`, `selectedItems`: JSON arrays
    /// - `theme`: a built-in preset name, or a JSON object of class slots
    ///
    /// Unparseable values keep their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use dual_listbox::Options;
    ///
    /// let mut attrs = BTreeMap::new();
    /// attrs.insert("inputName".to_string(), "fruits".to_string());
    /// attrs.insert("submitForm".to_string(), "false".to_string());
    ///
    /// let options = Options::from_attributes(&attrs);
    /// assert_eq!(options.input_name, "fruits");
    /// assert!(!options.submit_form);
    /// ```
    #[must_use]
    pub fn from_attributes(attrs: &BTreeMap<String, String>) -> Self {
        let mut options = Self::default();

        for (key, raw) in attrs {
            let value = raw.trim();
            match key.as_str() {
                "itemName" => options.item_name = value.to_string(),
                "groupName" => options.group_name = value.to_string(),
                "valueName" => options.value_name = value.to_string(),
                "inputName" => options.input_name = value.to_string(),
                "tabNameText" => options.tab_name_text = value.to_string(),
                "rightTabNameText" => options.right_tab_name_text = value.to_string(),
                "searchPlaceholderText" => options.search_placeholder_text = value.to_string(),
                "includeButtonText" => options.include_button_text = value.to_string(),
                "excludeButtonText" => options.exclude_button_text = value.to_string(),
                "instanceId" => options.instance_id = Some(value.to_string()),
                "hideEmptyGroups" => options.hide_empty_groups = parse_flag(key, value, false),
                "submitForm" => options.submit_form = parse_flag(key, value, true),
                "preserveItemFields" => options.preserve_item_fields = parse_flag(key, value, false),
                "dataArray" => options.data_array = parse_items(key, value),
                "selectedItems" => options.selected_items = parse_items(key, value),
                "theme" => options.theme = parse_theme(value),
                _ => tracing::debug!(attribute = %key, "unknown option attribute ignored"),
            }
        }

        options
    }

    /// Sets the submit handler, builder style.
    #[must_use]
    pub fn on_submit(mut self, handler: impl FnMut(&Submission) + 'static) -> Self {
        self.on_submit = Some(SubmitHandler::new(handler));
        self
    }
}

fn parse_flag(key: &str, value: &str, default: bool) -> bool {
    match value {
        "true" => true,
        "false" => false,
        _ => {
            tracing::debug!(attribute = %key, value = %value, "invalid boolean, using default");
            default
        }
    }
}

fn parse_items(key: &str, value: &str) -> Vec<Item> {
    serde_json::from_str(value).unwrap_or_else(|e| {
        tracing::debug!(attribute = %key, error = %e, "invalid item array, using empty list");
        Vec::new()
    })
}

fn parse_theme(value: &str) -> Option<PartialTheme> {
    if let Some(theme) = Theme::from_name(value) {
        return Some(PartialTheme::from(&theme));
    }
    match serde_json::from_str::<PartialTheme>(value) {
        Ok(theme) => Some(theme),
        Err(e) => {
            tracing::debug!(theme = %value, error = %e, "unknown theme attribute, using default");
            None
        }
    }
}
