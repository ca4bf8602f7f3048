//! Theme management: style slots, built-in presets and precedence resolution.
//!
//! A theme is a named set of CSS class strings substituted into the generated
//! markup. Built-in presets ship as TOML files; custom presets can be loaded
//! from disk.
//!
//! # Built-in Themes
//!
//! - `default`: Bootstrap-flavoured classes
//! - `bootstrap`: identical to `default`
//! - `tailwind`: Tailwind utility classes
//!
//! # Precedence
//!
//! The effective theme of an instance is resolved once at construction:
//!
//! ```text
//! instance override  >  provider default  >  built-in default
//! ```
//!
//! The provider default lives in an explicit [`ThemeProvider`] value handed to
//! each constructor, so instances never share hidden state.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [classes]
//! container = "dual-listbox"
//! search_input = "form-control dual-listbox-search"
//! # ...one entry per slot
//! ```

use crate::domain::{DualListBoxError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A complete, named theme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Class strings for every style slot.
    pub classes: ThemeClasses,
}

/// Class strings for every markup slot.
///
/// Keys accept both `snake_case` (TOML presets) and `camelCase` (JSON options).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeClasses {
    /// Outermost wrapper.
    pub container: String,
    /// Row holding the three columns.
    pub row: String,
    /// Available-side column.
    #[serde(alias = "colLeft")]
    pub col_left: String,
    /// Button column.
    #[serde(alias = "colCenter")]
    pub col_center: String,
    /// Selected-side column.
    #[serde(alias = "colRight")]
    pub col_right: String,
    /// Panel card.
    pub card: String,
    /// Panel title bar.
    #[serde(alias = "cardHeader")]
    pub card_header: String,
    /// Panel body holding search box and groups.
    #[serde(alias = "cardBody")]
    pub card_body: String,
    /// Panel footer holding the side select-all.
    #[serde(alias = "cardFooter")]
    pub card_footer: String,
    /// Search text box. Should keep the `dual-listbox-search` marker class.
    #[serde(alias = "searchInput")]
    pub search_input: String,
    /// Item list of a group.
    #[serde(alias = "listGroup")]
    pub list_group: String,
    /// One item row.
    #[serde(alias = "listItem")]
    pub list_item: String,
    /// Checkbox + label wrapper.
    #[serde(alias = "formCheck")]
    pub form_check: String,
    /// Checkbox input.
    #[serde(alias = "formCheckInput")]
    pub form_check_input: String,
    /// Checkbox label.
    #[serde(alias = "formCheckLabel")]
    pub form_check_label: String,
    /// Both action buttons.
    pub btn: String,
    /// Extra classes for the include button.
    #[serde(alias = "btnInclude")]
    pub btn_include: String,
    /// Extra classes for the exclude button.
    #[serde(alias = "btnExclude")]
    pub btn_exclude: String,
}

/// A sparse set of slot overrides.
///
/// Unset slots inherit from the theme the override is merged onto.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PartialTheme {
    pub container: Option<String>,
    pub row: Option<String>,
    #[serde(alias = "colLeft")]
    pub col_left: Option<String>,
    #[serde(alias = "colCenter")]
    pub col_center: Option<String>,
    #[serde(alias = "colRight")]
    pub col_right: Option<String>,
    pub card: Option<String>,
    #[serde(alias = "cardHeader")]
    pub card_header: Option<String>,
    #[serde(alias = "cardBody")]
    pub card_body: Option<String>,
    #[serde(alias = "cardFooter")]
    pub card_footer: Option<String>,
    #[serde(alias = "searchInput")]
    pub search_input: Option<String>,
    #[serde(alias = "listGroup")]
    pub list_group: Option<String>,
    #[serde(alias = "listItem")]
    pub list_item: Option<String>,
    #[serde(alias = "formCheck")]
    pub form_check: Option<String>,
    #[serde(alias = "formCheckInput")]
    pub form_check_input: Option<String>,
    #[serde(alias = "formCheckLabel")]
    pub form_check_label: Option<String>,
    pub btn: Option<String>,
    #[serde(alias = "btnInclude")]
    pub btn_include: Option<String>,
    #[serde(alias = "btnExclude")]
    pub btn_exclude: Option<String>,
}

fn pick(base: &str, over: Option<&String>) -> String {
    over.map_or_else(|| base.to_string(), Clone::clone)
}

impl From<&Theme> for PartialTheme {
    fn from(theme: &Theme) -> Self {
        let c = &theme.classes;
        Self {
            container: Some(c.container.clone()),
            row: Some(c.row.clone()),
            col_left: Some(c.col_left.clone()),
            col_center: Some(c.col_center.clone()),
            col_right: Some(c.col_right.clone()),
            card: Some(c.card.clone()),
            card_header: Some(c.card_header.clone()),
            card_body: Some(c.card_body.clone()),
            card_footer: Some(c.card_footer.clone()),
            search_input: Some(c.search_input.clone()),
            list_group: Some(c.list_group.clone()),
            list_item: Some(c.list_item.clone()),
            form_check: Some(c.form_check.clone()),
            form_check_input: Some(c.form_check_input.clone()),
            form_check_label: Some(c.form_check_label.clone()),
            btn: Some(c.btn.clone()),
            btn_include: Some(c.btn_include.clone()),
            btn_exclude: Some(c.btn_exclude.clone()),
        }
    }
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `default`, `bootstrap`, `tailwind`. Returns `None` for
    /// anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "default" => include_str!("../../themes/default.toml"),
            "bootstrap" => include_str!("../../themes/bootstrap.toml"),
            "tailwind" => include_str!("../../themes/tailwind.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`DualListBoxError::Io`] if the file cannot be read and
    /// [`DualListBoxError::Theme`] if its content is not a complete theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| DualListBoxError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Returns a copy of this theme with the override's set slots applied.
    #[must_use]
    pub fn merged(&self, over: &PartialTheme) -> Self {
        let c = &self.classes;
        Self {
            name: self.name.clone(),
            classes: ThemeClasses {
                container: pick(&c.container, over.container.as_ref()),
                row: pick(&c.row, over.row.as_ref()),
                col_left: pick(&c.col_left, over.col_left.as_ref()),
                col_center: pick(&c.col_center, over.col_center.as_ref()),
                col_right: pick(&c.col_right, over.col_right.as_ref()),
                card: pick(&c.card, over.card.as_ref()),
                card_header: pick(&c.card_header, over.card_header.as_ref()),
                card_body: pick(&c.card_body, over.card_body.as_ref()),
                card_footer: pick(&c.card_footer, over.card_footer.as_ref()),
                search_input: pick(&c.search_input, over.search_input.as_ref()),
                list_group: pick(&c.list_group, over.list_group.as_ref()),
                list_item: pick(&c.list_item, over.list_item.as_ref()),
                form_check: pick(&c.form_check, over.form_check.as_ref()),
                form_check_input: pick(&c.form_check_input, over.form_check_input.as_ref()),
                form_check_label: pick(&c.form_check_label, over.form_check_label.as_ref()),
                btn: pick(&c.btn, over.btn.as_ref()),
                btn_include: pick(&c.btn_include, over.btn_include.as_ref()),
                btn_exclude: pick(&c.btn_exclude, over.btn_exclude.as_ref()),
            },
        }
    }
}

impl Default for Theme {
    /// Returns the built-in `default` preset.
    ///
    /// # Panics
    ///
    /// Panics if the embedded preset fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("default").expect("Built-in default theme should always parse")
    }
}

/// Three-tier theme merge: `builtin`, then `provided`, then `instance`.
#[must_use]
pub fn resolve_theme(builtin: &Theme, provided: &PartialTheme, instance: Option<&PartialTheme>) -> Theme {
    let base = builtin.merged(provided);
    instance.map_or_else(|| base.clone(), |over| base.merged(over))
}

/// Source of the default theme for newly constructed widgets.
///
/// Replaces a process-wide mutable default: callers own a provider and pass it
/// to each constructor. Changing the provider never affects widgets that were
/// already built, because each widget copies its resolved theme.
///
/// # Example
///
/// ```rust
/// use dual_listbox::{PartialTheme, ThemeProvider};
///
/// let mut provider = ThemeProvider::default();
/// provider.use_theme(&PartialTheme {
///     btn: Some("button is-small".into()),
///     ..PartialTheme::default()
/// });
/// let theme = provider.resolve(None);
/// assert_eq!(theme.classes.btn, "button is-small");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeProvider {
    builtin: Theme,
    provided: PartialTheme,
}

impl ThemeProvider {
    /// Creates a provider whose default is a complete preset.
    #[must_use]
    pub fn with_theme(theme: &Theme) -> Self {
        Self {
            builtin: Theme::default(),
            provided: PartialTheme::from(theme),
        }
    }

    /// Sets the default for subsequently constructed widgets.
    ///
    /// The override is merged over the built-in default, not over the previous
    /// provider default.
    pub fn use_theme(&mut self, theme: &PartialTheme) {
        tracing::debug!("provider default theme replaced");
        self.provided = theme.clone();
    }

    /// Resolves the effective theme for one instance.
    #[must_use]
    pub fn resolve(&self, instance: Option<&PartialTheme>) -> Theme {
        resolve_theme(&self.builtin, &self.provided, instance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_presets_parse() {
        for name in ["default", "bootstrap", "tailwind"] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("catppuccin").is_none());
    }

    #[test]
    fn bootstrap_matches_default_classes() {
        let default = Theme::default();
        let bootstrap = Theme::from_name("bootstrap").unwrap();
        assert_eq!(default.classes, bootstrap.classes);
        assert!(default.classes.search_input.contains("dual-listbox-search"));
    }

    #[test]
    fn instance_override_beats_provider_beats_builtin() {
        let mut provider = ThemeProvider::default();
        provider.use_theme(&PartialTheme {
            btn: Some("provider-btn".into()),
            card: Some("provider-card".into()),
            ..PartialTheme::default()
        });
        let instance = PartialTheme {
            btn: Some("instance-btn".into()),
            ..PartialTheme::default()
        };

        let theme = provider.resolve(Some(&instance));
        assert_eq!(theme.classes.btn, "instance-btn");
        assert_eq!(theme.classes.card, "provider-card");
        assert_eq!(theme.classes.row, Theme::default().classes.row);
    }

    #[test]
    fn provider_default_replaces_rather_than_accumulates() {
        let mut provider = ThemeProvider::default();
        provider.use_theme(&PartialTheme {
            btn: Some("first".into()),
            ..PartialTheme::default()
        });
        provider.use_theme(&PartialTheme {
            card: Some("second".into()),
            ..PartialTheme::default()
        });

        let theme = provider.resolve(None);
        assert_eq!(theme.classes.btn, Theme::default().classes.btn);
        assert_eq!(theme.classes.card, "second");
    }

    #[test]
    fn provider_with_preset() {
        let tailwind = Theme::from_name("tailwind").unwrap();
        let provider = ThemeProvider::with_theme(&tailwind);
        assert_eq!(provider.resolve(None).classes, tailwind.classes);
    }

    #[test]
    fn partial_theme_accepts_camel_case_keys() {
        let partial: PartialTheme =
            serde_json::from_str(r#"{"colLeft": "w-1/2", "btn_include": "primary"}"#).unwrap();
        assert_eq!(partial.col_left.as_deref(), Some("w-1/2"));
        assert_eq!(partial.btn_include.as_deref(), Some("primary"));
        assert!(partial.row.is_none());
    }

    #[test]
    fn from_file_reads_custom_preset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(include_str!("../../themes/tailwind.toml").replace("\"tailwind\"", "\"mine\"").as_bytes())
            .unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "mine");
    }

    #[test]
    fn from_file_rejects_incomplete_preset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = \"broken\"\n[classes]\nrow = \"x\"\n").unwrap();

        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(matches!(err, DualListBoxError::Theme(_)));
    }
}
