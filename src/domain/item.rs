//! Item records, field mappings and panel sides.
//!
//! Items are open key/value records supplied by the host page. The widget only
//! interprets three of their fields, whose names are configurable through
//! [`FieldNames`]: the display label, the unique value and the group.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

/// Group name used when an item carries no (or an empty) group field.
pub const DEFAULT_GROUP: &str = "Ungrouped";

/// An open-ended item record.
///
/// Identity is the content of the value field compared as a string, so `1` and
/// `"1"` name the same item. All other fields are carried along untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(Map<String, Value>);

impl Item {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style field setter.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dual_listbox::Item;
    /// use serde_json::json;
    ///
    /// let apple = Item::new()
    ///     .with("item", json!("Apple"))
    ///     .with("value", json!(1))
    ///     .with("group", json!("Fruits"));
    /// assert_eq!(apple.identity("value"), "1");
    /// ```
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: Value) -> Self {
        self.0.insert(field.into(), value);
        self
    }

    /// Returns the raw value of a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Returns all fields of the record.
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// String identity of the record under the given value field.
    #[must_use]
    pub fn identity(&self, value_field: &str) -> String {
        self.get(value_field).map(value_to_string).unwrap_or_default()
    }

    /// Display label under the given item field.
    #[must_use]
    pub fn label(&self, item_field: &str) -> String {
        self.get(item_field).map(value_to_string).unwrap_or_default()
    }

    /// Group name under the given group field.
    ///
    /// Absent, `null`, `false`, zero and empty-string groups all fall back to
    /// [`DEFAULT_GROUP`].
    #[must_use]
    pub fn group_name(&self, group_field: &str) -> String {
        match self.get(group_field) {
            Some(value) if is_truthy(value) => value_to_string(value),
            _ => DEFAULT_GROUP.to_string(),
        }
    }
}

impl From<Map<String, Value>> for Item {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Converts a field value into the string form used for identities, labels and
/// hidden form fields.
///
/// Integral floats print without a fractional part (`1.0` → `"1"`), so a value
/// read back from a form matches the number it was written from.
#[must_use]
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Number(n) => number_to_string(n),
        other => other.to_string(),
    }
}

fn number_to_string(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f == 0.0 => "0".to_string(),
        // f64 Display is the shortest round-trip form and drops a zero fraction.
        Some(f) if n.is_f64() => f.to_string(),
        _ => n.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => true,
    }
}

/// Names of the item fields the widget interprets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNames {
    /// Field holding the display label.
    pub item: String,
    /// Field holding the unique identifier.
    pub value: String,
    /// Field holding the group name.
    pub group: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            item: "item".to_string(),
            value: "value".to_string(),
            group: "group".to_string(),
        }
    }
}

impl FieldNames {
    /// Builds the record written to the destination side by a re-synthesizing move.
    #[must_use]
    pub fn synthesize(&self, label: &str, value: &str, group: &str) -> Item {
        Item::new()
            .with(self.item.clone(), Value::String(label.to_string()))
            .with(self.value.clone(), Value::String(value.to_string()))
            .with(self.group.clone(), Value::String(group.to_string()))
    }
}

/// One of the two panels of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The left panel listing items not yet chosen.
    #[serde(alias = "left")]
    Available,
    /// The right panel listing chosen items.
    #[serde(alias = "right")]
    Selected,
}

impl Side {
    /// Both sides in render order.
    pub const ALL: [Self; 2] = [Self::Available, Self::Selected];

    /// Markup name of the side (`left` / `right`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "left",
            Self::Selected => "right",
        }
    }

    /// The other panel.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Available => Self::Selected,
            Self::Selected => Self::Available,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(value: Value) -> Item {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn integral_floats_print_like_integers() {
        assert_eq!(value_to_string(&json!(1.0)), "1");
        assert_eq!(value_to_string(&json!(-0.0)), "0");
        assert_eq!(value_to_string(&json!(2.5)), "2.5");
        assert_eq!(value_to_string(&json!(0.1)), "0.1");
        assert_eq!(value_to_string(&json!(u64::MAX)), "18446744073709551615");
    }

    #[test]
    fn identity_compares_numbers_and_strings_alike() {
        let numeric = item(json!({"item": "Apple", "value": 1}));
        let textual = item(json!({"item": "Apple", "value": "1"}));
        assert_eq!(numeric.identity("value"), textual.identity("value"));
        assert_eq!(numeric.identity("value"), "1");
    }

    #[test]
    fn falsy_groups_fall_back_to_ungrouped() {
        for group in [json!(null), json!(""), json!(false), json!(0)] {
            let it = item(json!({"item": "x", "value": 1, "group": group}));
            assert_eq!(it.group_name("group"), DEFAULT_GROUP);
        }
        let missing = item(json!({"item": "x", "value": 1}));
        assert_eq!(missing.group_name("group"), DEFAULT_GROUP);

        let numbered = item(json!({"item": "x", "value": 1, "group": 7}));
        assert_eq!(numbered.group_name("group"), "7");
    }

    #[test]
    fn custom_field_names_are_honored() {
        let names = FieldNames {
            item: "name".into(),
            value: "id".into(),
            group: "category".into(),
        };
        let it = item(json!({"name": "Admin", "id": 42, "category": "Roles"}));
        assert_eq!(it.label(&names.item), "Admin");
        assert_eq!(it.identity(&names.value), "42");
        assert_eq!(it.group_name(&names.group), "Roles");

        let synthesized = names.synthesize("Admin", "42", "Roles");
        assert_eq!(synthesized.get("id"), Some(&json!("42")));
        assert_eq!(synthesized.fields().len(), 3);
    }

    #[test]
    fn sides_map_to_markup_names() {
        assert_eq!(Side::Available.as_str(), "left");
        assert_eq!(Side::Selected.as_str(), "right");
        assert_eq!(Side::Available.opposite(), Side::Selected);
        let parsed: Side = serde_json::from_value(json!("left")).unwrap();
        assert_eq!(parsed, Side::Available);
    }
}
