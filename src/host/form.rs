//! Enclosing form of a mount target.

use serde::{Deserialize, Serialize};

/// Kind of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// `<input type="hidden">`.
    Hidden,
    /// Any visible input.
    Text,
}

/// One named form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    /// Field kind.
    pub kind: FieldKind,
    /// Field name.
    pub name: String,
    /// Submitted value.
    pub value: String,
}

impl FormField {
    /// Creates a hidden field.
    #[must_use]
    pub fn hidden(name: &str, value: &str) -> Self {
        Self {
            kind: FieldKind::Hidden,
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    /// Creates a visible text field.
    #[must_use]
    pub fn text(name: &str, value: &str) -> Self {
        Self {
            kind: FieldKind::Text,
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

/// A form containing the widget, modelled by its fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostForm {
    fields: Vec<FormField>,
}

impl HostForm {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, builder style.
    #[must_use]
    pub fn with_field(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }

    /// All fields in document order.
    #[must_use]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Values of every field named `name`, in document order.
    #[must_use]
    pub fn values_of(&self, name: &str) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|field| field.name == name)
            .map(|field| field.value.as_str())
            .collect()
    }

    /// Removes every field named `name`, returning how many were removed.
    pub fn remove_named(&mut self, name: &str) -> usize {
        let before = self.fields.len();
        self.fields.retain(|field| field.name != name);
        before - self.fields.len()
    }

    /// Appends a hidden field.
    pub fn append_hidden(&mut self, name: &str, value: &str) {
        self.fields.push(FormField::hidden(name, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_named_keeps_other_fields() {
        let mut form = HostForm::new()
            .with_field(FormField::text("title", "x"))
            .with_field(FormField::hidden("ids[]", "1"))
            .with_field(FormField::hidden("ids[]", "2"));

        assert_eq!(form.remove_named("ids[]"), 2);
        assert_eq!(form.fields(), &[FormField::text("title", "x")]);

        form.append_hidden("ids[]", "3");
        assert_eq!(form.values_of("ids[]"), vec!["3"]);
        assert_eq!(form.fields()[1].kind, FieldKind::Hidden);
    }
}
