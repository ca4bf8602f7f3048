//! Insertion-ordered group collections.
//!
//! A [`GroupMap`] maps group names to ordered item lists. Group order is the
//! order of first appearance, and within a group item identities are unique.

use crate::domain::{FieldNames, Item};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Group name → ordered items, for one side of the widget.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupMap(IndexMap<String, Vec<Item>>);

impl GroupMap {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Partitions items into groups.
    ///
    /// Items are grouped by their group field (falling back to `"Ungrouped"`).
    /// An item whose identity already exists in the same group is skipped, so
    /// the first-seen record wins. Group and item order follow first appearance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dual_listbox::{FieldNames, GroupMap, Item};
    ///
    /// let items: Vec<Item> = serde_json::from_str(r#"[
    ///     {"item": "Apple", "value": 1, "group": "Fruits"},
    ///     {"item": "Apple again", "value": "1", "group": "Fruits"}
    /// ]"#)?;
    /// let groups = GroupMap::build(&items, &FieldNames::default());
    /// assert_eq!(groups.get("Fruits").map(<[Item]>::len), Some(1));
    /// # Ok::<(), serde_json::Error>(())
    /// ```
    #[must_use]
    pub fn build(items: &[Item], fields: &FieldNames) -> Self {
        let mut groups = Self::new();
        for item in items {
            let group = item.group_name(&fields.group);
            groups.ensure_group(&group);
            groups.insert(&group, item.clone(), &fields.value);
        }
        groups
    }

    /// Creates the group if it does not exist yet.
    pub fn ensure_group(&mut self, group: &str) {
        if !self.0.contains_key(group) {
            self.0.insert(group.to_string(), Vec::new());
        }
    }

    /// Appends an item to a group, creating the group if needed.
    ///
    /// Returns `false` without inserting when the group already holds an item
    /// with the same identity.
    pub fn insert(&mut self, group: &str, item: Item, value_field: &str) -> bool {
        let identity = item.identity(value_field);
        self.ensure_group(group);
        let Some(items) = self.0.get_mut(group) else {
            return false;
        };
        if items.iter().any(|existing| existing.identity(value_field) == identity) {
            return false;
        }
        items.push(item);
        true
    }

    /// Removes every item of `group` whose identity equals `identity`.
    ///
    /// Returns the first removed record, or `None` when the group is unknown or
    /// holds no such item.
    pub fn remove(&mut self, group: &str, identity: &str, value_field: &str) -> Option<Item> {
        let items = self.0.get_mut(group)?;
        let mut removed = None;
        items.retain(|item| {
            if item.identity(value_field) == identity {
                if removed.is_none() {
                    removed = Some(item.clone());
                }
                false
            } else {
                true
            }
        });
        removed
    }

    /// Deletes a group entry entirely.
    pub fn remove_group(&mut self, group: &str) -> Option<Vec<Item>> {
        self.0.shift_remove(group)
    }

    /// Items of one group.
    #[must_use]
    pub fn get(&self, group: &str) -> Option<&[Item]> {
        self.0.get(group).map(Vec::as_slice)
    }

    /// Whether the group exists on this side (possibly empty).
    #[must_use]
    pub fn contains_group(&self, group: &str) -> bool {
        self.0.contains_key(group)
    }

    /// Whether `group` holds an item with the given identity.
    #[must_use]
    pub fn contains(&self, group: &str, identity: &str, value_field: &str) -> bool {
        self.get(group)
            .is_some_and(|items| items.iter().any(|item| item.identity(value_field) == identity))
    }

    /// Iterates groups in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Item])> {
        self.0.iter().map(|(name, items)| (name.as_str(), items.as_slice()))
    }

    /// Group names in display order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterates every item across all groups, in display order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.0.values().flatten()
    }

    /// Number of groups (including empty ones).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the side has no groups at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of items across all groups.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Borrows the underlying map.
    #[must_use]
    pub const fn as_map(&self) -> &IndexMap<String, Vec<Item>> {
        &self.0
    }
}
