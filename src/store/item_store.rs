//! The two-sided grouped item store and its move semantics.

use crate::domain::{FieldNames, Item, Side};
use crate::store::groups::GroupMap;

/// Policy knobs applied when items leave a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MovePolicy {
    /// Remove available-side groups once they become empty.
    pub hide_empty_groups: bool,
    /// Move the original record instead of re-synthesizing `{item, value, group}`.
    pub preserve_item_fields: bool,
}

/// Available and selected group collections.
///
/// Built once from the construction-time arrays, then mutated only through
/// [`ItemStore::move_item`]. After every completed move an identity is owned by
/// exactly one side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStore {
    available: GroupMap,
    selected: GroupMap,
    fields: FieldNames,
    policy: MovePolicy,
}

impl ItemStore {
    /// Builds both sides and strips pre-selected items from the available side.
    ///
    /// An available item is dropped when the selected side holds the same
    /// identity in the same group. With `hide_empty_groups`, available groups
    /// emptied by this step are removed.
    #[must_use]
    pub fn new(data: &[Item], selected: &[Item], fields: FieldNames, policy: MovePolicy) -> Self {
        let _span = tracing::debug_span!(
            "build_store",
            data_len = data.len(),
            selected_len = selected.len()
        )
        .entered();

        let mut store = Self {
            available: GroupMap::build(data, &fields),
            selected: GroupMap::build(selected, &fields),
            fields,
            policy,
        };
        store.remove_duplicates_from_available();

        tracing::debug!(
            available_groups = store.available.len(),
            available_items = store.available.item_count(),
            selected_groups = store.selected.len(),
            selected_items = store.selected.item_count(),
            "item store built"
        );
        store
    }

    fn remove_duplicates_from_available(&mut self) {
        let value_field = self.fields.value.clone();
        let overlapping: Vec<(String, Vec<String>)> = self
            .selected
            .iter()
            .filter(|(group, _)| self.available.contains_group(group))
            .map(|(group, items)| {
                let identities = items.iter().map(|item| item.identity(&value_field)).collect();
                (group.to_string(), identities)
            })
            .collect();

        for (group, identities) in overlapping {
            for identity in &identities {
                if self.available.remove(&group, identity, &value_field).is_some() {
                    tracing::trace!(group = %group, value = %identity, "dropped pre-selected item from available side");
                }
            }
            let emptied = self.available.get(&group).is_some_and(<[Item]>::is_empty);
            if emptied && self.policy.hide_empty_groups {
                self.available.remove_group(&group);
            }
        }
    }

    /// Moves one item from `from` to the opposite side.
    ///
    /// The item is located by group and string identity. The destination
    /// receives either the original record (`preserve_item_fields`) or a fresh
    /// `{item: label, value, group}` record. An emptied source group is deleted
    /// when `hide_empty_groups` is set or the source is the selected side.
    ///
    /// Returns `false` (and changes nothing) when the item is not on `from`.
    pub fn move_item(&mut self, identity: &str, group: &str, label: &str, from: Side) -> bool {
        let policy = self.policy;
        let value_field = self.fields.value.clone();

        let source = self.side_mut(from);
        let Some(original) = source.remove(group, identity, &value_field) else {
            tracing::debug!(value = %identity, group = %group, side = %from, "move skipped: item not found");
            return false;
        };
        let emptied = source.get(group).is_some_and(<[Item]>::is_empty);
        if emptied && (policy.hide_empty_groups || from == Side::Selected) {
            source.remove_group(group);
        }

        let record = if policy.preserve_item_fields {
            original
        } else {
            self.fields.synthesize(label, identity, group)
        };
        self.side_mut(from.opposite()).insert(group, record, &value_field);

        tracing::trace!(value = %identity, group = %group, from = %from, "item moved");
        true
    }

    /// Group collection of one side.
    #[must_use]
    pub const fn side(&self, side: Side) -> &GroupMap {
        match side {
            Side::Available => &self.available,
            Side::Selected => &self.selected,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut GroupMap {
        match side {
            Side::Available => &mut self.available,
            Side::Selected => &mut self.selected,
        }
    }

    /// Available-side groups.
    #[must_use]
    pub const fn available(&self) -> &GroupMap {
        &self.available
    }

    /// Selected-side groups.
    #[must_use]
    pub const fn selected(&self) -> &GroupMap {
        &self.selected
    }

    /// Field mapping used for identities and labels.
    #[must_use]
    pub const fn fields(&self) -> &FieldNames {
        &self.fields
    }

    /// Active move policy.
    #[must_use]
    pub const fn policy(&self) -> MovePolicy {
        self.policy
    }
}
