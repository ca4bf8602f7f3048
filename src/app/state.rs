//! Widget state management and view model computation.
//!
//! This module defines [`WidgetState`], the central state container of one
//! widget instance: the resolved [`Settings`], the two-sided [`ItemStore`],
//! the per-render [`ViewState`] (checked rows and search queries) and the
//! construction-time catalog.
//!
//! # State Components
//!
//! - **Store**: source of truth for which items sit on which side
//! - **View state**: checkbox ticks and search text, discarded on every move
//! - **Catalog**: the original `dataArray`, never mutated
//!
//! # View Model Computation
//!
//! [`WidgetState::compute_viewmodel`] turns a state snapshot into a
//! [`UIViewModel`], applying the search overlay and deriving the selection
//! summary. The renderer consumes only the view model.

use crate::app::search::filter_group;
use crate::app::summary::{ButtonStates, GroupCheck, SelectionSummary};
use crate::domain::{FieldNames, Item, Side};
use crate::host::Submission;
use crate::store::{GroupMap, ItemStore, MovePolicy};
use crate::ui::theme::{Theme, ThemeProvider};
use crate::ui::viewmodel::{GroupView, ItemView, PanelView, SearchBarInfo, UIViewModel};
use crate::Options;
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashSet;

/// Resolved, immutable configuration of one widget instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Item field mapping.
    pub fields: FieldNames,
    /// Base name of the hidden fields written on submit.
    pub input_name: String,
    /// Available panel title.
    pub tab_name_text: String,
    /// Selected panel title.
    pub right_tab_name_text: String,
    /// Placeholder of both search boxes.
    pub search_placeholder_text: String,
    /// Include button label.
    pub include_button_text: String,
    /// Exclude button label.
    pub exclude_button_text: String,
    /// Drop available-side groups once empty.
    pub hide_empty_groups: bool,
    /// Write hidden fields on submit when no handler is set.
    pub submit_form: bool,
    /// Move original records instead of re-synthesizing them.
    pub preserve_item_fields: bool,
    /// Whether a submit handler overrides native submission.
    pub has_submit_handler: bool,
    /// Effective theme, resolved once.
    pub theme: Theme,
    /// Prefix for generated element ids.
    pub instance_id: String,
}

impl Settings {
    /// Resolves options against a theme provider.
    ///
    /// Theme precedence is applied here, once: instance override, then the
    /// provider default, then the built-in default. A missing instance id is
    /// replaced with a random one.
    #[must_use]
    pub fn resolve(options: &Options, provider: &ThemeProvider) -> Self {
        let instance_id = options
            .instance_id
            .clone()
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| uuid::Uuid::new_v4().simple().to_string());

        Self {
            fields: FieldNames {
                item: options.item_name.clone(),
                value: options.value_name.clone(),
                group: options.group_name.clone(),
            },
            input_name: options.input_name.clone(),
            tab_name_text: options.tab_name_text.clone(),
            right_tab_name_text: options.right_tab_name_text.clone(),
            search_placeholder_text: options.search_placeholder_text.clone(),
            include_button_text: options.include_button_text.clone(),
            exclude_button_text: options.exclude_button_text.clone(),
            hide_empty_groups: options.hide_empty_groups,
            submit_form: options.submit_form,
            preserve_item_fields: options.preserve_item_fields,
            has_submit_handler: options.on_submit.is_some(),
            theme: provider.resolve(options.theme.as_ref()),
            instance_id,
        }
    }

    /// Move policy derived from the flags.
    #[must_use]
    pub const fn move_policy(&self) -> MovePolicy {
        MovePolicy {
            hide_empty_groups: self.hide_empty_groups,
            preserve_item_fields: self.preserve_item_fields,
        }
    }

    /// Name of the hidden fields written on submit (`"{input_name}[]"`).
    #[must_use]
    pub fn hidden_field_name(&self) -> String {
        format!("{}[]", self.input_name)
    }
}

/// Address of one rendered row: its group and string identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey {
    /// Group the row is rendered under.
    pub group: String,
    /// String identity of the item.
    pub value: String,
}

impl RowKey {
    /// Creates a row address.
    #[must_use]
    pub fn new(group: &str, value: &str) -> Self {
        Self {
            group: group.to_string(),
            value: value.to_string(),
        }
    }
}

/// Transient view state of one side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideView {
    /// Rows whose checkbox is ticked.
    pub checked: HashSet<RowKey>,
    /// Current search text.
    pub query: String,
}

/// Transient view state of both sides.
///
/// Rebuilt from scratch after every move, mirroring a full re-render: all
/// checkboxes come back unchecked and both search boxes empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    available: SideView,
    selected: SideView,
}

impl ViewState {
    /// View state of one side.
    #[must_use]
    pub const fn side(&self, side: Side) -> &SideView {
        match side {
            Side::Available => &self.available,
            Side::Selected => &self.selected,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut SideView {
        match side {
            Side::Available => &mut self.available,
            Side::Selected => &mut self.selected,
        }
    }
}

/// Central state container of one widget instance.
#[derive(Debug, Clone)]
pub struct WidgetState {
    /// Resolved configuration.
    pub settings: Settings,
    store: ItemStore,
    view: ViewState,
    all_items: Vec<Item>,
}

impl WidgetState {
    /// Builds the store from the catalog and the pre-selected items.
    #[must_use]
    pub fn new(settings: Settings, data: Vec<Item>, selected: &[Item]) -> Self {
        let store = ItemStore::new(&data, selected, settings.fields.clone(), settings.move_policy());
        Self {
            settings,
            store,
            view: ViewState::default(),
            all_items: data,
        }
    }

    /// The two-sided item store.
    #[must_use]
    pub const fn store(&self) -> &ItemStore {
        &self.store
    }

    /// The transient view state.
    #[must_use]
    pub const fn view(&self) -> &ViewState {
        &self.view
    }

    fn value_field(&self) -> &str {
        &self.settings.fields.value
    }

    /// Ticks or unticks one row.
    ///
    /// Returns `false` when no such row is rendered on `side`.
    pub fn set_item_checked(&mut self, side: Side, group: &str, value: &str, checked: bool) -> bool {
        let exists = self.store.side(side).contains(group, value, &self.settings.fields.value);
        if !exists {
            tracing::debug!(side = %side, group = %group, value = %value, "toggle ignored: unknown row");
            return false;
        }
        let key = RowKey::new(group, value);
        let view = self.view.side_mut(side);
        if checked {
            view.checked.insert(key);
        } else {
            view.checked.remove(&key);
        }
        true
    }

    /// Ticks or unticks every row of one group.
    ///
    /// Returns `false` when the group is not rendered on `side`.
    pub fn set_group_checked(&mut self, side: Side, group: &str, checked: bool) -> bool {
        let Some(items) = self.store.side(side).get(group) else {
            tracing::debug!(side = %side, group = %group, "group toggle ignored: unknown group");
            return false;
        };
        let keys: Vec<RowKey> = items
            .iter()
            .map(|item| RowKey::new(group, &item.identity(&self.settings.fields.value)))
            .collect();
        let view = self.view.side_mut(side);
        for key in keys {
            if checked {
                view.checked.insert(key);
            } else {
                view.checked.remove(&key);
            }
        }
        true
    }

    /// Ticks or unticks every row of a side, including rows hidden by search.
    pub fn set_side_checked(&mut self, side: Side, checked: bool) {
        let keys = self.row_keys(side);
        let view = self.view.side_mut(side);
        if checked {
            view.checked.extend(keys);
        } else {
            view.checked.clear();
        }
    }

    fn row_keys(&self, side: Side) -> Vec<RowKey> {
        self.store
            .side(side)
            .iter()
            .flat_map(|(group, items)| {
                items
                    .iter()
                    .map(move |item| RowKey::new(group, &item.identity(self.value_field())))
            })
            .collect()
    }

    /// Checked rows of a side in render order, with their rendered labels.
    #[must_use]
    pub fn checked_rows(&self, side: Side) -> Vec<(RowKey, String)> {
        let checked = &self.view.side(side).checked;
        self.store
            .side(side)
            .iter()
            .flat_map(|(group, items)| {
                items.iter().filter_map(move |item| {
                    let key = RowKey::new(group, &item.identity(self.value_field()));
                    checked
                        .contains(&key)
                        .then(|| (key, item.label(&self.settings.fields.item)))
                })
            })
            .collect()
    }

    /// Moves every checked row of `from` to the other side.
    ///
    /// Returns the number of items moved. The view state is reset afterwards,
    /// even when nothing moved.
    pub fn move_checked(&mut self, from: Side) -> usize {
        let _span = tracing::debug_span!("move_checked", from = %from).entered();

        let rows = self.checked_rows(from);
        let mut moved = 0;
        for (key, label) in &rows {
            if self.store.move_item(&key.value, &key.group, label, from) {
                moved += 1;
            }
        }
        self.reset_view();

        tracing::debug!(requested = rows.len(), moved, "checked items moved");
        moved
    }

    /// Sets the search text of a side.
    pub fn set_search(&mut self, side: Side, text: &str) {
        self.view.side_mut(side).query = text.to_string();
    }

    /// Discards all checkbox ticks and search text.
    pub fn reset_view(&mut self) {
        self.view = ViewState::default();
    }

    /// Counters of one side.
    #[must_use]
    pub fn summary(&self, side: Side) -> SelectionSummary {
        SelectionSummary::compute(self.store.side(side), &self.view.side(side).checked, self.value_field())
    }

    /// Include/exclude enablement.
    #[must_use]
    pub fn buttons(&self) -> ButtonStates {
        ButtonStates::from_summaries(&self.summary(Side::Available), &self.summary(Side::Selected))
    }

    /// Selected-side groups.
    #[must_use]
    pub const fn selected(&self) -> &GroupMap {
        self.store.selected()
    }

    /// Available-side groups.
    #[must_use]
    pub const fn unselected(&self) -> &GroupMap {
        self.store.available()
    }

    /// The construction-time catalog.
    #[must_use]
    pub fn all_items(&self) -> &[Item] {
        &self.all_items
    }

    /// Raw value fields of every selected item, in store order, without dedup.
    #[must_use]
    pub fn selected_values(&self) -> Vec<Value> {
        self.store
            .selected()
            .items()
            .map(|item| item.get(self.value_field()).cloned().unwrap_or(Value::Null))
            .collect()
    }

    /// Raw value fields of the selected items, deduplicated by identity.
    #[must_use]
    pub fn selected_array(&self) -> Vec<Value> {
        let mut seen = HashSet::new();
        self.store
            .selected()
            .items()
            .filter(|item| seen.insert(item.identity(self.value_field())))
            .map(|item| item.get(self.value_field()).cloned().unwrap_or(Value::Null))
            .collect()
    }

    /// Selected items, first record per identity.
    #[must_use]
    pub fn get_selected_items(&self) -> Vec<Item> {
        self.unique_items(self.store.selected().items())
    }

    /// Available items, first record per identity.
    #[must_use]
    pub fn get_unselected_items(&self) -> Vec<Item> {
        self.unique_items(self.store.available().items())
    }

    /// Current items of both sides, one record per identity.
    ///
    /// Available items come first; a selected item with the same identity
    /// replaces the earlier record in place.
    #[must_use]
    pub fn get_all_items(&self) -> Vec<Item> {
        let mut by_identity: IndexMap<String, Item> = IndexMap::new();
        for item in self.store.available().items().chain(self.store.selected().items()) {
            by_identity.insert(item.identity(self.value_field()), item.clone());
        }
        by_identity.into_values().collect()
    }

    fn unique_items<'a>(&self, items: impl Iterator<Item = &'a Item>) -> Vec<Item> {
        let mut by_identity: IndexMap<String, Item> = IndexMap::new();
        for item in items {
            by_identity
                .entry(item.identity(self.value_field()))
                .or_insert_with(|| item.clone());
        }
        by_identity.into_values().collect()
    }

    /// Snapshot handed to a submit handler.
    #[must_use]
    pub fn submission(&self) -> Submission {
        Submission {
            selected: self.selected().clone(),
            unselected: self.unselected().clone(),
            all_items: self.all_items.clone(),
            selected_array: self.selected_array(),
        }
    }

    /// Computes a renderable view model from the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let available = self.compute_panel(Side::Available, &self.settings.tab_name_text);
        let selected = self.compute_panel(Side::Selected, &self.settings.right_tab_name_text);
        let buttons = ButtonStates::from_summaries(&available.summary, &selected.summary);

        UIViewModel {
            instance_id: self.settings.instance_id.clone(),
            available,
            selected,
            buttons,
            include_text: self.settings.include_button_text.clone(),
            exclude_text: self.settings.exclude_button_text.clone(),
        }
    }

    fn compute_panel(&self, side: Side, title: &str) -> PanelView {
        let view = self.view.side(side);
        let groups = self.store.side(side);
        let fields = &self.settings.fields;

        let group_views = groups
            .iter()
            .map(|(group, items)| {
                let labels: Vec<String> = items.iter().map(|item| item.label(&fields.item)).collect();
                let visibility = filter_group(&view.query, group, &labels);
                let check = GroupCheck::compute(group, items, &view.checked, &fields.value);

                let item_views = items
                    .iter()
                    .zip(labels)
                    .zip(visibility.items)
                    .map(|((item, label), visible)| {
                        let value = item.identity(&fields.value);
                        ItemView {
                            checked: view.checked.contains(&RowKey::new(group, &value)),
                            value,
                            label,
                            hidden: !visible,
                        }
                    })
                    .collect();

                GroupView {
                    name: group.to_string(),
                    check: check.state,
                    disabled: check.disabled,
                    hidden: !visibility.visible,
                    items: item_views,
                }
            })
            .collect();

        PanelView {
            side,
            title: title.to_string(),
            search: SearchBarInfo {
                query: view.query.clone(),
                placeholder: self.settings.search_placeholder_text.clone(),
            },
            groups: group_views,
            summary: SelectionSummary::compute(groups, &view.checked, &fields.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn state_with(options: Options) -> WidgetState {
        let settings = Settings::resolve(&options, &ThemeProvider::default());
        let data = options.data_array.clone();
        WidgetState::new(settings, data, &options.selected_items)
    }

    fn catalog() -> Options {
        Options {
            data_array: serde_json::from_value(json!([
                {"item": "Apple", "value": 1, "group": "Fruits"},
                {"item": "Orange", "value": 2, "group": "Fruits"},
                {"item": "Carrot", "value": 3, "group": "Vegetables"},
            ]))
            .unwrap(),
            instance_id: Some("t".into()),
            ..Options::default()
        }
    }

    #[test]
    fn settings_take_defaults_and_generate_id() {
        let settings = Settings::resolve(&Options::default(), &ThemeProvider::default());
        assert_eq!(settings.fields, FieldNames::default());
        assert_eq!(settings.hidden_field_name(), "selectedItems[]");
        assert_eq!(settings.instance_id.len(), 32);
        assert!(settings.submit_form);
        assert!(!settings.has_submit_handler);
    }

    #[test]
    fn toggles_ignore_unknown_rows() {
        let mut state = state_with(catalog());
        assert!(!state.set_item_checked(Side::Available, "Fruits", "99", true));
        assert!(!state.set_item_checked(Side::Selected, "Fruits", "1", true));
        assert!(!state.set_group_checked(Side::Available, "Nuts", true));
        assert_eq!(state.summary(Side::Available).checked, 0);
    }

    #[test]
    fn group_and_side_toggles_tick_rows() {
        let mut state = state_with(catalog());

        state.set_group_checked(Side::Available, "Fruits", true);
        assert_eq!(state.summary(Side::Available), SelectionSummary { total: 3, checked: 2 });

        state.set_side_checked(Side::Available, true);
        assert_eq!(state.summary(Side::Available).checked, 3);

        state.set_item_checked(Side::Available, "Vegetables", "3", false);
        assert_eq!(state.summary(Side::Available).checked, 2);

        state.set_side_checked(Side::Available, false);
        assert_eq!(state.summary(Side::Available).checked, 0);
    }

    #[test]
    fn move_checked_relocates_and_resets_view() {
        let mut state = state_with(catalog());
        state.set_item_checked(Side::Available, "Fruits", "1", true);
        state.set_search(Side::Selected, "app");

        assert_eq!(state.move_checked(Side::Available), 1);

        assert!(state.selected().contains("Fruits", "1", "value"));
        assert!(!state.unselected().contains("Fruits", "1", "value"));
        assert_eq!(state.view(), &ViewState::default());
        assert_eq!(state.buttons(), ButtonStates { include_enabled: false, exclude_enabled: false });
    }

    #[test]
    fn checked_rows_follow_render_order() {
        let mut state = state_with(catalog());
        state.set_item_checked(Side::Available, "Vegetables", "3", true);
        state.set_item_checked(Side::Available, "Fruits", "2", true);

        let rows: Vec<String> = state
            .checked_rows(Side::Available)
            .into_iter()
            .map(|(_, label)| label)
            .collect();
        assert_eq!(rows, vec!["Orange", "Carrot"]);
    }

    #[test]
    fn accessors_dedup_by_identity() {
        let mut options = catalog();
        options.selected_items = serde_json::from_value(json!([
            {"item": "Apple", "value": 1, "group": "Fruits"},
            {"item": "Apple", "value": "1", "group": "Favourites"},
        ]))
        .unwrap();
        let state = state_with(options);

        assert_eq!(state.selected_values(), vec![json!(1), json!("1")]);
        assert_eq!(state.selected_array(), vec![json!(1)]);
        assert_eq!(state.get_selected_items().len(), 1);
        assert_eq!(state.get_unselected_items().len(), 2);

        let all: Vec<String> = state.get_all_items().iter().map(|i| i.identity("value")).collect();
        assert_eq!(all, vec!["2", "3", "1"]);
    }

    #[test]
    fn get_all_items_prefers_selected_record_in_place() {
        let mut options = catalog();
        options.selected_items =
            serde_json::from_value(json!([{"item": "Orange!", "value": 2, "group": "Citrus"}])).unwrap();
        let state = state_with(options);

        let all = state.get_all_items();
        let labels: Vec<String> = all.iter().map(|i| i.label("item")).collect();
        assert_eq!(labels, vec!["Apple", "Orange!", "Carrot"]);
    }

    #[test]
    fn viewmodel_applies_search_and_checks() {
        let mut state = state_with(catalog());
        state.set_item_checked(Side::Available, "Fruits", "2", true);
        state.set_search(Side::Available, "car");

        let vm = state.compute_viewmodel();
        let fruits = &vm.available.groups[0];
        assert!(fruits.hidden);
        assert!(fruits.items.iter().all(|item| item.hidden));
        assert!(fruits.items[1].checked);
        assert!(fruits.check.is_partially_checked());

        let vegetables = &vm.available.groups[1];
        assert!(!vegetables.hidden);
        assert!(!vegetables.items[0].hidden);

        assert_eq!(vm.available.summary, SelectionSummary { total: 3, checked: 1 });
        assert!(vm.buttons.include_enabled);
        assert_eq!(vm.available.search.query, "car");
    }
}
