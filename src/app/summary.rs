//! Selection summary: counters, select-all states and button enablement.
//!
//! Everything here is derived on demand from the store and the explicit
//! per-side checked-set kept in [`ViewState`](crate::app::state::ViewState).
//! Nothing is cached between renders.

use crate::app::state::RowKey;
use crate::domain::Item;
use crate::store::GroupMap;
use std::collections::HashSet;

/// Check state of a tri-state control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckState {
    /// No item in scope is checked.
    #[default]
    Unchecked,
    /// Every item in scope is checked.
    Checked,
    /// Some, but not all, items in scope are checked.
    PartiallyChecked,
}

impl CheckState {
    /// Returns `true` if the state is `Checked`.
    #[must_use]
    pub const fn is_checked(self) -> bool {
        matches!(self, Self::Checked)
    }

    /// Returns `true` if the state is `PartiallyChecked`.
    #[must_use]
    pub const fn is_partially_checked(self) -> bool {
        matches!(self, Self::PartiallyChecked)
    }

    fn from_counts(checked: usize, total: usize) -> Self {
        if checked == 0 {
            Self::Unchecked
        } else if checked == total {
            Self::Checked
        } else {
            Self::PartiallyChecked
        }
    }
}

/// Rendered state of a select-all checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectAllState {
    /// Whether the box is ticked.
    pub checked: bool,
    /// Whether the box is greyed out.
    pub disabled: bool,
}

/// Per-side counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionSummary {
    /// Item rows on the side, including rows hidden by search.
    pub total: usize,
    /// Checked item rows on the side.
    pub checked: usize,
}

impl SelectionSummary {
    /// Counts rows and checked rows of one side.
    #[must_use]
    pub fn compute(groups: &GroupMap, checked: &HashSet<RowKey>, value_field: &str) -> Self {
        let mut summary = Self::default();
        for (group, items) in groups.iter() {
            summary.total += items.len();
            summary.checked += count_checked(group, items, checked, value_field);
        }
        summary
    }

    /// The side's select-all checkbox.
    ///
    /// Checked and disabled when the side is empty; otherwise enabled and
    /// checked only when every row is checked.
    #[must_use]
    pub const fn select_all(&self) -> SelectAllState {
        if self.total == 0 {
            SelectAllState {
                checked: true,
                disabled: true,
            }
        } else {
            SelectAllState {
                checked: self.checked == self.total,
                disabled: false,
            }
        }
    }

    /// Whether the action button moving items off this side should be enabled.
    #[must_use]
    pub const fn can_move(&self) -> bool {
        self.checked > 0
    }
}

/// Enablement of the two action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStates {
    /// Include (available → selected) is clickable.
    pub include_enabled: bool,
    /// Exclude (selected → available) is clickable.
    pub exclude_enabled: bool,
}

impl ButtonStates {
    /// Derives button enablement from both sides' summaries.
    #[must_use]
    pub const fn from_summaries(available: &SelectionSummary, selected: &SelectionSummary) -> Self {
        Self {
            include_enabled: available.can_move(),
            exclude_enabled: selected.can_move(),
        }
    }
}

/// Select-all state of one group header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupCheck {
    /// Tri-state of the group checkbox.
    pub state: CheckState,
    /// Empty groups render their checkbox checked and disabled.
    pub disabled: bool,
}

impl GroupCheck {
    /// Derives the group header state from its rows.
    #[must_use]
    pub fn compute(group: &str, items: &[Item], checked: &HashSet<RowKey>, value_field: &str) -> Self {
        if items.is_empty() {
            return Self {
                state: CheckState::Checked,
                disabled: true,
            };
        }
        let count = count_checked(group, items, checked, value_field);
        Self {
            state: CheckState::from_counts(count, items.len()),
            disabled: false,
        }
    }
}

fn count_checked(group: &str, items: &[Item], checked: &HashSet<RowKey>, value_field: &str) -> usize {
    items
        .iter()
        .filter(|item| checked.contains(&RowKey::new(group, &item.identity(value_field))))
        .count()
}
