//! View model types representing renderable widget state.
//!
//! View models are immutable snapshots computed from the widget state. They are
//! built for rendering and hold pre-computed display information such as
//! search visibility, check states and counters.
//!
//! # Architecture
//!
//! View models are created via `WidgetState::compute_viewmodel()` and consumed
//! by the renderer. They contain no business logic, only display-ready data.

use crate::app::summary::{ButtonStates, CheckState, SelectionSummary};
use crate::domain::Side;

/// Complete view model of one widget instance.
///
/// Holds the two panels and the action column between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Prefix of every generated element id.
    pub instance_id: String,

    /// Left panel (available items).
    pub available: PanelView,

    /// Right panel (selected items).
    pub selected: PanelView,

    /// Include/exclude enablement.
    pub buttons: ButtonStates,

    /// Include button label.
    pub include_text: String,

    /// Exclude button label.
    pub exclude_text: String,
}

impl UIViewModel {
    /// Panel of one side.
    #[must_use]
    pub const fn panel(&self, side: Side) -> &PanelView {
        match side {
            Side::Available => &self.available,
            Side::Selected => &self.selected,
        }
    }
}

/// Display information of one side's panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    /// Which side this panel renders.
    pub side: Side,

    /// Card header title.
    pub title: String,

    /// Search box contents.
    pub search: SearchBarInfo,

    /// Group blocks in store order.
    pub groups: Vec<GroupView>,

    /// Counters shown in the footer.
    pub summary: SelectionSummary,
}

/// Display information of one group block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupView {
    /// Group label.
    pub name: String,

    /// Tri-state of the group select-all checkbox.
    pub check: CheckState,

    /// Whether the group checkbox is greyed out (empty groups).
    pub disabled: bool,

    /// Whether search hides the whole block.
    pub hidden: bool,

    /// Rows in store order.
    pub items: Vec<ItemView>,
}

/// Display information of one item row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    /// String identity, written to `data-value`.
    pub value: String,

    /// Label text.
    pub label: String,

    /// Whether the row checkbox is ticked.
    pub checked: bool,

    /// Whether search hides the row.
    pub hidden: bool,
}

/// Search box display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,

    /// Placeholder text.
    pub placeholder: String,
}
