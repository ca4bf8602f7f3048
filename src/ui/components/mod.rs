//! Composable markup component renderers.
//!
//! Each component renders one part of the widget into a markup subtree.
//!
//! # Components
//!
//! - [`panel`]: One side's card (title, search box, groups, select-all footer)
//! - [`group`]: Group blocks with their header checkbox and item rows
//! - [`controls`]: Include/exclude buttons between the panels
//!
//! # Layout
//!
//! ```text
//! container
//! └── row
//!     ├── left column   (panel, available)
//!     ├── center column (controls)
//!     └── right column  (panel, selected)
//! ```

mod controls;
mod group;
mod panel;

use crate::domain::Side;
use crate::ui::markup::Element;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use controls::render_controls;
use panel::render_panel;

/// Renders the full widget layout.
///
/// # Parameters
///
/// * `vm` - Pre-computed view model
/// * `theme` - Effective theme
///
/// # Returns
///
/// The container element, id `dual_listbox_{instance_id}`.
pub fn render_layout(vm: &UIViewModel, theme: &Theme) -> Element {
    let c = &theme.classes;

    let row = Element::new("div")
        .classes(&[c.row.as_str()])
        .child(render_panel(&vm.instance_id, vm.panel(Side::Available), &c.col_left, theme))
        .child(render_controls(vm, theme))
        .child(render_panel(&vm.instance_id, vm.panel(Side::Selected), &c.col_right, theme));

    Element::new("div")
        .classes(&[c.container.as_str()])
        .attr("id", format!("dual_listbox_{}", vm.instance_id))
        .child(row)
}
