//! Action column renderer: the include and exclude buttons.

use crate::ui::markup::Element;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the center column.
///
/// Each button is disabled unless its source side has at least one checked row.
pub fn render_controls(vm: &UIViewModel, theme: &Theme) -> Element {
    let c = &theme.classes;

    let include = Element::new("button")
        .classes(&[c.btn.as_str(), "dual-listbox-include", c.btn_include.as_str()])
        .flag("disabled", !vm.buttons.include_enabled)
        .text(vm.include_text.as_str());

    let exclude = Element::new("button")
        .classes(&[c.btn.as_str(), "dual-listbox-exclude", c.btn_exclude.as_str()])
        .flag("disabled", !vm.buttons.exclude_enabled)
        .text(vm.exclude_text.as_str());

    Element::new("div")
        .classes(&[c.col_center.as_str()])
        .child(include)
        .child(exclude)
}
