//! Side panel renderer.
//!
//! A panel is a card: a header with the panel title, a body with the search
//! box and the group blocks, and a footer with the side's select-all checkbox
//! and its `Select All (checked/total)` counter.

use crate::ui::components::group::render_groups;
use crate::ui::markup::Element;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PanelView;

/// Renders one side's column.
///
/// # Parameters
///
/// * `instance_id` - Prefix for generated element ids
/// * `panel` - Panel display information
/// * `column_class` - Theme class of the column wrapper
/// * `theme` - Effective theme
///
/// # Returns
///
/// The column element, id `dual_listbox_{instance_id}_{left|right}_side`.
pub fn render_panel(instance_id: &str, panel: &PanelView, column_class: &str, theme: &Theme) -> Element {
    let c = &theme.classes;
    let side = panel.side.as_str();

    let search = Element::new("input")
        .attr("id", format!("dual_listbox_{instance_id}_{side}_search"))
        .attr("type", "text")
        .classes(&[c.search_input.as_str()])
        .attr("data-side", side)
        .attr("placeholder", panel.search.placeholder.as_str())
        .attr("value", panel.search.query.as_str());

    let body = Element::new("div")
        .classes(&[c.card_body.as_str()])
        .child(search)
        .child(
            Element::new("div")
                .classes(&["dual-listbox-content"])
                .children(render_groups(instance_id, panel.side, &panel.groups, theme)),
        );

    Element::new("div")
        .classes(&[column_class])
        .attr("id", format!("dual_listbox_{instance_id}_{side}_side"))
        .child(
            Element::new("div")
                .classes(&[c.card.as_str()])
                .child(
                    Element::new("div")
                        .classes(&[c.card_header.as_str()])
                        .text(panel.title.as_str()),
                )
                .child(body)
                .child(render_footer(panel, theme)),
        )
}

fn render_footer(panel: &PanelView, theme: &Theme) -> Element {
    let c = &theme.classes;
    let side = panel.side.as_str();
    let select_all = panel.summary.select_all();
    let select_all_class = format!("dual-listbox-select-all-{side}");
    let selected_class = format!("dual-listbox-{side}-selected");
    let total_class = format!("dual-listbox-{side}-total");

    let checkbox = Element::new("input")
        .attr("type", "checkbox")
        .classes(&[c.form_check_input.as_str(), select_all_class.as_str()])
        .flag("checked", select_all.checked)
        .flag("disabled", select_all.disabled);

    let label = Element::new("label")
        .classes(&[c.form_check_label.as_str()])
        .text("Select All (")
        .child(
            Element::new("span")
                .classes(&[selected_class.as_str()])
                .text(panel.summary.checked.to_string()),
        )
        .text("/")
        .child(
            Element::new("span")
                .classes(&[total_class.as_str()])
                .text(panel.summary.total.to_string()),
        )
        .text(")");

    Element::new("div")
        .classes(&[c.card_footer.as_str()])
        .child(checkbox)
        .child(label)
}
