//! Group block renderer.
//!
//! One block per group: a header with the group's select-all checkbox, then a
//! list with one row per item. Empty groups render the header only.

use crate::domain::Side;
use crate::ui::markup::Element;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{GroupView, ItemView};

/// Renders every group block of one side.
///
/// All blocks except the last carry the `mb-3` spacing class.
pub fn render_groups(instance_id: &str, side: Side, groups: &[GroupView], theme: &Theme) -> Vec<Element> {
    let last = groups.len().saturating_sub(1);
    groups
        .iter()
        .enumerate()
        .map(|(index, group)| render_group(instance_id, side, group, index != last, theme))
        .collect()
}

/// Renders one group block.
///
/// # Parameters
///
/// * `instance_id` - Prefix for generated element ids
/// * `side` - Side the block belongs to
/// * `group` - Group display information
/// * `spaced` - Whether to add the trailing spacing class
/// * `theme` - Effective theme
fn render_group(instance_id: &str, side: Side, group: &GroupView, spaced: bool, theme: &Theme) -> Element {
    let c = &theme.classes;
    let checkbox_id = format!("{instance_id}_group_{}_{}", group.name, side.as_str());

    let checkbox = Element::new("input")
        .attr("id", checkbox_id.as_str())
        .attr("type", "checkbox")
        .classes(&[c.form_check_input.as_str(), "group-select-all"])
        .flag("checked", group.check.is_checked())
        .flag("disabled", group.disabled)
        .flag("data-indeterminate", group.check.is_partially_checked());

    let header = Element::new("div").classes(&["group-header", "mb-2"]).child(
        Element::new("div")
            .classes(&[c.form_check.as_str()])
            .child(checkbox)
            .child(
                Element::new("label")
                    .attr("for", checkbox_id.as_str())
                    .classes(&[c.form_check_label.as_str()])
                    .text(group.name.as_str()),
            ),
    );

    let mut block = Element::new("div")
        .classes(&["dual-listbox-group", if spaced { "mb-3" } else { "" }])
        .attr("data-group", group.name.as_str());
    if group.hidden {
        block = block.attr("style", "display:none");
    }
    block = block.child(header);

    if !group.items.is_empty() {
        block = block.child(
            Element::new("ul")
                .classes(&[c.list_group.as_str()])
                .children(group.items.iter().map(|item| render_item(instance_id, &group.name, item, theme))),
        );
    }
    block
}

fn render_item(instance_id: &str, group: &str, item: &ItemView, theme: &Theme) -> Element {
    let c = &theme.classes;
    let input_id = format!("{instance_id}_{group}_{}", item.value);

    let mut row = Element::new("li")
        .classes(&[c.list_item.as_str()])
        .attr("data-value", item.value.as_str())
        .attr("data-group", group);
    if item.hidden {
        row = row.attr("style", "display:none");
    }

    row.child(
        Element::new("div")
            .classes(&[c.form_check.as_str()])
            .child(
                Element::new("input")
                    .attr("id", input_id.as_str())
                    .attr("type", "checkbox")
                    .classes(&[c.form_check_input.as_str(), "item-select"])
                    .flag("checked", item.checked),
            )
            .child(
                Element::new("label")
                    .attr("for", input_id.as_str())
                    .classes(&[c.form_check_label.as_str()])
                    .text(item.label.as_str()),
            ),
    )
}
