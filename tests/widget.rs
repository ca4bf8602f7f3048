use dual_listbox::{
    init_dual_list_box, DualListBox, DualListBoxError, Event, FieldKind, FormField, GroupMap, HostForm, HostPage,
    EventOutcome, MountTarget, Options, PartialTheme, Side, Submission, ThemeProvider,
};
use futures_util::FutureExt;
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

fn options(data: serde_json::Value) -> Options {
    Options {
        data_array: serde_json::from_value(data).unwrap(),
        instance_id: Some("test".into()),
        ..Options::default()
    }
}

fn fruits() -> Options {
    options(json!([
        {"item": "Apple", "value": 1, "group": "Fruits"},
        {"item": "Orange", "value": 2, "group": "Fruits"},
    ]))
}

fn mount(options: Options) -> DualListBox {
    let mut page = HostPage::new().with_target(MountTarget::new("picker").in_form(HostForm::new()));
    init_dual_list_box(&mut page, "#picker", options).unwrap()
}

fn check(widget: &mut DualListBox, side: Side, group: &str, value: &str) {
    widget
        .handle_event(&Event::ItemToggled {
            side,
            group: group.into(),
            value: value.into(),
            checked: true,
        })
        .unwrap();
}

#[test]
fn apple_orange_scenario() {
    let mut widget = mount(fruits());

    check(&mut widget, Side::Available, "Fruits", "1");
    widget.handle_event(&Event::Include).unwrap();

    let selected: GroupMap = serde_json::from_value(json!({
        "Fruits": [{"item": "Apple", "value": "1", "group": "Fruits"}]
    }))
    .unwrap();
    let available: GroupMap = serde_json::from_value(json!({
        "Fruits": [{"item": "Orange", "value": 2, "group": "Fruits"}]
    }))
    .unwrap();
    assert_eq!(widget.selected(), &selected);
    assert_eq!(widget.unselected(), &available);
}

#[test]
fn preserve_item_fields_moves_original_record() {
    let mut opts = options(json!([
        {"item": "Apple", "value": 1, "group": "Fruits", "color": "red"},
    ]));
    opts.preserve_item_fields = true;
    let mut widget = mount(opts);

    check(&mut widget, Side::Available, "Fruits", "1");
    widget.handle_event(&Event::Include).unwrap();

    let moved = &widget.get_selected_items()[0];
    assert_eq!(moved.get("value"), Some(&json!(1)));
    assert_eq!(moved.get("color"), Some(&json!("red")));
}

#[test]
fn construction_removes_preselected_items_from_available() {
    let mut opts = fruits();
    opts.selected_items = serde_json::from_value(json!([{"item": "Apple", "value": 1, "group": "Fruits"}])).unwrap();
    let widget = mount(opts);

    assert!(widget.selected().contains("Fruits", "1", "value"));
    assert!(!widget.unselected().contains("Fruits", "1", "value"));
    assert_eq!(widget.summary(Side::Available).total, 1);
    assert_eq!(widget.summary(Side::Selected).total, 1);
}

#[test]
fn move_resets_checkboxes_and_disables_buttons() {
    let mut widget = mount(fruits());

    check(&mut widget, Side::Available, "Fruits", "1");
    let include = widget.view().first_by_class("dual-listbox-include").unwrap();
    assert!(!include.has_attr("disabled"));

    widget
        .handle_event(&Event::Search {
            side: Side::Available,
            text: "app".into(),
        })
        .unwrap();
    widget.handle_event(&Event::Include).unwrap();

    let view = widget.view();
    assert!(view.find_by_class("item-select").iter().all(|el| !el.has_attr("checked")));
    assert!(view.first_by_class("dual-listbox-include").unwrap().has_attr("disabled"));
    assert!(view.first_by_class("dual-listbox-exclude").unwrap().has_attr("disabled"));
    assert_eq!(view.first_by_class("dual-listbox-left-selected").unwrap().text_content(), "0");
    assert!(view.find_by_tag("li").iter().all(|li| !li.is_hidden()));
}

#[test]
fn search_hides_and_restores_rows() {
    let mut widget = mount(fruits());

    widget
        .handle_event(&Event::Search {
            side: Side::Available,
            text: "kiwi".into(),
        })
        .unwrap();
    let left = widget.view().find_by_class("dual-listbox-content")[0];
    assert!(left.find_by_tag("li").iter().all(|li| li.is_hidden()));
    assert!(widget.html().contains("style=\"display:none\""));

    widget
        .handle_event(&Event::Search {
            side: Side::Available,
            text: String::new(),
        })
        .unwrap();
    let left = widget.view().find_by_class("dual-listbox-content")[0];
    assert_eq!(left.find_by_tag("li").len(), 2);
    assert!(left.find_by_tag("li").iter().all(|li| !li.is_hidden()));
}

#[test]
fn hide_empty_groups_drops_emptied_group() {
    let mut opts = options(json!([
        {"item": "Apple", "value": 1, "group": "Fruits"},
        {"item": "Carrot", "value": 3, "group": "Vegetables"},
    ]));
    opts.hide_empty_groups = true;
    let mut widget = mount(opts);

    check(&mut widget, Side::Available, "Vegetables", "3");
    widget.handle_event(&Event::Include).unwrap();

    assert!(!widget.unselected().contains_group("Vegetables"));
    let left = widget.view().find_by_class("dual-listbox-content")[0];
    assert!(left.find_by_class("dual-listbox-group").iter().all(|g| g.get_attr("data-group") != Some("Vegetables")));
}

#[test]
fn empty_available_group_is_kept_without_hide_flag() {
    let mut widget = mount(fruits());

    widget
        .handle_event(&Event::SideToggled {
            side: Side::Available,
            checked: true,
        })
        .unwrap();
    widget.handle_event(&Event::Include).unwrap();

    assert_eq!(widget.unselected().get("Fruits").map(<[_]>::len), Some(0));
    let group_box = widget.view().first_by_class("group-select-all").unwrap();
    assert!(group_box.has_attr("checked"));
    assert!(group_box.has_attr("disabled"));

    widget
        .handle_event(&Event::GroupToggled {
            side: Side::Selected,
            group: "Fruits".into(),
            checked: true,
        })
        .unwrap();
    widget.handle_event(&Event::Exclude).unwrap();
    assert!(widget.selected().is_empty());
}

#[test]
fn item_accessors_never_repeat_identities() {
    let mut opts = options(json!([
        {"item": "Apple", "value": 1, "group": "Fruits"},
        {"item": "Apple", "value": 1, "group": "Favourites"},
        {"item": "Orange", "value": 2, "group": "Fruits"},
    ]));
    opts.selected_items = serde_json::from_value(json!([
        {"item": "Orange", "value": 2, "group": "Citrus"},
        {"item": "Orange", "value": 2, "group": "Fruits"},
    ]))
    .unwrap();
    let widget = mount(opts);

    for items in [widget.get_selected_items(), widget.get_unselected_items(), widget.get_all_items()] {
        let mut ids: Vec<String> = items.iter().map(|i| i.identity("value")).collect();
        let len = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), len);
    }
    assert_eq!(widget.selected_array(), vec![json!(2)]);
    assert_eq!(widget.selected_values().now_or_never(), Some(vec![json!(2), json!(2)]));
    assert_eq!(widget.all_items().len(), 3);
}

#[test]
fn submit_handler_prevents_default_and_receives_selected() {
    let received: Rc<RefCell<Option<Submission>>> = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&received);
    let opts = fruits().on_submit(move |submission| {
        *sink.borrow_mut() = Some(submission.clone());
    });
    let mut widget = mount(opts);

    check(&mut widget, Side::Available, "Fruits", "2");
    widget.handle_event(&Event::Include).unwrap();

    let outcome = widget.submit();
    assert!(outcome.default_prevented);

    let submission = received.borrow_mut().take().unwrap();
    assert_eq!(&submission.selected, widget.selected());
    assert_eq!(&submission.unselected, widget.unselected());
    assert_eq!(submission.selected_array, vec![json!("2")]);
    assert!(widget.mount().form.as_ref().unwrap().fields().is_empty());
}

#[test]
fn submit_event_reports_prevent_default_through_handle_event() {
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    let opts = fruits().on_submit(move |_| *counter.borrow_mut() += 1);
    let mut widget = mount(opts);

    let outcome = widget.handle_event(&Event::Submit).unwrap();

    assert_eq!(outcome, EventOutcome { redrawn: false, default_prevented: true });
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn toggle_event_redraws_without_preventing_default() {
    let mut widget = mount(fruits());

    let outcome = widget
        .handle_event(&Event::ItemToggled {
            side: Side::Available,
            group: "Fruits".into(),
            value: "1".into(),
            checked: true,
        })
        .unwrap();

    assert!(outcome.redrawn);
    assert!(!outcome.default_prevented);
}

#[test]
fn submit_replaces_hidden_fields() {
    let form = HostForm::new()
        .with_field(FormField::text("title", "groceries"))
        .with_field(FormField::hidden("fruits[]", "stale"));
    let mut page = HostPage::new().with_target(MountTarget::new("picker").in_form(form));
    let mut opts = fruits();
    opts.input_name = "fruits".into();
    let mut widget = init_dual_list_box(&mut page, "picker", opts).unwrap();

    widget
        .handle_event(&Event::GroupToggled {
            side: Side::Available,
            group: "Fruits".into(),
            checked: true,
        })
        .unwrap();
    widget.handle_event(&Event::Include).unwrap();

    let outcome = widget.submit();
    assert!(!outcome.default_prevented);

    let form = widget.mount().form.as_ref().unwrap();
    assert_eq!(form.values_of("fruits[]"), vec!["1", "2"]);
    assert_eq!(form.values_of("title"), vec!["groceries"]);
    assert!(form
        .fields()
        .iter()
        .filter(|f| f.name == "fruits[]")
        .all(|f| f.kind == FieldKind::Hidden));

    widget.submit();
    assert_eq!(widget.mount().form.as_ref().unwrap().values_of("fruits[]").len(), 2);
}

#[test]
fn submit_without_form_mutates_nothing() {
    let mut page = HostPage::new().with_target(MountTarget::new("picker"));
    let mut widget = init_dual_list_box(&mut page, "picker", fruits()).unwrap();
    let before = widget.html().to_string();

    let outcome = widget.submit();

    assert!(!outcome.default_prevented);
    assert!(widget.mount().form.is_none());
    assert_eq!(widget.html(), before);
}

#[test]
fn submit_without_form_skips_handler() {
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    let opts = fruits().on_submit(move |_| *counter.borrow_mut() += 1);
    let mut page = HostPage::new().with_target(MountTarget::new("picker"));
    let mut widget = init_dual_list_box(&mut page, "picker", opts).unwrap();

    assert!(!widget.submit().default_prevented);
    assert!(!widget.handle_event(&Event::Submit).unwrap().default_prevented);
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn missing_mount_target_is_an_error() {
    let mut page = HostPage::new().with_target(MountTarget::new("other"));
    let err = init_dual_list_box(&mut page, "#picker", fruits()).unwrap_err();

    assert!(matches!(err, DualListBoxError::MountNotFound(ref s) if s == "#picker"));
    assert_eq!(err.to_string(), "DualListBox root element not found: #picker");
    assert_eq!(page.len(), 1);
}

#[test]
fn theme_provider_changes_do_not_leak_into_built_widgets() {
    let mut provider = ThemeProvider::default();
    provider.use_theme(&PartialTheme {
        btn: Some("button is-small".into()),
        ..PartialTheme::default()
    });

    let mut page = HostPage::new()
        .with_target(MountTarget::new("a"))
        .with_target(MountTarget::new("b"));
    let first = DualListBox::new(&mut page, "a", fruits(), &provider).unwrap();

    provider.use_theme(&PartialTheme {
        btn: Some("button is-large".into()),
        ..PartialTheme::default()
    });
    let mut opts = fruits();
    opts.theme = Some(PartialTheme {
        btn_include: Some("is-primary".into()),
        ..PartialTheme::default()
    });
    let second = DualListBox::new(&mut page, "b", opts, &provider).unwrap();

    assert_eq!(first.settings().theme.classes.btn, "button is-small");
    assert_eq!(second.settings().theme.classes.btn, "button is-large");

    let include = second.view().first_by_class("dual-listbox-include").unwrap();
    assert!(include.has_class("is-primary"));
    assert!(include.has_class("is-large"));

    let plain = mount(fruits());
    assert_ne!(plain.settings().theme.classes.btn, "button is-small");
}

#[test]
fn rendering_is_stable_and_ids_are_prefixed() {
    let widget = mount(fruits());

    assert!(widget.html().starts_with("<div class="));
    assert!(widget.html().contains("id=\"dual_listbox_test\""));
    assert!(widget.html().contains("id=\"dual_listbox_test_left_search\""));
    assert!(widget.html().contains("id=\"test_group_Fruits_left\""));

    let again = widget.view().to_html();
    assert_eq!(widget.html(), again);
}

#[test]
fn labels_are_escaped() {
    let widget = mount(options(json!([
        {"item": "<b>Fish</b> & Chips", "value": "f&c", "group": "Mains"},
    ])));

    assert!(widget.html().contains("&lt;b&gt;Fish&lt;/b&gt; &amp; Chips"));
    assert!(widget.html().contains("data-value=\"f&amp;c\""));
    assert!(!widget.html().contains("<b>"));
}
