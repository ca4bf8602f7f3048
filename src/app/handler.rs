//! Event handling and state transition logic.
//!
//! This module implements the interaction controller: it translates user
//! interactions on the rendered markup into state changes and action
//! sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the host page (checkbox changes, clicks, typing)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `WidgetState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Checkbox**: `ItemToggled`, `GroupToggled`, `SideToggled`
//! - **Buttons**: `Include`, `Exclude`
//! - **Input**: `Search`
//! - **Form**: `Submit`

use crate::app::{Action, WidgetState};
use crate::domain::error::Result;
use crate::domain::Side;

/// Events triggered by interaction with the rendered widget.
///
/// Groups and items are addressed by the `data-group` and `data-value`
/// attributes of the rendered rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A row checkbox changed.
    ItemToggled {
        /// Side the row is rendered on.
        side: Side,
        /// Group label of the row.
        group: String,
        /// String identity of the row.
        value: String,
        /// New checkbox state.
        checked: bool,
    },

    /// A group's select-all checkbox changed.
    GroupToggled {
        /// Side the group is rendered on.
        side: Side,
        /// Group label.
        group: String,
        /// New checkbox state.
        checked: bool,
    },

    /// A side's select-all checkbox changed.
    SideToggled {
        /// Side whose footer checkbox changed.
        side: Side,
        /// New checkbox state.
        checked: bool,
    },

    /// The include button was clicked.
    Include,

    /// The exclude button was clicked.
    Exclude,

    /// A search box received input.
    Search {
        /// Side whose search box changed.
        side: Side,
        /// Full search text.
        text: String,
    },

    /// The enclosing form is being submitted.
    Submit,
}

/// Processes an event, mutates widget state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to widget state
/// * `event` - Event to process
///
/// # Returns
///
/// Whether the widget must be re-rendered, and the actions to execute in
/// sequence. Include and exclude with nothing checked change nothing.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the signature stable for hosts.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event.
pub fn handle_event(state: &mut WidgetState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::ItemToggled {
            side,
            group,
            value,
            checked,
        } => Ok((state.set_item_checked(*side, group, value, *checked), vec![])),
        Event::GroupToggled { side, group, checked } => {
            Ok((state.set_group_checked(*side, group, *checked), vec![]))
        }
        Event::SideToggled { side, checked } => {
            state.set_side_checked(*side, *checked);
            Ok((true, vec![]))
        }
        Event::Include => Ok((move_from(state, Side::Available), vec![])),
        Event::Exclude => Ok((move_from(state, Side::Selected), vec![])),
        Event::Search { side, text } => {
            tracing::debug!(side = %side, query = %text, "search updated");
            state.set_search(*side, text);
            Ok((true, vec![]))
        }
        Event::Submit => Ok((false, submit_actions(state))),
    }
}

fn move_from(state: &mut WidgetState, from: Side) -> bool {
    if !state.summary(from).can_move() {
        tracing::debug!(from = %from, "move ignored: nothing checked");
        return false;
    }
    state.move_checked(from);
    true
}

fn submit_actions(state: &WidgetState) -> Vec<Action> {
    if state.settings.has_submit_handler {
        tracing::debug!("submission handed to submit handler");
        return vec![Action::PreventDefault, Action::InvokeSubmitHandler(state.submission())];
    }

    if state.settings.submit_form {
        let fields = &state.settings.fields;
        let values = state
            .selected()
            .items()
            .map(|item| item.identity(&fields.value))
            .collect::<Vec<_>>();
        tracing::debug!(count = values.len(), "writing hidden fields");
        return vec![Action::ReplaceHiddenFields {
            name: state.settings.hidden_field_name(),
            values,
        }];
    }

    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Settings;
    use crate::ui::theme::ThemeProvider;
    use crate::Options;
    use serde_json::json;

    fn state_with(mut options: Options) -> WidgetState {
        options.data_array = serde_json::from_value(json!([
            {"item": "Apple", "value": 1, "group": "Fruits"},
            {"item": "Orange", "value": 2, "group": "Fruits"},
        ]))
        .unwrap();
        let settings = Settings::resolve(&options, &ThemeProvider::default());
        WidgetState::new(settings, options.data_array, &options.selected_items)
    }

    fn toggle(side: Side, value: &str) -> Event {
        Event::ItemToggled {
            side,
            group: "Fruits".into(),
            value: value.into(),
            checked: true,
        }
    }

    #[test]
    fn include_without_checked_items_is_noop() {
        let mut state = state_with(Options::default());
        let (redraw, actions) = handle_event(&mut state, &Event::Include).unwrap();
        assert!(!redraw);
        assert!(actions.is_empty());
        assert!(state.selected().is_empty());
    }

    #[test]
    fn include_then_exclude_round_trips_item() {
        let mut state = state_with(Options::default());

        handle_event(&mut state, &toggle(Side::Available, "1")).unwrap();
        let (redraw, _) = handle_event(&mut state, &Event::Include).unwrap();
        assert!(redraw);
        assert!(state.selected().contains("Fruits", "1", "value"));

        handle_event(&mut state, &toggle(Side::Selected, "1")).unwrap();
        handle_event(&mut state, &Event::Exclude).unwrap();
        assert!(state.selected().is_empty());
        assert_eq!(state.unselected().item_count(), 2);
    }

    #[test]
    fn unknown_row_toggle_does_not_redraw() {
        let mut state = state_with(Options::default());
        let (redraw, _) = handle_event(&mut state, &toggle(Side::Available, "42")).unwrap();
        assert!(!redraw);
    }

    #[test]
    fn search_redraws_without_touching_store() {
        let mut state = state_with(Options::default());
        let before = state.unselected().clone();
        let (redraw, _) = handle_event(
            &mut state,
            &Event::Search {
                side: Side::Available,
                text: "xyz".into(),
            },
        )
        .unwrap();
        assert!(redraw);
        assert_eq!(state.unselected(), &before);
        assert_eq!(state.view().side(Side::Available).query, "xyz");
    }

    #[test]
    fn submit_writes_hidden_fields_by_default() {
        let mut state = state_with(Options {
            input_name: "fruits".into(),
            ..Options::default()
        });
        handle_event(&mut state, &toggle(Side::Available, "2")).unwrap();
        handle_event(&mut state, &Event::Include).unwrap();

        let (redraw, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert!(!redraw);
        assert_eq!(
            actions,
            vec![Action::ReplaceHiddenFields {
                name: "fruits[]".into(),
                values: vec!["2".into()],
            }]
        );
    }

    #[test]
    fn submit_with_handler_prevents_default() {
        let mut state = state_with(Options::default().on_submit(|_| {}));
        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert_eq!(actions[0], Action::PreventDefault);
        assert!(matches!(&actions[1], Action::InvokeSubmitHandler(s) if s.selected.is_empty()));
    }

    #[test]
    fn submit_form_disabled_emits_nothing() {
        let mut state = state_with(Options {
            submit_form: false,
            ..Options::default()
        });
        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert!(actions.is_empty());
    }
}
