//! The dual listbox widget facade.
//!
//! [`DualListBox`] ties the pieces together: it owns its mount target, the
//! widget state and the optional submit handler. Every event goes through the
//! handler, the returned actions are executed against the mount target's form,
//! and the markup is regenerated whenever the handler asks for a redraw.
//!
//! # Example
//!
//! ```rust
//! use dual_listbox::{DualListBox, Event, HostPage, MountTarget, Options, Side, ThemeProvider};
//!
//! let mut page = HostPage::new().with_target(MountTarget::new("picker"));
//! let options = Options::from_json(r#"{
//!     "dataArray": [{"item": "Apple", "value": 1, "group": "Fruits"}]
//! }"#)?;
//! let mut widget = DualListBox::new(&mut page, "#picker", options, &ThemeProvider::default())?;
//!
//! widget.handle_event(&Event::ItemToggled {
//!     side: Side::Available,
//!     group: "Fruits".into(),
//!     value: "1".into(),
//!     checked: true,
//! })?;
//! widget.handle_event(&Event::Include)?;
//! assert_eq!(widget.get_selected_items().len(), 1);
//! # Ok::<(), dual_listbox::DualListBoxError>(())
//! ```

use crate::app::{handle_event, Action, Event, Settings, WidgetState};
use crate::app::summary::SelectionSummary;
use crate::domain::{DualListBoxError, Item, Result, Side};
use crate::host::{HostPage, MountTarget, SubmitHandler, SubmitOutcome};
use crate::store::GroupMap;
use crate::ui::markup::Element;
use crate::ui::render;
use crate::ui::theme::ThemeProvider;
use crate::Options;
use futures_util::future::{ready, Ready};
use serde_json::Value;

/// Result of [`DualListBox::handle_event`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventOutcome {
    /// Whether the markup was regenerated.
    pub redrawn: bool,
    /// Whether native form submission was cancelled.
    pub default_prevented: bool,
}

/// A mounted dual listbox.
#[derive(Debug)]
pub struct DualListBox {
    state: WidgetState,
    mount: MountTarget,
    on_submit: Option<SubmitHandler>,
    tree: Element,
}

impl DualListBox {
    /// Mounts a widget on the target matched by `selector`.
    ///
    /// The target is taken out of the page; the widget owns it from now on
    /// and renders into it immediately.
    ///
    /// # Parameters
    ///
    /// * `page` - Host page holding the mount target
    /// * `selector` - `#id` or bare id of the target
    /// * `options` - Construction options
    /// * `provider` - Source of the default theme
    ///
    /// # Errors
    ///
    /// Returns [`DualListBoxError::MountNotFound`] if no target matches.
    pub fn new(page: &mut HostPage, selector: &str, mut options: Options, provider: &ThemeProvider) -> Result<Self> {
        let _span = tracing::debug_span!("dual_listbox_new", selector = %selector).entered();

        let Some(mount) = page.take(selector) else {
            tracing::error!(selector = %selector, "mount target not found");
            return Err(DualListBoxError::MountNotFound(selector.to_string()));
        };

        let settings = Settings::resolve(&options, provider);
        let on_submit = options.on_submit.take();
        let data = std::mem::take(&mut options.data_array);
        let state = WidgetState::new(settings, data, &options.selected_items);

        tracing::debug!(
            instance = %state.settings.instance_id,
            theme = %state.settings.theme.name,
            available = state.unselected().item_count(),
            selected = state.selected().item_count(),
            "widget constructed"
        );

        let mut widget = Self {
            state,
            mount,
            on_submit,
            tree: Element::new("div"),
        };
        widget.render();
        Ok(widget)
    }

    /// Regenerates the markup and replaces the mount target's contents.
    fn render(&mut self) {
        self.tree = render(&self.state);
        self.mount.markup = self.tree.to_html();
    }

    /// Processes an interaction event.
    ///
    /// [`Event::Submit`] is routed through [`DualListBox::submit`], so a host
    /// feeding every event through this method still learns whether native
    /// submission must be cancelled.
    ///
    /// # Returns
    ///
    /// Whether the widget was re-rendered, and whether native submission was
    /// cancelled.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn handle_event(&mut self, event: &Event) -> Result<EventOutcome> {
        if matches!(event, Event::Submit) {
            let submitted = self.submit();
            return Ok(EventOutcome {
                redrawn: false,
                default_prevented: submitted.default_prevented,
            });
        }

        let (redraw, actions) = handle_event(&mut self.state, event)?;
        self.execute(actions);
        if redraw {
            self.render();
        }
        Ok(EventOutcome {
            redrawn: redraw,
            default_prevented: false,
        })
    }

    /// Submits the enclosing form.
    ///
    /// With a submit handler, native submission is cancelled and the handler
    /// receives the current selection. Otherwise, if form submission is
    /// enabled, the form's hidden fields are rewritten and submission proceeds.
    ///
    /// Without an enclosing form there is nothing to submit: an error is
    /// logged, the handler is not called and nothing changes.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.mount.form.is_none() {
            tracing::error!(mount = %self.mount.id, "parent form not found");
            return SubmitOutcome::default();
        }

        match handle_event(&mut self.state, &Event::Submit) {
            Ok((_, actions)) => self.execute(actions),
            Err(e) => {
                tracing::error!(error = %e, "submit failed");
                SubmitOutcome::default()
            }
        }
    }

    fn execute(&mut self, actions: Vec<Action>) -> SubmitOutcome {
        let mut outcome = SubmitOutcome::default();
        for action in actions {
            match action {
                Action::PreventDefault => outcome.default_prevented = true,
                Action::InvokeSubmitHandler(submission) => {
                    if let Some(handler) = self.on_submit.as_mut() {
                        handler.call(&submission);
                    }
                }
                Action::ReplaceHiddenFields { name, values } => {
                    let Some(form) = self.mount.form.as_mut() else {
                        tracing::error!(mount = %self.mount.id, "parent form not found");
                        continue;
                    };
                    let removed = form.remove_named(&name);
                    for value in &values {
                        form.append_hidden(&name, value);
                    }
                    tracing::debug!(field = %name, removed, appended = values.len(), "hidden fields replaced");
                }
            }
        }
        outcome
    }

    /// Raw value fields of every selected item, without dedup.
    ///
    /// The future is already resolved.
    pub fn selected_values(&self) -> Ready<Vec<Value>> {
        ready(self.state.selected_values())
    }

    /// Selected-side groups.
    #[must_use]
    pub const fn selected(&self) -> &GroupMap {
        self.state.selected()
    }

    /// Available-side groups.
    #[must_use]
    pub const fn unselected(&self) -> &GroupMap {
        self.state.unselected()
    }

    /// The construction-time catalog.
    #[must_use]
    pub fn all_items(&self) -> &[Item] {
        self.state.all_items()
    }

    /// Selected values, deduplicated by identity.
    #[must_use]
    pub fn selected_array(&self) -> Vec<Value> {
        self.state.selected_array()
    }

    /// Selected items, one per identity.
    #[must_use]
    pub fn get_selected_items(&self) -> Vec<Item> {
        self.state.get_selected_items()
    }

    /// Available items, one per identity.
    #[must_use]
    pub fn get_unselected_items(&self) -> Vec<Item> {
        self.state.get_unselected_items()
    }

    /// Current items of both sides, one per identity.
    #[must_use]
    pub fn get_all_items(&self) -> Vec<Item> {
        self.state.get_all_items()
    }

    /// Rendered HTML of the mount target.
    #[must_use]
    pub fn html(&self) -> &str {
        &self.mount.markup
    }

    /// Rendered markup tree.
    #[must_use]
    pub const fn view(&self) -> &Element {
        &self.tree
    }

    /// Counters of one side.
    #[must_use]
    pub fn summary(&self, side: Side) -> SelectionSummary {
        self.state.summary(side)
    }

    /// Resolved settings.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.state.settings
    }

    /// The owned mount target, including its form.
    #[must_use]
    pub const fn mount(&self) -> &MountTarget {
        &self.mount
    }

    /// Releases the mount target.
    #[must_use]
    pub fn into_mount(self) -> MountTarget {
        self.mount
    }
}

/// Mounts a widget using the built-in default theme.
///
/// # Errors
///
/// Returns [`DualListBoxError::MountNotFound`] if no target matches.
pub fn init_dual_list_box(page: &mut HostPage, selector: &str, options: Options) -> Result<DualListBox> {
    DualListBox::new(page, selector, options, &ThemeProvider::default())
}
