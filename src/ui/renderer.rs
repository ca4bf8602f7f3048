//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: Transform `WidgetState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the markup components
//!
//! Rendering is pure: the same state always produces the same tree, and the
//! tree fully replaces whatever the mount target displayed before.
//!
//! # Example
//!
//! ```rust
//! # use dual_listbox::{Options, Settings, ThemeProvider, WidgetState};
//! use dual_listbox::ui::render;
//!
//! # let options = Options::default();
//! # let settings = Settings::resolve(&options, &ThemeProvider::default());
//! # let state = WidgetState::new(settings, Vec::new(), &[]);
//! let tree = render(&state);
//! let html = tree.to_html();
//! assert!(html.contains("dual-listbox"));
//! ```

use crate::app::WidgetState;
use crate::ui::components;
use crate::ui::markup::Element;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the widget to a markup tree.
///
/// Computes the view model from widget state and lays it out with the
/// widget's resolved theme.
///
/// # Parameters
///
/// * `state` - Current widget state
///
/// # Returns
///
/// The root container element.
#[must_use]
pub fn render(state: &WidgetState) -> Element {
    let viewmodel = state.compute_viewmodel();

    let tree = render_viewmodel(&viewmodel, &state.settings.theme);
    tracing::trace!(
        instance = %viewmodel.instance_id,
        left_total = viewmodel.available.summary.total,
        right_total = viewmodel.selected.summary.total,
        "widget rendered"
    );
    tree
}

/// Renders a view model with the given theme.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme) -> Element {
    components::render_layout(vm, theme)
}
