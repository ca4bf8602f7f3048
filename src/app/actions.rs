//! Actions representing side effects to be executed by the widget facade.
//!
//! The event handler never touches the host page. It returns a `Vec<Action>`
//! after processing each event, and the facade executes them in sequence
//! against the mount target and its enclosing form.

use crate::host::Submission;

/// Commands representing side effects on the host page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Cancels the host form's native submission.
    PreventDefault,

    /// Hands a snapshot of the selection to the configured submit handler.
    InvokeSubmitHandler(Submission),

    /// Rewrites the hidden fields of the enclosing form.
    ///
    /// Every existing field named `name` is removed, then one hidden field per
    /// value is appended in order.
    ReplaceHiddenFields {
        /// Field name, `"{inputName}[]"`.
        name: String,
        /// One value per selected item, in store order.
        values: Vec<String>,
    },
}
