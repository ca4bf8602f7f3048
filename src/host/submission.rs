//! Submission snapshot, handler and outcome.

use crate::domain::Item;
use crate::store::GroupMap;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Snapshot of the selection handed to a submit handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// Selected-side groups.
    pub selected: GroupMap,
    /// Available-side groups.
    pub unselected: GroupMap,
    /// The construction-time catalog.
    pub all_items: Vec<Item>,
    /// Selected values, deduplicated by identity.
    pub selected_array: Vec<Value>,
}

/// Callback replacing native form submission.
pub struct SubmitHandler(Box<dyn FnMut(&Submission)>);

impl SubmitHandler {
    /// Wraps a closure.
    pub fn new(handler: impl FnMut(&Submission) + 'static) -> Self {
        Self(Box::new(handler))
    }

    /// Invokes the handler.
    pub fn call(&mut self, submission: &Submission) {
        (self.0)(submission);
    }
}

impl fmt::Debug for SubmitHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SubmitHandler(..)")
    }
}

/// Result of a form submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Whether native submission was cancelled.
    pub default_prevented: bool,
}
