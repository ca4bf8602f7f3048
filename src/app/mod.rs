//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the widget facade and the item store. It
//! implements the event-driven flow that powers the interactive widget.
//!
//! # Architecture
//!
//! ```text
//! Host Event → Event Handler → State Mutations → Actions → Host Side Effects
//!                                     ↓
//!                             re-render (if needed)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`search`]: Per-side search visibility
//! - [`state`]: Central widget state container and view model computation
//! - [`summary`]: Counters, select-all states and button enablement

pub mod actions;
pub mod handler;
pub mod search;
pub mod state;
pub mod summary;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use state::{RowKey, Settings, SideView, ViewState, WidgetState};
pub use summary::{ButtonStates, CheckState, GroupCheck, SelectAllState, SelectionSummary};
