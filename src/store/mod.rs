//! Grouped item store.
//!
//! Holds the two group collections ("available" and "selected") that are the
//! source of truth for the widget. Rendering and the selection summary are
//! derived from this store plus the per-render view state in [`crate::app`].
//!
//! # Modules
//!
//! - `groups`: insertion-ordered group → items map with duplicate suppression
//! - `item_store`: the two-sided store, construction dedup and move semantics

pub mod groups;
pub mod item_store;

pub use groups::GroupMap;
pub use item_store::{ItemStore, MovePolicy};
