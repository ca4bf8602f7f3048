//! Domain layer for the dual listbox widget.
//!
//! This module contains the core domain types, independent of rendering or host
//! page concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: Item records, field mappings and the two panel sides

pub mod error;
pub mod item;

pub use error::{DualListBoxError, Result};
pub use item::{value_to_string, FieldNames, Item, Side, DEFAULT_GROUP};
