//! Host page contract and submission adapter.
//!
//! The widget renders into a [`MountTarget`] taken from a [`HostPage`]. A
//! target may sit inside a [`HostForm`]; on submit the widget either hands a
//! [`Submission`] to the configured handler or rewrites the form's hidden
//! fields.
//!
//! # Modules
//!
//! - [`page`]: Mount targets addressed by selector
//! - [`form`]: Enclosing form and its fields
//! - [`submission`]: Submit handler, snapshot and outcome types

pub mod form;
pub mod page;
pub mod submission;

pub use form::{FieldKind, FormField, HostForm};
pub use page::{HostPage, MountTarget};
pub use submission::{Submission, SubmitHandler, SubmitOutcome};
