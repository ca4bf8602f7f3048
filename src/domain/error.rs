//! Error types for the dual listbox widget.
//!
//! This module defines the centralized error type [`DualListBoxError`] and a type
//! alias [`Result`] used throughout the crate. Errors are implemented with the
//! `thiserror` crate.
//!
//! Only one error is fatal to the widget itself: [`DualListBoxError::MountNotFound`],
//! raised when the mount target cannot be located at construction time. Every other
//! anomaly inside the selection engine (moving an absent item, toggling an unknown
//! group, submitting without a host form) degrades to a silent no-op.

use thiserror::Error;

/// The main error type for dual listbox operations.
///
/// # Examples
///
/// ```rust
/// use dual_listbox::DualListBoxError;
///
/// fn locate(selector: &str) -> Result<(), DualListBoxError> {
///     Err(DualListBoxError::MountNotFound(selector.to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum DualListBoxError {
    /// The mount target selector matched nothing on the host page.
    ///
    /// Aborts construction; the widget never exists in a half-built state.
    #[error("DualListBox root element not found: {0}")]
    MountNotFound(String),

    /// A theme preset could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Construction options are malformed.
    ///
    /// Raised by the explicit parsers (`Options::from_json`); attribute maps fall
    /// back to defaults instead.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for dual listbox operations.
pub type Result<T> = std::result::Result<T, DualListBoxError>;
