//! User interface rendering layer with component-based architecture.
//!
//! This module turns widget state into a markup tree through composable
//! rendering components, with class names supplied by the effective theme.
//!
//! # Architecture
//!
//! ```text
//! WidgetState → compute_viewmodel → UIViewModel → render → Element → HTML
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable widget state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable markup component renderers
//! - [`markup`]: Element tree, queries and HTML serialization
//! - [`theme`]: Class-name presets and the theme provider

pub mod components;
pub mod markup;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use markup::{Element, Node};
pub use renderer::render;
pub use theme::{resolve_theme, PartialTheme, Theme, ThemeClasses, ThemeProvider};
pub use viewmodel::{GroupView, ItemView, PanelView, SearchBarInfo, UIViewModel};
