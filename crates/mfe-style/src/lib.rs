//! # MFE Style - typography classes and multi-mode component styles
//!
//! This crate holds the styling core of the MFE Shell component library:
//!
//! - **Typography resolution**: a [`TypographyIntent`] (variant, size, weight,
//!   responsive breakpoints, color, ...) becomes a deterministic, ordered list
//!   of utility class tokens via [`resolve`].
//! - **Style mode adaptation**: components ask for styles by name and slot;
//!   [`get_styles`] answers with utility classes, precompiled bundle classes,
//!   or an inline style map depending on the detected or configured
//!   [`StyleMode`].
//!
//! ## Quick Start
//!
//! ```rust
//! use mfe_style::{resolve_classes, TypographyIntent, VariantRegistry};
//! use mfe_style::tokens::Breakpoint;
//! use mfe_style::typography::Responsive;
//!
//! let intent = TypographyIntent::new("body")
//!     .size(Responsive::at([
//!         (Breakpoint::Base, "sm".to_string()),
//!         (Breakpoint::Md, "lg".to_string()),
//!     ]))
//!     .color("primary");
//!
//! let classes = resolve_classes(&intent, VariantRegistry::builtin()).unwrap();
//! assert_eq!(classes, "leading-7 text-sm md:text-lg font-normal text-primary");
//! ```
//!
//! ## Style Modes
//!
//! ```rust
//! use mfe_style::{get_styles, StyleMode};
//!
//! let styles = get_styles("button", &["base", "size-lg"], Some(StyleMode::Precompiled));
//! assert_eq!(styles.class_name(), Some("mfe-btn mfe-btn--lg"));
//! ```
//!
//! Without an explicit mode the process-wide [`StyleContext`] detects one the
//! first time it is asked and keeps it. Set `MFE_STYLE_MODE` or call
//! [`configure_style_mode`] to pin it.
//!
//! ## Errors
//!
//! Only registry wiring mistakes are errors ([`ConfigurationError`]). Bad
//! dynamic input (off-scale values, malformed colors, unknown components or
//! slots) silently produces no token.

pub mod adapter;
pub mod config;
mod error;
pub mod render;
pub mod tokens;
pub mod typography;

pub use adapter::{
    configure_style_mode, get_styles, global_context, install_global_context, reset_style_mode,
    ComponentRegistry, Prober, ResolvedStyles, StyleAdapter, StyleContext, StyleMap, StyleMode,
};
pub use error::{ConfigurationError, LoadError};
pub use typography::{resolve, resolve_classes, ClassList, TypographyIntent, VariantRegistry};
