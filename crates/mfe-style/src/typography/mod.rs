//! Typography resolution.
//!
//! This module turns a declarative [`TypographyIntent`] into an ordered
//! [`ClassList`]:
//!
//! - [`VariantRegistry`]: static per-variant defaults and fixed classes
//! - [`TypographyIntent`] / [`Responsive`]: the resolver's input
//! - [`resolve`]: the pure resolver
//!
//! Resolution is deterministic, so results can be cached by intent.

mod intent;
mod resolve;
mod variant;

pub use intent::{Responsive, TypographyIntent};
pub use resolve::{resolve, resolve_classes, ClassList, GRADIENT_TOKENS};
pub use variant::{VariantConfig, VariantRegistry};
