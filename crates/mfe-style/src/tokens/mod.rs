//! Design tokens consumed by the typography resolver.
//!
//! - [`Breakpoint`]: the ordered responsive breakpoint set
//! - [`Scale`]: per-field lookup tables mapping a style value to a class token
//! - [`validate_color`]: centralized accept-or-ignore color validation

mod breakpoint;
mod color;
pub mod scale;

pub use breakpoint::{Breakpoint, UnknownBreakpoint};
pub use color::{validate_color, ColorToken, IgnoreReason, COLOR_ALIASES};
pub use scale::Scale;
