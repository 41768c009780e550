//! Style mode adapter.
//!
//! Components ask for styles by component name and slot keys; the adapter
//! answers in whichever of three modes the host supports:
//!
//! - [`StyleMode::Native`]: utility classes for a host that runs the utility framework
//! - [`StyleMode::Precompiled`]: class names from the static stylesheet bundle
//! - [`StyleMode::Computed`]: an inline [`StyleMap`]
//!
//! The mode lives in a [`StyleContext`], detected once through a [`Prober`]
//! unless configured explicitly. Lookups never fail: unknown components and
//! slots produce empty results.

mod builtin;
mod context;
mod lookup;
mod mode;
mod probe;
mod registry;

pub use context::{
    configure_style_mode, global_context, install_global_context, reset_style_mode, ModeState,
    StyleContext,
};
pub use lookup::{get_styles, lookup, ResolvedStyles, StyleAdapter};
pub use mode::{StyleMode, UnknownStyleMode};
pub use probe::{ConstantProber, Prober, TailwindConfigProber, TAILWIND_CONFIG_FILES};
pub use registry::{ComponentRegistry, ComponentStyles, SlotStyles, StyleMap};
