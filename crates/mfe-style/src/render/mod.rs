//! Template integration.
//!
//! Exposes typography resolution and component style lookup as minijinja
//! functions, so server-rendered templates share the component styling rules.

mod functions;

pub use functions::{register_style_functions, StyleFunctions};
