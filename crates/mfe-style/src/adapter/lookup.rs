//! Uniform style lookup across the three style modes.

use std::sync::Arc;

use super::context::{global_context, StyleContext};
use super::mode::StyleMode;
use super::registry::{ComponentRegistry, StyleMap};

/// The styles a component should apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedStyles {
    /// A space-joined class string (native or precompiled mode).
    ClassName(String),
    /// Merged inline style properties (computed mode).
    Computed(StyleMap),
}

impl ResolvedStyles {
    pub fn class_name(&self) -> Option<&str> {
        match self {
            ResolvedStyles::ClassName(class) => Some(class),
            ResolvedStyles::Computed(_) => None,
        }
    }

    pub fn computed_style(&self) -> Option<&StyleMap> {
        match self {
            ResolvedStyles::ClassName(_) => None,
            ResolvedStyles::Computed(style) => Some(style),
        }
    }

    /// Returns `true` when nothing was found; callers apply their own fallback.
    pub fn is_empty(&self) -> bool {
        match self {
            ResolvedStyles::ClassName(class) => class.is_empty(),
            ResolvedStyles::Computed(style) => style.is_empty(),
        }
    }
}

/// Looks up component styles in the mode chosen by a [`StyleContext`].
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use mfe_style::adapter::{ComponentRegistry, StyleAdapter, StyleContext, StyleMode};
///
/// let adapter = StyleAdapter::new(
///     Arc::new(StyleContext::configured(StyleMode::Precompiled)),
///     Arc::new(ComponentRegistry::builtin().clone()),
/// );
/// let styles = adapter.get_styles("button", &["base", "size-lg", "variant-primary"], None);
/// assert_eq!(styles.class_name(), Some("mfe-btn mfe-btn--lg mfe-btn--primary"));
/// ```
#[derive(Debug, Clone)]
pub struct StyleAdapter {
    context: Arc<StyleContext>,
    registry: Arc<ComponentRegistry>,
}

impl StyleAdapter {
    pub fn new(context: Arc<StyleContext>, registry: Arc<ComponentRegistry>) -> Self {
        Self { context, registry }
    }

    pub fn context(&self) -> &StyleContext {
        &self.context
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Resolves `slots` of `component`.
    ///
    /// An explicit mode applies to this call only and skips detection.
    /// Unknown components and slots contribute nothing.
    pub fn get_styles<S: AsRef<str>>(
        &self,
        component: &str,
        slots: &[S],
        explicit: Option<StyleMode>,
    ) -> ResolvedStyles {
        let mode = explicit.unwrap_or_else(|| self.context.mode());
        lookup(&self.registry, component, slots, mode)
    }
}

/// Resolves styles from `registry` in a fixed mode.
pub fn lookup<S: AsRef<str>>(
    registry: &ComponentRegistry,
    component: &str,
    slots: &[S],
    mode: StyleMode,
) -> ResolvedStyles {
    let Some(styles) = registry.get(component) else {
        log::debug!("no styles registered for component {:?}", component);
        return empty(mode);
    };

    let found = slots.iter().filter_map(|slot| {
        let slot = slot.as_ref();
        let entry = styles.get(slot);
        if entry.is_none() {
            log::debug!("component {:?} has no slot {:?}", component, slot);
        }
        entry
    });

    match mode {
        StyleMode::Computed => {
            let mut merged = StyleMap::new();
            for entry in found {
                merged.merge(&entry.computed);
            }
            ResolvedStyles::Computed(merged)
        }
        StyleMode::Native | StyleMode::Precompiled => {
            let classes: Vec<&str> = found
                .map(|entry| match mode {
                    StyleMode::Native => entry.native.trim(),
                    _ => entry.precompiled.trim(),
                })
                .filter(|class| !class.is_empty())
                .collect();
            ResolvedStyles::ClassName(classes.join(" "))
        }
    }
}

fn empty(mode: StyleMode) -> ResolvedStyles {
    if mode.uses_class_names() {
        ResolvedStyles::ClassName(String::new())
    } else {
        ResolvedStyles::Computed(StyleMap::new())
    }
}

/// Resolves built-in component styles through the process-wide context.
pub fn get_styles<S: AsRef<str>>(
    component: &str,
    slots: &[S],
    explicit: Option<StyleMode>,
) -> ResolvedStyles {
    let mode = explicit.unwrap_or_else(|| global_context().mode());
    lookup(ComponentRegistry::builtin(), component, slots, mode)
}
