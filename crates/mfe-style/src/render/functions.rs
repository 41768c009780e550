//! MiniJinja function registration.

use std::sync::Arc;

use minijinja::value::{Rest, Value};
use minijinja::{Environment, Error, ErrorKind};

use crate::adapter::{global_context, lookup, ComponentRegistry, ResolvedStyles, StyleAdapter};
use crate::typography::{resolve_classes, TypographyIntent, VariantRegistry};

/// Registries and context backing the template functions.
#[derive(Debug, Clone)]
pub struct StyleFunctions {
    variants: Arc<VariantRegistry>,
    components: ComponentSource,
}

// Where component lookups take their style mode from.
#[derive(Debug, Clone)]
enum ComponentSource {
    Adapter(StyleAdapter),
    // Reads the process-wide context on every call.
    Global(Arc<ComponentRegistry>),
}

impl ComponentSource {
    fn get_styles(&self, component: &str, slots: &[String]) -> ResolvedStyles {
        match self {
            ComponentSource::Adapter(adapter) => adapter.get_styles(component, slots, None),
            ComponentSource::Global(registry) => {
                lookup(registry, component, slots, global_context().mode())
            }
        }
    }
}

impl StyleFunctions {
    /// Functions bound to a fixed adapter and its context.
    pub fn new(variants: Arc<VariantRegistry>, adapter: StyleAdapter) -> Self {
        Self {
            variants,
            components: ComponentSource::Adapter(adapter),
        }
    }

    /// Built-in registries with the process-wide style context.
    ///
    /// The context is looked up at render time, not when this is built.
    pub fn builtin() -> Self {
        Self::global(Arc::new(ComponentRegistry::builtin().clone()))
    }

    /// Built-in variants and `components`, with the process-wide style context.
    pub fn global(components: Arc<ComponentRegistry>) -> Self {
        Self {
            variants: Arc::new(VariantRegistry::builtin().clone()),
            components: ComponentSource::Global(components),
        }
    }
}

/// Registers the style functions on a minijinja environment.
///
/// - `typography(intent)`: `intent` is a variant name or a map shaped like
///   [`TypographyIntent`]; returns the class string
/// - `component_class(component, *slots)`: class string, empty in computed mode
/// - `component_style(component, *slots)`: inline CSS, empty in class modes
///
/// ```rust
/// use minijinja::{context, Environment};
/// use mfe_style::render::{register_style_functions, StyleFunctions};
///
/// let mut env = Environment::new();
/// register_style_functions(&mut env, StyleFunctions::builtin());
/// let html = env
///     .render_str(r#"<span class="{{ typography("caption") }}">hi</span>"#, context! {})
///     .unwrap();
/// assert_eq!(html, r#"<span class="text-xs font-normal text-muted-foreground">hi</span>"#);
/// ```
pub fn register_style_functions(env: &mut Environment<'_>, functions: StyleFunctions) {
    let variants = Arc::clone(&functions.variants);
    env.add_function("typography", move |intent: Value| -> Result<String, Error> {
        let intent = intent_from_value(&intent)?;
        resolve_classes(&intent, &variants)
            .map_err(|e| Error::new(ErrorKind::InvalidOperation, e.to_string()))
    });

    let components = functions.components.clone();
    env.add_function(
        "component_class",
        move |component: String, slots: Rest<String>| -> String {
            components
                .get_styles(&component, &slots.0)
                .class_name()
                .unwrap_or_default()
                .to_string()
        },
    );

    let components = functions.components;
    env.add_function(
        "component_style",
        move |component: String, slots: Rest<String>| -> String {
            components
                .get_styles(&component, &slots.0)
                .computed_style()
                .map(|style| style.to_inline_css())
                .unwrap_or_default()
        },
    );
}

fn intent_from_value(value: &Value) -> Result<TypographyIntent, Error> {
    if let Some(variant) = value.as_str() {
        return Ok(TypographyIntent::new(variant));
    }
    let invalid = |e: serde_json::Error| {
        Error::new(
            ErrorKind::InvalidOperation,
            format!("invalid typography intent: {}", e),
        )
    };
    let json = serde_json::to_value(value).map_err(invalid)?;
    serde_json::from_value(json).map_err(invalid)
}
