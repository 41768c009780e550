//! Variant registry: per-variant defaults and fixed classes.

use std::collections::BTreeMap;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize};

use crate::config::{self, DocumentFormat};
use crate::error::{ConfigurationError, LoadError};
use crate::tokens::{scale, validate_color, ColorToken};

/// Defaults and fixed classes for one typography variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_weight: Option<String>,
    /// Stored as the token it emits; aliases become `text-{alias}`.
    #[serde(deserialize_with = "deserialize_color")]
    pub default_color: String,
    /// Tokens always emitted first for this variant.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
}

impl VariantConfig {
    /// Creates a variant with only a default color.
    pub fn new(default_color: impl Into<String>) -> Self {
        Self {
            default_size: None,
            default_weight: None,
            default_color: canonical_color(default_color.into()),
            classes: Vec::new(),
        }
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.default_size = Some(size.into());
        self
    }

    pub fn weight(mut self, weight: impl Into<String>) -> Self {
        self.default_weight = Some(weight.into());
        self
    }

    /// Sets the fixed classes from a space-separated list.
    pub fn classes(mut self, classes: &str) -> Self {
        self.classes = classes.split_whitespace().map(str::to_string).collect();
        self
    }
}

// Malformed values are kept verbatim so `validate` can report them.
fn canonical_color(raw: String) -> String {
    match validate_color(&raw) {
        ColorToken::Accepted(token) => token,
        ColorToken::Ignored(_) => raw,
    }
}

fn deserialize_color<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    String::deserialize(deserializer).map(canonical_color)
}

/// An immutable registry of typography variants keyed by name.
///
/// # Example
///
/// ```rust
/// use mfe_style::typography::{VariantConfig, VariantRegistry};
///
/// let registry = VariantRegistry::new()
///     .add("body", VariantConfig::new("text-foreground").size("base"))
///     .add("overline", VariantConfig::new("text-muted-foreground").size("xs").classes("uppercase tracking-wide"));
///
/// assert!(registry.validate().is_ok());
/// assert!(registry.get("overline").is_ok());
/// assert!(registry.get("doesnotexist").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantRegistry {
    variants: BTreeMap<String, VariantConfig>,
}

static BUILTIN: Lazy<VariantRegistry> = Lazy::new(builtin_variants);

impl VariantRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared registry of built-in variants.
    pub fn builtin() -> &'static VariantRegistry {
        &BUILTIN
    }

    /// Adds a variant, returning the registry for chaining.
    pub fn add(mut self, name: &str, config: VariantConfig) -> Self {
        self.variants.insert(name.to_string(), config);
        self
    }

    /// Looks up a variant.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownVariant`] if the name is not registered.
    pub fn get(&self, name: &str) -> Result<&VariantConfig, ConfigurationError> {
        self.variants
            .get(name)
            .ok_or_else(|| ConfigurationError::UnknownVariant {
                name: name.to_string(),
                available: self.names().map(str::to_string).collect(),
            })
    }

    pub fn has(&self, name: &str) -> bool {
        self.variants.contains_key(name)
    }

    /// Variant names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variants.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Checks that every variant default resolves to a token.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for (name, config) in &self.variants {
            let invalid = |field: &'static str, value: &str| ConfigurationError::InvalidDefault {
                variant: name.clone(),
                field,
                value: value.to_string(),
            };

            if let Some(size) = &config.default_size {
                if !scale::SIZE.contains(size) {
                    return Err(invalid("size", size));
                }
            }
            if let Some(weight) = &config.default_weight {
                if !scale::WEIGHT.contains(weight) {
                    return Err(invalid("weight", weight));
                }
            }
            if !validate_color(&config.default_color).is_accepted() {
                return Err(invalid("color", &config.default_color));
            }
        }
        Ok(())
    }

    /// Parses and validates a registry from a JSON document.
    pub fn from_json(source: &str) -> Result<Self, LoadError> {
        Self::parse(source, DocumentFormat::Json)
    }

    /// Parses and validates a registry from a YAML document.
    pub fn from_yaml(source: &str) -> Result<Self, LoadError> {
        Self::parse(source, DocumentFormat::Yaml)
    }

    /// Loads and validates a registry file, choosing the format by extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let registry: Self = config::load_document(path.as_ref())?;
        registry.validate()?;
        Ok(registry)
    }

    fn parse(source: &str, format: DocumentFormat) -> Result<Self, LoadError> {
        let registry: Self = format.parse(source)?;
        registry.validate()?;
        Ok(registry)
    }
}

fn builtin_variants() -> VariantRegistry {
    VariantRegistry::new()
        .add(
            "body",
            VariantConfig::new("text-foreground")
                .size("base")
                .weight("normal")
                .classes("leading-7"),
        )
        .add(
            "lead",
            VariantConfig::new("text-muted-foreground")
                .size("xl")
                .weight("normal"),
        )
        .add(
            "large",
            VariantConfig::new("text-foreground")
                .size("lg")
                .weight("semibold"),
        )
        .add(
            "small",
            VariantConfig::new("text-foreground")
                .size("sm")
                .weight("medium")
                .classes("leading-none"),
        )
        .add(
            "muted",
            VariantConfig::new("text-muted-foreground")
                .size("sm")
                .weight("normal"),
        )
        .add(
            "caption",
            VariantConfig::new("text-muted-foreground")
                .size("xs")
                .weight("normal"),
        )
        .add(
            "code",
            VariantConfig::new("text-foreground")
                .size("sm")
                .weight("medium")
                .classes("font-mono bg-muted rounded px-[0.3rem] py-[0.2rem]"),
        )
        .add(
            "kbd",
            VariantConfig::new("text-foreground")
                .size("xs")
                .weight("medium")
                .classes("font-mono bg-muted border border-border rounded px-1.5 py-0.5"),
        )
        .add(
            "quote",
            VariantConfig::new("text-foreground")
                .size("base")
                .weight("normal")
                .classes("border-l-2 border-border pl-6 italic"),
        )
        .add(
            "overline",
            VariantConfig::new("text-muted-foreground")
                .size("xs")
                .weight("semibold")
                .classes("uppercase tracking-wide"),
        )
        .add(
            "h1",
            VariantConfig::new("text-foreground")
                .size("4xl")
                .weight("extrabold")
                .classes("scroll-m-20 tracking-tight"),
        )
        .add(
            "h2",
            VariantConfig::new("text-foreground")
                .size("3xl")
                .weight("semibold")
                .classes("scroll-m-20 tracking-tight"),
        )
        .add(
            "h3",
            VariantConfig::new("text-foreground")
                .size("2xl")
                .weight("semibold")
                .classes("scroll-m-20 tracking-tight"),
        )
        .add(
            "h4",
            VariantConfig::new("text-foreground")
                .size("xl")
                .weight("semibold")
                .classes("scroll-m-20 tracking-tight"),
        )
}
