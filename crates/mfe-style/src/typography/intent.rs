//! Style intent: the declarative input to the typography resolver.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::tokens::Breakpoint;

/// A field value that is either a single scalar or a per-breakpoint map.
///
/// Deserializes from either shape:
///
/// ```rust
/// use mfe_style::typography::Responsive;
/// use mfe_style::tokens::Breakpoint;
///
/// let scalar: Responsive<String> = serde_json::from_str(r#""lg""#).unwrap();
/// assert_eq!(scalar, Responsive::Scalar("lg".to_string()));
///
/// let map: Responsive<String> = serde_json::from_str(r#"{"base": "sm", "md": "lg"}"#).unwrap();
/// let entries: Vec<_> = map.iter().collect();
/// assert_eq!(entries[1], (Breakpoint::Md, &"lg".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Responsive<T> {
    Scalar(T),
    Breakpoints(BTreeMap<Breakpoint, T>),
}

impl<T> Responsive<T> {
    /// Builds a responsive value from `(breakpoint, value)` pairs.
    pub fn at<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Breakpoint, T)>,
    {
        Responsive::Breakpoints(entries.into_iter().collect())
    }

    /// Iterates over `(breakpoint, value)` in ascending breakpoint order.
    ///
    /// A scalar is reported as a single `Base` entry.
    pub fn iter(&self) -> Box<dyn Iterator<Item = (Breakpoint, &T)> + '_> {
        match self {
            Responsive::Scalar(value) => Box::new(std::iter::once((Breakpoint::Base, value))),
            Responsive::Breakpoints(map) => Box::new(map.iter().map(|(bp, value)| (*bp, value))),
        }
    }

    /// Maps every present breakpoint through `f`, prefixing the results.
    ///
    /// Values for which `f` returns `None` produce no token; there is no
    /// fallback to a smaller breakpoint.
    pub fn tokens<F>(&self, mut f: F) -> Vec<String>
    where
        F: FnMut(&T) -> Option<String>,
    {
        self.iter()
            .filter_map(|(bp, value)| f(value).map(|token| bp.prefix(&token)))
            .collect()
    }
}

impl<T> From<T> for Responsive<T> {
    fn from(value: T) -> Self {
        Responsive::Scalar(value)
    }
}

impl From<&str> for Responsive<String> {
    fn from(value: &str) -> Self {
        Responsive::Scalar(value.to_string())
    }
}

/// A declarative request for typography classes.
///
/// Only `variant` is required. Scale fields hold raw values (`"lg"`,
/// `"semibold"`) so intents can be deserialized from dynamic props; values
/// outside a field's scale are dropped during resolution.
///
/// # Example
///
/// ```rust
/// use mfe_style::typography::{TypographyIntent, Responsive};
/// use mfe_style::tokens::Breakpoint;
///
/// let intent = TypographyIntent::new("body")
///     .size(Responsive::at([(Breakpoint::Base, "sm".to_string()), (Breakpoint::Md, "lg".to_string())]))
///     .weight("semibold")
///     .truncate(true);
/// assert_eq!(intent.variant, "body");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypographyIntent {
    pub variant: String,
    pub size: Option<Responsive<String>>,
    pub weight: Option<Responsive<String>>,
    pub family: Option<Responsive<String>>,
    pub italic: Option<bool>,
    pub align: Option<Responsive<String>>,
    pub transform: Option<Responsive<String>>,
    pub decoration: Option<Responsive<String>>,
    pub whitespace: Option<Responsive<String>>,
    pub overflow: Option<Responsive<String>>,
    pub leading: Option<Responsive<String>>,
    pub tracking: Option<Responsive<String>>,
    pub line_clamp: Option<Responsive<u8>>,
    pub truncate: bool,
    pub color: Option<String>,
    pub gradient: bool,
    pub selectable: Option<bool>,
}

impl TypographyIntent {
    /// Creates an intent for a variant with no overrides.
    pub fn new(variant: impl Into<String>) -> Self {
        Self {
            variant: variant.into(),
            ..Self::default()
        }
    }

    pub fn size(mut self, size: impl Into<Responsive<String>>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn weight(mut self, weight: impl Into<Responsive<String>>) -> Self {
        self.weight = Some(weight.into());
        self
    }

    pub fn family(mut self, family: impl Into<Responsive<String>>) -> Self {
        self.family = Some(family.into());
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    pub fn align(mut self, align: impl Into<Responsive<String>>) -> Self {
        self.align = Some(align.into());
        self
    }

    pub fn transform(mut self, transform: impl Into<Responsive<String>>) -> Self {
        self.transform = Some(transform.into());
        self
    }

    pub fn decoration(mut self, decoration: impl Into<Responsive<String>>) -> Self {
        self.decoration = Some(decoration.into());
        self
    }

    pub fn whitespace(mut self, whitespace: impl Into<Responsive<String>>) -> Self {
        self.whitespace = Some(whitespace.into());
        self
    }

    pub fn overflow(mut self, overflow: impl Into<Responsive<String>>) -> Self {
        self.overflow = Some(overflow.into());
        self
    }

    pub fn leading(mut self, leading: impl Into<Responsive<String>>) -> Self {
        self.leading = Some(leading.into());
        self
    }

    pub fn tracking(mut self, tracking: impl Into<Responsive<String>>) -> Self {
        self.tracking = Some(tracking.into());
        self
    }

    pub fn line_clamp(mut self, lines: impl Into<Responsive<u8>>) -> Self {
        self.line_clamp = Some(lines.into());
        self
    }

    pub fn truncate(mut self, truncate: bool) -> Self {
        self.truncate = truncate;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn gradient(mut self, gradient: bool) -> Self {
        self.gradient = gradient;
        self
    }

    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = Some(selectable);
        self
    }
}
