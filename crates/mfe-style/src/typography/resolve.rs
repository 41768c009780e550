//! Typography resolution: style intent to an ordered class list.
//!
//! Fields are resolved in a fixed order and their tokens concatenated:
//!
//! 1. variant-fixed classes
//! 2. size, weight, family, italic
//! 3. align, transform, decoration, whitespace, overflow
//! 4. leading, tracking
//! 5. line clamp, then truncate unless a clamp of one or more lines was produced
//! 6. gradient, or color (explicit when valid, else the variant default)
//! 7. selectable
//!
//! Later tokens override earlier ones only through CSS specificity on the
//! consumer side; the resolver never merges or reorders.

use std::fmt;

use crate::error::ConfigurationError;
use crate::tokens::{scale, validate_color, ColorToken, Scale};

use super::intent::{Responsive, TypographyIntent};
use super::variant::{VariantConfig, VariantRegistry};

/// Tokens emitted for `gradient: true`, in order.
pub const GRADIENT_TOKENS: [&str; 3] = ["bg-gradient-to-r", "bg-clip-text", "text-transparent"];

/// An ordered list of class tokens.
///
/// Tokens keep the order in which fields were resolved. Literal duplicates
/// are dropped within a single field, never across fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the tokens produced by one field.
    pub fn push_field<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let start = self.tokens.len();
        for token in tokens {
            let token = token.into();
            if token.is_empty() || self.tokens[start..].contains(&token) {
                continue;
            }
            self.tokens.push(token);
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Joins the tokens with single spaces.
    pub fn to_class_string(&self) -> String {
        self.tokens.join(" ")
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_class_string())
    }
}

impl From<ClassList> for String {
    fn from(list: ClassList) -> Self {
        list.to_class_string()
    }
}

/// Resolves an intent against a variant registry.
///
/// # Errors
///
/// Returns [`ConfigurationError::UnknownVariant`] when `intent.variant` is not
/// registered. Every other problem with the intent (values off-scale,
/// malformed colors) degrades to emitting nothing for that field.
///
/// # Example
///
/// ```rust
/// use mfe_style::typography::{resolve, TypographyIntent, VariantRegistry};
///
/// let classes = resolve(
///     &TypographyIntent::new("overline").color("text-red-500"),
///     VariantRegistry::builtin(),
/// )
/// .unwrap();
///
/// assert_eq!(
///     classes.to_string(),
///     "uppercase tracking-wide text-xs font-semibold text-red-500"
/// );
/// ```
pub fn resolve(
    intent: &TypographyIntent,
    registry: &VariantRegistry,
) -> Result<ClassList, ConfigurationError> {
    let variant = registry.get(&intent.variant)?;
    let mut classes = ClassList::new();

    classes.push_field(variant.classes.iter().cloned());

    classes.push_field(scale_or_default(
        &scale::SIZE,
        intent.size.as_ref(),
        variant.default_size.as_deref(),
    ));
    classes.push_field(scale_or_default(
        &scale::WEIGHT,
        intent.weight.as_ref(),
        variant.default_weight.as_deref(),
    ));
    classes.push_field(scale_tokens(&scale::FAMILY, intent.family.as_ref()));
    classes.push_field(
        intent
            .italic
            .map(|italic| if italic { "italic" } else { "not-italic" }),
    );

    classes.push_field(scale_tokens(&scale::ALIGN, intent.align.as_ref()));
    classes.push_field(scale_tokens(&scale::TRANSFORM, intent.transform.as_ref()));
    classes.push_field(scale_tokens(&scale::DECORATION, intent.decoration.as_ref()));
    classes.push_field(scale_tokens(&scale::WHITESPACE, intent.whitespace.as_ref()));
    classes.push_field(scale_tokens(&scale::OVERFLOW, intent.overflow.as_ref()));
    classes.push_field(scale_tokens(&scale::LEADING, intent.leading.as_ref()));
    classes.push_field(scale_tokens(&scale::TRACKING, intent.tracking.as_ref()));

    classes.push_field(clamp_or_truncate(intent));
    classes.push_field(gradient_or_color(intent, variant));

    classes.push_field(
        intent
            .selectable
            .map(|selectable| if selectable { "select-text" } else { "select-none" }),
    );

    Ok(classes)
}

/// Resolves an intent straight to a space-joined class string.
pub fn resolve_classes(
    intent: &TypographyIntent,
    registry: &VariantRegistry,
) -> Result<String, ConfigurationError> {
    resolve(intent, registry).map(|classes| classes.to_class_string())
}

fn scale_tokens(scale: &Scale, value: Option<&Responsive<String>>) -> Vec<String> {
    let Some(value) = value else {
        return Vec::new();
    };
    value.tokens(|raw| match scale.lookup(raw) {
        Some(token) => Some(token.to_string()),
        None => {
            log::debug!("ignoring {} value {:?}: not on scale", scale.field(), raw);
            None
        }
    })
}

// Falls back to the variant default only when the caller omitted the field.
fn scale_or_default(
    scale: &Scale,
    value: Option<&Responsive<String>>,
    default: Option<&str>,
) -> Vec<String> {
    match value {
        Some(_) => scale_tokens(scale, value),
        None => default
            .and_then(|raw| scale.lookup(raw))
            .map(str::to_string)
            .into_iter()
            .collect(),
    }
}

fn clamp_or_truncate(intent: &TypographyIntent) -> Vec<String> {
    let clamp = intent
        .line_clamp
        .as_ref()
        .map(|lines| lines.tokens(|n| scale::line_clamp(*n)))
        .unwrap_or_default();

    let clamped = clamp
        .iter()
        .any(|token| !token.ends_with(scale::LINE_CLAMP_NONE));
    let mut tokens = clamp;
    if intent.truncate && !clamped {
        tokens.push("truncate".to_string());
    }
    tokens
}

fn gradient_or_color(intent: &TypographyIntent, variant: &VariantConfig) -> Vec<String> {
    if intent.gradient {
        return GRADIENT_TOKENS.iter().map(|t| t.to_string()).collect();
    }

    let explicit = intent.color.as_deref().and_then(|raw| match validate_color(raw) {
        ColorToken::Accepted(token) => Some(token),
        ColorToken::Ignored(reason) => {
            log::debug!("ignoring color {:?} ({:?}), using variant default", raw, reason);
            None
        }
    });

    explicit
        .or_else(|| validate_color(&variant.default_color).token().map(str::to_string))
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::Breakpoint;

    fn registry() -> VariantRegistry {
        VariantRegistry::new()
            .add(
                "body",
                VariantConfig::new("text-foreground").size("base").weight("normal"),
            )
            .add(
                "overline",
                VariantConfig::new("text-muted-foreground")
                    .size("xs")
                    .weight("semibold")
                    .classes("uppercase tracking-wide"),
            )
            .add("plain", VariantConfig::new("text-foreground"))
    }

    fn classes(intent: TypographyIntent) -> String {
        resolve_classes(&intent, &registry()).unwrap()
    }

    #[test]
    fn test_defaults_only() {
        assert_eq!(
            classes(TypographyIntent::new("body")),
            "text-base font-normal text-foreground"
        );
    }

    #[test]
    fn test_variant_fixed_classes_come_first() {
        assert_eq!(
            classes(TypographyIntent::new("overline")),
            "uppercase tracking-wide text-xs font-semibold text-muted-foreground"
        );
    }

    #[test]
    fn test_variant_without_size_or_weight_default_emits_nothing() {
        assert_eq!(classes(TypographyIntent::new("plain")), "text-foreground");
    }

    #[test]
    fn test_explicit_values_replace_defaults() {
        assert_eq!(
            classes(TypographyIntent::new("body").size("lg").weight("bold")),
            "text-lg font-bold text-foreground"
        );
    }

    #[test]
    fn test_unknown_scale_value_emits_nothing() {
        // An explicit but unknown size does not fall back to the default.
        assert_eq!(
            classes(TypographyIntent::new("body").size("huge")),
            "font-normal text-foreground"
        );
    }

    #[test]
    fn test_field_order() {
        let intent = TypographyIntent::new("plain")
            .selectable(false)
            .tracking("wide")
            .leading("tight")
            .overflow("ellipsis")
            .whitespace("nowrap")
            .decoration("underline")
            .transform("uppercase")
            .align("center")
            .italic(true)
            .family("mono")
            .weight("medium")
            .size("sm")
            .color("primary");
        assert_eq!(
            classes(intent),
            "text-sm font-medium font-mono italic text-center uppercase underline \
             whitespace-nowrap text-ellipsis leading-tight tracking-wide text-primary select-none"
        );
    }

    #[test]
    fn test_responsive_size_prefixes() {
        let intent = TypographyIntent::new("body").size(Responsive::at([
            (Breakpoint::Xl, "2xl".to_string()),
            (Breakpoint::Base, "sm".to_string()),
            (Breakpoint::Md, "lg".to_string()),
        ]));
        assert!(classes(intent).starts_with("text-sm md:text-lg xl:text-2xl "));
    }

    #[test]
    fn test_responsive_skips_unknown_breakpoint_value() {
        let intent = TypographyIntent::new("plain").align(Responsive::at([
            (Breakpoint::Base, "left".to_string()),
            (Breakpoint::Sm, "middle".to_string()),
            (Breakpoint::Lg, "right".to_string()),
        ]));
        assert_eq!(classes(intent), "text-left lg:text-right text-foreground");
    }

    #[test]
    fn test_line_clamp_wins_over_truncate() {
        let out = classes(TypographyIntent::new("plain").line_clamp(2u8).truncate(true));
        assert!(out.contains("line-clamp-2"));
        assert!(!out.split(' ').any(|t| t == "truncate"));
    }

    #[test]
    fn test_off_scale_line_clamp_lets_truncate_through() {
        let out = classes(TypographyIntent::new("plain").line_clamp(40u8).truncate(true));
        assert_eq!(out, "truncate text-foreground");
    }

    #[test]
    fn test_zero_line_clamp_keeps_truncate() {
        let out = classes(TypographyIntent::new("plain").line_clamp(0u8).truncate(true));
        assert_eq!(out, "line-clamp-none truncate text-foreground");
    }

    #[test]
    fn test_responsive_clamp_with_lines_suppresses_truncate() {
        let intent = TypographyIntent::new("plain")
            .line_clamp(Responsive::at([(Breakpoint::Base, 0u8), (Breakpoint::Md, 3u8)]))
            .truncate(true);
        assert_eq!(classes(intent), "line-clamp-none md:line-clamp-3 text-foreground");
    }

    #[test]
    fn test_truncate_alone() {
        assert_eq!(
            classes(TypographyIntent::new("plain").truncate(true)),
            "truncate text-foreground"
        );
    }

    #[test]
    fn test_gradient_suppresses_color() {
        let out = classes(TypographyIntent::new("body").gradient(true).color("text-red-500"));
        assert_eq!(
            out,
            "text-base font-normal bg-gradient-to-r bg-clip-text text-transparent"
        );
    }

    #[test]
    fn test_invalid_color_falls_back_to_default() {
        let out = classes(TypographyIntent::new("body").color("not-a-valid-token"));
        assert!(!out.contains("not-a-valid-token"));
        assert!(out.ends_with("text-foreground"));
    }

    #[test]
    fn test_empty_color_falls_back_to_default() {
        assert!(classes(TypographyIntent::new("body").color("")).ends_with("text-foreground"));
    }

    #[test]
    fn test_background_color_replaces_default() {
        let out = classes(TypographyIntent::new("body").color("bg-accent"));
        assert!(out.ends_with("bg-accent"));
        assert!(!out.contains("text-foreground"));
    }

    #[test]
    fn test_unknown_variant_is_configuration_error() {
        let err = resolve(&TypographyIntent::new("doesnotexist"), &registry()).unwrap_err();
        assert!(matches!(err, ConfigurationError::UnknownVariant { .. }));
    }

    #[test]
    fn test_duplicates_dropped_within_field_only() {
        let registry = VariantRegistry::new().add(
            "loud",
            VariantConfig::new("text-foreground").classes("uppercase uppercase"),
        );
        let out = resolve_classes(
            &TypographyIntent::new("loud").transform("uppercase"),
            &registry,
        )
        .unwrap();
        assert_eq!(out, "uppercase uppercase text-foreground");
    }

    #[test]
    fn test_class_list_display_matches_join() {
        let list = resolve(&TypographyIntent::new("body"), &registry()).unwrap();
        assert_eq!(list.to_string(), list.to_class_string());
        assert_eq!(list.len(), 3);
        assert!(list.contains("font-normal"));
    }
}
