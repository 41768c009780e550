//! Color token validation.
//!
//! Color values are threaded through several component layers before they
//! reach the resolver, so malformed input is expected. [`validate_color`]
//! is the single place that decides whether a value becomes a token.

/// Design-system color aliases. An alias `x` resolves to `text-x`.
pub const COLOR_ALIASES: &[&str] = &[
    "primary",
    "secondary",
    "accent",
    "muted",
    "muted-foreground",
    "foreground",
    "destructive",
    "success",
    "warning",
    "info",
];

const COLOR_PREFIXES: &[&str] = &["text-", "bg-"];

/// Outcome of validating a color value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorToken {
    /// The value is usable; carries the token to emit.
    Accepted(String),
    /// The value is dropped; the caller falls back to its default.
    Ignored(IgnoreReason),
}

/// Why a color value was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Empty or whitespace-only.
    Empty,
    /// Neither a prefixed utility nor a known alias.
    Malformed,
}

impl ColorToken {
    /// Returns the accepted token, if any.
    pub fn token(&self) -> Option<&str> {
        match self {
            ColorToken::Accepted(token) => Some(token),
            ColorToken::Ignored(_) => None,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, ColorToken::Accepted(_))
    }
}

/// Validates a raw color value.
///
/// ```rust
/// use mfe_style::tokens::{validate_color, ColorToken, IgnoreReason};
///
/// assert_eq!(validate_color("text-red-500"), ColorToken::Accepted("text-red-500".into()));
/// assert_eq!(validate_color("primary"), ColorToken::Accepted("text-primary".into()));
/// assert_eq!(validate_color("not-a-valid-token"), ColorToken::Ignored(IgnoreReason::Malformed));
/// ```
pub fn validate_color(raw: &str) -> ColorToken {
    let value = raw.trim();
    if value.is_empty() {
        return ColorToken::Ignored(IgnoreReason::Empty);
    }

    if COLOR_ALIASES.contains(&value) {
        return ColorToken::Accepted(format!("text-{}", value));
    }

    let prefixed = COLOR_PREFIXES.iter().any(|prefix| {
        value
            .strip_prefix(prefix)
            .is_some_and(|suffix| !suffix.is_empty() && suffix.chars().all(is_suffix_char))
    });

    if prefixed {
        ColorToken::Accepted(value.to_string())
    } else {
        ColorToken::Ignored(IgnoreReason::Malformed)
    }
}

// Lowercase utility characters plus arbitrary-value brackets (`text-[#fff]`).
fn is_suffix_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '/' | '.' | '[' | ']' | '#')
}
