//! Lookup tables mapping typography field values to utility class tokens.
//!
//! Each [`Scale`] is a closed table. A value missing from the table resolves
//! to nothing, which keeps the resolver total over arbitrary string input.
//!
//! | Field | Example value | Token |
//! |-------|---------------|-------|
//! | size | `lg` | `text-lg` |
//! | weight | `semibold` | `font-semibold` |
//! | align | `center` | `text-center` |
//! | transform | `none` | `normal-case` |
//! | leading | `tight` | `leading-tight` |

/// A named, closed lookup table for one typography field.
#[derive(Debug, Clone, Copy)]
pub struct Scale {
    field: &'static str,
    entries: &'static [(&'static str, &'static str)],
}

impl Scale {
    const fn new(field: &'static str, entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { field, entries }
    }

    /// The field this scale resolves.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Maps a value to its token, or `None` if the value is not on the scale.
    pub fn lookup(&self, value: &str) -> Option<&'static str> {
        let value = value.trim();
        self.entries
            .iter()
            .find(|(key, _)| *key == value)
            .map(|(_, token)| *token)
    }

    /// Returns `true` if the value is on the scale.
    pub fn contains(&self, value: &str) -> bool {
        self.lookup(value).is_some()
    }

    /// Iterates over the accepted values in scale order.
    pub fn values(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(key, _)| *key)
    }
}

pub const SIZE: Scale = Scale::new(
    "size",
    &[
        ("xs", "text-xs"),
        ("sm", "text-sm"),
        ("base", "text-base"),
        ("lg", "text-lg"),
        ("xl", "text-xl"),
        ("2xl", "text-2xl"),
        ("3xl", "text-3xl"),
        ("4xl", "text-4xl"),
        ("5xl", "text-5xl"),
        ("6xl", "text-6xl"),
        ("7xl", "text-7xl"),
        ("8xl", "text-8xl"),
        ("9xl", "text-9xl"),
    ],
);

pub const WEIGHT: Scale = Scale::new(
    "weight",
    &[
        ("thin", "font-thin"),
        ("extralight", "font-extralight"),
        ("light", "font-light"),
        ("normal", "font-normal"),
        ("medium", "font-medium"),
        ("semibold", "font-semibold"),
        ("bold", "font-bold"),
        ("extrabold", "font-extrabold"),
        ("black", "font-black"),
    ],
);

pub const FAMILY: Scale = Scale::new(
    "family",
    &[
        ("sans", "font-sans"),
        ("serif", "font-serif"),
        ("mono", "font-mono"),
    ],
);

pub const ALIGN: Scale = Scale::new(
    "align",
    &[
        ("left", "text-left"),
        ("center", "text-center"),
        ("right", "text-right"),
        ("justify", "text-justify"),
        ("start", "text-start"),
        ("end", "text-end"),
    ],
);

pub const TRANSFORM: Scale = Scale::new(
    "transform",
    &[
        ("uppercase", "uppercase"),
        ("lowercase", "lowercase"),
        ("capitalize", "capitalize"),
        ("none", "normal-case"),
        ("normal-case", "normal-case"),
    ],
);

pub const DECORATION: Scale = Scale::new(
    "decoration",
    &[
        ("underline", "underline"),
        ("overline", "overline"),
        ("line-through", "line-through"),
        ("none", "no-underline"),
        ("no-underline", "no-underline"),
    ],
);

pub const WHITESPACE: Scale = Scale::new(
    "whitespace",
    &[
        ("normal", "whitespace-normal"),
        ("nowrap", "whitespace-nowrap"),
        ("pre", "whitespace-pre"),
        ("pre-line", "whitespace-pre-line"),
        ("pre-wrap", "whitespace-pre-wrap"),
        ("break-spaces", "whitespace-break-spaces"),
    ],
);

pub const OVERFLOW: Scale = Scale::new(
    "overflow",
    &[("ellipsis", "text-ellipsis"), ("clip", "text-clip")],
);

pub const LEADING: Scale = Scale::new(
    "leading",
    &[
        ("none", "leading-none"),
        ("tight", "leading-tight"),
        ("snug", "leading-snug"),
        ("normal", "leading-normal"),
        ("relaxed", "leading-relaxed"),
        ("loose", "leading-loose"),
    ],
);

pub const TRACKING: Scale = Scale::new(
    "tracking",
    &[
        ("tighter", "tracking-tighter"),
        ("tight", "tracking-tight"),
        ("normal", "tracking-normal"),
        ("wide", "tracking-wide"),
        ("wider", "tracking-wider"),
        ("widest", "tracking-widest"),
    ],
);

/// Largest line count with a dedicated `line-clamp-{n}` utility.
pub const MAX_LINE_CLAMP: u8 = 6;

/// Token for `line_clamp(0)`. It lifts clamping, so it never suppresses `truncate`.
pub const LINE_CLAMP_NONE: &str = "line-clamp-none";

/// Maps a line count to its clamp token. `0` removes clamping.
pub fn line_clamp(lines: u8) -> Option<String> {
    match lines {
        0 => Some(LINE_CLAMP_NONE.to_string()),
        1..=MAX_LINE_CLAMP => Some(format!("line-clamp-{}", lines)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_values() {
        assert_eq!(SIZE.lookup("lg"), Some("text-lg"));
        assert_eq!(WEIGHT.lookup("semibold"), Some("font-semibold"));
        assert_eq!(TRANSFORM.lookup("none"), Some("normal-case"));
        assert_eq!(DECORATION.lookup("none"), Some("no-underline"));
    }

    #[test]
    fn test_lookup_unknown_value_is_none() {
        assert_eq!(SIZE.lookup("huge"), None);
        assert_eq!(WEIGHT.lookup(""), None);
        assert!(!ALIGN.contains("middle"));
    }

    #[test]
    fn test_lookup_trims_whitespace() {
        assert_eq!(SIZE.lookup(" sm "), Some("text-sm"));
    }

    #[test]
    fn test_line_clamp_bounds() {
        assert_eq!(line_clamp(0).as_deref(), Some("line-clamp-none"));
        assert_eq!(line_clamp(3).as_deref(), Some("line-clamp-3"));
        assert_eq!(line_clamp(6).as_deref(), Some("line-clamp-6"));
        assert_eq!(line_clamp(7), None);
    }

    #[test]
    fn test_scale_values_in_order() {
        let sizes: Vec<_> = SIZE.values().take(3).collect();
        assert_eq!(sizes, vec!["xs", "sm", "base"]);
        assert_eq!(SIZE.field(), "size");
    }
}
