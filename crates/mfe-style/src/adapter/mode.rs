//! Rendering strategies for component styles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::STYLE_MODE_ENV;

/// How a component receives its styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleMode {
    /// Utility classes, resolved by the utility framework present in the host.
    Native,
    /// Class names from the precompiled static stylesheet bundle.
    Precompiled,
    /// Inline style properties computed at render time.
    Computed,
}

impl StyleMode {
    pub fn as_str(self) -> &'static str {
        match self {
            StyleMode::Native => "native",
            StyleMode::Precompiled => "precompiled",
            StyleMode::Computed => "computed",
        }
    }

    /// Returns `true` for the modes that produce a class name.
    pub fn uses_class_names(self) -> bool {
        !matches!(self, StyleMode::Computed)
    }

    /// Maps a detection result to a mode.
    pub fn from_detection(native_present: bool) -> Self {
        if native_present {
            StyleMode::Native
        } else {
            StyleMode::Precompiled
        }
    }

    /// Reads the mode pinned through `MFE_STYLE_MODE`, if any.
    ///
    /// Unset or unparsable values yield `None`; the latter is logged.
    pub fn from_env() -> Option<Self> {
        let raw = std::env::var(STYLE_MODE_ENV).ok()?;
        match raw.parse() {
            Ok(mode) => Some(mode),
            Err(err) => {
                log::warn!("ignoring {}: {}", STYLE_MODE_ENV, err);
                None
            }
        }
    }
}

impl fmt::Display for StyleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string that does not name a style mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown style mode '{0}': expected native, precompiled or computed")]
pub struct UnknownStyleMode(pub String);

impl FromStr for StyleMode {
    type Err = UnknownStyleMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "native" => Ok(StyleMode::Native),
            "precompiled" => Ok(StyleMode::Precompiled),
            "computed" => Ok(StyleMode::Computed),
            _ => Err(UnknownStyleMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Native".parse(), Ok(StyleMode::Native));
        assert_eq!(" computed ".parse(), Ok(StyleMode::Computed));
        assert!("tailwind".parse::<StyleMode>().is_err());
    }

    #[test]
    fn test_detection_mapping() {
        assert_eq!(StyleMode::from_detection(true), StyleMode::Native);
        assert_eq!(StyleMode::from_detection(false), StyleMode::Precompiled);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&StyleMode::Precompiled).unwrap(),
            "\"precompiled\""
        );
    }

    #[test]
    #[serial(style_env)]
    fn test_from_env() {
        std::env::set_var(STYLE_MODE_ENV, "computed");
        assert_eq!(StyleMode::from_env(), Some(StyleMode::Computed));

        std::env::set_var(STYLE_MODE_ENV, "bogus");
        assert_eq!(StyleMode::from_env(), None);

        std::env::remove_var(STYLE_MODE_ENV);
        assert_eq!(StyleMode::from_env(), None);
    }
}
