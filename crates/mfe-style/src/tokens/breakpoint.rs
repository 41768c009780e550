//! Responsive breakpoints.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A responsive breakpoint, ordered smallest to largest.
///
/// `Base` applies at every width and never carries a prefix. Every other
/// breakpoint prefixes its tokens with `"{name}:"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Breakpoint {
    #[serde(rename = "base")]
    Base,
    #[serde(rename = "sm")]
    Sm,
    #[serde(rename = "md")]
    Md,
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
}

impl Breakpoint {
    /// All breakpoints in ascending width order.
    pub const ALL: [Breakpoint; 6] = [
        Breakpoint::Base,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    /// Returns the breakpoint's name as used in responsive maps.
    pub fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Base => "base",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "2xl",
        }
    }

    /// Minimum viewport width in pixels at which the breakpoint applies.
    pub fn min_width(self) -> u32 {
        match self {
            Breakpoint::Base => 0,
            Breakpoint::Sm => 640,
            Breakpoint::Md => 768,
            Breakpoint::Lg => 1024,
            Breakpoint::Xl => 1280,
            Breakpoint::Xxl => 1536,
        }
    }

    /// Applies the breakpoint prefix to a token.
    ///
    /// ```rust
    /// use mfe_style::tokens::Breakpoint;
    ///
    /// assert_eq!(Breakpoint::Base.prefix("text-sm"), "text-sm");
    /// assert_eq!(Breakpoint::Md.prefix("text-lg"), "md:text-lg");
    /// ```
    pub fn prefix(self, token: &str) -> String {
        match self {
            Breakpoint::Base => token.to_string(),
            bp => format!("{}:{}", bp.as_str(), token),
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A breakpoint name outside the known set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown breakpoint '{0}'")]
pub struct UnknownBreakpoint(pub String);

impl FromStr for Breakpoint {
    type Err = UnknownBreakpoint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Breakpoint::ALL
            .into_iter()
            .find(|bp| bp.as_str() == s)
            .ok_or_else(|| UnknownBreakpoint(s.to_string()))
    }
}
