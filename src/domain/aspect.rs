//! Traffic signal aspects carried in status tokens.
//!
//! The device reports each light as `red`, `yellow` or `green`. The aspect
//! is informational: it annotates logs and snapshots, while the class
//! attribute always receives the raw token.

use std::fmt;

use serde::Serialize;

/// Meaning of a status token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalAspect {
    /// Stop.
    Red,
    /// Prepare to stop.
    Yellow,
    /// Go.
    Green,
    /// Token is missing or not one of the known colors.
    Unknown,
}

impl SignalAspect {
    /// Classifies a raw token. Matching ignores ASCII case and surrounding
    /// whitespace; anything else is [`SignalAspect::Unknown`].
    #[must_use]
    pub fn from_token(token: Option<&str>) -> Self {
        let Some(token) = token else {
            return Self::Unknown;
        };
        let token = token.trim();
        if token.eq_ignore_ascii_case("red") {
            Self::Red
        } else if token.eq_ignore_ascii_case("yellow") {
            Self::Yellow
        } else if token.eq_ignore_ascii_case("green") {
            Self::Green
        } else {
            Self::Unknown
        }
    }
}

impl fmt::Display for SignalAspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}
