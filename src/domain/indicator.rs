//! Indicator element identifiers and class rendering.
//!
//! The display owns exactly two indicator elements, `light1` and `light2`.
//! Their class attribute is always written as `"light " + <token>`.

use std::fmt;

use serde::Serialize;

/// Prefix shared by every indicator class string.
pub const CLASS_PREFIX: &str = "light";

/// Text rendered in place of a token the status frame did not carry.
pub const UNDEFINED_TOKEN: &str = "undefined";

/// Identifier of one of the two fixed indicator elements.
///
/// Position in a status frame maps to the identifier: field 0 is
/// [`IndicatorId::Light1`], field 1 is [`IndicatorId::Light2`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorId {
    /// First light, bound to field 0.
    Light1,
    /// Second light, bound to field 1.
    Light2,
}

impl IndicatorId {
    /// Both indicators in frame order.
    pub const ALL: [Self; 2] = [Self::Light1, Self::Light2];

    /// Returns the element identifier string (`"light1"` / `"light2"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light1 => "light1",
            Self::Light2 => "light2",
        }
    }

    /// Returns the zero-based field position this indicator reads from.
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            Self::Light1 => 0,
            Self::Light2 => 1,
        }
    }

    /// Renders the class string for a token at this indicator's position.
    ///
    /// A missing token renders as the literal `undefined`, so `None`
    /// produces `"light undefined"`.
    #[must_use]
    pub fn class_for(self, token: Option<&str>) -> String {
        format!("{CLASS_PREFIX} {}", token.unwrap_or(UNDEFINED_TOKEN))
    }
}

impl fmt::Display for IndicatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_match_element_ids() {
        assert_eq!(IndicatorId::Light1.as_str(), "light1");
        assert_eq!(IndicatorId::Light2.to_string(), "light2");
    }

    #[test]
    fn positions_follow_frame_order() {
        let positions: Vec<usize> = IndicatorId::ALL.iter().map(|id| id.position()).collect();
        assert_eq!(positions, vec![0, 1]);
    }

    #[test]
    fn class_prefixes_token() {
        assert_eq!(IndicatorId::Light1.class_for(Some("red")), "light red");
        assert_eq!(IndicatorId::Light2.class_for(Some("")), "light ");
    }

    #[test]
    fn missing_token_renders_undefined() {
        assert_eq!(IndicatorId::Light2.class_for(None), "light undefined");
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&IndicatorId::Light1).ok();
        assert_eq!(json.as_deref(), Some("\"light1\""));
    }
}
