//! Status frames pushed by the signal device.
//!
//! A frame is UTF-8 text with two comma-separated fields, `"<light1>,<light2>"`
//! (e.g. `"red,green"`). Parsing never fails: fields are bound by position,
//! extra fields are ignored and missing ones are left empty. Whether a
//! frame with the wrong field count is applied is decided by
//! [`StatusPolicy`].

use std::str::FromStr;

use super::{IndicatorId, SignalAspect};
use crate::error::DisplayError;

/// Field separator within a status frame.
pub const FIELD_SEPARATOR: char = ',';

/// Number of fields a well-formed frame carries.
pub const EXPECTED_FIELDS: usize = 2;

/// A parsed status frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    tokens: Vec<String>,
    fields: usize,
}

impl StatusMessage {
    /// Splits `payload` on `,` and binds the first two fields to
    /// `light1` and `light2`.
    ///
    /// An empty payload yields one empty field, so `light1` is `""` and
    /// `light2` is missing.
    #[must_use]
    pub fn parse(payload: &str) -> Self {
        let mut parts = payload.split(FIELD_SEPARATOR);
        let tokens: Vec<String> = parts
            .by_ref()
            .take(IndicatorId::ALL.len())
            .map(str::to_owned)
            .collect();
        let fields = tokens.len() + parts.count();
        Self { tokens, fields }
    }

    /// Returns the token bound to `id`, or `None` if the frame was too short.
    #[must_use]
    pub fn token(&self, id: IndicatorId) -> Option<&str> {
        self.tokens.get(id.position()).map(String::as_str)
    }

    /// Returns the signal aspect of the token bound to `id`.
    #[must_use]
    pub fn aspect(&self, id: IndicatorId) -> SignalAspect {
        SignalAspect::from_token(self.token(id))
    }

    /// Total number of comma-separated fields in the raw frame.
    #[must_use]
    pub const fn field_count(&self) -> usize {
        self.fields
    }

    /// Returns `true` when every indicator position has a token.
    ///
    /// Extra fields do not matter here: `"a,b,c"` is complete but not
    /// well formed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        IndicatorId::ALL.iter().all(|id| self.token(*id).is_some())
    }

    /// Returns `true` when the frame has exactly [`EXPECTED_FIELDS`] fields.
    #[must_use]
    pub const fn is_well_formed(&self) -> bool {
        self.fields == EXPECTED_FIELDS
    }
}

/// How frames with the wrong number of fields are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Apply every frame. Missing fields render as `undefined`, extra
    /// fields are dropped.
    #[default]
    Lenient,
    /// Skip frames that do not carry exactly two fields.
    Strict,
}

impl StatusPolicy {
    /// Checks `message` against the policy.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::MalformedStatus`] under [`StatusPolicy::Strict`]
    /// when the field count is not two.
    pub fn admit(self, payload: &str, message: &StatusMessage) -> Result<(), DisplayError> {
        match self {
            Self::Lenient => Ok(()),
            Self::Strict if message.is_well_formed() => Ok(()),
            Self::Strict => Err(DisplayError::MalformedStatus {
                payload: payload.to_string(),
                fields: message.field_count(),
            }),
        }
    }
}

impl FromStr for StatusPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            other => Err(format!("unknown status policy: {other}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn two_fields_bind_positionally() {
        let msg = StatusMessage::parse("on,off");
        assert_eq!(msg.token(IndicatorId::Light1), Some("on"));
        assert_eq!(msg.token(IndicatorId::Light2), Some("off"));
        assert!(msg.is_complete());
        assert!(msg.is_well_formed());
    }

    #[test]
    fn single_field_leaves_light2_missing() {
        let msg = StatusMessage::parse("on");
        assert_eq!(msg.token(IndicatorId::Light1), Some("on"));
        assert_eq!(msg.token(IndicatorId::Light2), None);
        assert_eq!(msg.field_count(), 1);
        assert!(!msg.is_complete());
        assert!(!msg.is_well_formed());
    }

    #[test]
    fn extra_fields_are_ignored_but_counted() {
        let msg = StatusMessage::parse("on,off,x");
        assert_eq!(msg.token(IndicatorId::Light1), Some("on"));
        assert_eq!(msg.token(IndicatorId::Light2), Some("off"));
        assert_eq!(msg.field_count(), 3);
        assert!(msg.is_complete());
        assert!(!msg.is_well_formed());
    }

    #[test]
    fn empty_payload_is_one_empty_field() {
        let msg = StatusMessage::parse("");
        assert_eq!(msg.token(IndicatorId::Light1), Some(""));
        assert_eq!(msg.token(IndicatorId::Light2), None);
        assert_eq!(msg.field_count(), 1);
        assert!(!msg.is_complete());
    }

    #[test]
    fn empty_second_field_is_still_present() {
        let msg = StatusMessage::parse("red,");
        assert_eq!(msg.token(IndicatorId::Light2), Some(""));
        assert!(msg.is_complete());
        assert!(msg.is_well_formed());
    }

    #[test]
    fn tokens_are_not_trimmed() {
        let msg = StatusMessage::parse("red, green");
        assert_eq!(msg.token(IndicatorId::Light2), Some(" green"));
        assert_eq!(msg.aspect(IndicatorId::Light2), SignalAspect::Green);
    }

    #[test]
    fn lenient_admits_everything() {
        let msg = StatusMessage::parse("on");
        assert!(StatusPolicy::Lenient.admit("on", &msg).is_ok());
    }

    #[test]
    fn strict_rejects_wrong_field_count() {
        let msg = StatusMessage::parse("on,off,x");
        let Err(DisplayError::MalformedStatus { payload, fields }) =
            StatusPolicy::Strict.admit("on,off,x", &msg)
        else {
            panic!("expected malformed status");
        };
        assert_eq!(payload, "on,off,x");
        assert_eq!(fields, 3);
    }

    #[test]
    fn strict_admits_two_fields() {
        let msg = StatusMessage::parse("red,green");
        assert!(StatusPolicy::Strict.admit("red,green", &msg).is_ok());
    }

    #[test]
    fn policy_from_str() {
        assert_eq!("strict".parse::<StatusPolicy>(), Ok(StatusPolicy::Strict));
        assert_eq!("LENIENT".parse::<StatusPolicy>(), Ok(StatusPolicy::Lenient));
        assert!("loose".parse::<StatusPolicy>().is_err());
    }
}
