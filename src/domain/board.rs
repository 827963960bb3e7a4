//! Indicator surfaces: where status updates land.
//!
//! [`IndicatorSurface`] is the contract the message handler writes
//! through. It only ever overwrites class strings; it never creates or
//! removes elements. [`IndicatorBoard`] is the in-memory implementation
//! used by the binary and the tests.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{CLASS_PREFIX, IndicatorId, SignalAspect};
use crate::error::DisplayError;

/// Something that owns indicator elements and accepts class writes.
pub trait IndicatorSurface {
    /// Overwrites the class string of element `id`.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::ElementNotFound`] if the surface has no
    /// element with this identifier.
    fn set_class(&mut self, id: IndicatorId, class: String) -> Result<(), DisplayError>;

    /// Returns the current class string of element `id`, if it exists.
    fn class_of(&self, id: IndicatorId) -> Option<&str>;
}

/// State of a single indicator element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct IndicatorState {
    class: String,
    updated_at: Option<DateTime<Utc>>,
}

/// Serializable view of one indicator element.
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorSnapshot {
    /// Element identifier.
    pub id: IndicatorId,
    /// Current class string.
    pub class: String,
    /// Signal aspect decoded from the class.
    pub aspect: SignalAspect,
    /// Time of the last write, `None` if never written.
    pub updated_at: Option<DateTime<Utc>>,
}

/// In-memory indicator surface.
#[derive(Debug, Clone)]
pub struct IndicatorBoard {
    elements: BTreeMap<IndicatorId, IndicatorState>,
}

impl IndicatorBoard {
    /// Creates a board holding both `light1` and `light2` with empty classes.
    #[must_use]
    pub fn new() -> Self {
        Self::with_elements(&IndicatorId::ALL)
    }

    /// Creates a board holding only the given elements.
    ///
    /// Writes to any other identifier fail with
    /// [`DisplayError::ElementNotFound`].
    #[must_use]
    pub fn with_elements(ids: &[IndicatorId]) -> Self {
        let elements = ids
            .iter()
            .map(|id| (*id, IndicatorState::default()))
            .collect();
        Self { elements }
    }

    /// Returns a snapshot of every element in identifier order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<IndicatorSnapshot> {
        self.elements
            .iter()
            .map(|(id, state)| {
                let token = state
                    .class
                    .strip_prefix(CLASS_PREFIX)
                    .and_then(|rest| rest.strip_prefix(' '));
                IndicatorSnapshot {
                    id: *id,
                    class: state.class.clone(),
                    aspect: SignalAspect::from_token(token),
                    updated_at: state.updated_at,
                }
            })
            .collect()
    }
}

impl Default for IndicatorBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl IndicatorSurface for IndicatorBoard {
    fn set_class(&mut self, id: IndicatorId, class: String) -> Result<(), DisplayError> {
        let state = self
            .elements
            .get_mut(&id)
            .ok_or(DisplayError::ElementNotFound(id))?;
        state.class = class;
        state.updated_at = Some(Utc::now());
        Ok(())
    }

    fn class_of(&self, id: IndicatorId) -> Option<&str> {
        self.elements.get(&id).map(|state| state.class.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn new_board_has_both_lights_empty() {
        let board = IndicatorBoard::new();
        assert_eq!(board.class_of(IndicatorId::Light1), Some(""));
        assert_eq!(board.class_of(IndicatorId::Light2), Some(""));
    }

    #[test]
    fn set_class_overwrites() {
        let mut board = IndicatorBoard::new();
        assert!(board.set_class(IndicatorId::Light1, "light red".into()).is_ok());
        assert!(board.set_class(IndicatorId::Light1, "light green".into()).is_ok());
        assert_eq!(board.class_of(IndicatorId::Light1), Some("light green"));
    }

    #[test]
    fn missing_element_is_reported() {
        let mut board = IndicatorBoard::with_elements(&[IndicatorId::Light1]);
        let Err(DisplayError::ElementNotFound(id)) =
            board.set_class(IndicatorId::Light2, "light red".into())
        else {
            panic!("expected element not found");
        };
        assert_eq!(id, IndicatorId::Light2);
        assert_eq!(board.class_of(IndicatorId::Light2), None);
    }

    #[test]
    fn snapshot_decodes_aspect_and_timestamp() {
        let mut board = IndicatorBoard::new();
        assert!(board.set_class(IndicatorId::Light2, "light yellow".into()).is_ok());

        let snapshot = board.snapshot();
        assert_eq!(snapshot.len(), 2);
        let Some(first) = snapshot.first() else {
            panic!("empty snapshot");
        };
        assert_eq!(first.id, IndicatorId::Light1);
        assert_eq!(first.aspect, SignalAspect::Unknown);
        assert!(first.updated_at.is_none());

        let Some(second) = snapshot.get(1) else {
            panic!("missing light2");
        };
        assert_eq!(second.aspect, SignalAspect::Yellow);
        assert!(second.updated_at.is_some());
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let board = IndicatorBoard::new();
        let json = serde_json::to_value(board.snapshot()).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        assert_eq!(json[0]["id"], "light1");
        assert_eq!(json[1]["aspect"], "unknown");
    }
}
