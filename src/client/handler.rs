//! Inbound frame handler.
//!
//! One text frame in, two class writes out. The handler never sends
//! anything back to the device.

use crate::domain::{IndicatorId, IndicatorSurface, StatusMessage, StatusPolicy};
use crate::error::DisplayError;

/// Result of handling one frame.
#[derive(Debug)]
pub enum FrameOutcome {
    /// Both indicators were written.
    Applied,
    /// The policy admitted the frame but at least one write failed.
    /// The other indicator may still have been updated.
    Partial(DisplayError),
    /// The policy rejected the frame; no indicator was touched.
    Skipped(DisplayError),
}

impl FrameOutcome {
    /// Returns `true` if the frame was fully applied.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Parses `payload` and applies it to `surface` under `policy`.
pub fn handle_frame<S>(payload: &str, surface: &mut S, policy: StatusPolicy) -> FrameOutcome
where
    S: IndicatorSurface + ?Sized,
{
    let message = StatusMessage::parse(payload);

    if let Err(err) = policy.admit(payload, &message) {
        tracing::warn!(error = %err, "skipping status frame");
        return FrameOutcome::Skipped(err);
    }

    if !message.is_well_formed() {
        tracing::warn!(
            payload,
            fields = message.field_count(),
            complete = message.is_complete(),
            "malformed status frame applied"
        );
    }

    match apply_status(&message, surface) {
        Ok(()) => {
            tracing::info!(
                light1 = surface.class_of(IndicatorId::Light1).unwrap_or_default(),
                light2 = surface.class_of(IndicatorId::Light2).unwrap_or_default(),
                aspect1 = %message.aspect(IndicatorId::Light1),
                aspect2 = %message.aspect(IndicatorId::Light2),
                "status applied"
            );
            FrameOutcome::Applied
        }
        Err(err) => FrameOutcome::Partial(err),
    }
}

/// Writes `"light " + token` to each indicator.
///
/// Every indicator is attempted even if an earlier write fails.
///
/// # Errors
///
/// Returns the first write error, typically
/// [`DisplayError::ElementNotFound`].
pub fn apply_status<S>(message: &StatusMessage, surface: &mut S) -> Result<(), DisplayError>
where
    S: IndicatorSurface + ?Sized,
{
    let mut first_err = None;

    for id in IndicatorId::ALL {
        let class = id.class_for(message.token(id));
        if let Err(err) = surface.set_class(id, class) {
            tracing::warn!(indicator = %id, error = %err, "indicator write failed");
            first_err.get_or_insert(err);
        }
    }

    first_err.map_or(Ok(()), Err)
}
