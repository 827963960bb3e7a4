//! Client layer: device endpoint, connection lifecycle, frame handling.
//!
//! The client holds one WebSocket to the device and applies every text
//! frame it receives to an [`IndicatorSurface`](crate::domain::IndicatorSurface).
//! It never sends application frames.

pub mod connection;
pub mod endpoint;
pub mod handler;

pub use connection::{DisplayClient, RunEnd, RunStats};
pub use endpoint::{DEFAULT_DEVICE_PORT, device_url};
pub use handler::{FrameOutcome, apply_status, handle_frame};
