//! Domain layer: status frames, indicator identifiers and surfaces.
//!
//! Everything here is transport-agnostic. The client layer feeds raw
//! frame text in and the domain decides what gets written where.

pub mod aspect;
pub mod board;
pub mod indicator;
pub mod status;

pub use aspect::SignalAspect;
pub use board::{IndicatorBoard, IndicatorSnapshot, IndicatorSurface};
pub use indicator::{CLASS_PREFIX, IndicatorId, UNDEFINED_TOKEN};
pub use status::{StatusMessage, StatusPolicy};
