//! # signal-display
//!
//! WebSocket display client for a two-light traffic signal device.
//!
//! The device pushes text frames of the form `"<light1>,<light2>"`
//! (e.g. `"red,green"`) on port 81. Each frame is split on the comma and
//! its first two fields are written to the `light1` and `light2`
//! indicators as the class string `"light <token>"`.
//!
//! ## Architecture
//!
//! ```text
//! Signal device (ws://<host>:81)
//!     │
//!     ├── DisplayClient (client/)
//!     │       └── handle_frame
//!     │
//!     ├── StatusMessage / StatusPolicy (domain/)
//!     │
//!     └── IndicatorSurface ── IndicatorBoard (domain/)
//! ```

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod telemetry;
