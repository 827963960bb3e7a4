//! Owned WebSocket connection to the signal device.
//!
//! [`DisplayClient`] has an explicit lifecycle: [`DisplayClient::connect`]
//! opens the socket, [`DisplayClient::run`] listens and applies frames
//! until the device closes or shutdown is requested, and
//! [`DisplayClient::close`] sends the closing handshake. There is no
//! reconnect; a new client must be connected instead.

use std::future::Future;

use futures_util::StreamExt;
use serde::Serialize;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::error::ProtocolError;
use tokio_tungstenite::tungstenite::{self, Message};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::Instrument;
use uuid::Uuid;

use super::endpoint::device_url;
use super::handler::{FrameOutcome, handle_frame};
use crate::config::DisplayConfig;
use crate::domain::{IndicatorSurface, StatusPolicy};
use crate::error::DisplayError;

type DeviceStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Why [`DisplayClient::run`] returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunEnd {
    /// The device sent a close frame.
    #[default]
    PeerClosed,
    /// The stream ended without a close frame.
    StreamEnded,
    /// The shutdown future completed.
    Shutdown,
}

/// Frame counters for one [`DisplayClient::run`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Text frames received.
    pub frames_received: u64,
    /// Text frames applied to both indicators.
    pub frames_applied: u64,
    /// Text frames where at least one indicator write failed.
    pub frames_partial: u64,
    /// Text frames rejected by the status policy.
    pub frames_skipped: u64,
    /// Binary frames, which carry no status and are dropped.
    pub frames_ignored: u64,
    /// How the loop ended.
    pub end: RunEnd,
}

impl RunStats {
    fn record(&mut self, outcome: &FrameOutcome) {
        match outcome {
            FrameOutcome::Applied => self.frames_applied += 1,
            FrameOutcome::Partial(_) => self.frames_partial += 1,
            FrameOutcome::Skipped(_) => self.frames_skipped += 1,
        }
    }
}

/// A single listening connection to the device.
pub struct DisplayClient {
    url: String,
    session_id: Uuid,
    policy: StatusPolicy,
    stream: DeviceStream,
}

impl std::fmt::Debug for DisplayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisplayClient")
            .field("url", &self.url)
            .field("session_id", &self.session_id)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl DisplayClient {
    /// Opens a connection to the device described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::InvalidEndpoint`] if the host is unusable,
    /// or [`DisplayError::Connect`] if the socket cannot be opened. No
    /// retry is attempted.
    pub async fn connect(config: &DisplayConfig) -> Result<Self, DisplayError> {
        let url = device_url(&config.device_host, config.device_port)?;
        Self::connect_url(url, config.status_policy).await
    }

    /// Opens a connection to an explicit `ws://` URL.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::Connect`] if the handshake fails.
    pub async fn connect_url(url: String, policy: StatusPolicy) -> Result<Self, DisplayError> {
        let (stream, response) =
            connect_async(url.as_str())
                .await
                .map_err(|source| DisplayError::Connect {
                    url: url.clone(),
                    source: Box::new(source),
                })?;

        let session_id = Uuid::new_v4();
        tracing::info!(
            url = %url,
            session = %session_id,
            status = %response.status(),
            "connected to signal device"
        );

        Ok(Self {
            url,
            session_id,
            policy,
            stream,
        })
    }

    /// Returns the endpoint this client is connected to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the identifier attached to this connection's log events.
    #[must_use]
    pub const fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Listens for status frames and applies each to `surface`.
    ///
    /// Frames are handled one at a time in arrival order. Per-frame
    /// failures are logged and counted; the loop keeps going. Returns when
    /// the device closes the socket, the stream ends, or `shutdown`
    /// completes.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::Transport`] if reading from the socket fails.
    pub async fn run<S, F>(
        &mut self,
        surface: &mut S,
        shutdown: F,
    ) -> Result<RunStats, DisplayError>
    where
        S: IndicatorSurface + ?Sized,
        F: Future<Output = ()>,
    {
        let span = tracing::info_span!("display", session = %self.session_id);
        let policy = self.policy;
        let stream = &mut self.stream;

        async move {
            tokio::pin!(shutdown);
            let mut stats = RunStats::default();

            loop {
                tokio::select! {
                    () = &mut shutdown => {
                        tracing::info!("shutdown requested");
                        stats.end = RunEnd::Shutdown;
                        break;
                    }
                    frame = stream.next() => {
                        match frame {
                            Some(Ok(Message::Text(text))) => {
                                stats.frames_received += 1;
                                let outcome = handle_frame(text.as_str(), surface, policy);
                                stats.record(&outcome);
                            }
                            Some(Ok(Message::Binary(data))) => {
                                tracing::debug!(len = data.len(), "ignoring binary frame");
                                stats.frames_ignored += 1;
                            }
                            Some(Ok(Message::Close(frame))) => {
                                tracing::info!(?frame, "device closed the connection");
                                stats.end = RunEnd::PeerClosed;
                                break;
                            }
                            Some(Ok(_)) => {}
                            Some(Err(err)) => {
                                tracing::error!(error = %err, "websocket read failed");
                                return Err(DisplayError::from(err));
                            }
                            None => {
                                tracing::info!("device stream ended");
                                stats.end = RunEnd::StreamEnded;
                                break;
                            }
                        }
                    }
                }
            }

            Ok(stats)
        }
        .instrument(span)
        .await
    }

    /// Sends the closing handshake and drops the connection.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::Transport`] if the close frame cannot be
    /// written. A socket the device already closed is not an error.
    pub async fn close(mut self) -> Result<(), DisplayError> {
        match self.stream.close(None).await {
            Ok(()) => {}
            Err(err) if is_closed(&err) => {}
            Err(err) => return Err(DisplayError::from(err)),
        }
        tracing::debug!(session = %self.session_id, "connection closed");
        Ok(())
    }
}

/// Returns `true` for errors that only say the handshake already happened.
///
/// Once the device has sent its close frame the library answers it, so a
/// later close attempt reports `SendAfterClosing` rather than succeeding.
fn is_closed(err: &tungstenite::Error) -> bool {
    matches!(
        err,
        tungstenite::Error::ConnectionClosed
            | tungstenite::Error::AlreadyClosed
            | tungstenite::Error::Protocol(ProtocolError::SendAfterClosing)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_record_outcomes() {
        let mut stats = RunStats::default();
        stats.record(&FrameOutcome::Applied);
        stats.record(&FrameOutcome::Applied);
        stats.record(&FrameOutcome::Skipped(DisplayError::MalformedStatus {
            payload: "on".to_string(),
            fields: 1,
        }));
        assert_eq!(stats.frames_applied, 2);
        assert_eq!(stats.frames_skipped, 1);
        assert_eq!(stats.frames_partial, 0);
    }

    #[test]
    fn handshake_already_done_counts_as_closed() {
        assert!(is_closed(&tungstenite::Error::ConnectionClosed));
        assert!(is_closed(&tungstenite::Error::AlreadyClosed));
        assert!(is_closed(&tungstenite::Error::Protocol(
            ProtocolError::SendAfterClosing
        )));
        assert!(!is_closed(&tungstenite::Error::Protocol(
            ProtocolError::ResetWithoutClosingHandshake
        )));
    }

    #[tokio::test]
    async fn invalid_host_fails_before_dialing() {
        let config = DisplayConfig {
            device_host: String::new(),
            ..DisplayConfig::default()
        };
        let result = DisplayClient::connect(&config).await;
        assert!(matches!(result, Err(DisplayError::InvalidEndpoint(_))));
    }
}
