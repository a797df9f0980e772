//! Session facade over a running chime pipeline

use std::time::Duration;

use futures::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::audio::AudioPort;
use crate::driver::Driver;
use crate::provider::FeedProvider;
use crate::types::ConnectionStatus;
use crate::{ChimeError, Result};

/// Handle to a running chime session.
///
/// Owns the driver task for one telemetry session. Hosts keep this around to
/// observe connection status for display; dropping it cancels the feed task
/// and ends the session.
pub struct ChimeSession {
    /// Connection status watch receiver
    status: watch::Receiver<ConnectionStatus>,

    /// Source frequency
    source_hz: f64,

    /// Cancellation token for stopping tasks
    cancel: CancellationToken,
}

impl ChimeSession {
    /// Start a session over the given provider and audio port.
    ///
    /// Spawns the driver task immediately; must be called from within a
    /// tokio runtime. The status channel starts at `Disconnected` and tracks
    /// the feed's lifecycle events from there.
    pub fn with_audio<P>(provider: P, audio: Box<dyn AudioPort>) -> Self
    where
        P: FeedProvider,
    {
        let source_hz = provider.tick_rate();
        info!("Starting chime session ({}Hz feed)", source_hz);

        let channels = Driver::spawn(provider, audio);

        Self { status: channels.status, source_hz, cancel: channels.cancel }
    }

    /// Get connection status updates as a stream
    ///
    /// Yields the current status immediately, then every subsequent change.
    /// The `Display` impl of the items produces the exact strings hosts
    /// show ("Connected" / "Disconnected").
    pub fn status_updates(&self) -> impl Stream<Item = ConnectionStatus> + 'static {
        WatchStream::new(self.status.clone())
    }

    /// Get the current connection status
    pub fn current_status(&self) -> ConnectionStatus {
        *self.status.borrow()
    }

    /// Wait until the feed reports `Connected`.
    ///
    /// Returns [`ChimeError::Timeout`] if the feed has not connected within
    /// `timeout`, or a feed error if the session ended first.
    pub async fn connected_within(&self, timeout: Duration) -> Result<()> {
        let mut rx = self.status.clone();
        let wait = async move {
            loop {
                if *rx.borrow_and_update() == ConnectionStatus::Connected {
                    return Ok(());
                }
                rx.changed().await.map_err(|_| {
                    ChimeError::feed_error("session ended before the feed connected")
                })?;
            }
        };

        match tokio::time::timeout(timeout, wait).await {
            Ok(result) => result,
            Err(_) => Err(ChimeError::Timeout { duration: timeout }),
        }
    }

    /// Get the source telemetry frequency
    pub fn source_hz(&self) -> f64 {
        self.source_hz
    }
}

impl Drop for ChimeSession {
    fn drop(&mut self) {
        debug!("Dropping chime session");
        // Cancel tasks on drop for clean shutdown
        self.cancel.cancel();
    }
}
