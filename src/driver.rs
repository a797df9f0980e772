//! Driver spawns and manages the feed processing task

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, trace};

use crate::audio::AudioPort;
use crate::dispatcher::dispatch;
use crate::provider::FeedProvider;
use crate::tracker::DrsTracker;
use crate::types::{ConnectionStatus, FeedEvent};

/// Result of spawning the driver task
pub struct DriverChannels {
    /// Receiver for connection status notifications
    pub status: watch::Receiver<ConnectionStatus>,
    /// Cancellation token for graceful shutdown
    pub cancel: CancellationToken,
}

/// Driver spawns and manages the feed processing task
///
/// Spawns a single feed task that owns the provider, the status tracker and
/// the audio port. Ticks are processed sequentially on that task, so the
/// tracker needs no locking; audio playback is a non-blocking enqueue.
pub struct Driver;

impl Driver {
    /// Spawn the feed task for the given provider
    ///
    /// Returns a watch receiver for connection status (initially
    /// `Disconnected`, matching what hosts display before the feed comes
    /// up) plus a cancellation token for graceful shutdown.
    pub fn spawn<P>(provider: P, audio: Box<dyn AudioPort>) -> DriverChannels
    where
        P: FeedProvider,
    {
        let (status_tx, status_rx) = watch::channel(ConnectionStatus::Disconnected);

        let cancel = CancellationToken::new();
        let cancel_feed = cancel.clone();

        tokio::spawn(async move {
            Self::feed_task(provider, audio, status_tx, cancel_feed).await;
        });

        DriverChannels { status: status_rx, cancel }
    }

    /// Feed task - processes events and triggers cues on qualifying edges
    async fn feed_task<P>(
        mut provider: P,
        audio: Box<dyn AudioPort>,
        status_tx: watch::Sender<ConnectionStatus>,
        cancel: CancellationToken,
    ) where
        P: FeedProvider,
    {
        info!("Feed task started ({}Hz source)", provider.tick_rate());
        let mut tracker = DrsTracker::new();
        let mut tick_count = 0u64;
        let mut error_count = 0u32;
        const MAX_ERRORS: u32 = 10;

        loop {
            // Check for cancellation between events
            if cancel.is_cancelled() {
                info!("Feed task cancelled");
                break;
            }

            // Use select to allow cancellation during provider.next_event()
            let result = tokio::select! {
                _ = cancel.cancelled() => {
                    info!("Feed task cancelled during read");
                    break;
                }
                result = provider.next_event() => result,
            };

            match result {
                Ok(Some(FeedEvent::Connected)) => {
                    info!("Telemetry feed connected");
                    error_count = 0;
                    if status_tx.send(ConnectionStatus::Connected).is_err() {
                        debug!("Status receiver dropped, shutting down");
                        break;
                    }
                }
                Ok(Some(FeedEvent::Disconnected)) => {
                    info!("Telemetry feed disconnected, resetting tracked state");
                    // A reconnect must not inherit edge context from the
                    // previous session
                    tracker.reset();
                    if status_tx.send(ConnectionStatus::Disconnected).is_err() {
                        debug!("Status receiver dropped, shutting down");
                        break;
                    }
                }
                Ok(Some(FeedEvent::Telemetry(sample))) => {
                    tick_count += 1;
                    error_count = 0;

                    let edge = tracker.observe(sample.status);
                    trace!(
                        "Tick {}: status={:?}, edge={:?}",
                        sample.tick, sample.status, edge
                    );

                    if let Some(cue) = dispatch(edge) {
                        debug!(tick = sample.tick, cue = ?cue, "Cue triggered");
                        // Non-blocking enqueue; the tick path never waits on
                        // the audio device
                        audio.play(cue);
                    }
                }
                Ok(None) => {
                    info!("Feed ended after {} ticks", tick_count);
                    let _ = status_tx.send(ConnectionStatus::Disconnected);
                    break;
                }
                Err(e) => {
                    // Provider error - don't crash on transient failures
                    error_count += 1;
                    error!("Feed error ({}/{}): {}", error_count, MAX_ERRORS, e);

                    if error_count >= MAX_ERRORS {
                        error!("Too many feed errors, shutting down");
                        let _ = status_tx.send(ConnectionStatus::Disconnected);
                        break;
                    }

                    // Exponential backoff: 100ms, 200ms, 400ms, ...
                    let backoff = std::time::Duration::from_millis(50 * (1 << error_count.min(5)));
                    tokio::time::sleep(backoff).await;
                }
            }
        }

        info!("Feed task ended (processed {} ticks)", tick_count);
    }
}
