//! Channel provider for host-pushed feed events

use tokio::sync::mpsc;
use tracing::debug;

use crate::provider::FeedProvider;
use crate::types::{DrsSample, DrsStatus, FeedEvent};
use crate::{ChimeError, Result};

/// Provider fed by a host application over an in-process channel.
///
/// The simulator transport itself stays on the host side: whatever SDK
/// binding the host embeds calls the [`FeedHandle`] from its own callbacks,
/// and the events funnel into the single consumer task that owns the
/// tracker. The feed ends when every handle has been dropped.
pub struct ChannelProvider {
    events: mpsc::UnboundedReceiver<FeedEvent>,
    tick_rate: f64,
}

impl ChannelProvider {
    /// Create a provider and the handle the host pushes events through.
    ///
    /// `tick_rate` is the host feed's configured frequency in Hz, reported
    /// to consumers but never used for pacing (the host paces itself).
    pub fn new(tick_rate: f64) -> (Self, FeedHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { events: rx, tick_rate }, FeedHandle { events: tx })
    }
}

#[async_trait::async_trait]
impl FeedProvider for ChannelProvider {
    async fn next_event(&mut self) -> Result<Option<FeedEvent>> {
        // None from recv means all handles dropped: normal end of feed
        Ok(self.events.recv().await)
    }

    fn tick_rate(&self) -> f64 {
        self.tick_rate
    }
}

/// Cloneable push side of a [`ChannelProvider`].
#[derive(Debug, Clone)]
pub struct FeedHandle {
    events: mpsc::UnboundedSender<FeedEvent>,
}

impl FeedHandle {
    /// Report that the simulator session came up.
    pub fn connected(&self) -> Result<()> {
        self.push(FeedEvent::Connected)
    }

    /// Report that the simulator session went away.
    pub fn disconnected(&self) -> Result<()> {
        self.push(FeedEvent::Disconnected)
    }

    /// Push one telemetry tick with an already-decoded status.
    pub fn telemetry(&self, tick: u32, status: DrsStatus) -> Result<()> {
        self.push(FeedEvent::Telemetry(DrsSample { tick, status }))
    }

    /// Push one telemetry tick straight from the SDK's raw integer.
    ///
    /// Unknown values are normalized at this boundary, so the consumer only
    /// ever sees the closed status set.
    pub fn telemetry_raw(&self, tick: u32, raw_status: i32) -> Result<()> {
        self.push(FeedEvent::Telemetry(DrsSample::from_raw(tick, raw_status)))
    }

    /// Push an arbitrary feed event.
    pub fn push(&self, event: FeedEvent) -> Result<()> {
        self.events.send(event).map_err(|_| {
            debug!("Feed handle push after session shutdown");
            ChimeError::feed_error("chime session is no longer consuming events")
        })
    }
}
