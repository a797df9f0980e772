//! Provider trait for telemetry feed sources

use crate::Result;
use crate::types::FeedEvent;

/// Trait for telemetry feed sources
///
/// Providers abstract over where the DRS signal comes from (a host-embedded
/// SDK binding, a scripted sequence, a network relay) and handle their own
/// timing internally. Events arrive on a single ordered stream so the
/// consumer never has to reconcile lifecycle callbacks with tick callbacks.
#[async_trait::async_trait]
pub trait FeedProvider: Send + 'static {
    /// Get the next feed event
    ///
    /// Returns:
    /// - `Ok(Some(event))` - New event available
    /// - `Ok(None)` - Feed ended (normal termination)
    /// - `Err(e)` - Error occurred
    ///
    /// Each provider handles pacing internally:
    /// - Channel: waits on the host to push
    /// - Scripted: emits at the configured interval
    async fn next_event(&mut self) -> Result<Option<FeedEvent>>;

    /// Get the native tick rate in Hz
    ///
    /// This is the source frequency (~15.6 Hz for the default 64 ms feed
    /// interval)
    fn tick_rate(&self) -> f64;
}
