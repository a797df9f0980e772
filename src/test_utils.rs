//! Shared test doubles for driver-level tests.

use std::sync::{Arc, Mutex};

use tokio::sync::watch;

use crate::audio::AudioPort;
use crate::provider::FeedProvider;
use crate::types::{ConnectionStatus, Cue, FeedEvent};
use crate::{ChimeError, Result};

/// Audio port that records every requested cue in order.
#[derive(Clone, Default)]
pub struct RecordingAudioPort {
    played: Arc<Mutex<Vec<Cue>>>,
}

impl RecordingAudioPort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> Vec<Cue> {
        self.played.lock().unwrap().clone()
    }
}

impl AudioPort for RecordingAudioPort {
    fn play(&self, cue: Cue) {
        self.played.lock().unwrap().push(cue);
    }
}

/// Provider that fails a fixed number of times before replaying a script.
pub struct FlakyProvider {
    failures_remaining: u32,
    events: std::vec::IntoIter<FeedEvent>,
}

impl FlakyProvider {
    pub fn new(failures: u32, events: Vec<FeedEvent>) -> Self {
        Self { failures_remaining: failures, events: events.into_iter() }
    }
}

#[async_trait::async_trait]
impl FeedProvider for FlakyProvider {
    async fn next_event(&mut self) -> Result<Option<FeedEvent>> {
        if self.failures_remaining > 0 {
            self.failures_remaining -= 1;
            return Err(ChimeError::feed_error("synthetic feed failure"));
        }
        Ok(self.events.next())
    }

    fn tick_rate(&self) -> f64 {
        15.625
    }
}

/// Collect every observed connection status, starting with the current
/// value, until the driver task ends and drops its sender.
pub async fn drain_status(mut rx: watch::Receiver<ConnectionStatus>) -> Vec<ConnectionStatus> {
    let mut seen = vec![*rx.borrow_and_update()];
    while rx.changed().await.is_ok() {
        seen.push(*rx.borrow_and_update());
    }
    seen
}
