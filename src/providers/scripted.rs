//! Scripted provider for recorded status sequences

use std::time::Duration;

use tokio::time::{Interval, interval};
use tracing::{debug, trace};

use crate::provider::FeedProvider;
use crate::types::{DrsSample, DrsStatus, FeedEvent};
use crate::{ChimeConfig, Result};

/// Where the script currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Connecting,
    Streaming,
    Closing,
    Finished,
}

/// Provider that plays back a recorded DRS status sequence at feed pace.
///
/// Emits `Connected`, then one paced `Telemetry` event per scripted status,
/// then `Disconnected`, then ends. Useful for tests, demos, and tuning cue
/// sounds without a simulator.
pub struct ScriptedProvider {
    statuses: Vec<DrsStatus>,
    cursor: usize,
    tick: u32,
    phase: Phase,

    /// Pacing between telemetry events
    interval: Interval,

    /// Native interval before any speed adjustment
    base_interval: Duration,

    /// Playback speed multiplier (1.0 = feed pace, 2.0 = double speed)
    speed: f64,
}

impl ScriptedProvider {
    /// Create a provider over a status sequence at the default feed interval.
    pub fn new(statuses: Vec<DrsStatus>) -> Self {
        Self::with_interval(statuses, ChimeConfig::default().telemetry_interval())
    }

    /// Create a provider with an explicit pacing interval.
    pub fn with_interval(statuses: Vec<DrsStatus>, base_interval: Duration) -> Self {
        let base_interval = base_interval.max(Duration::from_micros(1));
        debug!(
            "Scripted feed: {} ticks at {:?} intervals",
            statuses.len(),
            base_interval
        );

        Self {
            statuses,
            cursor: 0,
            tick: 0,
            phase: Phase::Connecting,
            interval: interval(base_interval),
            base_interval,
            speed: 1.0,
        }
    }

    /// Create a provider over raw feed integers, normalizing unknown values.
    pub fn from_raw(raw_statuses: &[i32], base_interval: Duration) -> Self {
        let statuses = raw_statuses.iter().copied().map(DrsStatus::from_raw).collect();
        Self::with_interval(statuses, base_interval)
    }

    /// Set playback speed
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed.clamp(0.1, 10.0);

        let paced = Duration::from_secs_f64(self.base_interval.as_secs_f64() / self.speed);
        self.interval = interval(paced.max(Duration::from_micros(1)));

        debug!("Playback speed set to {}x", self.speed);
    }

    /// Number of scripted ticks not yet emitted.
    pub fn remaining(&self) -> usize {
        self.statuses.len().saturating_sub(self.cursor)
    }
}

#[async_trait::async_trait]
impl FeedProvider for ScriptedProvider {
    async fn next_event(&mut self) -> Result<Option<FeedEvent>> {
        match self.phase {
            Phase::Connecting => {
                self.phase = Phase::Streaming;
                Ok(Some(FeedEvent::Connected))
            }
            Phase::Streaming => {
                if self.cursor >= self.statuses.len() {
                    debug!("Scripted feed exhausted after {} ticks", self.cursor);
                    self.phase = Phase::Closing;
                    return Ok(Some(FeedEvent::Disconnected));
                }

                // Pacing applies to telemetry only; lifecycle events are
                // delivered immediately
                self.interval.tick().await;

                let status = self.statuses[self.cursor];
                self.cursor += 1;
                self.tick = self.tick.wrapping_add(1);

                trace!("Scripted tick {}: status={:?}", self.tick, status);

                Ok(Some(FeedEvent::Telemetry(DrsSample { tick: self.tick, status })))
            }
            Phase::Closing => {
                self.phase = Phase::Finished;
                Ok(None)
            }
            Phase::Finished => Ok(None),
        }
    }

    fn tick_rate(&self) -> f64 {
        1.0 / self.base_interval.as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn emits_lifecycle_around_script() {
        let mut provider = ScriptedProvider::with_interval(
            vec![DrsStatus::Approaching, DrsStatus::Enabled],
            Duration::from_millis(64),
        );

        assert_eq!(provider.remaining(), 2);
        assert_eq!(provider.next_event().await.unwrap(), Some(FeedEvent::Connected));
        assert_eq!(
            provider.next_event().await.unwrap(),
            Some(FeedEvent::Telemetry(DrsSample { tick: 1, status: DrsStatus::Approaching }))
        );
        assert_eq!(provider.remaining(), 1);
        assert_eq!(
            provider.next_event().await.unwrap(),
            Some(FeedEvent::Telemetry(DrsSample { tick: 2, status: DrsStatus::Enabled }))
        );
        assert_eq!(provider.next_event().await.unwrap(), Some(FeedEvent::Disconnected));
        assert_eq!(provider.next_event().await.unwrap(), None);
        // Stays ended
        assert_eq!(provider.next_event().await.unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn raw_script_normalizes_unknown_values() {
        let mut provider = ScriptedProvider::from_raw(&[1, 99], Duration::from_millis(1));

        provider.next_event().await.unwrap(); // Connected
        let first = provider.next_event().await.unwrap();
        let second = provider.next_event().await.unwrap();
        assert_eq!(
            first,
            Some(FeedEvent::Telemetry(DrsSample { tick: 1, status: DrsStatus::Approaching }))
        );
        assert_eq!(
            second,
            Some(FeedEvent::Telemetry(DrsSample { tick: 2, status: DrsStatus::NotAvailable }))
        );
    }

    // Interval construction needs a runtime, so even the sync accessors are
    // exercised under tokio::test
    #[tokio::test]
    async fn speed_is_clamped() {
        let mut provider = ScriptedProvider::new(vec![]);
        provider.set_speed(1000.0);
        assert!((provider.speed - 10.0).abs() < f64::EPSILON);
        provider.set_speed(0.0);
        assert!((provider.speed - 0.1).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn tick_rate_reflects_base_interval() {
        let provider = ScriptedProvider::with_interval(vec![], Duration::from_millis(64));
        assert!((provider.tick_rate() - 15.625).abs() < 1e-9);
    }
}
