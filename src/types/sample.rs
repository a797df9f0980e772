//! Feed event and sample types

use serde::{Deserialize, Serialize};

use super::DrsStatus;

/// One telemetry tick's worth of data for the cue pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrsSample {
    /// Monotonic tick counter from the feed
    pub tick: u32,
    /// DRS status reported on this tick
    pub status: DrsStatus,
}

impl DrsSample {
    /// Build a sample from a raw feed integer, normalizing unknown values.
    pub fn from_raw(tick: u32, raw_status: i32) -> Self {
        Self { tick, status: DrsStatus::from_raw(raw_status) }
    }
}

/// Events delivered by a telemetry feed.
///
/// Session lifecycle and per-tick data arrive interleaved on one stream so a
/// single consumer can process them in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedEvent {
    /// The feed established a simulator session
    Connected,
    /// The simulator session ended
    Disconnected,
    /// A telemetry tick
    Telemetry(DrsSample),
}

/// Connection state reported to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionStatus {
    Connected,
    Disconnected,
}

impl std::fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // These exact strings are what hosts display
        match self {
            ConnectionStatus::Connected => f.write_str("Connected"),
            ConnectionStatus::Disconnected => f.write_str("Disconnected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_from_raw_normalizes_status() {
        let sample = DrsSample::from_raw(7, 2);
        assert_eq!(sample.tick, 7);
        assert_eq!(sample.status, DrsStatus::Enabled);

        let garbage = DrsSample::from_raw(8, 99);
        assert_eq!(garbage.status, DrsStatus::NotAvailable);
    }

    #[test]
    fn connection_status_display_matches_host_contract() {
        assert_eq!(ConnectionStatus::Connected.to_string(), "Connected");
        assert_eq!(ConnectionStatus::Disconnected.to_string(), "Disconnected");
    }
}
