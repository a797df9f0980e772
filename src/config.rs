//! Runtime configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{ChimeError, Result};

/// Default telemetry update interval in milliseconds (~15.6 Hz).
///
/// The feed rate is configuration, not an invariant; nothing in the edge
/// logic depends on this value.
pub const DEFAULT_TELEMETRY_INTERVAL_MS: u64 = 64;

/// Tunable settings for a chime session.
///
/// All fields have defaults, so a partial YAML document (or none at all) is
/// valid:
///
/// ```rust
/// use drs_chime::ChimeConfig;
///
/// let config = ChimeConfig::from_yaml("cue_volume: 0.5").unwrap();
/// assert_eq!(config.telemetry_interval_ms, 64);
/// assert!(config.audio_enabled);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChimeConfig {
    /// Telemetry update interval in milliseconds
    pub telemetry_interval_ms: u64,
    /// Playback amplitude for synthesized cues, 0.0..=1.0
    pub cue_volume: f32,
    /// When false, cue requests go to a no-op audio port
    pub audio_enabled: bool,
}

impl Default for ChimeConfig {
    fn default() -> Self {
        Self {
            telemetry_interval_ms: DEFAULT_TELEMETRY_INTERVAL_MS,
            cue_volume: 0.3,
            audio_enabled: true,
        }
    }
}

impl ChimeConfig {
    /// Parse a configuration from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| ChimeError::config_error(e.to_string()))
    }

    /// The configured telemetry interval as a [`Duration`].
    pub fn telemetry_interval(&self) -> Duration {
        Duration::from_millis(self.telemetry_interval_ms.max(1))
    }

    /// Feed frequency in Hz implied by the configured interval.
    pub fn tick_rate(&self) -> f64 {
        1.0 / self.telemetry_interval().as_secs_f64()
    }
}
