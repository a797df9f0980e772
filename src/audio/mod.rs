//! Audio output port and implementations.
//!
//! The driver hands cue requests to an [`AudioPort`]; everything about how
//! sound actually gets made lives behind that trait. `play` must never
//! block: the tick path runs at feed rate, and a stalled audio device must
//! not cost edge-detection fidelity.

mod noop;
mod rodio;

pub use noop::NoOpAudioPort;
pub use rodio::RodioAudioPort;

use crate::ChimeConfig;
use crate::types::Cue;

/// Outbound port for cue playback.
pub trait AudioPort: Send + Sync {
    /// Request playback of a cue. Fire-and-forget: implementations queue the
    /// request and return immediately; playback failures are logged, not
    /// returned.
    fn play(&self, cue: Cue);
}

/// Create an audio port based on whether audio output is enabled.
pub fn create_audio_port(config: &ChimeConfig) -> Box<dyn AudioPort> {
    if config.audio_enabled {
        Box::new(RodioAudioPort::new(config.cue_volume))
    } else {
        Box::new(NoOpAudioPort::new())
    }
}
