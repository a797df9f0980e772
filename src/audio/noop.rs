//! No-op audio port
//!
//! Used when audio output is disabled.

use tracing::trace;

use super::AudioPort;
use crate::types::Cue;

/// Audio port that drops every cue request.
pub struct NoOpAudioPort;

impl NoOpAudioPort {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpAudioPort {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioPort for NoOpAudioPort {
    fn play(&self, cue: Cue) {
        trace!("Audio disabled, dropping cue {:?}", cue);
    }
}
