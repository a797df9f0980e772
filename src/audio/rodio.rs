//! Rodio-backed audio port
//!
//! Synthesizes the two DRS chimes and plays them on the default output
//! device. Requests are queued through an unbounded channel onto a dedicated
//! playback task, so a slow or missing device never blocks the feed task.

use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, Sink};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::AudioPort;
use crate::types::Cue;
use crate::{ChimeError, Result};

/// Audio port implementation using rodio.
pub struct RodioAudioPort {
    requests: mpsc::UnboundedSender<Cue>,
}

impl RodioAudioPort {
    /// Create the port and spawn its playback task.
    ///
    /// Must be called from within a tokio runtime. Cues queue in order and
    /// play back to back; playback failures are logged and dropped.
    pub fn new(volume: f32) -> Self {
        let volume = volume.clamp(0.0, 1.0);
        let (tx, mut rx) = mpsc::unbounded_channel::<Cue>();

        tokio::spawn(async move {
            debug!("Audio playback task started");
            while let Some(cue) = rx.recv().await {
                // Device access and playback are blocking; keep them off the
                // async workers
                match tokio::task::spawn_blocking(move || play_cue_sync(cue, volume)).await {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => warn!("Failed to play {:?} cue: {}", cue, e),
                    Err(e) => warn!("Audio playback task join error: {}", e),
                }
            }
            debug!("Audio playback task ended");
        });

        Self { requests: tx }
    }
}

impl AudioPort for RodioAudioPort {
    fn play(&self, cue: Cue) {
        if self.requests.send(cue).is_err() {
            warn!("Audio playback task gone, dropping cue {:?}", cue);
        }
    }
}

/// A sine tone with a short fade-in so chimes do not click.
fn chime_tone(freq: f32, duration_ms: u64, amplitude: f32) -> impl Source<Item = f32> + Send {
    let fade_ms = (duration_ms / 5).min(30);
    SineWave::new(freq)
        .take_duration(Duration::from_millis(duration_ms))
        .fade_in(Duration::from_millis(fade_ms))
        .amplify(amplitude)
}

/// Play a cue synchronously (called from spawn_blocking).
fn play_cue_sync(cue: Cue, volume: f32) -> Result<()> {
    let (_stream, stream_handle) =
        OutputStream::try_default().map_err(|e| ChimeError::audio_error(e.to_string()))?;

    let sink =
        Sink::try_new(&stream_handle).map_err(|e| ChimeError::audio_error(e.to_string()))?;

    match cue {
        Cue::Available => {
            // Ascending two-tone chime: C5 -> E5, the longer "armed" sound
            sink.append(chime_tone(523.0, 90, volume));
            sink.append(chime_tone(659.0, 160, volume));
        }
        Cue::Activated => {
            // Short single blip: A5
            sink.append(chime_tone(880.0, 70, volume));
        }
    }

    sink.sleep_until_end();

    Ok(())
}
