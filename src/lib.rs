//! Audible DRS cues driven by racing simulator telemetry.
//!
//! Drs Chime watches the simulator's DRS status signal and plays one of two
//! chimes on the transitions that matter to a driver: the moment DRS
//! becomes available for activation, and the moment it actually opens.
//!
//! # Features
//!
//! - **Edge detection**: exactly one cue per qualifying transition, no
//!   duplicates or misses under rapid signal changes
//! - **Feed agnostic**: plug in a host SDK binding over a channel, or
//!   replay a recorded sequence cross-platform
//! - **Non-blocking audio**: playback is queued off the tick path, so a
//!   slow device never costs edge-detection fidelity
//! - **Host notifications**: connection status stream for display
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use drs_chime::{ChimeConfig, DrsChime, DrsStatus};
//!
//! #[tokio::main]
//! async fn main() -> drs_chime::Result<()> {
//!     let config = ChimeConfig::default();
//!
//!     // Replay a recorded status sequence through the real pipeline
//!     let session = DrsChime::replay(
//!         vec![
//!             DrsStatus::NotAvailable,
//!             DrsStatus::Approaching,
//!             DrsStatus::Enabled,
//!             DrsStatus::On,
//!         ],
//!         &config,
//!     )
//!     .await;
//!
//!     println!("Feed is {}", session.current_status());
//!     Ok(())
//! }
//! ```
//!
//! ## Attaching a live feed
//!
//! ```rust,no_run
//! use drs_chime::{ChimeConfig, DrsChime, providers::channel::ChannelProvider};
//!
//! #[tokio::main]
//! async fn main() -> drs_chime::Result<()> {
//!     let config = ChimeConfig::default();
//!     let (provider, feed) = ChannelProvider::new(config.tick_rate());
//!     let session = DrsChime::attach(provider, &config).await;
//!
//!     // The host's SDK binding calls the feed handle from its callbacks:
//!     feed.connected()?;
//!     feed.telemetry_raw(1, 2)?;
//!     # drop(session);
//!     Ok(())
//! }
//! ```

// Core types and error handling
mod config;
mod dispatcher;
mod error;
#[cfg(test)]
mod test_utils;
mod tracker;
pub mod types;

// Pipeline architecture
pub mod audio;
pub mod driver;
pub mod provider;
pub mod providers;
pub mod session;

// Core exports
pub use config::{ChimeConfig, DEFAULT_TELEMETRY_INTERVAL_MS};
pub use dispatcher::dispatch;
pub use error::*;
pub use tracker::DrsTracker;
pub use types::*;

// Pipeline exports
pub use audio::{AudioPort, NoOpAudioPort, RodioAudioPort, create_audio_port};
pub use provider::FeedProvider;
pub use providers::channel::{ChannelProvider, FeedHandle};
pub use providers::scripted::ScriptedProvider;
pub use session::ChimeSession;

use std::time::Duration;
use tracing::{debug, warn};

/// Unified entry point for chime sessions.
///
/// This factory builds the audio port from configuration and wires it to a
/// feed provider. For full control over the audio implementation (custom
/// ports, test doubles), use [`ChimeSession::with_audio`] directly.
///
/// # Examples
///
/// ## Host-fed session
/// ```rust,no_run
/// use drs_chime::{ChimeConfig, ChannelProvider, DrsChime};
///
/// #[tokio::main]
/// async fn main() -> drs_chime::Result<()> {
///     let config = ChimeConfig::default();
///     let (provider, feed) = ChannelProvider::new(config.tick_rate());
///     let session = DrsChime::attach(provider, &config).await;
///     // Hand `feed` to the SDK binding, keep `session` for status display
///     Ok(())
/// }
/// ```
pub struct DrsChime;

impl DrsChime {
    /// Attach the cue pipeline to a telemetry feed.
    ///
    /// Builds the audio port from `config` and, when audio is enabled,
    /// plays the availability chime once so the user hears that output
    /// works before the first real cue.
    pub async fn attach<P>(provider: P, config: &ChimeConfig) -> ChimeSession
    where
        P: FeedProvider,
    {
        let audio = audio::create_audio_port(config);

        if config.audio_enabled {
            debug!("Playing startup cue to verify audio output");
            audio.play(Cue::Available);
        }

        ChimeSession::with_audio(provider, audio)
    }

    /// Replay a recorded status sequence through the full pipeline.
    ///
    /// Paces the sequence at the configured telemetry interval and waits
    /// briefly for the scripted feed to come up before returning.
    pub async fn replay(statuses: Vec<DrsStatus>, config: &ChimeConfig) -> ChimeSession {
        let provider = ScriptedProvider::with_interval(statuses, config.telemetry_interval());
        let session = Self::attach(provider, config).await;

        if session.connected_within(Duration::from_secs(5)).await.is_err() {
            warn!("Timeout waiting for scripted feed to connect");
        }

        session
    }
}
