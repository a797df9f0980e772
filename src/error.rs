//! Error types for the cue pipeline.
//!
//! The decision core (observe/dispatch) is total and has no error paths;
//! everything fallible lives at the boundaries. Feed providers may fail
//! transiently, audio output may be missing entirely, and host-supplied
//! configuration may not parse. Each gets a structured variant here.
//!
//! Errors report whether they are worth retrying:
//!
//! ```rust
//! use drs_chime::ChimeError;
//!
//! let error = ChimeError::feed_error("simulator not running");
//! if error.is_retryable() {
//!     for suggestion in error.recovery_suggestions() {
//!         println!("  - {}", suggestion);
//!     }
//! }
//! ```

use std::time::Duration;
use thiserror::Error;

/// Result type alias for cue pipeline operations.
pub type Result<T, E = ChimeError> = std::result::Result<T, E>;

/// Main error type for the cue pipeline boundaries.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ChimeError {
    #[error("Telemetry feed error: {reason}")]
    Feed {
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Audio output error: {reason}")]
    Audio { reason: String },

    #[error("Configuration error: {details}")]
    Config { details: String },

    #[error("Operation timed out after {duration:?}")]
    Timeout { duration: Duration },
}

impl ChimeError {
    /// Returns whether this error is potentially recoverable through retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            ChimeError::Feed { .. } => true,
            ChimeError::Timeout { .. } => true,
            ChimeError::Audio { .. } => false,
            ChimeError::Config { .. } => false,
        }
    }

    /// Returns suggested recovery actions for this error.
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            ChimeError::Feed { .. } => vec![
                "Ensure the simulator is running and in a session",
                "Check that the telemetry feed is still attached",
                "Try reconnecting the feed",
            ],
            ChimeError::Audio { .. } => vec![
                "Check that an audio output device is present",
                "Verify the device is not claimed exclusively by another application",
                "Disable audio in the configuration to run silent",
            ],
            ChimeError::Config { .. } => vec![
                "Check the configuration file syntax",
                "Compare field names against the documented defaults",
            ],
            ChimeError::Timeout { .. } => vec![
                "Increase the timeout duration",
                "Verify the feed is delivering events",
            ],
        }
    }

    /// Helper constructor for feed errors.
    pub fn feed_error(reason: impl Into<String>) -> Self {
        ChimeError::Feed { reason: reason.into(), source: None }
    }

    /// Helper constructor for feed errors with an underlying cause.
    pub fn feed_error_with_source(
        reason: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        ChimeError::Feed { reason: reason.into(), source: Some(source) }
    }

    /// Helper constructor for audio output errors.
    pub fn audio_error(reason: impl Into<String>) -> Self {
        ChimeError::Audio { reason: reason.into() }
    }

    /// Helper constructor for configuration errors.
    pub fn config_error(details: impl Into<String>) -> Self {
        ChimeError::Config { details: details.into() }
    }
}
