//! DRS status signal definitions

use serde::{Deserialize, Serialize};

/// Discrete DRS (drag reduction system) status reported by the simulator.
/// Maps to the SDK's DrsStatus telemetry variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrsStatus {
    /// DRS cannot be used (0)
    NotAvailable,
    /// Car is inside a detection zone, activation coming up (1)
    Approaching,
    /// DRS may be activated by the driver (2)
    Enabled,
    /// DRS is open (3)
    On,
}

impl DrsStatus {
    /// Decode a raw feed integer into a status.
    ///
    /// The feed schema is not under our control; anything outside the four
    /// known values is normalized to [`DrsStatus::NotAvailable`] so a
    /// misbehaving or evolving feed can never take the cue pipeline down.
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            1 => DrsStatus::Approaching,
            2 => DrsStatus::Enabled,
            3 => DrsStatus::On,
            _ => DrsStatus::NotAvailable,
        }
    }

    /// The raw SDK value for this status.
    pub const fn as_raw(self) -> i32 {
        match self {
            DrsStatus::NotAvailable => 0,
            DrsStatus::Approaching => 1,
            DrsStatus::Enabled => 2,
            DrsStatus::On => 3,
        }
    }
}

impl From<i32> for DrsStatus {
    fn from(raw: i32) -> Self {
        DrsStatus::from_raw(raw)
    }
}

impl Default for DrsStatus {
    fn default() -> Self {
        DrsStatus::NotAvailable
    }
}
