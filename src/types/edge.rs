//! Edge classification and cue types

use serde::{Deserialize, Serialize};

/// A classified transition of the DRS status signal between two consecutive
/// ticks. Derived per tick and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrsEdge {
    /// Approaching on the previous tick, Enabled on this one
    ApproachingToEnabled,
    /// Enabled on the previous tick, On on this one
    EnabledToOn,
    /// Any other pair of consecutive values
    NoTrigger,
}

/// An audio cue the dispatcher can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    /// DRS just became available for activation (longer chime)
    Available,
    /// DRS just opened (short blip)
    Activated,
}
