//! Maps classified status edges to audio cue requests.
//!
//! Pure decision logic, separated from playback so it can be tested without
//! an audio subsystem. The driver applies the returned action by handing it
//! to an [`AudioPort`](crate::audio::AudioPort).

use crate::types::{Cue, DrsEdge};

/// Translate an edge into at most one cue request.
///
/// At most one cue per tick, and never one for [`DrsEdge::NoTrigger`]: the
/// `Option` return makes both guarantees structural.
pub fn dispatch(edge: DrsEdge) -> Option<Cue> {
    match edge {
        DrsEdge::ApproachingToEnabled => Some(Cue::Available),
        DrsEdge::EnabledToOn => Some(Cue::Activated),
        DrsEdge::NoTrigger => None,
    }
}
