//! DRS status tracking and edge classification.
//!
//! [`DrsTracker`] holds the single piece of mutable state in the cue
//! pipeline: the status value observed on the previous tick. Each tick it
//! compares the incoming value against that history and classifies the
//! transition as a [`DrsEdge`]. Classification looks only at the
//! immediately preceding tick; a status that detours through another value
//! (`Approaching -> NotAvailable -> Enabled`) does not count as an edge.

use crate::types::{DrsEdge, DrsStatus};

/// Tracks the previous DRS status across telemetry ticks.
///
/// One instance per telemetry session, owned by whatever processes the tick
/// stream. Not shared: the driver task is the only writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrsTracker {
    previous: DrsStatus,
}

impl DrsTracker {
    /// Create a tracker with no observed history.
    pub fn new() -> Self {
        Self { previous: DrsStatus::NotAvailable }
    }

    /// Observe the current tick's status and classify the transition.
    ///
    /// The stored previous value is updated unconditionally, whether or not
    /// an edge fired, so rapid oscillation is tracked tick by tick.
    pub fn observe(&mut self, current: DrsStatus) -> DrsEdge {
        let local_previous = self.previous;
        self.previous = current;

        match (local_previous, current) {
            (DrsStatus::Approaching, DrsStatus::Enabled) => DrsEdge::ApproachingToEnabled,
            (DrsStatus::Enabled, DrsStatus::On) => DrsEdge::EnabledToOn,
            _ => DrsEdge::NoTrigger,
        }
    }

    /// Forget the tracked history, as on session disconnect.
    ///
    /// A reconnecting feed that resumes mid-`Enabled` must not fire a cue
    /// off state inherited from the previous session.
    pub fn reset(&mut self) {
        self.previous = DrsStatus::NotAvailable;
    }

    /// The status observed on the most recently processed tick.
    pub fn previous(&self) -> DrsStatus {
        self.previous
    }
}

impl Default for DrsTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn observe_all(tracker: &mut DrsTracker, statuses: &[DrsStatus]) -> Vec<DrsEdge> {
        statuses.iter().map(|&s| tracker.observe(s)).collect()
    }

    #[test]
    fn starts_with_no_history() {
        let tracker = DrsTracker::new();
        assert_eq!(tracker.previous(), DrsStatus::NotAvailable);
    }

    #[test]
    fn enabled_after_approaching_fires() {
        let mut tracker = DrsTracker::new();
        assert_eq!(tracker.observe(DrsStatus::Approaching), DrsEdge::NoTrigger);
        assert_eq!(tracker.observe(DrsStatus::Enabled), DrsEdge::ApproachingToEnabled);
    }

    #[test]
    fn on_after_enabled_fires() {
        let mut tracker = DrsTracker::new();
        tracker.observe(DrsStatus::Enabled);
        assert_eq!(tracker.observe(DrsStatus::On), DrsEdge::EnabledToOn);
    }

    #[test]
    fn repeated_values_never_fire() {
        let mut tracker = DrsTracker::new();
        let edges = observe_all(
            &mut tracker,
            &[DrsStatus::Enabled, DrsStatus::Enabled, DrsStatus::Enabled],
        );
        assert_eq!(edges, vec![DrsEdge::NoTrigger; 3]);
    }

    #[test]
    fn detour_suppresses_trigger() {
        // Approaching -> NotAvailable -> Enabled: adjacency broken, no edge
        let mut tracker = DrsTracker::new();
        let edges = observe_all(
            &mut tracker,
            &[DrsStatus::Approaching, DrsStatus::NotAvailable, DrsStatus::Enabled],
        );
        assert_eq!(edges, vec![DrsEdge::NoTrigger; 3]);
    }

    #[test]
    fn flicker_back_into_approach_refires() {
        let mut tracker = DrsTracker::new();
        let edges = observe_all(
            &mut tracker,
            &[DrsStatus::Enabled, DrsStatus::Approaching, DrsStatus::Enabled],
        );
        assert_eq!(
            edges,
            vec![DrsEdge::NoTrigger, DrsEdge::NoTrigger, DrsEdge::ApproachingToEnabled]
        );
    }

    #[test]
    fn reset_forgets_history() {
        let mut tracker = DrsTracker::new();
        tracker.observe(DrsStatus::Approaching);
        tracker.reset();
        assert_eq!(tracker.previous(), DrsStatus::NotAvailable);
        // Enabled alone after a reset must not fire
        assert_eq!(tracker.observe(DrsStatus::Enabled), DrsEdge::NoTrigger);
    }

    fn arb_status() -> impl Strategy<Value = DrsStatus> {
        prop::sample::select(vec![
            DrsStatus::NotAvailable,
            DrsStatus::Approaching,
            DrsStatus::Enabled,
            DrsStatus::On,
        ])
    }

    proptest! {
        #[test]
        fn prop_previous_always_tracks_last_observation(
            statuses in prop::collection::vec(arb_status(), 1..64)
        ) {
            let mut tracker = DrsTracker::new();
            for &status in &statuses {
                tracker.observe(status);
                prop_assert_eq!(tracker.previous(), status);
            }
        }

        #[test]
        fn prop_edges_fire_iff_adjacent(
            statuses in prop::collection::vec(arb_status(), 1..64)
        ) {
            let mut tracker = DrsTracker::new();
            let mut previous = DrsStatus::NotAvailable;
            for &status in &statuses {
                let edge = tracker.observe(status);
                let expected = match (previous, status) {
                    (DrsStatus::Approaching, DrsStatus::Enabled) => DrsEdge::ApproachingToEnabled,
                    (DrsStatus::Enabled, DrsStatus::On) => DrsEdge::EnabledToOn,
                    _ => DrsEdge::NoTrigger,
                };
                prop_assert_eq!(edge, expected);
                previous = status;
            }
        }

        #[test]
        fn prop_raw_feed_values_never_panic(
            raws in prop::collection::vec(any::<i32>(), 1..64)
        ) {
            // Out-of-range values normalize at the boundary; the tracker is
            // total over whatever the decode produces
            let mut tracker = DrsTracker::new();
            for &raw in &raws {
                let status = DrsStatus::from_raw(raw);
                tracker.observe(status);
                prop_assert_eq!(tracker.previous(), status);
            }
        }
    }
}
