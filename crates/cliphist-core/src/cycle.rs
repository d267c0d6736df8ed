//! Cycle-paste time-window tracking.
//!
//! Repeated cycle-paste triggers inside a short window step through the
//! history in rotation; once the window lapses the sequence resets. The
//! tracker holds only the timestamp of the last trigger and compares
//! caller-supplied instants against it, so there is no internal clock and no
//! timer thread. The host arms its own cancellable timeout for the
//! end-of-cycle selection collapse (see the host integration crate).

use std::time::{Duration, Instant};

/// Idle window after which a cycle-paste sequence resets.
pub const CYCLE_WINDOW: Duration = Duration::from_millis(1000);

/// What a cycle-paste trigger should do to the history ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleStep {
    /// Paste the front entry, then rotate it to the back.
    ///
    /// Produced by the first trigger of a sequence and by every repeat
    /// trigger that arrives within [`CYCLE_WINDOW`].
    Rotate,
    /// Paste the front entry again without rotating.
    ///
    /// Produced when a trigger arrives at or after the window has lapsed: the
    /// stale sequence ends and the next trigger starts a fresh cycle from the
    /// same front entry.
    RepeatFront,
}

/// Two-state (Idle / Cycling) tracker for cycle-paste sequences.
///
/// ```rust
/// use std::time::{Duration, Instant};
/// use cliphist_core::{CycleStep, CycleTracker, CYCLE_WINDOW};
///
/// let mut tracker = CycleTracker::new();
/// let start = Instant::now();
///
/// assert_eq!(tracker.on_trigger(start), CycleStep::Rotate);
/// assert_eq!(tracker.on_trigger(start + Duration::from_millis(300)), CycleStep::Rotate);
/// assert_eq!(tracker.on_trigger(start + Duration::from_millis(300) + CYCLE_WINDOW), CycleStep::RepeatFront);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CycleTracker {
    last_trigger: Option<Instant>,
}

impl CycleTracker {
    /// Create a tracker in the `Idle` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a cycle sequence is currently active.
    ///
    /// Note this reflects the last trigger only; the tracker cannot observe
    /// the passage of time on its own. A lapsed window is detected on the next
    /// [`CycleTracker::on_trigger`] call or reported by the host timeout via
    /// [`CycleTracker::reset`].
    pub fn is_cycling(&self) -> bool {
        self.last_trigger.is_some()
    }

    /// Process a cycle-paste trigger occurring at `now`.
    ///
    /// Transitions:
    ///
    /// - `Idle -> Cycling`: first trigger, [`CycleStep::Rotate`].
    /// - `Cycling -> Cycling`: trigger within [`CYCLE_WINDOW`] of the previous
    ///   one, [`CycleStep::Rotate`].
    /// - `Cycling -> Idle`: trigger at or after the window, [`CycleStep::RepeatFront`].
    pub fn on_trigger(&mut self, now: Instant) -> CycleStep {
        match self.last_trigger {
            Some(previous) if now.saturating_duration_since(previous) < CYCLE_WINDOW => {
                self.last_trigger = Some(now);
                CycleStep::Rotate
            }
            Some(_) => {
                self.last_trigger = None;
                CycleStep::RepeatFront
            }
            None => {
                self.last_trigger = Some(now);
                CycleStep::Rotate
            }
        }
    }

    /// Return to `Idle`, e.g. when the host's idle timeout fires.
    pub fn reset(&mut self) {
        self.last_trigger = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_trigger_starts_cycling() {
        let mut tracker = CycleTracker::new();
        assert!(!tracker.is_cycling());
        assert_eq!(tracker.on_trigger(Instant::now()), CycleStep::Rotate);
        assert!(tracker.is_cycling());
    }

    #[test]
    fn trigger_within_window_keeps_rotating() {
        let mut tracker = CycleTracker::new();
        let start = Instant::now();
        tracker.on_trigger(start);
        assert_eq!(
            tracker.on_trigger(start + Duration::from_millis(999)),
            CycleStep::Rotate
        );
        assert!(tracker.is_cycling());
    }

    #[test]
    fn stale_trigger_repeats_front_and_resets() {
        let mut tracker = CycleTracker::new();
        let start = Instant::now();
        tracker.on_trigger(start);
        assert_eq!(tracker.on_trigger(start + CYCLE_WINDOW), CycleStep::RepeatFront);
        assert!(!tracker.is_cycling());

        // The next trigger starts a fresh cycle.
        assert_eq!(
            tracker.on_trigger(start + CYCLE_WINDOW + Duration::from_millis(1)),
            CycleStep::Rotate
        );
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut tracker = CycleTracker::new();
        tracker.on_trigger(Instant::now());
        tracker.reset();
        assert!(!tracker.is_cycling());
    }
}
