//! Bounded, de-duplicated clipboard history.
//!
//! The ring stores text fragments in insertion order (oldest at the front) and
//! enforces two invariants on every mutation:
//!
//! - no two entries are equal (exact string equality)
//! - the length never exceeds the configured capacity
//!
//! Cycle paste rotates the ring front-to-back, so repeated rotations walk every
//! entry once before repeating.

use std::collections::VecDeque;

/// Default history capacity when the host supplies no configuration.
pub const DEFAULT_CAPACITY: usize = 12;

/// A bounded, de-duplicated list of previously copied or cut text fragments.
///
/// Entries are kept in insertion order by recency: the front is the oldest
/// entry (and the next cycle-paste candidate), the back is the newest. Display
/// order for pickers is the reverse; see [`HistoryRing::entries`].
#[derive(Debug, Clone)]
pub struct HistoryRing {
    entries: VecDeque<String>,
    capacity: usize,
}

impl HistoryRing {
    /// Create an empty ring with the given capacity.
    ///
    /// A capacity of zero is clamped to one so that `record` always retains
    /// the most recent fragment.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// The configured maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ring holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `fragment` is currently stored (exact equality).
    pub fn contains(&self, fragment: &str) -> bool {
        self.entries.iter().any(|entry| entry == fragment)
    }

    /// The oldest entry, i.e. the next cycle-paste candidate.
    pub fn front(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    /// Record a copied/cut fragment.
    ///
    /// If the fragment is already present this is a no-op: the existing entry
    /// keeps its position and is not refreshed. Otherwise the fragment is
    /// appended as the newest entry, evicting the oldest one when the ring is
    /// full.
    pub fn record(&mut self, fragment: &str) {
        if self.contains(fragment) {
            return;
        }
        self.entries.push_back(fragment.to_string());
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Iterate entries most-recent-first (display order).
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().rev().map(String::as_str)
    }

    /// Remove the first entry equal to `fragment`.
    ///
    /// Returns `true` when an entry was removed; absent fragments are a no-op.
    pub fn remove(&mut self, fragment: &str) -> bool {
        match self.entries.iter().position(|entry| entry == fragment) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the first entry equal to `old` with `new`, in place.
    ///
    /// The entry keeps its position in the ring. Returns `true` when a
    /// replacement happened; an absent `old` is a no-op.
    pub fn edit(&mut self, old: &str, new: &str) -> bool {
        match self.entries.iter().position(|entry| entry == old) {
            Some(index) => {
                self.entries[index] = new.to_string();
                true
            }
            None => false,
        }
    }

    /// Remove all entries unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Rotate the ring by one: the front entry moves to the back and is
    /// returned. Returns `None` on an empty ring.
    pub fn cycle_next(&mut self) -> Option<String> {
        let front = self.entries.pop_front()?;
        self.entries.push_back(front.clone());
        Some(front)
    }
}

impl Default for HistoryRing {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_deduplicates_without_reordering() {
        let mut ring = HistoryRing::new(4);
        ring.record("a");
        ring.record("b");
        ring.record("a");

        let entries: Vec<_> = ring.entries().collect();
        assert_eq!(entries, vec!["b", "a"]);
    }

    #[test]
    fn record_evicts_oldest_when_full() {
        let mut ring = HistoryRing::new(3);
        for fragment in ["a", "b", "c", "d"] {
            ring.record(fragment);
        }

        assert_eq!(ring.len(), 3);
        assert!(!ring.contains("a"));
        let entries: Vec<_> = ring.entries().collect();
        assert_eq!(entries, vec!["d", "c", "b"]);
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut ring = HistoryRing::new(0);
        ring.record("a");
        ring.record("b");

        assert_eq!(ring.capacity(), 1);
        assert_eq!(ring.len(), 1);
        assert!(ring.contains("b"));
    }

    #[test]
    fn cycle_next_rotates_front_to_back() {
        let mut ring = HistoryRing::new(8);
        for fragment in ["a", "b", "c"] {
            ring.record(fragment);
        }

        assert_eq!(ring.cycle_next().as_deref(), Some("a"));
        assert_eq!(ring.front(), Some("b"));
        assert_eq!(ring.cycle_next().as_deref(), Some("b"));
        assert_eq!(ring.front(), Some("c"));
    }

    #[test]
    fn cycle_next_on_empty_ring_is_none() {
        let mut ring = HistoryRing::new(4);
        assert_eq!(ring.cycle_next(), None);
    }

    #[test]
    fn edit_preserves_position_and_length() {
        let mut ring = HistoryRing::new(4);
        for fragment in ["a", "b", "c"] {
            ring.record(fragment);
        }

        assert!(ring.edit("b", "beta"));
        assert_eq!(ring.len(), 3);
        let entries: Vec<_> = ring.entries().collect();
        assert_eq!(entries, vec!["c", "beta", "a"]);

        assert!(!ring.edit("missing", "x"));
        assert_eq!(ring.len(), 3);
    }

    #[test]
    fn remove_is_noop_for_absent_fragment() {
        let mut ring = HistoryRing::new(4);
        ring.record("a");

        assert!(!ring.remove("b"));
        assert_eq!(ring.len(), 1);
        assert!(ring.remove("a"));
        assert!(ring.is_empty());
    }
}
