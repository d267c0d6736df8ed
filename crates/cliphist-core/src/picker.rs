//! Picker items for the host's list-selection UI.
//!
//! The host shows history entries in a picker (quick-pick style list). Items
//! are ordered most-recent-first, and each carries both the full fragment (so
//! the chosen entry can be pasted/removed/edited verbatim) and a flattened
//! label fit for a single list row: first line only, truncated to a maximum
//! display width with an ellipsis.
//!
//! Width is measured in terminal-style cells via `unicode-width`, iterating
//! grapheme clusters so that combining sequences and emoji are never split.

use crate::history::HistoryRing;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Maximum display width (in cells) of a picker label.
pub const MAX_LABEL_WIDTH: usize = 60;

/// Label of the pseudo-entry that clears the whole history from the removal
/// picker.
pub const CLEAR_ALL_LABEL: &str = "Clear All History";

/// One row of the host picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerItem {
    /// Single-line, width-bounded text shown in the picker row.
    pub label: String,
    /// The full fragment this row stands for; `None` for the
    /// `Clear All History` pseudo-entry.
    pub fragment: Option<String>,
}

impl PickerItem {
    fn for_fragment(fragment: &str) -> Self {
        Self {
            label: flatten_label(fragment, MAX_LABEL_WIDTH),
            fragment: Some(fragment.to_string()),
        }
    }

    fn clear_all() -> Self {
        Self {
            label: CLEAR_ALL_LABEL.to_string(),
            fragment: None,
        }
    }

    /// Whether this is the `Clear All History` pseudo-entry.
    pub fn is_clear_all(&self) -> bool {
        self.fragment.is_none()
    }
}

/// Build the picker for pasting or editing: entries most-recent-first.
pub fn paste_picker(ring: &HistoryRing) -> Vec<PickerItem> {
    ring.entries().map(PickerItem::for_fragment).collect()
}

/// Build the removal picker: a `Clear All History` pseudo-entry first (only
/// when the ring is non-empty), then entries most-recent-first.
pub fn removal_picker(ring: &HistoryRing) -> Vec<PickerItem> {
    let mut items = Vec::with_capacity(ring.len() + 1);
    if !ring.is_empty() {
        items.push(PickerItem::clear_all());
    }
    items.extend(ring.entries().map(PickerItem::for_fragment));
    items
}

/// Flatten a fragment to a single picker row.
///
/// Takes the first line of the fragment and truncates it to `max_width`
/// display cells. A trailing ellipsis marks both truncation and elided
/// additional lines.
pub fn flatten_label(fragment: &str, max_width: usize) -> String {
    let first_line = fragment.split(['\r', '\n']).next().unwrap_or("");
    let multiline = first_line.len() != fragment.len();

    if !multiline && first_line.width() <= max_width {
        return first_line.to_string();
    }

    // Reserve one cell for the ellipsis.
    let budget = max_width.saturating_sub(1);
    let mut label = String::new();
    let mut used = 0usize;
    for grapheme in first_line.graphemes(true) {
        let width = grapheme.width();
        if used + width > budget {
            break;
        }
        label.push_str(grapheme);
        used += width;
    }
    label.push('…');
    label
}
