//! User-visible status strings.
//!
//! The plugin surfaces no errors; these transient status-bar messages are the
//! only feedback the user ever sees.

/// Shown when a history-consuming command runs against an empty history.
pub const NO_ITEMS: &str = "No items in clipboard";

/// Shown after `Clear All History` is chosen in the removal picker.
pub const HISTORY_CLEARED: &str = "Clipboard history cleared";

/// Shown after an entry is removed through the removal picker.
pub const REMOVED: &str = "Removed from clipboard";

/// Shown after an entry is rewritten through the edit flow.
pub const EDITED: &str = "Edited clipboard item";
