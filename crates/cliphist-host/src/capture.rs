//! Selection capture for the copy/cut commands.

use crate::host::SelectionCapture;

/// Turn the active editor's selections into fragments to record, one per
/// selection in order. An empty selection (bare caret) captures the full text
/// of its line instead.
pub fn capture_fragments(selections: &[SelectionCapture]) -> Vec<String> {
    selections
        .iter()
        .map(|selection| {
            if selection.text.is_empty() {
                selection.line_text.clone()
            } else {
                selection.text.clone()
            }
        })
        .collect()
}
