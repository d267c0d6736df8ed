//! Capabilities consumed from the host editor.
//!
//! The plugin never implements any of these: the host editor provides them
//! and the dispatcher only invokes them. Hosts without a given surface (e.g.
//! a headless test harness) can implement the traits over scripted data.

use cliphist_core::PickerItem;
use std::time::Duration;

/// One selection captured from the active editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionCapture {
    /// Text covered by the selection. Empty for a bare caret.
    pub text: String,
    /// Full text of the line holding the selection's active position, used as
    /// the fallback fragment when `text` is empty.
    pub line_text: String,
}

/// The active editor/document context.
pub trait HostEditor {
    /// All current selections (primary and secondary), in the host's order.
    fn selections(&self) -> Vec<SelectionCapture>;

    /// Replace every current selection with `text`.
    fn replace_selection(&mut self, text: &str);

    /// Collapse the active selection to its end position (cursor placed after
    /// the pasted text).
    fn collapse_selection_to_end(&mut self);
}

/// The host's picker, input-box, and status-bar widgets.
pub trait HostUi {
    /// Show the picker and return the index of the chosen item, or `None`
    /// when the picker was dismissed.
    fn pick(&mut self, items: &[PickerItem]) -> Option<usize>;

    /// Prompt for free-text input pre-filled with `initial`; `None` when the
    /// prompt was dismissed.
    fn input(&mut self, initial: &str) -> Option<String>;

    /// Show a transient status-bar message.
    fn status(&mut self, message: &str);
}

/// The host's own clipboard actions.
pub trait NativeClipboard {
    /// Execute the native copy action.
    fn copy(&mut self);

    /// Execute the native cut action.
    fn cut(&mut self);

    /// Execute the native paste action.
    fn paste(&mut self);
}

/// A single cancellable timeout owned by the host scheduler.
///
/// At most one timer is ever pending: arming cancels any prior pending
/// timer first. When the armed timeout fires, the host must call
/// [`ClipboardPlugin::on_cycle_timeout`](crate::ClipboardPlugin::on_cycle_timeout).
pub trait CycleTimeout {
    /// Arm the timeout to fire after `after`, cancelling any pending one.
    fn arm(&mut self, after: Duration);

    /// Cancel the pending timeout, if any.
    fn cancel(&mut self);
}

/// Aggregate host surface handed to every command handler.
pub trait Host {
    /// The active editor context, or `None` when no editor has focus.
    fn active_editor(&mut self) -> Option<&mut dyn HostEditor>;

    /// UI widgets.
    fn ui(&mut self) -> &mut dyn HostUi;

    /// Native clipboard actions.
    fn clipboard(&mut self) -> &mut dyn NativeClipboard;

    /// The cycle-paste idle timer.
    fn cycle_timeout(&mut self) -> &mut dyn CycleTimeout;
}
