//! Command dispatch: one handler per palette command.
//!
//! [`ClipboardPlugin`] is created once at activation and owns the kernel's
//! [`CommandExecutor`]. The host wires each palette command (copy, cut,
//! paste, cycle-paste, paste-from-history, remove-from-history,
//! edit-history-entry) to the matching handler and calls
//! [`ClipboardPlugin::on_cycle_timeout`] when the armed idle timer fires.
//!
//! Handlers run synchronously inside the host's command dispatch, take no
//! arguments beyond the host surface, and return nothing: every missing
//! precondition (no active editor, empty history, dismissed prompt) is a
//! silent early return.

use crate::capture::capture_fragments;
use crate::config::PluginConfig;
use crate::host::Host;
use cliphist_core::{
    CYCLE_WINDOW, Command, CommandExecutor, CommandResult, CycleCommand, HistoryCommand,
    HistoryRing, messages, paste_picker, removal_picker,
};
use std::time::Instant;

/// The activation-scoped plugin instance.
#[derive(Debug)]
pub struct ClipboardPlugin {
    executor: CommandExecutor,
}

impl ClipboardPlugin {
    /// Create the plugin with the configured history capacity.
    pub fn new(config: &PluginConfig) -> Self {
        Self {
            executor: CommandExecutor::new(config.capacity()),
        }
    }

    /// Read access to the history, e.g. for host-side state queries.
    pub fn history(&self) -> &HistoryRing {
        self.executor.history()
    }

    /// The `copy` command: record the current selections, then forward to the
    /// host's native copy action.
    pub fn copy(&mut self, host: &mut dyn Host) {
        self.record_selections(host);
        host.clipboard().copy();
    }

    /// The `cut` command: record the current selections, then forward to the
    /// host's native cut action.
    pub fn cut(&mut self, host: &mut dyn Host) {
        self.record_selections(host);
        host.clipboard().cut();
    }

    /// The `paste` command: forward straight to the host's native paste.
    pub fn paste(&mut self, host: &mut dyn Host) {
        host.clipboard().paste();
    }

    /// The `cycle-paste` command at the current wall-clock instant.
    pub fn cycle_paste(&mut self, host: &mut dyn Host) {
        self.cycle_paste_at(host, Instant::now());
    }

    /// The `cycle-paste` command at an explicit instant.
    ///
    /// Split out so hosts (and tests) that drive a virtual clock can control
    /// the cycle window deterministically.
    pub fn cycle_paste_at(&mut self, host: &mut dyn Host, now: Instant) {
        let result = match self
            .executor
            .execute(Command::Cycle(CycleCommand::Trigger { now }))
        {
            Ok(result) => result,
            Err(_) => return,
        };
        match result {
            CommandResult::NativePaste => {
                host.clipboard().paste();
            }
            CommandResult::Paste(text) => {
                if let Some(editor) = host.active_editor() {
                    editor.replace_selection(&text);
                }
                // One pending timer at most: arming cancels the previous one.
                host.cycle_timeout().arm(CYCLE_WINDOW);
            }
            _ => {}
        }
    }

    /// Callback for the armed idle timer: the cycle sequence ends and the
    /// selection collapses to its end position.
    pub fn on_cycle_timeout(&mut self, host: &mut dyn Host) {
        if let Ok(CommandResult::CollapseSelection) =
            self.executor.execute(Command::Cycle(CycleCommand::Timeout))
        {
            if let Some(editor) = host.active_editor() {
                editor.collapse_selection_to_end();
            }
            host.cycle_timeout().cancel();
        }
    }

    /// The `paste-from-history` command: pick an entry and paste it into the
    /// active editor.
    pub fn paste_from_history(&mut self, host: &mut dyn Host) {
        if self.executor.history().is_empty() {
            host.ui().status(messages::NO_ITEMS);
        }
        let items = paste_picker(self.executor.history());
        let Some(index) = host.ui().pick(&items) else {
            return;
        };
        let Some(fragment) = items.get(index).and_then(|item| item.fragment.clone()) else {
            return;
        };
        if let Some(editor) = host.active_editor() {
            editor.replace_selection(&fragment);
        }
    }

    /// The `remove-from-history` command: pick an entry to remove, or the
    /// `Clear All History` pseudo-entry to empty the history.
    pub fn remove_from_history(&mut self, host: &mut dyn Host) {
        if self.executor.history().is_empty() {
            host.ui().status(messages::NO_ITEMS);
        }
        let items = removal_picker(self.executor.history());
        let Some(index) = host.ui().pick(&items) else {
            return;
        };
        let Some(item) = items.get(index) else {
            return;
        };
        match item.fragment.clone() {
            None => {
                if self
                    .executor
                    .execute(Command::History(HistoryCommand::Clear))
                    .is_ok()
                {
                    host.ui().status(messages::HISTORY_CLEARED);
                }
            }
            Some(fragment) => {
                if self
                    .executor
                    .execute(Command::History(HistoryCommand::Remove { fragment }))
                    .is_ok()
                {
                    host.ui().status(messages::REMOVED);
                }
            }
        }
    }

    /// The `edit-history-entry` command: pick an entry, prompt for its
    /// replacement text, and rewrite it in place.
    pub fn edit_history_entry(&mut self, host: &mut dyn Host) {
        if self.executor.history().is_empty() {
            host.ui().status(messages::NO_ITEMS);
            return;
        }
        let items = paste_picker(self.executor.history());
        let Some(index) = host.ui().pick(&items) else {
            return;
        };
        let Some(old) = items.get(index).and_then(|item| item.fragment.clone()) else {
            return;
        };
        let Some(new) = host.ui().input(&old) else {
            return;
        };
        if self
            .executor
            .execute(Command::History(HistoryCommand::Edit { old, new }))
            .is_ok()
        {
            host.ui().status(messages::EDITED);
        }
    }

    fn record_selections(&mut self, host: &mut dyn Host) {
        let fragments = match host.active_editor() {
            Some(editor) => capture_fragments(&editor.selections()),
            None => return,
        };
        for fragment in fragments {
            if self
                .executor
                .execute(Command::History(HistoryCommand::Record { fragment }))
                .is_err()
            {
                return;
            }
        }
    }
}
