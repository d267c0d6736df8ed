//! Command Interface Layer
//!
//! Provides a unified command interface wrapping the history ring and the
//! cycle tracker, for convenient host integration.
//!
//! # Overview
//!
//! The command interface is the primary entry point for the kernel. It
//! supports two groups of operations:
//!
//! - **History Maintenance**: record, remove, edit, and clear fragments
//! - **Cycle Paste**: time-windowed triggers and the idle-timeout callback
//!
//! The executor is headless: it never touches the host editor, the native
//! clipboard, or any UI. Side effects the host must apply are surfaced as
//! [`CommandResult`] directives (paste this text, run the native paste,
//! collapse the selection).
//!
//! # Example
//!
//! ```rust
//! use cliphist_core::{Command, CommandExecutor, HistoryCommand};
//!
//! let mut executor = CommandExecutor::new(12);
//!
//! // Batch execute commands
//! let commands = vec![
//!     Command::History(HistoryCommand::Record { fragment: "alpha".to_string() }),
//!     Command::History(HistoryCommand::Record { fragment: "beta".to_string() }),
//! ];
//! executor.execute_batch(commands).unwrap();
//!
//! assert_eq!(executor.history().len(), 2);
//! ```

use crate::cycle::{CycleStep, CycleTracker};
use crate::history::HistoryRing;
use std::time::Instant;

/// History maintenance commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryCommand {
    /// Record a copied/cut fragment (no-op when already present).
    Record {
        /// Fragment text to record.
        fragment: String,
    },
    /// Remove the first entry equal to the fragment (no-op when absent).
    Remove {
        /// Fragment text to remove.
        fragment: String,
    },
    /// Replace the first entry equal to `old` with `new`, preserving its
    /// position (no-op when `old` is absent).
    Edit {
        /// Fragment text to replace.
        old: String,
        /// Replacement text.
        new: String,
    },
    /// Remove all entries unconditionally.
    Clear,
}

/// Cycle-paste commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleCommand {
    /// A cycle-paste trigger (keybinding press) at the given instant.
    Trigger {
        /// Wall-clock instant of the trigger, supplied by the host.
        now: Instant,
    },
    /// The host's idle timeout fired with no intervening trigger.
    Timeout,
}

/// Unified command enum
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// History maintenance commands
    History(HistoryCommand),
    /// Cycle-paste commands
    Cycle(CycleCommand),
}

/// Command execution result
///
/// Variants other than [`CommandResult::Success`] are directives: the kernel
/// has updated its own state and the host layer is expected to apply the
/// named side effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Success, no host side effect required.
    Success,
    /// Replace the active editor selection with this text.
    Paste(String),
    /// Delegate to the host's native paste action (history was empty).
    NativePaste,
    /// Collapse the active editor selection to its end position.
    CollapseSelection,
}

/// Command error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The history ring was empty where an entry was required.
    EmptyHistory,
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::EmptyHistory => {
                write!(f, "Clipboard history is empty")
            }
        }
    }
}

impl std::error::Error for CommandError {}

/// Command executor owning the history ring and the cycle tracker.
///
/// One instance lives for the whole plugin activation; command dispatch is
/// single-threaded, so no locking is involved.
#[derive(Debug)]
pub struct CommandExecutor {
    history: HistoryRing,
    cycle: CycleTracker,
}

impl CommandExecutor {
    /// Create an executor with an empty history of the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            history: HistoryRing::new(capacity),
            cycle: CycleTracker::new(),
        }
    }

    /// Read access to the history ring (for pickers and state queries).
    pub fn history(&self) -> &HistoryRing {
        &self.history
    }

    /// Whether a cycle-paste sequence is currently active.
    pub fn is_cycling(&self) -> bool {
        self.cycle.is_cycling()
    }

    /// Execute a single command.
    pub fn execute(&mut self, command: Command) -> Result<CommandResult, CommandError> {
        match command {
            Command::History(command) => self.execute_history(command),
            Command::Cycle(command) => self.execute_cycle(command),
        }
    }

    /// Execute commands in order, stopping at the first error.
    pub fn execute_batch(
        &mut self,
        commands: Vec<Command>,
    ) -> Result<Vec<CommandResult>, CommandError> {
        let mut results = Vec::with_capacity(commands.len());
        for command in commands {
            results.push(self.execute(command)?);
        }
        Ok(results)
    }

    fn execute_history(
        &mut self,
        command: HistoryCommand,
    ) -> Result<CommandResult, CommandError> {
        match command {
            HistoryCommand::Record { fragment } => {
                self.history.record(&fragment);
            }
            HistoryCommand::Remove { fragment } => {
                self.history.remove(&fragment);
            }
            HistoryCommand::Edit { old, new } => {
                self.history.edit(&old, &new);
            }
            HistoryCommand::Clear => {
                self.history.clear();
            }
        }
        Ok(CommandResult::Success)
    }

    fn execute_cycle(&mut self, command: CycleCommand) -> Result<CommandResult, CommandError> {
        match command {
            CycleCommand::Trigger { now } => {
                if self.history.is_empty() {
                    // Nothing to cycle through; the tracker is left untouched.
                    return Ok(CommandResult::NativePaste);
                }
                match self.cycle.on_trigger(now) {
                    CycleStep::Rotate => {
                        let front = self
                            .history
                            .cycle_next()
                            .ok_or(CommandError::EmptyHistory)?;
                        Ok(CommandResult::Paste(front))
                    }
                    CycleStep::RepeatFront => {
                        let front = self
                            .history
                            .front()
                            .ok_or(CommandError::EmptyHistory)?
                            .to_string();
                        Ok(CommandResult::Paste(front))
                    }
                }
            }
            CycleCommand::Timeout => {
                self.cycle.reset();
                Ok(CommandResult::CollapseSelection)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn executor_with(fragments: &[&str]) -> CommandExecutor {
        let mut executor = CommandExecutor::new(12);
        for fragment in fragments {
            executor
                .execute(Command::History(HistoryCommand::Record {
                    fragment: (*fragment).to_string(),
                }))
                .unwrap();
        }
        executor
    }

    #[test]
    fn trigger_on_empty_history_delegates_to_native_paste() {
        let mut executor = CommandExecutor::new(12);
        let result = executor
            .execute(Command::Cycle(CycleCommand::Trigger {
                now: Instant::now(),
            }))
            .unwrap();
        assert_eq!(result, CommandResult::NativePaste);
        assert!(!executor.is_cycling());
    }

    #[test]
    fn triggers_within_window_rotate_through_entries() {
        let mut executor = executor_with(&["a", "b", "c"]);
        let start = Instant::now();

        let first = executor
            .execute(Command::Cycle(CycleCommand::Trigger { now: start }))
            .unwrap();
        assert_eq!(first, CommandResult::Paste("a".to_string()));

        let second = executor
            .execute(Command::Cycle(CycleCommand::Trigger {
                now: start + Duration::from_millis(500),
            }))
            .unwrap();
        assert_eq!(second, CommandResult::Paste("b".to_string()));

        // Ring rotated twice: ["c", "a", "b"] oldest-first.
        let entries: Vec<_> = executor.history().entries().collect();
        assert_eq!(entries, vec!["b", "a", "c"]);
    }

    #[test]
    fn stale_trigger_repeats_front_without_rotating() {
        let mut executor = executor_with(&["a", "b"]);
        let start = Instant::now();

        executor
            .execute(Command::Cycle(CycleCommand::Trigger { now: start }))
            .unwrap();
        // Ring is now ["b", "a"]; a stale trigger repastes "b" and does not rotate.
        let stale = executor
            .execute(Command::Cycle(CycleCommand::Trigger {
                now: start + Duration::from_millis(1500),
            }))
            .unwrap();
        assert_eq!(stale, CommandResult::Paste("b".to_string()));
        assert_eq!(executor.history().front(), Some("b"));
        assert!(!executor.is_cycling());
    }

    #[test]
    fn timeout_resets_cycle_and_requests_selection_collapse() {
        let mut executor = executor_with(&["a"]);
        executor
            .execute(Command::Cycle(CycleCommand::Trigger {
                now: Instant::now(),
            }))
            .unwrap();
        assert!(executor.is_cycling());

        let result = executor.execute(Command::Cycle(CycleCommand::Timeout)).unwrap();
        assert_eq!(result, CommandResult::CollapseSelection);
        assert!(!executor.is_cycling());
    }
}
