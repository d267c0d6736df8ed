#![warn(missing_docs)]
//! Cliphist Core - Headless Clipboard History Kernel
//!
//! # Overview
//!
//! `cliphist-core` is the headless kernel of an editor clipboard-history plugin.
//! It owns the bounded, de-duplicated list of copied/cut text fragments and the
//! time-windowed cycle-paste state machine, and exposes both through a unified
//! command interface. It performs no I/O: pasting, native clipboard actions, and
//! UI prompts are surfaced as result directives for a host integration layer
//! (see the `cliphist-host` crate) to apply.
//!
//! # Core Features
//!
//! - **Bounded History**: de-duplicated fragment list with FIFO eviction
//! - **Cycle Paste**: rotate through recent fragments within a 1000 ms window
//! - **Command Interface**: one enum-driven entry point for all mutations
//! - **Picker Building**: most-recent-first items with width-aware labels
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Command Interface (CommandExecutor)        │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Picker Items (labels for the host UI)      │  ← Display Data
//! ├─────────────────────────────────────────────┤
//! │  Cycle Tracker (Idle / Cycling window)      │  ← Paste Rotation
//! ├─────────────────────────────────────────────┤
//! │  History Ring (bounded, de-duplicated)      │  ← Storage
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use cliphist_core::{Command, CommandExecutor, CommandResult, HistoryCommand};
//!
//! let mut executor = CommandExecutor::new(12);
//!
//! // Record a copied fragment
//! executor.execute(Command::History(HistoryCommand::Record {
//!     fragment: "fn main() {}".to_string(),
//! })).unwrap();
//!
//! // Recording the same fragment again is a no-op
//! executor.execute(Command::History(HistoryCommand::Record {
//!     fragment: "fn main() {}".to_string(),
//! })).unwrap();
//!
//! assert_eq!(executor.history().len(), 1);
//! ```
//!
//! Cycle paste is driven by explicit instants, so the kernel never consults a
//! clock of its own:
//!
//! ```rust
//! use std::time::Instant;
//! use cliphist_core::{Command, CommandExecutor, CommandResult, CycleCommand, HistoryCommand};
//!
//! let mut executor = CommandExecutor::new(12);
//! executor.execute(Command::History(HistoryCommand::Record {
//!     fragment: "alpha".to_string(),
//! })).unwrap();
//!
//! let result = executor
//!     .execute(Command::Cycle(CycleCommand::Trigger { now: Instant::now() }))
//!     .unwrap();
//! assert_eq!(result, CommandResult::Paste("alpha".to_string()));
//! ```
//!
//! # Module Description
//!
//! - [`history`] - bounded de-duplicated history ring
//! - [`cycle`] - cycle-paste time-window tracking
//! - [`commands`] - unified command interface
//! - [`picker`] - picker items for the host's list-selection UI
//! - [`messages`] - user-visible status strings

pub mod commands;
pub mod cycle;
pub mod history;
pub mod messages;
pub mod picker;

pub use commands::{
    Command, CommandError, CommandExecutor, CommandResult, CycleCommand, HistoryCommand,
};
pub use cycle::{CYCLE_WINDOW, CycleStep, CycleTracker};
pub use history::{DEFAULT_CAPACITY, HistoryRing};
pub use picker::{MAX_LABEL_WIDTH, PickerItem, flatten_label, paste_picker, removal_picker};
