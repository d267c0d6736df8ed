//! Host integration layer for the clipboard-history kernel.
//!
//! # Overview
//!
//! `cliphist-host` binds [`cliphist_core`] to a concrete editor. The host
//! editor owns everything this crate merely consumes: the selection model,
//! the native clipboard copy/cut/paste actions, the picker and input-box
//! widgets, the status bar, and a cancellable timer. Each of those
//! capabilities is a trait in [`host`]; the editor implements them once and
//! hands a [`Host`] to [`ClipboardPlugin`], which exposes one handler per
//! palette command.
//!
//! All handlers are fire-and-forget: a missing active editor, an empty
//! history, or a dismissed prompt is a silent early return, never an error.
//! The only fallible surface is configuration parsing ([`PluginConfig`]).
//!
//! # Example
//!
//! ```rust,ignore
//! // At activation time, with `editor_host` implementing `Host`:
//! let config = PluginConfig::from_json(raw_settings)?;
//! let mut plugin = ClipboardPlugin::new(&config);
//!
//! // Wired to the palette commands:
//! plugin.copy(&mut editor_host);
//! plugin.cycle_paste(&mut editor_host);
//! ```

pub mod capture;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod host;

pub use capture::capture_fragments;
pub use config::PluginConfig;
pub use dispatch::ClipboardPlugin;
pub use error::PluginError;
pub use host::{CycleTimeout, Host, HostEditor, HostUi, NativeClipboard, SelectionCapture};
