//! Scripted host example
//!
//! Wires `ClipboardPlugin` to a minimal in-memory host and walks through the
//! palette commands the way an editor would dispatch them.

use cliphist_core::PickerItem;
use cliphist_host::{
    ClipboardPlugin, CycleTimeout, Host, HostEditor, HostUi, NativeClipboard, PluginConfig,
    SelectionCapture,
};
use std::time::Duration;

/// A toy editor: one selection, printed side effects.
#[derive(Default)]
struct DemoEditor {
    selection: SelectionCapture,
}

impl HostEditor for DemoEditor {
    fn selections(&self) -> Vec<SelectionCapture> {
        vec![self.selection.clone()]
    }

    fn replace_selection(&mut self, text: &str) {
        println!("  [editor] paste {text:?}");
    }

    fn collapse_selection_to_end(&mut self) {
        println!("  [editor] selection collapsed to end");
    }
}

/// A picker that always chooses the first row, an input box that appends
/// an exclamation mark, and a println status bar.
#[derive(Default)]
struct DemoUi;

impl HostUi for DemoUi {
    fn pick(&mut self, items: &[PickerItem]) -> Option<usize> {
        println!("  [picker]");
        for item in items {
            println!("    - {}", item.label);
        }
        if items.is_empty() { None } else { Some(0) }
    }

    fn input(&mut self, initial: &str) -> Option<String> {
        Some(format!("{initial}!"))
    }

    fn status(&mut self, message: &str) {
        println!("  [status] {message}");
    }
}

#[derive(Default)]
struct DemoClipboard;

impl NativeClipboard for DemoClipboard {
    fn copy(&mut self) {
        println!("  [native] copy");
    }

    fn cut(&mut self) {
        println!("  [native] cut");
    }

    fn paste(&mut self) {
        println!("  [native] paste");
    }
}

#[derive(Default)]
struct DemoTimeout;

impl CycleTimeout for DemoTimeout {
    fn arm(&mut self, after: Duration) {
        println!("  [timer] armed for {after:?}");
    }

    fn cancel(&mut self) {
        println!("  [timer] cancelled");
    }
}

#[derive(Default)]
struct DemoHost {
    editor: DemoEditor,
    ui: DemoUi,
    clipboard: DemoClipboard,
    timeout: DemoTimeout,
}

impl Host for DemoHost {
    fn active_editor(&mut self) -> Option<&mut dyn HostEditor> {
        Some(&mut self.editor)
    }

    fn ui(&mut self) -> &mut dyn HostUi {
        &mut self.ui
    }

    fn clipboard(&mut self) -> &mut dyn NativeClipboard {
        &mut self.clipboard
    }

    fn cycle_timeout(&mut self) -> &mut dyn CycleTimeout {
        &mut self.timeout
    }
}

fn main() {
    let mut plugin = ClipboardPlugin::new(&PluginConfig::default());
    let mut host = DemoHost::default();

    println!("copy with a highlighted selection:");
    host.editor.selection = SelectionCapture {
        text: "println!(\"hi\")".to_string(),
        line_text: "    println!(\"hi\");".to_string(),
    };
    plugin.copy(&mut host);

    println!("\ncopy with a bare caret (captures the whole line):");
    host.editor.selection = SelectionCapture {
        text: String::new(),
        line_text: "let total = a + b;".to_string(),
    };
    plugin.copy(&mut host);

    println!("\ncycle paste twice:");
    plugin.cycle_paste(&mut host);
    plugin.cycle_paste(&mut host);

    println!("\nidle timeout fires:");
    plugin.on_cycle_timeout(&mut host);

    println!("\npaste from history (picker chooses the first row):");
    plugin.paste_from_history(&mut host);

    println!("\nedit the most recent entry:");
    plugin.edit_history_entry(&mut host);

    println!("\nremove via the removal picker (first row is Clear All):");
    plugin.remove_from_history(&mut host);
}
