//! Command interface example
//!
//! Demonstrates how to drive the clipboard-history kernel with
//! `CommandExecutor`.

use cliphist_core::{
    Command, CommandExecutor, CommandResult, CycleCommand, HistoryCommand, removal_picker,
};
use std::time::{Duration, Instant};

fn main() {
    let mut executor = CommandExecutor::new(12);
    println!("=== cliphist command interface example ===\n");

    // 1. Record a few copied fragments.
    println!("1. Recording fragments:");
    for fragment in ["alpha", "beta", "gamma", "alpha"] {
        executor
            .execute(Command::History(HistoryCommand::Record {
                fragment: fragment.to_string(),
            }))
            .unwrap();
        println!("  record({fragment:?}) -> {} entries", executor.history().len());
    }
    println!("  (the duplicate \"alpha\" was a no-op)\n");

    // 2. Cycle paste within the window.
    println!("2. Cycle paste:");
    let start = Instant::now();
    for i in 0..4u64 {
        let now = start + Duration::from_millis(200 * i);
        match executor
            .execute(Command::Cycle(CycleCommand::Trigger { now }))
            .unwrap()
        {
            CommandResult::Paste(text) => println!("  trigger -> paste {text:?}"),
            CommandResult::NativePaste => println!("  trigger -> native paste"),
            other => println!("  trigger -> {other:?}"),
        }
    }
    println!();

    // 3. The idle timeout ends the sequence.
    let result = executor
        .execute(Command::Cycle(CycleCommand::Timeout))
        .unwrap();
    println!("3. Idle timeout -> {result:?}\n");

    // 4. Build the removal picker the host UI would show.
    println!("4. Removal picker rows:");
    for item in removal_picker(executor.history()) {
        println!("  [{}]", item.label);
    }
}
