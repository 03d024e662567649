//! Command interface example
//!
//! Demonstrates how to drive number commands against a `TextBuffer`.

use vintage_numbers::{
    Direction, NumberCommand, NumberHost, NumberOptions, Selection, TextBuffer, adjust,
    apply_to_document, execute,
};

fn main() {
    println!("=== Number command example ===\n");

    // Example 1: a single line, no document
    println!("1. Single line:");
    let line = "color: 0XFF00FF;";
    if let Some(adjustment) = adjust(line, 0, Direction::Increment) {
        println!(
            "  '{}' -> '{}' at columns {}..{}",
            adjustment.original, adjustment.text, adjustment.start, adjustment.end
        );
    }
    println!();

    // Example 2: several carets in one document
    println!("2. Multiple carets:");
    let mut buffer = TextBuffer::with_selections(
        "-1\nfoo 9 bar\nmask = 0b0111\nmode = 0755",
        vec![
            Selection::caret(0),
            Selection::caret(3),
            Selection::caret(13),
            Selection::caret(27),
        ],
    );
    let report = apply_to_document(&mut buffer, Direction::Increment);
    for (i, line) in buffer.text().lines().enumerate() {
        println!("  line {}: '{}'", i, line);
    }
    println!("  adjusted: {}, skipped: {}", report.adjusted(), report.skipped);
    println!("  carets: {:?}\n", buffer.selections());

    // Example 3: count prefix
    println!("3. Count prefix (10 <C-x>):");
    let mut buffer = TextBuffer::new("retries = 3");
    execute(
        &mut buffer,
        NumberCommand::Decrement,
        NumberOptions { count: 10 },
    );
    println!("  '{}'\n", buffer.text());

    // Example 4: nothing to do
    println!("4. No number after the caret:");
    let mut buffer = TextBuffer::with_selections("foo 5 bar", vec![Selection::caret(6)]);
    let report = apply_to_document(&mut buffer, Direction::Increment);
    println!("  no-op: {}, text: '{}'", report.is_noop(), buffer.text());

    println!("\n=== Example finished ===");
}
