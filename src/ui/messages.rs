//! User-facing status lines for the CLI.

use ansi_term::{Colour, Style};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn icon(colour: Colour, glyph: &str) -> String {
    Style::new().bold().fg(colour).paint(glyph).to_string()
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", icon(Colour::Blue, ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", icon(Colour::Green, ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", icon(Colour::Yellow, ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", icon(Colour::Red, ICON_ERR), msg);
}

/// Section header, e.g. `=== Recognition ===`
pub fn header<T: fmt::Display>(msg: T) {
    println!(
        "\n{}",
        Style::new().bold().fg(Colour::Blue).paint(format!("=== {} ===", msg))
    );
}

/// Indented `label: value` line under a header.
pub fn field<L: fmt::Display, V: fmt::Display>(label: L, value: V) {
    println!("  {:<18} {}", format!("{}:", label), value);
}
