//! User-facing one-line messages. Diagnostics go through `tracing` instead.

use ansi_term::{Colour, Style};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn tagged(colour: Colour, icon: &str, msg: impl fmt::Display) -> String {
    format!("{} {}", colour.bold().paint(icon), msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", tagged(Colour::Blue, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", tagged(Colour::Green, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", tagged(Colour::Yellow, ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", tagged(Colour::Red, ICON_ERR, msg));
}

/// Section header, e.g. above the history table.
pub fn header<T: fmt::Display>(msg: T) {
    let style = Style::new().bold().fg(Colour::Blue);
    println!("{}", style.paint(format!("=== {} ===", msg)));
}
