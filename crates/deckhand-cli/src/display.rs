//! Display formatting for CLI output

use console::style;

/// Announce the start of a step
pub fn step(message: impl AsRef<str>) {
    println!("{} {}", style("→").blue().bold(), message.as_ref());
}

/// Report a completed step
pub fn success(message: impl AsRef<str>) {
    println!("{} {}", style("✓").green().bold(), message.as_ref());
}

/// Report a step skipped because the work is already done
pub fn skip(message: impl AsRef<str>) {
    println!("{} {}", style("⚠").yellow(), message.as_ref());
}
