//! Output formatting for CLI commands
//!
//! Human output is colored (respects NO_COLOR); JSON output is
//! pretty-printed for scripting.

use colored::Colorize;

/// Styles shared by command output
pub mod colors {
    use colored::{ColoredString, Colorize};

    pub fn path(s: &str) -> ColoredString {
        s.blue()
    }

    pub fn count(s: &str) -> ColoredString {
        s.yellow()
    }

    pub fn done(s: &str) -> ColoredString {
        s.green()
    }

    /// Secondary detail lines (stats, headlines)
    pub fn detail(s: &str) -> ColoredString {
        s.dimmed()
    }

    pub fn slug(s: &str) -> ColoredString {
        s.cyan()
    }
}

/// Render a run duration: `850ms`, `2.40s`, `1m 5.0s`
pub fn format_duration(ms: u64) -> String {
    match ms {
        0..=999 => format!("{ms}ms"),
        1_000..=59_999 => format!("{:.2}s", ms as f64 / 1000.0),
        _ => format!("{}m {:.1}s", ms / 60_000, (ms % 60_000) as f64 / 1000.0),
    }
}

/// Pluralize a count: `1 post`, `3 posts`
pub fn format_count(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Print serializable data as pretty JSON
pub fn print_json<T: serde::Serialize>(data: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", "Warning".yellow(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", "Error".red().bold(), message);
}

/// Print a header/title
pub fn print_header(title: &str) {
    println!("{}", title.bold());
}
