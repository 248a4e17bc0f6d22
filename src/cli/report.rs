//! Output formatting for the non-interactive commands.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a two-column table of (code, name) rows to stdout.
pub fn print_table(header: (&str, &str), rows: &[(String, String)]) {
    print_table_to(header, rows, &mut io::stdout().lock());
}

/// Print a two-column table to a custom writer.
///
/// The code column is padded by display width, so wide (CJK) values keep
/// the name column aligned.
pub fn print_table_to<W: Write>(header: (&str, &str), rows: &[(String, String)], writer: &mut W) {
    let width = rows
        .iter()
        .map(|(code, _)| UnicodeWidthStr::width(code.as_str()))
        .chain(std::iter::once(UnicodeWidthStr::width(header.0)))
        .max()
        .unwrap_or(0);

    let _ = writeln!(
        writer,
        "{}{}  {}",
        header.0.bold(),
        padding(header.0, width),
        header.1.bold()
    );
    for (code, name) in rows {
        let _ = writeln!(writer, "{}{}  {}", code, padding(code, width), name);
    }
}

/// Print a lookup miss to stderr.
pub fn print_not_found(message: &str) {
    print_not_found_to(message, &mut io::stderr().lock());
}

pub fn print_not_found_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), message);
}

fn padding(text: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(UnicodeWidthStr::width(text)))
}
