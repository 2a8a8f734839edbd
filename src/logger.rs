//! Console output with timestamps.
//!
//! Every line is prefixed with the local wall clock time, e.g.
//! `[14:02:51] Found 3 page(s)`. The `*_verbose` variants print only when
//! the caller's verbose flag is set.

use chrono::Local;

/// Format a message as a timestamped log line.
fn format_line(message: &str) -> String {
    format!("[{}] {}", Local::now().format("%H:%M:%S"), message)
}

/// Log a message with a timestamp.
pub fn log(message: impl AsRef<str>) {
    println!("{}", format_line(message.as_ref()));
}

/// Log a message only if verbose mode is enabled.
pub fn log_verbose(verbose: bool, message: impl AsRef<str>) {
    if verbose {
        log(message);
    }
}

/// Print an empty line (no timestamp).
pub fn log_empty() {
    println!();
}

/// Print an empty line only if verbose mode is enabled.
pub fn log_empty_verbose(verbose: bool) {
    if verbose {
        log_empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_has_timestamp_prefix() {
        let line = format_line("hello");
        // "[HH:MM:SS] hello"
        assert_eq!(line.len(), "[00:00:00] hello".len());
        assert!(line.starts_with('['));
        assert_eq!(&line[9..], "] hello");
        assert_eq!(&line[3..4], ":");
        assert_eq!(&line[6..7], ":");
    }
}
