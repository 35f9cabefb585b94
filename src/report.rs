//! Console reporting
//!
//! Styled message helpers and the end-of-run summary.

use colored::*;
use std::time::{Duration, Instant};

/// Print a section header
pub fn print_header(text: &str) {
    println!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    println!("  {} {}", "ℹ".cyan(), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    println!("  {} {}", "✔".green(), text.green());
}

/// Print a warning message
pub fn print_warning(text: &str) {
    println!("  {} {}", "⚠".yellow(), text.yellow());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Counters for a single query run.
#[derive(Debug)]
pub struct SearchStats {
    pub words_scanned: usize,
    pub words_matched: usize,
    start_time: Instant,
}

impl SearchStats {
    pub fn new() -> Self {
        Self {
            words_scanned: 0,
            words_matched: 0,
            start_time: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Print the end-of-run summary.
    pub fn print_summary(&self) {
        print_header("Search complete");
        print_info(&format!(
            "Words scanned:  {}",
            format_number(self.words_scanned as u64)
        ));
        print_info(&format!(
            "Words matched:  {}",
            format_number(self.words_matched as u64)
        ));
        print_info(&format!("Elapsed:        {:.1?}", self.elapsed()));
    }
}

impl Default for SearchStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number with thousand separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(123), "123");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_stats_counts() {
        let mut stats = SearchStats::new();
        stats.words_scanned = 100;
        stats.words_matched = 7;
        assert_eq!(stats.words_scanned, 100);
        assert_eq!(stats.words_matched, 7);
    }
}
