//! Terminal output for the storefront CLI.
//!
//! In `--json` mode only [`Output::json`] and errors reach the terminal; all
//! decorative output is suppressed so stdout stays machine-readable.

use std::time::Duration;

use console::{pad_str, style, Alignment, StyledObject};
use indicatif::{ProgressBar, ProgressStyle};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    fn say(&self, marker: StyledObject<&str>, msg: &str) {
        if !self.json {
            println!("{} {}", marker, msg);
        }
    }

    pub fn info(&self, msg: &str) {
        self.say(style("ℹ").blue(), msg);
    }

    pub fn success(&self, msg: &str) {
        self.say(style("✓").green(), msg);
    }

    /// Warnings go to stderr.
    pub fn warn(&self, msg: &str) {
        if !self.json {
            eprintln!("{} {}", style("⚠").yellow(), msg);
        }
    }

    /// Errors are printed in both modes; in JSON mode as `{"error": ...}`.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            eprintln!("{} {}", style("✗").red(), style(msg).red());
        }
    }

    /// Only shown with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose && !self.json {
            eprintln!("{} {}", style("→").dim(), style(msg).dim());
        }
    }

    pub fn header(&self, msg: &str) {
        if !self.json {
            println!("\n{}", style(msg).bold().underlined());
        }
    }

    /// `[n/total] msg`
    pub fn step(&self, num: usize, total: usize, msg: &str) {
        if !self.json {
            println!("{} {}", style(format!("[{}/{}]", num, total)).dim(), msg);
        }
    }

    /// Pretty-printed JSON on stdout, regardless of mode.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if !self.json {
            println!("  {}: {}", style(key).dim(), value);
        }
    }

    pub fn list_item(&self, item: &str) {
        if !self.json {
            println!("  {} {}", style("•").dim(), item);
        }
    }

    /// Column headings followed by a dashed rule under each heading.
    pub fn table_header(&self, headings: &[&str], widths: &[usize]) {
        let rule: Vec<String> = headings
            .iter()
            .map(|h| "-".repeat(h.chars().count()))
            .collect();
        let rule: Vec<&str> = rule.iter().map(String::as_str).collect();
        self.table_row(headings, widths);
        self.table_row(&rule, widths);
    }

    /// One padded row. Cells may contain ANSI styling.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let cells: Vec<String> = cols
            .iter()
            .zip(widths)
            .map(|(col, &width)| pad_str(col, width, Alignment::Left, None).into_owned())
            .collect();
        println!("  {}", cells.join("  ").trim_end());
    }

    /// Spinner for a simulated wait; hidden in JSON mode.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.magenta} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Green "NEW" marker for new arrivals, blank otherwise.
pub fn new_badge(is_new: bool) -> String {
    if is_new {
        style("NEW").green().bold().to_string()
    } else {
        String::new()
    }
}

/// Shorten `text` to at most `width` characters, marking the cut with "...".
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let keep = width.saturating_sub(3);
    let mut cut: String = text.chars().take(keep).collect();
    cut.push_str("...");
    cut
}

/// Ten-segment fill gauge, e.g. `[######----] 67%`.
pub fn gauge(percent: f64) -> String {
    let percent = percent.clamp(0.0, 100.0);
    let filled = (percent / 10.0).round() as usize;
    format!(
        "[{}{}] {:.0}%",
        "#".repeat(filled),
        "-".repeat(10 - filled),
        percent
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Gentle Aloe Face Wash", 30), "Gentle Aloe Face Wash");
        assert_eq!(truncate("Hydra Boost Facial Cleanser", 12), "Hydra Boo...");
    }

    #[test]
    fn test_gauge() {
        assert_eq!(gauge(0.0), "[----------] 0%");
        assert_eq!(gauge(100.0 / 3.0), "[###-------] 33%");
        assert_eq!(gauge(100.0), "[##########] 100%");
    }

    #[test]
    fn test_badge_is_blank_for_old_stock() {
        assert!(new_badge(false).is_empty());
        assert!(console::strip_ansi_codes(&new_badge(true)).contains("NEW"));
    }
}
