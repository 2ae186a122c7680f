use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("  {spinner:.yellow.bold} {msg} {elapsed:.dim}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("◐◓◑◒ ")
}

fn done_style() -> ProgressStyle {
    ProgressStyle::with_template("  {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner())
}

pub fn create(msg: &str) -> ProgressBar {
    let sp = ProgressBar::new_spinner();
    sp.set_style(spinner_style());
    sp.set_message(msg.to_string());
    sp.enable_steady_tick(Duration::from_millis(100));
    sp
}

pub fn finish_ok(sp: &ProgressBar, msg: &str) {
    sp.set_style(done_style());
    sp.finish_with_message(format!("{} {}", "✓".green().bold(), msg));
}

pub fn finish_err(sp: &ProgressBar, msg: &str) {
    sp.set_style(done_style());
    sp.finish_with_message(format!("{} {}", "✗".red().bold(), msg));
}

pub fn finish_clear(sp: &ProgressBar) {
    sp.finish_and_clear();
}
