use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use chrono::Local;
use anyhow::{Context, Result};

/// Appends timestamped lines to the run log. A logger without a path discards everything.
///
/// Logging is best-effort: a log file that cannot be written is reported on stderr
/// and never fails the caller.
#[derive(Debug, Clone, Default)]
pub struct Logger {
    path: Option<PathBuf>,
}

impl Logger {
    pub fn new(path: Option<PathBuf>) -> Logger {
        Logger { path }
    }

    pub fn disabled() -> Logger {
        Logger { path: None }
    }

    pub fn log_error(&self, category: &str, message: &str) {
        self.log_message("ERROR", category, message)
    }

    pub fn log_info(&self, category: &str, message: &str) {
        self.log_message("INFO", category, message)
    }

    fn log_message(&self, level: &str, category: &str, message: &str) {
        let Some(path) = &self.path else {
            return;
        };

        if let Err(e) = append_line(path, level, category, message) {
            eprintln!("warning: {:#}", e);
        }
    }
}

fn append_line(path: &Path, level: &str, category: &str, message: &str) -> Result<()> {
    let now = Local::now();
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    writeln!(
        file,
        "[{}] {} - {}: {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        level,
        category,
        message
    )
    .with_context(|| format!("Failed to write log file {}", path.display()))?;

    Ok(())
}
