/*!
 * Console logger for the subvtt binary.
 *
 * Implements the `log` facade: each record is printed to stderr with a
 * timestamp and a level color, or as plain text when colors are disabled.
 * When a log file is attached, every record is also appended to it without
 * escape sequences.
 */

use anyhow::{Context, Result};
use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use regex::Regex;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

// @const: ANSI SGR sequences and cursor/erase controls
static ANSI_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\x1B\[(?:\d+;?)+m|\x1B?\[\??\d+[AKlh]").expect("ansi regex is valid")
});

/// Remove ANSI escape sequences from a string
pub fn strip_ansi(input: &str) -> String {
    ANSI_REGEX.replace_all(input, "").into_owned()
}

// @struct: Logger writing to stderr and an optional log file
pub struct ConsoleLogger {
    level: LevelFilter,
    no_ansi_color: bool,
    log_file: Option<Mutex<File>>,
}

impl ConsoleLogger {
    // @creates: New logger with specified level
    pub fn new(level: LevelFilter, no_ansi_color: bool) -> Self {
        ConsoleLogger {
            level,
            no_ansi_color,
            log_file: None,
        }
    }

    /// Attach an already opened log file
    pub fn with_log_file(mut self, file: File) -> Self {
        self.log_file = Some(Mutex::new(file));
        self
    }

    // @initializes: Global logger
    pub fn install(self) -> Result<()> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self)).context("Logger already initialized")?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }

    /// Render one record as a console line
    pub fn format_line(&self, level: Level, message: &str) -> String {
        let now = Local::now().format("%H:%M:%S.%3f");
        if self.no_ansi_color {
            format!("{} {:<5} {}", now, level, strip_ansi(message))
        } else {
            format!(
                "{}{} {:<5} {}\x1B[0m",
                Self::color_for_level(level),
                now,
                level,
                message
            )
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = record.args().to_string();
        let line = self.format_line(record.level(), &message);
        let _ = writeln!(std::io::stderr(), "{}", line);

        if let Some(file) = &self.log_file {
            let plain = format!(
                "{} {:<5} {}",
                Local::now().format("%H:%M:%S.%3f"),
                record.level(),
                strip_ansi(&message)
            );
            let _ = writeln!(file.lock(), "{}", plain);
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
        if let Some(file) = &self.log_file {
            let _ = file.lock().flush();
        }
    }
}

/// Create a fresh per-run log file in `dir` and write its header.
///
/// The file is named after the current local time; a `-N` suffix is added
/// when that name is already taken.
pub fn init_log_file<P: AsRef<Path>>(dir: P) -> Result<(PathBuf, File)> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

    let now = Local::now();
    let stem = now.format("%Y-%m-%d_%H-%M-%S").to_string();
    let mut path = dir.join(format!("{}.log", stem));
    let mut index = 1;
    while path.exists() {
        path = dir.join(format!("{}-{}.log", stem, index));
        index += 1;
    }

    let mut file = OpenOptions::new()
        .create_new(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to create log file: {}", path.display()))?;

    let command_line: Vec<String> = std::env::args().collect();
    write!(
        file,
        "LOG {}\nSave Path: {}\nTask Start: {}\nTask Commandline: {}\n\n",
        now.format("%Y-%m-%d_%H-%M-%S-%3f"),
        dir.display(),
        now.format("%Y/%m/%d %H:%M:%S"),
        command_line.join(" ")
    )
    .with_context(|| format!("Failed to write log header: {}", path.display()))?;

    Ok((path, file))
}
