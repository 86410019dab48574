//! Unified logging for the shell and the content layer.
//!
//! Everything goes through the `log` facade. Records are printed by
//! `env_logger` and appended to a daily file in the shell's log directory,
//! with size-based rotation and cleanup.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use log::{Level, Log, Metadata, Record};
use parking_lot::Mutex;
use tauri::command;

/// Maximum log file size before rotation (5MB)
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;

/// Maximum number of log files to keep
const MAX_LOG_FILES: usize = 5;

const LOG_PREFIX: &str = "tagspaces";

struct OpenLog {
    dir: PathBuf,
    /// Day the open file belongs to.
    date: NaiveDate,
    path: PathBuf,
    file: File,
}

impl OpenLog {
    fn open(dir: &Path, date: NaiveDate) -> io::Result<Self> {
        let path = log_path_for(dir, date);
        let file = open_append(&path)?;
        Ok(Self {
            dir: dir.to_path_buf(),
            date,
            path,
            file,
        })
    }

    /// Switch to the file for `today` if the day changed.
    fn roll_date(&mut self, today: NaiveDate) -> io::Result<()> {
        if today != self.date {
            *self = Self::open(&self.dir, today)?;
            cleanup_old_logs(&self.dir);
        }
        Ok(())
    }

    /// Move an oversized file aside and continue in a fresh one.
    fn rotate_if_needed(&mut self) -> io::Result<()> {
        if self.file.metadata()?.len() <= MAX_LOG_SIZE {
            return Ok(());
        }

        let timestamp = Local::now().format("%Y-%m-%d_%H%M%S%3f");
        let rotated_path = self.dir.join(format!("{}_{}.log", LOG_PREFIX, timestamp));
        let _ = fs::rename(&self.path, &rotated_path);

        self.file = open_append(&self.path)?;
        cleanup_old_logs(&self.dir);
        Ok(())
    }
}

/// Log file writer. Records are dropped until `open` is called.
#[derive(Default)]
pub struct FileSink {
    inner: Mutex<Option<OpenLog>>,
}

impl FileSink {
    /// Start writing to today's file in `dir`.
    pub fn open(&self, dir: &Path) -> io::Result<()> {
        self.open_on(dir, Local::now().date_naive())
    }

    fn open_on(&self, dir: &Path, date: NaiveDate) -> io::Result<()> {
        fs::create_dir_all(dir)?;
        *self.inner.lock() = Some(OpenLog::open(dir, date)?);
        cleanup_old_logs(dir);
        Ok(())
    }

    pub fn write_line(&self, line: &str) {
        self.write_line_on(line, Local::now().date_naive());
    }

    fn write_line_on(&self, line: &str, today: NaiveDate) {
        let mut guard = self.inner.lock();
        let Some(open) = guard.as_mut() else {
            return;
        };

        // Keep writing to the old handle if the new day's file cannot be opened
        let _ = open.roll_date(today);
        let _ = open.file.write_all(line.as_bytes());
        let _ = open.file.flush();
        let _ = open.rotate_if_needed();
    }
}

/// Path for the log file of `date` (one per day)
fn log_path_for(log_dir: &Path, date: NaiveDate) -> PathBuf {
    log_dir.join(format!("{}_{}.log", LOG_PREFIX, date.format("%Y-%m-%d")))
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Keep only the newest MAX_LOG_FILES log files
fn cleanup_old_logs(log_dir: &Path) {
    let Ok(entries) = fs::read_dir(log_dir) else {
        return;
    };

    let mut log_files: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "log"))
        .collect();

    // Newest first
    log_files.sort_by(|a, b| {
        let a_time = a.metadata().and_then(|m| m.modified()).ok();
        let b_time = b.metadata().and_then(|m| m.modified()).ok();
        b_time.cmp(&a_time)
    });

    for file in log_files.into_iter().skip(MAX_LOG_FILES) {
        let _ = fs::remove_file(file.path());
    }
}

fn format_line(level: Level, target: &str, message: &std::fmt::Arguments<'_>) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    format!("[{}] [{}] [{}] {}\n", timestamp, level, target, message)
}

/// Console plus file.
struct ShellLogger {
    console: env_logger::Logger,
    sink: Arc<FileSink>,
}

impl Log for ShellLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.console.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if !self.console.matches(record) {
            return;
        }
        self.console.log(record);
        self.sink
            .write_line(&format_line(record.level(), record.target(), record.args()));
    }

    fn flush(&self) {
        self.console.flush();
    }
}

/// Install the global logger. `RUST_LOG` overrides the default level, which
/// is `debug` in debug mode and `info` otherwise.
///
/// The returned sink starts writing once the log directory is known.
pub fn init_logging(debug: bool) -> Arc<FileSink> {
    let default_level = if debug { "debug" } else { "info" };
    let console = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .build();
    let max_level = console.filter();
    let sink = Arc::new(FileSink::default());

    let logger = ShellLogger {
        console,
        sink: Arc::clone(&sink),
    };
    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(max_level);
    }

    sink
}

fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "debug" => Level::Debug,
        "info" => Level::Info,
        "warn" | "warning" => Level::Warn,
        "error" => Level::Error,
        _ => Level::Info,
    }
}

// ============================================================================
// Tauri Commands
// ============================================================================

/// Write a log message from the content layer
#[command]
pub fn write_log(level: String, source: String, message: String) {
    log::log!(target: "content", parse_level(&level), "[{}] {}", source, message);
}
