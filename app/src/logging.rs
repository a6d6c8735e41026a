//! FILENAME: app/src/logging.rs
// PURPOSE: Unified logging system for the application.
// FORMAT: seq|level|category|message, one line per event, to stderr and
// optionally to a log file.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use once_cell::sync::Lazy;

// ============================================================================
// UNIFIED LOGGING SYSTEM
// ============================================================================

/// Sequence counter shared by every log line of the process
static LOG_SEQ: AtomicU64 = AtomicU64::new(0);

/// Open log file. None means console-only logging.
static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    /// Single-letter code written in the level column.
    pub fn code(self) -> &'static str {
        match self {
            Level::Debug => "D",
            Level::Info => "I",
            Level::Warn => "W",
            Level::Error => "E",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

pub fn next_seq() -> u64 {
    LOG_SEQ.fetch_add(1, Ordering::SeqCst) + 1
}

pub fn format_line(seq: u64, level: Level, category: &str, message: &str) -> String {
    format!("{}|{}|{}|{}", seq, level, category, message)
}

/// Opens (and truncates) the log file, creating missing parent directories.
pub fn init_log_file(path: &Path) -> Result<PathBuf, String> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        if !dir.exists() {
            std::fs::create_dir_all(dir)
                .map_err(|e| format!("Failed to create log dir at {:?}: {}", dir, e))?;
        }
    }

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| format!("Failed to create log file {:?}: {}", path, e))?;

    *LOG_FILE.lock().map_err(|e| format!("Lock error: {}", e))? = Some(file);

    Ok(path.to_path_buf())
}

/// Flushes and closes the log file; later lines go to stderr only.
pub fn close_log_file() {
    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(mut file) = guard.take() {
            let _ = file.flush();
        }
    }
}

pub fn write_log(level: Level, category: &str, message: &str) {
    let line = format_line(next_seq(), level, category, message);

    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(file) = guard.as_mut() {
            if let Err(e) = writeln!(file, "{}", line).and_then(|_| file.flush()) {
                eprintln!("[LOG_ERROR] Failed to write: {}", e);
            }
        }
    }

    // stdout carries the report
    eprintln!("{}", line);
}

/// Writes `ENTER func params` or `EXIT func result` at debug level.
pub fn write_log_trace(category: &str, marker: &str, func_name: &str, detail: &str) {
    let message = if detail.is_empty() {
        format!("{} {}", marker, func_name)
    } else {
        format!("{} {} {}", marker, func_name, detail)
    };
    write_log(Level::Debug, category, &message);
}

// ============================================================================
// MACRO DEFINITIONS & EXPORTS
// ============================================================================

#[macro_export]
macro_rules! log_debug {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::write_log($crate::logging::Level::Debug, $cat, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::write_log($crate::logging::Level::Info, $cat, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::write_log($crate::logging::Level::Warn, $cat, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::write_log($crate::logging::Level::Error, $cat, &format!($($arg)*))
    };
}

// ENTER/EXIT macros for function tracing

#[macro_export]
macro_rules! log_enter {
    ($cat:expr, $func:expr) => {
        $crate::logging::write_log_trace($cat, "ENTER", $func, "")
    };
    ($cat:expr, $func:expr, $($arg:tt)*) => {
        $crate::logging::write_log_trace($cat, "ENTER", $func, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_exit {
    ($cat:expr, $func:expr) => {
        $crate::logging::write_log_trace($cat, "EXIT", $func, "")
    };
    ($cat:expr, $func:expr, $($arg:tt)*) => {
        $crate::logging::write_log_trace($cat, "EXIT", $func, &format!($($arg)*))
    };
}

pub use log_debug;
pub use log_info;
pub use log_warn;
pub use log_error;
pub use log_enter;
pub use log_exit;
