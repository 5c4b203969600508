use std::fmt;
use std::sync::OnceLock;

use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Debug,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
        })
    }
}

/// Writes timestamped lines to stderr; stdout carries the board and prompts.
pub struct Logger {
    prefix: Option<String>,
    verbose: bool,
}

impl Logger {
    fn new(prefix: Option<String>, verbose: bool) -> Self {
        Self { prefix, verbose }
    }

    pub fn enabled(&self, level: Level) -> bool {
        level == Level::Info || self.verbose
    }

    fn format_line(&self, timestamp: &str, level: Level, message: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("[{}][{}] {:<5} {}", timestamp, prefix, level, message),
            None => format!("[{}] {:<5} {}", timestamp, level, message),
        }
    }

    pub fn write(&self, level: Level, message: &str) {
        if !self.enabled(level) {
            return;
        }
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        eprintln!("{}", self.format_line(&timestamp, level, message));
    }
}

pub fn init_logger(prefix: Option<String>, verbose: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, verbose));
}

/// Nothing is written before `init_logger`, so the engine stays quiet when used as a library.
pub fn write(level: Level, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.write(level, message);
    }
}

pub fn enabled(level: Level) -> bool {
    LOGGER.get().is_some_and(|logger| logger.enabled(level))
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::write($crate::logger::Level::Info, &format!($($arg)*))
    };
}

/// Skips formatting entirely unless verbose logging is on.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if $crate::logger::enabled($crate::logger::Level::Debug) {
            $crate::logger::write($crate::logger::Level::Debug, &format!($($arg)*))
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_needs_verbose() {
        let quiet = Logger::new(None, false);
        let verbose = Logger::new(None, true);

        assert!(quiet.enabled(Level::Info));
        assert!(!quiet.enabled(Level::Debug));
        assert!(verbose.enabled(Level::Debug));
    }

    #[test]
    fn test_line_format() {
        let plain = Logger::new(None, false);
        let prefixed = Logger::new(Some("tictactoe".to_string()), false);

        assert_eq!(
            plain.format_line("2024-01-02 03:04:05", Level::Info, "started"),
            "[2024-01-02 03:04:05] INFO  started"
        );
        assert_eq!(
            prefixed.format_line("2024-01-02 03:04:05", Level::Debug, "picked 4"),
            "[2024-01-02 03:04:05][tictactoe] DEBUG picked 4"
        );
    }

    #[test]
    fn test_nothing_enabled_before_init() {
        // the global logger is never initialized in unit tests
        assert!(!enabled(Level::Info));
    }
}
