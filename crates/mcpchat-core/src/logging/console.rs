//! Console logger implementation

use super::traits::Logger;

/// A logger that writes to stderr
///
/// Everything goes to stderr so that model replies on stdout stay clean.
/// Debug messages are suppressed unless verbose mode is on.
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    prefix: String,
    verbose: bool,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Create a new console logger with the default prefix
    pub fn new() -> Self {
        Self {
            prefix: "[mcpchat]".to_string(),
            verbose: false,
        }
    }

    /// Create a console logger with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            verbose: false,
        }
    }

    /// Enable or disable debug output
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str) {
        if self.verbose {
            eprintln!("{} DEBUG: {}", self.prefix, message);
        }
    }

    fn info(&self, message: &str) {
        eprintln!("{} INFO: {}", self.prefix, message);
    }

    fn warn(&self, message: &str) {
        eprintln!("{} WARN: {}", self.prefix, message);
    }

    fn error(&self, message: &str) {
        eprintln!("{} ERROR: {}", self.prefix, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_logger_creation() {
        let logger = ConsoleLogger::new();
        assert_eq!(logger.prefix, "[mcpchat]");
        assert!(!logger.verbose);

        let custom = ConsoleLogger::with_prefix("[test]").verbose(true);
        assert_eq!(custom.prefix, "[test]");
        assert!(custom.verbose);
    }

    #[test]
    fn test_console_logger_logs() {
        // Just verifies the logger doesn't panic
        let logger = ConsoleLogger::new().verbose(true);
        logger.debug("debug message");
        logger.info("info message");
        logger.warn("warn message");
        logger.error("error message");
    }
}
