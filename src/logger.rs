//! Structured logging with visual formatting.
//!
//! This module provides the logging system for sunsetter's visual output
//! style: Unicode box-drawing characters group related messages into blocks,
//! with semantic `[LEVEL]` macros for messages that fall outside the block
//! structure. A runtime enable flag allows quiet operation during tests, and
//! a separate debug flag gates diagnostic output.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

static LOGGING_ENABLED: AtomicBool = AtomicBool::new(true);
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Main logging interface providing structured output formatting.
///
/// ## Logging Conventions
///
/// - **`log_version!`**: prints the application startup header, once at the
///   beginning. Output: `┏ sunsetter vX.Y.Z ━━╸`.
/// - **`log_block_start!`**: initiates a new conceptual block of information
///   (a state change, a loaded configuration, a crossing announcement).
///   Prepends an empty pipe `┃` for spacing, then prints `┣ message`.
/// - **`log_decorated!`**: a message within an existing block, printed as
///   `┣ message`.
/// - **`log_indented!`**: nested detail belonging to a parent message,
///   printed as `┃   message`.
/// - **`log_pipe!`**: a single empty `┃` line for vertical spacing before a
///   `log_warning!`/`log_error!` that opens its own block.
/// - **`log_end!`**: the final termination marker `╹`, once at shutdown.
/// - **`log_info!`, `log_warning!`, `log_error!`, `log_debug!`**: semantic
///   `[LEVEL]` messages. `log_debug!` only prints when debug output has been
///   enabled with [`Log::set_debug`].
pub struct Log;

impl Log {
    /// Enable or disable logging output entirely.
    ///
    /// Useful for quiet operation where log output would interfere with
    /// results, e.g. under test harnesses.
    pub fn set_enabled(enabled: bool) {
        LOGGING_ENABLED.store(enabled, Ordering::SeqCst);
    }

    /// Check if logging is currently enabled.
    pub fn is_enabled() -> bool {
        LOGGING_ENABLED.load(Ordering::SeqCst)
    }

    /// Enable or disable `log_debug!` diagnostic output.
    pub fn set_debug(enabled: bool) {
        DEBUG_ENABLED.store(enabled, Ordering::SeqCst);
    }

    /// Check if debug output is enabled.
    pub fn is_debug() -> bool {
        DEBUG_ENABLED.load(Ordering::SeqCst)
    }
}

/// Write formatted output to stdout, ignoring write failures.
///
/// Failures are swallowed on purpose: a broken pipe during shutdown must not
/// take the sampling loop down with it.
pub fn write_output(formatted: &str) {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    let _ = handle.write_all(formatted.as_bytes());
    let _ = handle.flush();
}

/// Log the application version header.
#[macro_export]
macro_rules! log_version {
    () => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let version = env!("CARGO_PKG_VERSION");
            $crate::logger::write_output(&format!("┏ sunsetter v{version} ━━╸\n"));
        }
    }};
}

/// Log the final termination marker.
#[macro_export]
macro_rules! log_end {
    () => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            $crate::logger::write_output("╹\n");
        }
    }};
}

/// Insert a single empty pipe line for vertical spacing.
#[macro_export]
macro_rules! log_pipe {
    () => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            $crate::logger::write_output("┃\n");
        }
    }};
}

/// Log a block start message, initiating a new conceptual block.
#[macro_export]
macro_rules! log_block_start {
    ($($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let message = format!($($arg)*);
            $crate::logger::write_output(&format!("┃\n┣ {message}\n"));
        }
    }};
}

/// Log a message that continues the current block.
#[macro_export]
macro_rules! log_decorated {
    ($($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let message = format!($($arg)*);
            $crate::logger::write_output(&format!("┣ {message}\n"));
        }
    }};
}

/// Log nested detail belonging to a parent message.
#[macro_export]
macro_rules! log_indented {
    ($($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let message = format!($($arg)*);
            $crate::logger::write_output(&format!("┃   {message}\n"));
        }
    }};
}

/// Log an informational message with an `[INFO]` prefix.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let message = format!($($arg)*);
            $crate::logger::write_output(&format!("┣[\x1b[34mINFO\x1b[0m] {message}\n"));
        }
    }};
}

/// Log a warning message with a yellow `[WARNING]` prefix.
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let message = format!($($arg)*);
            $crate::logger::write_output(&format!("┣[\x1b[33mWARNING\x1b[0m] {message}\n"));
        }
    }};
}

/// Log an error message with a red `[ERROR]` prefix.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let message = format!($($arg)*);
            $crate::logger::write_output(&format!("┣[\x1b[31mERROR\x1b[0m] {message}\n"));
        }
    }};
}

/// Log a diagnostic message, printed only when debug output is enabled.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() && Log::is_debug() {
            let message = format!($($arg)*);
            $crate::logger::write_output(&format!("┣[\x1b[35mDEBUG\x1b[0m] {message}\n"));
        }
    }};
}
