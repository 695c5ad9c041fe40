//! Time source abstraction for real and pinned clocks.
//!
//! This module provides a trait-based abstraction over the system clock so
//! that the tracker and the watch loop can run against either real time or a
//! fixed instant. Pinning the clock is how `--at` previews an arbitrary
//! moment without waiting for it to arrive.

use chrono::{DateTime, Local, TimeZone};
use once_cell::sync::OnceCell;
use std::sync::Arc;
use std::time::Duration;

/// Global time source instance, defaults to [`RealTimeSource`].
static TIME_SOURCE: OnceCell<Arc<dyn TimeSource>> = OnceCell::new();

/// Trait for abstracting time operations.
pub trait TimeSource: Send + Sync {
    /// Get the current time.
    fn now(&self) -> DateTime<Local>;

    /// Sleep for the specified duration (or skip it).
    fn sleep(&self, duration: Duration);
}

/// Real-time implementation that uses the actual system clock.
pub struct RealTimeSource;

impl TimeSource for RealTimeSource {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Time source pinned to a single instant.
///
/// `now()` always answers the construction-time instant and `sleep()` is a
/// no-op, so a status report rendered under this source describes exactly
/// the requested moment.
pub struct FixedTimeSource {
    instant: DateTime<Local>,
}

impl FixedTimeSource {
    pub fn new(instant: DateTime<Local>) -> Self {
        Self { instant }
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> DateTime<Local> {
        self.instant
    }

    fn sleep(&self, _duration: Duration) {}
}

/// Initialize the global time source (call once at startup).
pub fn init_time_source(source: Arc<dyn TimeSource>) {
    TIME_SOURCE.set(source).ok();
}

/// Get the current time from the global time source.
pub fn now() -> DateTime<Local> {
    TIME_SOURCE.get_or_init(|| Arc::new(RealTimeSource)).now()
}

/// Sleep for the specified duration using the global time source.
pub fn sleep(duration: Duration) {
    TIME_SOURCE
        .get_or_init(|| Arc::new(RealTimeSource))
        .sleep(duration)
}

/// The system's own UTC offset in hours, as of the current instant.
pub fn system_utc_offset_hours() -> f64 {
    now().offset().local_minus_utc() as f64 / 3600.0
}

/// Parse a datetime string in the format "YYYY-MM-DD HH:MM:SS".
pub fn parse_datetime(s: &str) -> Result<DateTime<Local>, String> {
    use chrono::NaiveDateTime;

    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| {
            Local
                .from_local_datetime(&naive)
                .single()
                .ok_or_else(|| "Ambiguous or invalid local time".to_string())
        })
        .map_err(|e| format!("Invalid datetime format: {e}. Use YYYY-MM-DD HH:MM:SS"))
        .and_then(|r| r)
}
