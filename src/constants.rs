//! Shared constants: accepted input ranges, solar model parameters,
//! and defaults used when no configuration exists.

/// Accepted observer latitude range in decimal degrees.
pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;

/// Accepted observer longitude range in decimal degrees.
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Accepted local-clock-to-UTC offset range in hours.
pub const MIN_UTC_OFFSET_HOURS: f64 = -12.0;
pub const MAX_UTC_OFFSET_HOURS: f64 = 12.0;

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Solar zenith angle at the instant of rise/set, in degrees: 90° plus the
/// standard −50′ correction for atmospheric refraction and the solar radius.
pub const SUNRISE_ZENITH_DEGREES: f64 = 90.833;

/// Default observer coordinates used when no configuration exists.
pub const DEFAULT_LATITUDE: f64 = 29.976634;
pub const DEFAULT_LONGITUDE: f64 = -101.766673;

/// Sampling cadence of the `watch` loop, in seconds.
pub const WATCH_TICK_INTERVAL_SECS: u64 = 1;
