//! Configuration for sunsetter: observer location and timezone policy.
//!
//! The configuration file is TOML at
//! `$XDG_CONFIG_HOME/sunsetter/sunsetter.toml`. When no file exists, a
//! commented default is written with the built-in coordinates and the
//! system's own UTC offset, so a first run produces sensible output and a
//! file the user can edit.
//!
//! ```toml
//! #[Sunsetter config]
//! latitude = 29.976634          # Observer latitude in decimal degrees (-90 to 90)
//! longitude = -101.766673       # Observer longitude in decimal degrees (-180 to 180)
//! utc_offset_hours = -6.0       # Local clock offset from UTC used for the ephemeris (-12 to 12)
//! correct_for_system_tz = false # Shift displayed times from the system zone into utc_offset_hours
//! ```
//!
//! Out-of-range values are hard errors at load time; once running, live
//! updates go through the tracker's setters, which silently discard invalid
//! writes and report whether the write was applied.

pub mod validation;

#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_LATITUDE, DEFAULT_LONGITUDE, MAX_UTC_OFFSET_HOURS, MIN_UTC_OFFSET_HOURS,
};
use crate::solar::Location;
use crate::time_source;
use crate::tracker::{TimeOfDayTracker, TimeZonePolicy};
use self::validation::validate_config;

/// Parsed configuration file contents.
///
/// Every field is optional; accessors fall back to the documented defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub utc_offset_hours: Option<f64>,
    pub correct_for_system_tz: Option<bool>,
}

impl Config {
    /// Load configuration from the default path, creating a default file if
    /// none exists.
    pub fn load() -> Result<Config> {
        Self::load_from_path(&get_config_path()?)
    }

    /// Load configuration from an explicit path.
    pub fn load_from_path(path: &Path) -> Result<Config> {
        if !path.exists() {
            create_default_config(path)?;
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse configuration from {}", path.display()))?;
        validate_config(&config)?;
        Ok(config)
    }

    /// The configured observer location, defaults applied.
    pub fn location(&self) -> Location {
        let latitude = self.latitude.unwrap_or(DEFAULT_LATITUDE);
        let longitude = self.longitude.unwrap_or(DEFAULT_LONGITUDE);
        Location::new(latitude, longitude)
            .or_else(|| Location::new(DEFAULT_LATITUDE, DEFAULT_LONGITUDE))
            .expect("default coordinates are in range")
    }

    /// The configured timezone policy; the offset defaults to the system's
    /// own UTC offset, clamped into the accepted range.
    pub fn timezone_policy(&self) -> TimeZonePolicy {
        let offset = self
            .utc_offset_hours
            .unwrap_or_else(time_source::system_utc_offset_hours)
            .clamp(MIN_UTC_OFFSET_HOURS, MAX_UTC_OFFSET_HOURS);
        let correct = self.correct_for_system_tz.unwrap_or(false);
        TimeZonePolicy::new(offset, correct).expect("clamped offset is in range")
    }

    /// Build a tracker from this configuration.
    pub fn tracker(&self) -> TimeOfDayTracker {
        TimeOfDayTracker::new(self.location(), self.timezone_policy())
    }
}

/// The default configuration path under the user's config directory.
pub fn get_config_path() -> Result<PathBuf> {
    let config_dir =
        dirs::config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    Ok(config_dir.join("sunsetter").join("sunsetter.toml"))
}

/// Write a commented default configuration file.
fn create_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }

    let offset = time_source::system_utc_offset_hours()
        .clamp(MIN_UTC_OFFSET_HOURS, MAX_UTC_OFFSET_HOURS);
    let contents = format!(
        "#[Sunsetter config]\n\
         latitude = {DEFAULT_LATITUDE}          # Observer latitude in decimal degrees (-90 to 90)\n\
         longitude = {DEFAULT_LONGITUDE}       # Observer longitude in decimal degrees (-180 to 180)\n\
         utc_offset_hours = {offset:.1}         # Local clock offset from UTC used for the ephemeris (-12 to 12)\n\
         correct_for_system_tz = false  # Shift displayed times from the system zone into utc_offset_hours\n"
    );
    fs::write(path, contents)
        .with_context(|| format!("Failed to write default config to {}", path.display()))?;

    log_block_start!("Created default configuration: {}", path.display());
    Ok(())
}
