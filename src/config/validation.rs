//! Configuration validation.
//!
//! Range checks happen once at load time so that values reaching the core
//! types are already known-good; the core's own setters handle the separate
//! live-update contract of silently discarding invalid writes.

use anyhow::Result;

use super::Config;
use crate::constants::{
    MAX_LATITUDE, MAX_LONGITUDE, MAX_UTC_OFFSET_HOURS, MIN_LATITUDE, MIN_LONGITUDE,
    MIN_UTC_OFFSET_HOURS,
};

/// Validate all configured values against their documented ranges.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(latitude) = config.latitude
        && !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude)
    {
        anyhow::bail!(
            "latitude must be between -90 and 90 degrees (got {})",
            latitude
        );
    }

    if let Some(longitude) = config.longitude
        && !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude)
    {
        anyhow::bail!(
            "longitude must be between -180 and 180 degrees (got {})",
            longitude
        );
    }

    if let Some(offset) = config.utc_offset_hours
        && !(MIN_UTC_OFFSET_HOURS..=MAX_UTC_OFFSET_HOURS).contains(&offset)
    {
        anyhow::bail!(
            "utc_offset_hours ({}) must be between {} and {} hours",
            offset,
            MIN_UTC_OFFSET_HOURS,
            MAX_UTC_OFFSET_HOURS
        );
    }

    Ok(())
}
