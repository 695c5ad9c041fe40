//! Sunrise/sunset calculations for a configured observer.
//!
//! This module computes, for one calendar date and one observer, the local
//! sunrise and sunset instants as fractions of the civil day, along with
//! solar noon and the daylight duration. The underlying model is the NOAA
//! solar calculator spreadsheet chain implemented in [`ephemeris`]: a pure
//! trigonometric derivation from the Julian date through the apparent solar
//! position to the hour angle at the refraction-adjusted horizon.
//!
//! ## Module Structure
//!
//! - [`ephemeris`]: the closed-form solar position chain and hour-angle solve
//! - [`Daylight`]: tagged result of the daily computation, including the
//!   polar cases where the sun never crosses the horizon
//! - [`DayFraction`]: the fraction-of-day time currency shared with the
//!   tracker
//!
//! Results are cheap to compute and are derived on demand; nothing here is
//! cached or mutated.

use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::constants::{
    MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE, SECONDS_PER_DAY,
};

pub mod ephemeris;

pub use ephemeris::{Ephemeris, HourAngle};

#[cfg(test)]
mod tests;

/// Time of day at which the per-date ephemeris is sampled.
///
/// The NOAA spreadsheet evaluates each date a few minutes past local
/// midnight; sunrise/sunset drift by only fractions of a second across the
/// day, so one sample per date is enough.
pub(crate) fn nominal_sample_time() -> NaiveTime {
    NaiveTime::from_hms_opt(0, 6, 0).unwrap()
}

/// A point within a 24-hour civil day, expressed as a fraction in `[0,1)`.
///
/// This is the calculator's primary currency: sunrise, sunset, and solar
/// noon are all day fractions, converted to clock times only at the query
/// surface. Conversion resolves to whole seconds, so a fraction built from a
/// clock time converts back to the same time.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DayFraction(f64);

impl DayFraction {
    /// Wrap a raw fraction, falling back to midnight when it is outside
    /// `[0,1)`.
    pub fn clamped(raw: f64) -> Self {
        if (0.0..1.0).contains(&raw) {
            Self(raw)
        } else {
            log_debug!("Bad fraction of day: {raw}, using midnight");
            Self(0.0)
        }
    }

    /// The fraction corresponding to a clock time.
    pub fn from_time(time: NaiveTime) -> Self {
        Self(time.num_seconds_from_midnight() as f64 / SECONDS_PER_DAY as f64)
    }

    /// The raw fraction value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Second of the day, resolved to the nearest whole second.
    pub fn second_of_day(self) -> u32 {
        let second = (self.0 * SECONDS_PER_DAY as f64).round() as u32;
        second.min(SECONDS_PER_DAY - 1)
    }

    /// The clock time corresponding to this fraction.
    pub fn to_time(self) -> NaiveTime {
        NaiveTime::from_num_seconds_from_midnight_opt(self.second_of_day(), 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

/// Convert a raw fraction of day to a clock time.
///
/// Out-of-range input resolves to midnight; it never wraps and never panics.
pub fn time_from_day_fraction(raw: f64) -> NaiveTime {
    DayFraction::clamped(raw).to_time()
}

/// Observer coordinates in decimal degrees.
///
/// Writes outside the documented ranges are discarded; each setter reports
/// whether the write was applied so callers can surface the rejection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    latitude: f64,
    longitude: f64,
}

impl Location {
    /// Create a location, rejecting out-of-range coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        if (MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude)
            && (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude)
        {
            Some(Self {
                latitude,
                longitude,
            })
        } else {
            None
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Update the latitude. Out-of-range values leave the location
    /// unchanged; the return value reports whether the write was applied.
    pub fn set_latitude(&mut self, degrees: f64) -> bool {
        if (MIN_LATITUDE..=MAX_LATITUDE).contains(&degrees) {
            self.latitude = degrees;
            true
        } else {
            false
        }
    }

    /// Update the longitude. Out-of-range values leave the location
    /// unchanged; the return value reports whether the write was applied.
    pub fn set_longitude(&mut self, degrees: f64) -> bool {
        if (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&degrees) {
            self.longitude = degrees;
            true
        } else {
            false
        }
    }
}

/// Sunrise/sunset geometry for one calendar date at one observer location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarDay {
    pub date: NaiveDate,
    pub sunrise: DayFraction,
    pub sunset: DayFraction,
    pub noon: DayFraction,
    pub daylight_minutes: f64,
}

/// Outcome of the daily sunrise/sunset computation.
///
/// At extreme latitudes the sun can stay above or below the horizon for the
/// whole civil day. The hour-angle solve has no real solution there, and the
/// condition is reported as its own variant rather than as a numeric error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Daylight {
    /// The sun crosses the horizon twice on this date.
    RisesAndSets(SolarDay),
    /// The sun never drops below the horizon (midnight sun).
    MidnightSun,
    /// The sun never clears the horizon (polar night).
    PolarNight,
}

impl Daylight {
    /// The crossing geometry, if the sun rises and sets on this date.
    pub fn solar_day(&self) -> Option<&SolarDay> {
        match self {
            Daylight::RisesAndSets(day) => Some(day),
            _ => None,
        }
    }
}

/// Compute the daylight geometry for `date` as seen from `location`, with
/// clock times expressed in a zone `utc_offset_hours` ahead of UTC.
pub fn daylight(date: NaiveDate, location: Location, utc_offset_hours: f64) -> Daylight {
    daylight_at(date, nominal_sample_time(), location, utc_offset_hours)
}

/// As [`daylight`], sampling the ephemeris at an explicit clock time.
pub fn daylight_at(
    date: NaiveDate,
    clock: NaiveTime,
    location: Location,
    utc_offset_hours: f64,
) -> Daylight {
    let eph = Ephemeris::at(date, clock, utc_offset_hours);
    match eph.sunrise_hour_angle(location.latitude()) {
        HourAngle::NeverSets => Daylight::MidnightSun,
        HourAngle::NeverRises => Daylight::PolarNight,
        HourAngle::Crosses(hour_angle) => {
            // Magnitudes only; the trig solver's sign carries no meaning
            // for the clock-time offsets.
            let hour_angle = hour_angle.abs();
            let noon = eph
                .solar_noon(location.longitude(), utc_offset_hours)
                .abs();
            let half_day = hour_angle * 4.0 / 1440.0;
            Daylight::RisesAndSets(SolarDay {
                date,
                sunrise: DayFraction::clamped(noon - half_day),
                sunset: DayFraction::clamped(noon + half_day),
                noon: DayFraction::clamped(noon),
                daylight_minutes: 8.0 * hour_angle,
            })
        }
    }
}
