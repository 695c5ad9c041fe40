//! Day/night tracking over the solar ephemeris.
//!
//! This module samples "now" against the computed sunrise/sunset times and
//! answers the questions the rest of the application asks: is it daytime,
//! how far into the current light period are we, and how long until the sun
//! next crosses the horizon. The awkward part is that nighttime straddles
//! midnight, so elapsed-night arithmetic is assembled from two sides of the
//! day boundary while always using today's daylight geometry. Tomorrow's
//! night length is never re-derived, so the elapsed fraction steps slightly
//! as the date rolls over; that step is intentional.
//!
//! Timezone handling is deliberately coarse: when the configured zone
//! differs from the system zone, the clock is shifted by whole hours only
//! (minutes and seconds pass through). Sub-hour offsets are a known
//! approximation of this model, not a bug.

use chrono::{Duration, NaiveDate, NaiveTime, Timelike};

use crate::constants::{MAX_UTC_OFFSET_HOURS, MIN_UTC_OFFSET_HOURS, SECONDS_PER_DAY};
use crate::solar::{self, Daylight, Location};
use crate::time_source;

/// The configured relationship between the local clock and UTC.
///
/// `utc_offset_hours` is the offset used for the ephemeris math;
/// `correct_for_system_tz` controls whether sampled clock times are shifted
/// from the machine's own zone into the configured one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeZonePolicy {
    utc_offset_hours: f64,
    correct_for_system_tz: bool,
}

impl TimeZonePolicy {
    /// Create a policy, rejecting offsets outside the accepted range.
    pub fn new(utc_offset_hours: f64, correct_for_system_tz: bool) -> Option<Self> {
        if (MIN_UTC_OFFSET_HOURS..=MAX_UTC_OFFSET_HOURS).contains(&utc_offset_hours) {
            Some(Self {
                utc_offset_hours,
                correct_for_system_tz,
            })
        } else {
            None
        }
    }

    pub fn utc_offset_hours(&self) -> f64 {
        self.utc_offset_hours
    }

    pub fn correct_for_system_tz(&self) -> bool {
        self.correct_for_system_tz
    }

    /// Update the offset. Out-of-range values leave the policy unchanged;
    /// the return value reports whether the write was applied.
    pub fn set_utc_offset(&mut self, hours: f64) -> bool {
        if (MIN_UTC_OFFSET_HOURS..=MAX_UTC_OFFSET_HOURS).contains(&hours) {
            self.utc_offset_hours = hours;
            true
        } else {
            false
        }
    }

    pub fn set_correct_for_system_tz(&mut self, enabled: bool) {
        self.correct_for_system_tz = enabled;
    }
}

/// Shift a clock time from the system zone into the configured zone.
///
/// Whole hours only: the correction is the rounded difference between the
/// two offsets, applied mod 24 to the hour field alone.
fn shift_hours(time: NaiveTime, home_offset_hours: f64, system_offset_hours: f64) -> NaiveTime {
    let correction = (home_offset_hours - system_offset_hours).round() as i64;
    let hour = (time.hour() as i64 + correction).rem_euclid(24) as u32;
    NaiveTime::from_hms_opt(hour, time.minute(), time.second()).unwrap_or(time)
}

/// Day/night state for one observer under one timezone policy.
///
/// The tracker owns its [`Location`] and [`TimeZonePolicy`] as plain values;
/// updates take effect on the next computation and never retroactively
/// change an already-derived result. Every query also has an `*_at` variant
/// that evaluates an explicit instant instead of sampling the clock.
#[derive(Debug, Clone)]
pub struct TimeOfDayTracker {
    location: Location,
    timezone: TimeZonePolicy,
}

impl TimeOfDayTracker {
    pub fn new(location: Location, timezone: TimeZonePolicy) -> Self {
        Self { location, timezone }
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn timezone(&self) -> &TimeZonePolicy {
        &self.timezone
    }

    /// Replace the observer coordinates. Out-of-range values are discarded;
    /// the return value reports whether the write was applied.
    pub fn set_location(&mut self, latitude: f64, longitude: f64) -> bool {
        match Location::new(latitude, longitude) {
            Some(location) => {
                self.location = location;
                true
            }
            None => false,
        }
    }

    /// Update the configured UTC offset, rejecting out-of-range values.
    pub fn set_utc_offset(&mut self, hours: f64) -> bool {
        self.timezone.set_utc_offset(hours)
    }

    pub fn set_correct_for_system_tz(&mut self, enabled: bool) {
        self.timezone.set_correct_for_system_tz(enabled);
    }

    /// The current clock time, shifted into the configured zone when the
    /// policy asks for it.
    pub fn current_local_time(&self) -> NaiveTime {
        let now = time_source::now();
        let time = now.time().with_nanosecond(0).unwrap_or_else(|| now.time());
        if self.timezone.correct_for_system_tz() {
            shift_hours(
                time,
                self.timezone.utc_offset_hours(),
                time_source::system_utc_offset_hours(),
            )
        } else {
            time
        }
    }

    fn today(&self) -> NaiveDate {
        time_source::now().date_naive()
    }

    /// Daylight geometry for an arbitrary date at the tracked location.
    pub fn daylight_for(&self, date: NaiveDate) -> Daylight {
        solar::daylight(date, self.location, self.timezone.utc_offset_hours())
    }

    /// Daylight geometry for the current date.
    pub fn daylight_today(&self) -> Daylight {
        self.daylight_for(self.today())
    }

    /// Today's sunrise as a clock time, if the sun rises today.
    pub fn sunrise_time(&self) -> Option<NaiveTime> {
        self.daylight_today().solar_day().map(|d| d.sunrise.to_time())
    }

    /// Today's sunset as a clock time, if the sun sets today.
    pub fn sunset_time(&self) -> Option<NaiveTime> {
        self.daylight_today().solar_day().map(|d| d.sunset.to_time())
    }

    /// Tomorrow's sunrise as a clock time, if the sun rises tomorrow.
    pub fn tomorrow_sunrise_time(&self) -> Option<NaiveTime> {
        let tomorrow = self.today().succ_opt()?;
        self.daylight_for(tomorrow)
            .solar_day()
            .map(|d| d.sunrise.to_time())
    }

    pub fn is_daytime(&self) -> bool {
        self.is_daytime_at(self.today(), self.current_local_time())
    }

    pub fn is_nighttime(&self) -> bool {
        !self.is_daytime()
    }

    /// Whether `now` on `date` falls within `sunrise <= now < sunset`,
    /// compared at whole-second granularity. A midnight-sun date is all
    /// daytime and a polar-night date all nighttime.
    pub fn is_daytime_at(&self, date: NaiveDate, now: NaiveTime) -> bool {
        match self.daylight_for(date) {
            Daylight::MidnightSun => true,
            Daylight::PolarNight => false,
            Daylight::RisesAndSets(day) => {
                let now_second = now.num_seconds_from_midnight();
                day.sunrise.second_of_day() <= now_second
                    && now_second < day.sunset.second_of_day()
            }
        }
    }

    pub fn is_nighttime_at(&self, date: NaiveDate, now: NaiveTime) -> bool {
        !self.is_daytime_at(date, now)
    }

    /// The fraction of the civil day that is daytime on `date`.
    pub fn daytime_fraction_for(&self, date: NaiveDate) -> f64 {
        match self.daylight_for(date) {
            Daylight::MidnightSun => 1.0,
            Daylight::PolarNight => 0.0,
            Daylight::RisesAndSets(day) => {
                (day.sunset.second_of_day() as i64 - day.sunrise.second_of_day() as i64) as f64
                    / SECONDS_PER_DAY as f64
            }
        }
    }

    pub fn daytime_fraction(&self) -> f64 {
        self.daytime_fraction_for(self.today())
    }

    pub fn nighttime_fraction_for(&self, date: NaiveDate) -> f64 {
        1.0 - self.daytime_fraction_for(date)
    }

    pub fn nighttime_fraction(&self) -> f64 {
        self.nighttime_fraction_for(self.today())
    }

    /// Today's daylight span as a duration.
    pub fn daytime_duration(&self) -> Duration {
        match self.daylight_today() {
            Daylight::MidnightSun => Duration::seconds(SECONDS_PER_DAY as i64),
            Daylight::PolarNight => Duration::zero(),
            Daylight::RisesAndSets(day) => Duration::seconds(
                day.sunset.second_of_day() as i64 - day.sunrise.second_of_day() as i64,
            ),
        }
    }

    /// Today's night span as a duration.
    pub fn nighttime_duration(&self) -> Duration {
        Duration::seconds(SECONDS_PER_DAY as i64) - self.daytime_duration()
    }

    pub fn fraction_of_light_period(&self) -> f64 {
        self.fraction_of_light_period_at(self.today(), self.current_local_time())
    }

    /// How far `now` sits within the light period it belongs to, in `[0,1)`.
    ///
    /// Daytime measures from sunrise to sunset. Nighttime crosses midnight,
    /// so the evening side measures from sunset and the morning side adds
    /// the whole evening to the elapsed part of the morning, both against
    /// today's night length. When the sun never crosses the horizon the
    /// whole civil day counts as the light period.
    pub fn fraction_of_light_period_at(&self, date: NaiveDate, now: NaiveTime) -> f64 {
        let now_second = now.num_seconds_from_midnight() as i64;
        let day_seconds = SECONDS_PER_DAY as i64;
        match self.daylight_for(date) {
            Daylight::MidnightSun | Daylight::PolarNight => {
                now_second as f64 / day_seconds as f64
            }
            Daylight::RisesAndSets(day) => {
                let sunrise = day.sunrise.second_of_day() as i64;
                let sunset = day.sunset.second_of_day() as i64;
                if sunrise <= now_second && now_second < sunset {
                    (now_second - sunrise) as f64 / (sunset - sunrise) as f64
                } else {
                    let night = (day_seconds - (sunset - sunrise)) as f64;
                    if now_second >= sunset {
                        (now_second - sunset) as f64 / night
                    } else {
                        (day_seconds - sunset + now_second) as f64 / night
                    }
                }
            }
        }
    }

    pub fn light_period_elapsed(&self) -> Duration {
        self.light_period_elapsed_at(self.today(), self.current_local_time())
    }

    /// The elapsed part of the current light period as a duration.
    pub fn light_period_elapsed_at(&self, date: NaiveDate, now: NaiveTime) -> Duration {
        let fraction = self.fraction_of_light_period_at(date, now);
        let period_seconds = match self.daylight_for(date) {
            Daylight::MidnightSun | Daylight::PolarNight => SECONDS_PER_DAY as i64,
            Daylight::RisesAndSets(day) => {
                let daylight =
                    day.sunset.second_of_day() as i64 - day.sunrise.second_of_day() as i64;
                if self.is_daytime_at(date, now) {
                    daylight
                } else {
                    SECONDS_PER_DAY as i64 - daylight
                }
            }
        };
        Duration::seconds((fraction * period_seconds as f64).round() as i64)
    }

    pub fn time_to_next_crossing(&self) -> Option<Duration> {
        self.time_to_next_crossing_at(self.today(), self.current_local_time())
    }

    /// Time remaining until the sun next crosses the horizon, or `None`
    /// when no crossing lies ahead (polar conditions today, or tomorrow in
    /// the evening branch).
    ///
    /// In the evening the result joins the rest of today with tomorrow's
    /// sunrise, recomputed fresh for the next date.
    pub fn time_to_next_crossing_at(&self, date: NaiveDate, now: NaiveTime) -> Option<Duration> {
        let day = match self.daylight_for(date) {
            Daylight::RisesAndSets(day) => day,
            Daylight::MidnightSun | Daylight::PolarNight => return None,
        };
        let now_second = now.num_seconds_from_midnight() as i64;
        let sunrise = day.sunrise.second_of_day() as i64;
        let sunset = day.sunset.second_of_day() as i64;

        if sunrise <= now_second && now_second < sunset {
            return Some(Duration::seconds(sunset - now_second));
        }
        if now_second >= sunset {
            // The day ends at 23:59:59; the extra second steps across the
            // boundary into tomorrow's morning.
            let tomorrow = date.succ_opt()?;
            let tomorrow_sunrise = self
                .daylight_for(tomorrow)
                .solar_day()?
                .sunrise
                .second_of_day() as i64;
            let remaining_today = SECONDS_PER_DAY as i64 - now_second;
            return Some(Duration::seconds(remaining_today + tomorrow_sunrise));
        }
        Some(Duration::seconds(sunrise - now_second))
    }
}
