//! Apparent solar position from the NOAA calculator spreadsheet.
//!
//! Every quantity is a closed-form polynomial or trigonometric expression of
//! the Julian century, evaluated in dependency order from the Julian date
//! down to the equation of time and the declination. Coefficients follow the
//! NOAA solar calculator spreadsheet
//! (<https://gml.noaa.gov/grad/solcalc/calcdetails.html>); accuracy is
//! adequate for sunrise/sunset at low and middle latitudes, which is all the
//! tracker needs.

use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::constants::{SECONDS_PER_DAY, SUNRISE_ZENITH_DEGREES};

/// Days from the spreadsheet epoch (1899-12-30) to the given date.
fn ref_days(date: NaiveDate) -> f64 {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();
    date.signed_duration_since(epoch).num_days() as f64
}

/// Result of the hour-angle solve at the sunrise zenith.
///
/// The `acos` argument leaves `[-1,1]` when the sun never reaches the
/// horizon on the given date; the sign of the overflow tells which way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HourAngle {
    /// The sun crosses the horizon; the hour angle in degrees.
    Crosses(f64),
    /// Argument below −1: the sun stays above the horizon all day.
    NeverSets,
    /// Argument above 1: the sun stays below the horizon all day.
    NeverRises,
}

/// Apparent solar position terms for one instant.
///
/// Angles are in degrees unless the field name says otherwise. All fields
/// are evaluated once by [`Ephemeris::at`]; the struct itself is plain data.
#[derive(Debug, Clone, Copy)]
pub struct Ephemeris {
    /// Julian day number of the instant, expressed in UT.
    pub julian_day: f64,
    /// Julian centuries since J2000.0.
    pub julian_century: f64,
    /// Geometric mean longitude of the sun, mod 360°.
    pub geom_mean_long_deg: f64,
    /// Geometric mean anomaly of the sun.
    pub geom_mean_anom_deg: f64,
    /// Eccentricity of Earth's orbit.
    pub orbit_eccentricity: f64,
    /// Equation of center correction.
    pub eq_of_center_deg: f64,
    /// True longitude of the sun.
    pub true_long_deg: f64,
    /// True anomaly of the sun.
    pub true_anom_deg: f64,
    /// Sun-Earth distance in astronomical units.
    pub radius_vector_au: f64,
    /// Apparent longitude, corrected for nutation and aberration.
    pub apparent_long_deg: f64,
    /// Mean obliquity of the ecliptic.
    pub mean_obliq_deg: f64,
    /// Obliquity corrected for the nutation term.
    pub obliq_corr_deg: f64,
    /// Right ascension of the sun.
    pub right_ascension_deg: f64,
    /// Declination of the sun.
    pub declination_deg: f64,
    /// The `tan²(obliquity/2)` variance term of the equation of time.
    pub variance: f64,
    /// Equation of time: apparent minus mean solar time, in minutes.
    pub eq_of_time_minutes: f64,
}

impl Ephemeris {
    /// Evaluate the chain for a local clock instant in a zone
    /// `utc_offset_hours` ahead of UTC.
    pub fn at(date: NaiveDate, clock: NaiveTime, utc_offset_hours: f64) -> Self {
        let frac_of_day = clock.num_seconds_from_midnight() as f64 / SECONDS_PER_DAY as f64;
        let julian_day = ref_days(date) + 2415018.5 + frac_of_day - utc_offset_hours / 24.0;
        let jc = (julian_day - 2451545.0) / 36525.0;

        let geom_mean_long_deg =
            (280.46646 + jc * (36000.76983 + jc * 0.0003032)).rem_euclid(360.0);
        let geom_mean_anom_deg = 357.52911 + jc * (35999.05029 - 0.0001537 * jc);
        let orbit_eccentricity = 0.016708634 - jc * (0.000042037 + 0.0000001267 * jc);

        let anom_rad = geom_mean_anom_deg.to_radians();
        let eq_of_center_deg = anom_rad.sin() * (1.914602 - jc * (0.004817 + 0.000014 * jc))
            + (2.0 * anom_rad).sin() * (0.019993 - 0.000101 * jc)
            + (3.0 * anom_rad).sin() * 0.000289;

        let true_long_deg = geom_mean_long_deg + eq_of_center_deg;
        let true_anom_deg = geom_mean_anom_deg + eq_of_center_deg;
        let radius_vector_au = (1.000001018 * (1.0 - orbit_eccentricity * orbit_eccentricity))
            / (1.0 + orbit_eccentricity * true_anom_deg.to_radians().cos());

        // The 125.04° node term drives both the nutation correction to the
        // obliquity and the aberration correction to the longitude.
        let node_deg = 125.04 - 1934.136 * jc;
        let apparent_long_deg = true_long_deg - 0.00569 - 0.00478 * node_deg.to_radians().sin();

        let mean_obliq_deg = 23.0
            + (26.0 + (21.448 - jc * (46.815 + jc * (0.00059 - jc * 0.001813))) / 60.0) / 60.0;
        let obliq_corr_deg = mean_obliq_deg + 0.00256 * node_deg.to_radians().cos();

        let apparent_rad = apparent_long_deg.to_radians();
        let obliq_rad = obliq_corr_deg.to_radians();
        let right_ascension_deg = (obliq_rad.cos() * apparent_rad.sin())
            .atan2(apparent_rad.cos())
            .to_degrees();
        let declination_deg = (obliq_rad.sin() * apparent_rad.sin()).asin().to_degrees();

        let half_obliq_tan = (obliq_rad / 2.0).tan();
        let variance = half_obliq_tan * half_obliq_tan;

        let long_rad = geom_mean_long_deg.to_radians();
        let eq_of_time_minutes = 4.0
            * (variance * (2.0 * long_rad).sin() - 2.0 * orbit_eccentricity * anom_rad.sin()
                + 4.0 * orbit_eccentricity * variance * anom_rad.sin() * (2.0 * long_rad).cos()
                - 0.5 * variance * variance * (4.0 * long_rad).sin()
                - 1.25 * orbit_eccentricity * orbit_eccentricity * (2.0 * anom_rad).sin())
            .to_degrees();

        Self {
            julian_day,
            julian_century: jc,
            geom_mean_long_deg,
            geom_mean_anom_deg,
            orbit_eccentricity,
            eq_of_center_deg,
            true_long_deg,
            true_anom_deg,
            radius_vector_au,
            apparent_long_deg,
            mean_obliq_deg,
            obliq_corr_deg,
            right_ascension_deg,
            declination_deg,
            variance,
            eq_of_time_minutes,
        }
    }

    /// Hour angle of the sun at the refraction-adjusted horizon, in degrees,
    /// for an observer at `latitude_deg`.
    ///
    /// Detects the polar cases instead of handing an out-of-domain argument
    /// to `acos`.
    pub fn sunrise_hour_angle(&self, latitude_deg: f64) -> HourAngle {
        let lat_rad = latitude_deg.to_radians();
        let decl_rad = self.declination_deg.to_radians();
        let cos_hour_angle = SUNRISE_ZENITH_DEGREES.to_radians().cos()
            / (lat_rad.cos() * decl_rad.cos())
            - lat_rad.tan() * decl_rad.tan();

        if cos_hour_angle < -1.0 {
            HourAngle::NeverSets
        } else if cos_hour_angle > 1.0 {
            HourAngle::NeverRises
        } else {
            HourAngle::Crosses(cos_hour_angle.acos().to_degrees())
        }
    }

    /// Solar noon as a fraction of the civil day at `longitude_deg`.
    pub fn solar_noon(&self, longitude_deg: f64, utc_offset_hours: f64) -> f64 {
        (720.0 - 4.0 * longitude_deg - self.eq_of_time_minutes + utc_offset_hours * 60.0) / 1440.0
    }
}
