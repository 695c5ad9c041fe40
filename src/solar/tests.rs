use super::*;
use crate::solar::ephemeris::{Ephemeris, HourAngle};
use chrono::{Duration, NaiveDate, NaiveTime};
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn langtry_texas() -> Location {
    Location::new(29.976634, -101.766673).unwrap()
}

/// J2000.0 anchor: 2000-01-01 00:00 UT is Julian day 2451544.5.
#[test]
fn julian_day_matches_the_j2000_anchor() {
    let eph = Ephemeris::at(date(2000, 1, 1), NaiveTime::MIN, 0.0);
    assert_eq!(eph.julian_day, 2451544.5);
    // Mean longitude at the epoch sits just past 280°.
    assert!((280.0..281.0).contains(&eph.geom_mean_long_deg));
}

#[test]
fn langtry_texas_summer_day_computes_without_domain_error() {
    let location = langtry_texas();
    let nominal = NaiveTime::from_hms_opt(0, 6, 0).unwrap();
    let eph = Ephemeris::at(date(2020, 6, 21), nominal, -6.0);

    let hour_angle = match eph.sunrise_hour_angle(location.latitude()) {
        HourAngle::Crosses(deg) => deg,
        other => panic!("expected a horizon crossing, got {other:?}"),
    };
    assert!(hour_angle > 0.0);

    let day = match daylight_at(date(2020, 6, 21), nominal, location, -6.0) {
        Daylight::RisesAndSets(day) => day,
        other => panic!("expected a sunrise/sunset day, got {other:?}"),
    };
    assert!(day.sunrise < day.sunset);
    assert!(day.sunrise < day.noon && day.noon < day.sunset);

    // Summer day length at ~30°N is a bit over half the day.
    let length = day.sunset.value() - day.sunrise.value();
    assert!((0.55..0.60).contains(&length), "day length {length}");
    assert!((day.daylight_minutes / 1440.0 - length).abs() < 0.001);
}

#[test]
fn langtry_texas_winter_day_is_shorter() {
    let day = daylight(date(2020, 12, 21), langtry_texas(), -6.0)
        .solar_day()
        .copied()
        .expect("winter solstice at 30°N still has a sunrise");
    let length = day.sunset.value() - day.sunrise.value();
    assert!((0.40..0.45).contains(&length), "day length {length}");
}

#[test]
fn equatorial_equinox_day_is_near_half() {
    let location = Location::new(0.0, 0.0).unwrap();
    let day = daylight(date(2021, 3, 20), location, 0.0)
        .solar_day()
        .copied()
        .expect("the sun always rises at the equator");
    let length = day.sunset.value() - day.sunrise.value();
    // Slightly over 12 hours: the sunrise zenith includes the horizon dip.
    assert!((0.49..0.52).contains(&length), "day length {length}");
}

#[test]
fn polar_latitudes_report_midnight_sun_and_polar_night() {
    let svalbard = Location::new(78.0, 15.0).unwrap();
    assert_eq!(daylight(date(2020, 6, 21), svalbard, 1.0), Daylight::MidnightSun);
    assert_eq!(daylight(date(2020, 12, 21), svalbard, 1.0), Daylight::PolarNight);
}

#[test]
fn declination_and_equation_of_time_stay_bounded_across_the_year() {
    for month in 1..=12 {
        for dom in [1, 15] {
            let eph = Ephemeris::at(date(2021, month, dom), NaiveTime::MIN, 0.0);
            assert!(
                eph.declination_deg.abs() <= 23.5,
                "declination {} on 2021-{month:02}-{dom:02}",
                eph.declination_deg
            );
            assert!(
                eph.eq_of_time_minutes.abs() < 18.0,
                "equation of time {} on 2021-{month:02}-{dom:02}",
                eph.eq_of_time_minutes
            );
        }
    }
}

#[test]
fn solar_noon_at_greenwich_is_near_clock_noon() {
    for month in 1..=12 {
        let eph = Ephemeris::at(date(2021, month, 10), NaiveTime::MIN, 0.0);
        let noon = eph.solar_noon(0.0, 0.0);
        assert!((0.487..0.513).contains(&noon), "noon {noon} in month {month}");
    }
}

#[test]
fn malformed_day_fractions_resolve_to_midnight() {
    assert_eq!(time_from_day_fraction(-0.1), NaiveTime::MIN);
    assert_eq!(time_from_day_fraction(1.2), NaiveTime::MIN);
    assert_eq!(time_from_day_fraction(1.0), NaiveTime::MIN);
}

#[test]
fn valid_day_fractions_convert_to_clock_times() {
    assert_eq!(
        time_from_day_fraction(0.5),
        NaiveTime::from_hms_opt(12, 0, 0).unwrap()
    );
    assert_eq!(time_from_day_fraction(0.0), NaiveTime::MIN);
}

#[test]
fn out_of_range_locations_are_rejected() {
    assert!(Location::new(90.5, 0.0).is_none());
    assert!(Location::new(-91.0, 0.0).is_none());
    assert!(Location::new(0.0, 180.5).is_none());
    assert!(Location::new(90.0, -180.0).is_some());

    let mut location = langtry_texas();
    assert!(!location.set_latitude(120.0));
    assert_eq!(location.latitude(), 29.976634);
    assert!(location.set_longitude(4.5));
    assert_eq!(location.longitude(), 4.5);
}

proptest! {
    /// Clock time -> day fraction -> clock time is the identity.
    #[test]
    fn day_fraction_round_trips_clock_times(second in 0u32..86_400) {
        let time = NaiveTime::from_num_seconds_from_midnight_opt(second, 0).unwrap();
        prop_assert_eq!(DayFraction::from_time(time).to_time(), time);
    }

    /// Away from the poles both fractions are valid and ordered.
    #[test]
    fn mid_latitude_fractions_are_ordered_and_in_range(
        latitude in -60.0..60.0f64,
        longitude in -179.0..179.0f64,
        day_offset in 0i64..3_650,
    ) {
        let location = Location::new(latitude, longitude).unwrap();
        let utc_offset = (longitude / 15.0).round().clamp(-12.0, 12.0);
        let when = date(2015, 1, 1) + Duration::days(day_offset);
        let result = daylight(when, location, utc_offset);
        prop_assert!(
            matches!(result, Daylight::RisesAndSets(_)),
            "no crossing at latitude {} on {}: {:?}",
            latitude,
            when,
            result
        );
        let day = match result {
            Daylight::RisesAndSets(day) => day,
            _ => unreachable!(),
        };
        prop_assert!((0.0..1.0).contains(&day.sunrise.value()));
        prop_assert!((0.0..1.0).contains(&day.sunset.value()));
        prop_assert!(day.sunrise < day.sunset);
    }
}
