//! Main application entry point and high-level flow coordination.
//!
//! This module dispatches the parsed command line to one of two flows:
//!
//! - `status`: load configuration, build the tracker, and render a one-shot
//!   report of today's solar state (optionally as of a pinned instant)
//! - `watch`: the same, then drive the crossing scheduler from a periodic
//!   sampling loop, announcing each sunrise and sunset exactly once
//!
//! Everything with behavior lives in the library; this file only wires
//! configuration, tracker, and scheduler together and formats the output.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration as StdDuration;

use anyhow::Result;
use chrono::Duration;

use sunsetter::args::{CliAction, ParsedArgs, display_help, display_version};
use sunsetter::config::Config;
use sunsetter::constants::WATCH_TICK_INTERVAL_SECS;
use sunsetter::logger::Log;
use sunsetter::scheduler::CrossingScheduler;
use sunsetter::solar::Daylight;
use sunsetter::time_source::{self, FixedTimeSource};
use sunsetter::tracker::TimeOfDayTracker;
use sunsetter::{
    log_block_start, log_decorated, log_end, log_error, log_indented, log_pipe, log_version,
};

fn main() {
    let parsed = ParsedArgs::parse(std::env::args().skip(1));
    let code = match parsed.action {
        CliAction::ShowHelp => {
            display_help();
            0
        }
        CliAction::ShowVersion => {
            display_version();
            0
        }
        CliAction::ShowHelpDueToError => {
            display_help();
            1
        }
        CliAction::Status {
            debug_enabled,
            config_path,
            at,
        } => run(debug_enabled, config_path, at, false),
        CliAction::Watch {
            debug_enabled,
            config_path,
        } => run(debug_enabled, config_path, None, true),
    };
    std::process::exit(code);
}

fn run(debug_enabled: bool, config_path: Option<String>, at: Option<String>, watch: bool) -> i32 {
    Log::set_debug(debug_enabled);

    if let Some(spec) = at {
        match time_source::parse_datetime(&spec) {
            Ok(instant) => {
                time_source::init_time_source(Arc::new(FixedTimeSource::new(instant)))
            }
            Err(message) => {
                log_error!("{message}");
                return 1;
            }
        }
    }

    match try_run(config_path, watch) {
        Ok(()) => 0,
        Err(e) => {
            log_pipe!();
            log_error!("{e:#}");
            log_end!();
            1
        }
    }
}

fn try_run(config_path: Option<String>, watch: bool) -> Result<()> {
    let config = match config_path {
        Some(path) => Config::load_from_path(Path::new(&path))?,
        None => Config::load()?,
    };
    let tracker = config.tracker();

    log_version!();
    report_status(&tracker);

    if watch {
        run_watch(tracker);
    }

    log_end!();
    Ok(())
}

/// Render the one-shot report: location, today's horizon times, and where
/// "now" sits within the current light period.
fn report_status(tracker: &TimeOfDayTracker) {
    let location = tracker.location();
    log_block_start!(
        "Location: {}, {}",
        format_latitude(location.latitude()),
        format_longitude(location.longitude())
    );
    log_indented!(
        "UTC offset: {:+.1} h",
        tracker.timezone().utc_offset_hours()
    );

    match tracker.daylight_today() {
        Daylight::RisesAndSets(day) => {
            log_block_start!("Sunrise: {}", day.sunrise.to_time());
            log_decorated!("Sunset: {}", day.sunset.to_time());
            log_decorated!("Daylight: {}", format_duration(tracker.daytime_duration()));
        }
        Daylight::MidnightSun => log_block_start!("The sun does not set today"),
        Daylight::PolarNight => log_block_start!("The sun does not rise today"),
    }

    let state = if tracker.is_daytime() {
        "daytime"
    } else {
        "nighttime"
    };
    log_block_start!("It is currently {state}");
    log_indented!("Time now: {}", tracker.current_local_time());
    log_indented!(
        "Light period elapsed: {:.1}%",
        tracker.fraction_of_light_period() * 100.0
    );
    match tracker.time_to_next_crossing() {
        Some(remaining) => {
            let next = if tracker.is_daytime() {
                "sunset"
            } else {
                "sunrise"
            };
            log_indented!(
                "Remaining time until {next}: {}",
                format_duration(remaining)
            );
        }
        None => log_indented!("No horizon crossing ahead"),
    }
}

/// Sample once per tick interval and announce each crossing as it happens.
fn run_watch(tracker: TimeOfDayTracker) -> ! {
    log_block_start!("Watching for horizon crossings (Ctrl-C to stop)");

    let mut scheduler = CrossingScheduler::new(
        || log_block_start!("Sunrise reached"),
        || log_block_start!("Sunset reached"),
    );

    loop {
        if scheduler.tick(&tracker).is_some()
            && let Some(remaining) = tracker.time_to_next_crossing()
        {
            log_indented!("Next crossing in {}", format_duration(remaining));
        }
        time_source::sleep(StdDuration::from_secs(WATCH_TICK_INTERVAL_SECS));
    }
}

/// Unsigned degrees with a hemisphere letter, e.g. `29.976634 N`.
fn format_latitude(degrees: f64) -> String {
    let hemisphere = if degrees < 0.0 { "S" } else { "N" };
    format!("{:.6} {hemisphere}", degrees.abs())
}

fn format_longitude(degrees: f64) -> String {
    let hemisphere = if degrees < 0.0 { "W" } else { "E" };
    format!("{:.6} {hemisphere}", degrees.abs())
}

/// Format a duration as `H:MM:SS`.
fn format_duration(duration: Duration) -> String {
    let total = duration.num_seconds();
    format!("{}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}
