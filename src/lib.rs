//! # Sunsetter Library
//!
//! Solar ephemeris engine and day/night crossing tracker.
//!
//! This library exists to enable testing of the core internals and provide
//! clean separation between CLI dispatch (main.rs) and the tracking logic.
//!
//! ## Architecture
//!
//! The library is organized into several layers:
//!
//! - **Ephemeris**: `solar` module with the NOAA spreadsheet chain from
//!   Julian date to local sunrise/sunset day fractions, and tagged results
//!   for the polar cases where the sun never crosses the horizon
//! - **Tracking**: `tracker` for day/night state, elapsed fraction of the
//!   current light period, and time to the next crossing, with
//!   midnight-aware night arithmetic
//! - **Scheduling**: `scheduler` for exactly-once sunrise/sunset callbacks
//!   driven by periodic samples
//! - **Configuration**: `config` module for TOML settings with validation
//! - **Infrastructure**: logging, swappable time source, CLI arguments

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

pub mod args;
pub mod config;
pub mod constants;
pub mod scheduler;
pub mod solar;
pub mod time_source;
pub mod tracker;

pub use scheduler::{Crossing, CrossingScheduler};
pub use solar::{DayFraction, Daylight, Location, SolarDay, time_from_day_fraction};
pub use tracker::{TimeOfDayTracker, TimeZonePolicy};
