use chrono::{DateTime, Utc};
use log::Level;

/// Launch instant the hero countdown runs down to.
pub const LAUNCH_DATE: &str = "2025-05-10T00:00:00Z";

pub const COUNTDOWN_TICK_MS: u32 = 1000;
pub const UPLOAD_TICK_MS: u32 = 150;
pub const UPLOAD_STEP: u32 = 5;
pub const TOAST_DISMISS_MS: u32 = 5000;

pub fn launch_target() -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(LAUNCH_DATE) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(e) => {
            log::error!("Invalid launch date {}: {}", LAUNCH_DATE, e);
            None
        }
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose state transitions when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
