//! Season parameter resolution
//!
//! Every tool takes an optional season (year). Absent, pre-1877, or
//! not-yet-finished seasons all resolve to the current calendar year.

use chrono::{Datelike, Local};

use crate::config::seasons::FIRST_SEASON;

/// The current calendar year, used as the default season
pub fn current_season() -> i32 {
    Local::now().year()
}

/// Clamp a requested season into the valid historical range.
///
/// Returns `now` when the request is absent, earlier than 1877, or not
/// strictly less than `now`.
pub fn resolve_season(requested: Option<i32>, now: i32) -> i32 {
    match requested {
        Some(season) if season >= FIRST_SEASON && season < now => season,
        _ => now,
    }
}
