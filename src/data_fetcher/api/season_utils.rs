//! Season label resolution and validation
//!
//! An NBA season spans two calendar years and is labelled `YYYY-YY` after the
//! year it starts in, e.g. `2024-25`.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::constants::SEASON_ROLLOVER_MONTH;
use crate::error::AppError;

/// Formats the label of the season starting in `start_year`.
pub fn season_label(start_year: i32) -> String {
    format!("{start_year}-{:02}", (start_year + 1).rem_euclid(100))
}

/// Resolves the "current" season for the given date.
///
/// Before March the previous calendar year's season is still the current one,
/// since reliable aggregates for a new season only exist well into it.
pub fn current_season<D: Datelike>(today: &D) -> String {
    let start_year = if today.month() < SEASON_ROLLOVER_MONTH {
        today.year() - 1
    } else {
        today.year()
    };
    let season = season_label(start_year);
    debug!(
        "Resolved current season: year={}, month={}, season={}",
        today.year(),
        today.month(),
        season
    );
    season
}

/// Parses the start year out of a `YYYY-YY` label.
pub fn season_start_year(season: &str) -> Option<i32> {
    let (start, suffix) = season.split_once('-')?;
    if start.len() != 4
        || suffix.len() != 2
        || !start.bytes().all(|b| b.is_ascii_digit())
        || !suffix.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    start.parse().ok()
}

/// Validates a client-supplied season parameter.
///
/// The label must look like `<4-digit year>-<2 digits>` and must not start
/// after the current calendar year.
pub fn validate_season(season: &str, today: NaiveDate) -> Result<String, AppError> {
    let start_year = season_start_year(season).ok_or_else(|| {
        AppError::invalid_request(format!("season '{season}' must be formatted as YYYY-YY"))
    })?;

    if start_year > today.year() {
        return Err(AppError::invalid_request(format!(
            "season '{season}' starts after the current year {}",
            today.year()
        )));
    }

    Ok(season.to_string())
}

/// Resolves the season to query: the validated parameter if given, otherwise
/// the current season.
pub fn resolve_season(season: Option<&str>, today: NaiveDate) -> Result<String, AppError> {
    match season {
        Some(season) => validate_season(season, today),
        None => Ok(current_season(&today)),
    }
}

/// The season one year before `season`, used as the single fallback step.
pub fn previous_season(season: &str) -> Option<String> {
    season_start_year(season).map(|start| season_label(start - 1))
}
