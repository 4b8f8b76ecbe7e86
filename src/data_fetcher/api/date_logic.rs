//! Date parameter parsing for the games-by-date query

use chrono::NaiveDate;

use crate::error::AppError;

/// Parses a `YYYYMMDD` date parameter.
///
/// The value must be exactly eight ASCII digits and name a real calendar day.
pub fn parse_game_date(date: &str) -> Result<NaiveDate, AppError> {
    if date.len() != 8 || !date.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::invalid_request(format!(
            "date '{date}' must be formatted as YYYYMMDD"
        )));
    }

    NaiveDate::parse_from_str(date, "%Y%m%d")
        .map_err(|_| AppError::invalid_request(format!("date '{date}' is not a calendar date")))
}

/// Formats a date the way the stats API expects date filters (`MM/DD/YYYY`).
pub fn format_stats_api_date(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}
