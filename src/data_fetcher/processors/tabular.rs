//! Normalizers for tabular stats API responses.

use chrono::NaiveDate;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

use super::field_lookup::{first_truthy, json_f64, json_i64, json_string};
use super::result_set::ResultSet;
use crate::constants::columns;
use crate::data_fetcher::models::{HistoricalGame, PlayerAdvanced, ShotChartEntry, TeamSeasonStats};
use crate::error::AppError;

const ADVANCED_SET: &str = "OverallPlayerDashboard";
const SHOT_CHART_SET: &str = "Shot_Chart_Detail";
const TEAM_STATS_SET: &str = "LeagueDashTeamStats";
const GAME_FINDER_SET: &str = "LeagueGameFinderResults";

/// Candidate column names per team-stats field, newest name first.
mod team_columns {
    pub const TEAM_ID: &[&str] = &["TEAM_ID"];
    pub const TEAM_NAME: &[&str] = &["TEAM_NAME"];
    pub const GAMES_PLAYED: &[&str] = &["GP"];
    pub const POINTS: &[&str] = &["PTS"];
    pub const REBOUNDS: &[&str] = &["REB"];
    pub const ASSISTS: &[&str] = &["AST"];
    pub const FG_PCT: &[&str] = &["FG_PCT"];
    pub const FG3_PCT: &[&str] = &["FG3_PCT"];
    pub const FT_PCT: &[&str] = &["FT_PCT"];
    pub const OFF_RATING: &[&str] = &["OFF_RATING", "OFF_RTG"];
    pub const DEF_RATING: &[&str] = &["DEF_RATING", "DEF_RTG"];
    pub const NET_RATING: &[&str] = &["NET_RATING", "NET_RTG"];
}

type Record<'a> = HashMap<&'a str, &'a Value>;

fn lookup<'a>(record: &Record<'a>, candidates: &[&str]) -> Option<&'a Value> {
    first_truthy(candidates, |name| record.get(name).copied())
}

fn record_f64(record: &Record<'_>, candidates: &[&str]) -> Option<f64> {
    lookup(record, candidates).and_then(json_f64)
}

fn record_i64(record: &Record<'_>, candidates: &[&str]) -> Option<i64> {
    lookup(record, candidates).and_then(json_i64)
}

fn record_string(record: &Record<'_>, candidates: &[&str]) -> Option<String> {
    lookup(record, candidates).and_then(json_string)
}

fn cell(row: &[Value], index: usize) -> Option<&Value> {
    row.get(index)
}

/// Advanced metrics from the first row of the overall player dashboard.
///
/// Columns are read by fixed offset. A dashboard without rows means the player
/// has no data for the season and is reported as malformed.
pub fn normalize_player_advanced(
    payload: &Value,
    player_id: &str,
    season: &str,
) -> Result<PlayerAdvanced, AppError> {
    let set = ResultSet::select(payload, ADVANCED_SET)?;
    set.require_rows()?;
    let row = &set.rows[0];

    Ok(PlayerAdvanced {
        player_id: player_id.to_string(),
        season: season.to_string(),
        true_shooting_pct: cell(row, columns::ADV_TRUE_SHOOTING_PCT).and_then(json_f64),
        usage_pct: cell(row, columns::ADV_USAGE_PCT).and_then(json_f64),
        pie: cell(row, columns::ADV_PIE).and_then(json_f64),
    })
}

/// The made flag counts only when it is exactly 1.
fn is_made_flag(value: &Value) -> bool {
    value.as_i64() == Some(1) || value.as_str() == Some("1")
}

/// Every shot attempt in the shot chart table. Zero rows is a valid empty chart.
pub fn normalize_shot_chart(payload: &Value) -> Result<Vec<ShotChartEntry>, AppError> {
    let set = ResultSet::select(payload, SHOT_CHART_SET)?;

    let shots = set
        .rows
        .iter()
        .map(|row| ShotChartEntry {
            x: cell(row, columns::SHOT_LOC_X).and_then(json_i64),
            y: cell(row, columns::SHOT_LOC_Y).and_then(json_i64),
            made: cell(row, columns::SHOT_MADE_FLAG).is_some_and(is_made_flag),
            shot_type: cell(row, columns::SHOT_TYPE).and_then(json_string),
        })
        .collect::<Vec<_>>();

    debug!("Normalized {} shot chart entries", shots.len());
    Ok(shots)
}

/// The row of `team_id` in a team stats table, if the team is listed.
///
/// An empty or headerless table is malformed.
fn team_record<'a>(set: &'a ResultSet, team_id: &str) -> Result<Option<Record<'a>>, AppError> {
    set.require_rows()?;
    Ok(set
        .rows
        .iter()
        .map(|row| set.record(row))
        .find(|record| record_string(record, team_columns::TEAM_ID).as_deref() == Some(team_id)))
}

/// Season stats of `team_id`, joining the `Base` table (box totals and
/// shooting) with the `Advanced` table (ratings) on `TEAM_ID`.
///
/// An empty table is malformed (the caller may retry an older season); a
/// populated base table without the team is `NotFound`. A team missing only
/// from the advanced table keeps its box stats with null ratings.
pub fn normalize_team_stats(
    base: &Value,
    advanced: &Value,
    team_id: &str,
    season: &str,
) -> Result<TeamSeasonStats, AppError> {
    let base_set = ResultSet::select(base, TEAM_STATS_SET)?;
    let box_score = team_record(&base_set, team_id)?.ok_or_else(|| {
        AppError::not_found(format!("team {team_id} has no stats for season {season}"))
    })?;

    let advanced_set = ResultSet::select(advanced, TEAM_STATS_SET)?;
    let ratings = team_record(&advanced_set, team_id)?;
    if ratings.is_none() {
        debug!("Team {} missing from advanced table for {}", team_id, season);
    }

    Ok(TeamSeasonStats {
        team_id: team_id.to_string(),
        team_name: record_string(&box_score, team_columns::TEAM_NAME),
        season: season.to_string(),
        games_played: record_i64(&box_score, team_columns::GAMES_PLAYED),
        points: record_f64(&box_score, team_columns::POINTS),
        rebounds: record_f64(&box_score, team_columns::REBOUNDS),
        assists: record_f64(&box_score, team_columns::ASSISTS),
        fg_pct: record_f64(&box_score, team_columns::FG_PCT),
        fg3_pct: record_f64(&box_score, team_columns::FG3_PCT),
        ft_pct: record_f64(&box_score, team_columns::FT_PCT),
        off_rating: ratings
            .as_ref()
            .and_then(|record| record_f64(record, team_columns::OFF_RATING)),
        def_rating: ratings
            .as_ref()
            .and_then(|record| record_f64(record, team_columns::DEF_RATING)),
        net_rating: ratings
            .as_ref()
            .and_then(|record| record_f64(record, team_columns::NET_RATING)),
    })
}

/// Game finder rows, optionally restricted to one calendar day.
///
/// The upstream date filter is not always honored, so rows whose `GAME_DATE`
/// falls on another day are dropped here as well.
pub fn normalize_game_finder(
    payload: &Value,
    on_date: Option<NaiveDate>,
) -> Result<Vec<HistoricalGame>, AppError> {
    let set = ResultSet::select(payload, GAME_FINDER_SET)?;
    let wanted = on_date.map(|date| date.format("%Y-%m-%d").to_string());

    let games = set
        .rows
        .iter()
        .map(|row| {
            let record = set.record(row);
            HistoricalGame {
                game_id: record_string(&record, &["GAME_ID"]),
                game_date: record_string(&record, &["GAME_DATE"]),
                team_id: record_i64(&record, &["TEAM_ID"]),
                team_name: record_string(&record, &["TEAM_NAME"]),
                matchup: record_string(&record, &["MATCHUP"]),
                result: record_string(&record, &["WL"]),
                points: record_i64(&record, &["PTS"]),
            }
        })
        .filter(|game| match (&wanted, &game.game_date) {
            (Some(wanted), Some(date)) => date.starts_with(wanted.as_str()),
            _ => true,
        })
        .collect();

    Ok(games)
}
