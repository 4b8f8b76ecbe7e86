use serde::{Deserialize, Serialize};

/// Advanced metrics of a player for one season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerAdvanced {
    pub player_id: String,
    pub season: String,
    pub true_shooting_pct: Option<f64>,
    pub usage_pct: Option<f64>,
    pub pie: Option<f64>,
}

/// Season aggregates of one team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSeasonStats {
    pub team_id: String,
    pub team_name: Option<String>,
    /// Season whose data produced these numbers (may be the fallback season)
    pub season: String,
    pub games_played: Option<i64>,
    pub points: Option<f64>,
    pub rebounds: Option<f64>,
    pub assists: Option<f64>,
    pub fg_pct: Option<f64>,
    pub fg3_pct: Option<f64>,
    pub ft_pct: Option<f64>,
    pub off_rating: Option<f64>,
    pub def_rating: Option<f64>,
    pub net_rating: Option<f64>,
}

/// One attempted shot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotChartEntry {
    pub x: Option<i64>,
    pub y: Option<i64>,
    pub made: bool,
    pub shot_type: Option<String>,
}

/// All attempts of a player in a season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotChart {
    pub player_id: String,
    pub season: String,
    pub shots: Vec<ShotChartEntry>,
}

/// One team's row of a finished or scheduled game from the game finder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalGame {
    pub game_id: Option<String>,
    pub game_date: Option<String>,
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
    pub matchup: Option<String>,
    pub result: Option<String>,
    pub points: Option<i64>,
}

/// Resolved season label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentSeason {
    pub season: String,
}
