use serde::{Deserialize, Serialize};

/// One game on today's scoreboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub game_id: Option<String>,
    pub status: Option<String>,
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub home_score: Option<i64>,
    pub away_score: Option<i64>,
}

/// A player's line in a single game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerGameLine {
    pub player_id: Option<i64>,
    pub name: Option<String>,
    pub team: Option<String>,
    pub minutes: Option<String>,
    pub points: Option<i64>,
    pub rebounds: Option<i64>,
    pub assists: Option<i64>,
    pub steals: Option<i64>,
    pub blocks: Option<i64>,
    pub turnovers: Option<i64>,
}

/// A team's line in a single game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamGameLine {
    pub team_id: Option<i64>,
    pub name: Option<String>,
    pub points: Option<i64>,
    pub rebounds: Option<i64>,
    pub assists: Option<i64>,
    pub fg_pct: Option<f64>,
    pub fg3_pct: Option<f64>,
    pub ft_pct: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steals: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocks: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turnovers: Option<i64>,
}

/// Normalized box score of one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxScore {
    pub game_id: Option<String>,
    pub status: Option<String>,
    pub home_team: TeamGameLine,
    pub away_team: TeamGameLine,
    pub players: Vec<PlayerGameLine>,
}

/// One play-by-play action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayByPlayAction {
    pub clock: Option<String>,
    pub period: Option<i64>,
    pub team: Option<String>,
    pub description: Option<String>,
    pub home_score: Option<i64>,
    pub away_score: Option<i64>,
}
