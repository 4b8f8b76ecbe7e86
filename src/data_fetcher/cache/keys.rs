//! Cache key builders.
//!
//! A key is the category prefix followed by every parameter that changes the
//! result, joined with `_`. Identifiers are digit-only and season labels
//! contain no `_`, so distinct parameter tuples never produce the same key.

pub fn create_live_key() -> String {
    "live".to_string()
}

pub fn create_play_by_play_key(game_id: &str) -> String {
    format!("pbp_{game_id}")
}

pub fn create_advanced_key(player_id: &str) -> String {
    format!("adv_{player_id}")
}

pub fn create_shot_chart_key(player_id: &str, season: &str) -> String {
    format!("shot_{player_id}_{season}")
}

pub fn create_team_stats_key(team_id: &str, season: &str) -> String {
    format!("team_stats_{team_id}_{season}")
}

pub fn create_current_season_key() -> String {
    "meta_current_season".to_string()
}
