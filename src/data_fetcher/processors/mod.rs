pub mod field_lookup;
pub mod live;
pub mod result_set;
pub mod tabular;
pub mod time_formatting;

// Re-export the normalizers used by the gateway
pub use live::{normalize_box_score, normalize_play_by_play, normalize_scoreboard};
pub use result_set::ResultSet;
pub use tabular::{
    normalize_game_finder, normalize_player_advanced, normalize_shot_chart, normalize_team_stats,
};
