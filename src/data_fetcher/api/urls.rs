//! URL building utilities for upstream endpoints

use crate::constants::LEAGUE_ID;

/// Builds the URL of today's live scoreboard.
///
/// # Example
/// ```
/// use nba_gateway::data_fetcher::api::build_scoreboard_url;
///
/// let url = build_scoreboard_url("https://cdn.example.com/live");
/// assert_eq!(url, "https://cdn.example.com/live/scoreboard/todaysScoreboard_00.json");
/// ```
pub fn build_scoreboard_url(live_base: &str) -> String {
    format!("{live_base}/scoreboard/todaysScoreboard_{LEAGUE_ID}.json")
}

/// Builds the URL of a game's live box score.
///
/// # Example
/// ```
/// use nba_gateway::data_fetcher::api::build_boxscore_url;
///
/// let url = build_boxscore_url("https://cdn.example.com/live", "0022400061");
/// assert_eq!(url, "https://cdn.example.com/live/boxscore/boxscore_0022400061.json");
/// ```
pub fn build_boxscore_url(live_base: &str, game_id: &str) -> String {
    format!("{live_base}/boxscore/boxscore_{game_id}.json")
}

/// Builds the URL of a game's live play-by-play feed.
pub fn build_playbyplay_url(live_base: &str, game_id: &str) -> String {
    format!("{live_base}/playbyplay/playbyplay_{game_id}.json")
}

/// Builds the career stats query for a player.
pub fn build_player_career_url(stats_base: &str, player_id: &str) -> String {
    format!("{stats_base}/playercareerstats?PlayerID={player_id}&PerMode=PerGame&LeagueID={LEAGUE_ID}")
}

/// Builds the advanced general-splits query for a player and season.
///
/// # Example
/// ```
/// use nba_gateway::data_fetcher::api::build_player_advanced_url;
///
/// let url = build_player_advanced_url("https://stats.example.com/stats", "201939", "2024-25");
/// assert!(url.starts_with("https://stats.example.com/stats/playerdashboardbygeneralsplits?"));
/// assert!(url.contains("PlayerID=201939"));
/// assert!(url.contains("Season=2024-25"));
/// assert!(url.contains("MeasureType=Advanced"));
/// ```
pub fn build_player_advanced_url(stats_base: &str, player_id: &str, season: &str) -> String {
    format!(
        "{stats_base}/playerdashboardbygeneralsplits?PlayerID={player_id}&Season={season}\
         &SeasonType=Regular%20Season&MeasureType=Advanced&PerMode=PerGame\
         &PlusMinus=N&PaceAdjust=N&Rank=N&LastNGames=0&Month=0&OpponentTeamID=0\
         &Period=0&LeagueID={LEAGUE_ID}"
    )
}

/// Builds the shot chart query for a player and season.
pub fn build_shot_chart_url(stats_base: &str, player_id: &str, season: &str) -> String {
    format!(
        "{stats_base}/shotchartdetail?PlayerID={player_id}&Season={season}\
         &SeasonType=Regular%20Season&TeamID=0&ContextMeasure=FGA&LastNGames=0\
         &Month=0&OpponentTeamID=0&Period=0&LeagueID={LEAGUE_ID}"
    )
}

/// Builds the league-wide team stats table query for a season.
///
/// `measure` selects the column family: `Base` carries per-game box totals
/// and shooting percentages, `Advanced` carries the ratings.
///
/// # Example
/// ```
/// use nba_gateway::data_fetcher::api::build_league_team_stats_url;
///
/// let url = build_league_team_stats_url("https://stats.example.com/stats", "2024-25", "Base");
/// assert!(url.contains("/leaguedashteamstats?Season=2024-25"));
/// assert!(url.contains("MeasureType=Base"));
/// ```
pub fn build_league_team_stats_url(stats_base: &str, season: &str, measure: &str) -> String {
    format!(
        "{stats_base}/leaguedashteamstats?Season={season}&SeasonType=Regular%20Season\
         &MeasureType={measure}&PerMode=PerGame&PlusMinus=N&PaceAdjust=N&Rank=N\
         &LastNGames=0&Month=0&OpponentTeamID=0&Period=0&LeagueID={LEAGUE_ID}"
    )
}

/// Builds the game finder query for a single calendar day (`MM/DD/YYYY`).
pub fn build_game_finder_by_date_url(stats_base: &str, date: &str) -> String {
    format!("{stats_base}/leaguegamefinder?DateFrom={date}&DateTo={date}&LeagueID={LEAGUE_ID}")
}

/// Builds the game finder query for a whole season.
pub fn build_game_finder_by_season_url(stats_base: &str, season: &str) -> String {
    format!("{stats_base}/leaguegamefinder?Season={season}&LeagueID={LEAGUE_ID}")
}

/// Builds the player directory query.
pub fn build_all_players_url(stats_base: &str, season: &str) -> String {
    format!(
        "{stats_base}/commonallplayers?LeagueID={LEAGUE_ID}&Season={season}&IsOnlyCurrentSeason=0"
    )
}

/// Builds the team directory query.
pub fn build_all_teams_url(stats_base: &str) -> String {
    format!("{stats_base}/commonteamyears?LeagueID={LEAGUE_ID}")
}

/// Builds the team details query.
pub fn build_team_details_url(stats_base: &str, team_id: &str) -> String {
    format!("{stats_base}/teamdetails?TeamID={team_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIVE: &str = "https://cdn.example.com/live";
    const STATS: &str = "https://stats.example.com/stats";

    #[test]
    fn test_live_urls() {
        assert_eq!(
            build_playbyplay_url(LIVE, "0022400061"),
            "https://cdn.example.com/live/playbyplay/playbyplay_0022400061.json"
        );
        assert_eq!(
            build_boxscore_url(LIVE, "1"),
            "https://cdn.example.com/live/boxscore/boxscore_1.json"
        );
    }

    #[test]
    fn test_stats_urls_carry_their_parameters() {
        let url = build_shot_chart_url(STATS, "1629029", "2023-24");
        assert!(url.starts_with("https://stats.example.com/stats/shotchartdetail?"));
        assert!(url.contains("PlayerID=1629029"));
        assert!(url.contains("Season=2023-24"));

        let url = build_league_team_stats_url(STATS, "2024-25", "Advanced");
        assert!(url.contains("/leaguedashteamstats?Season=2024-25"));
        assert!(url.contains("MeasureType=Advanced"));

        let url = build_game_finder_by_date_url(STATS, "01/15/2025");
        assert!(url.contains("DateFrom=01/15/2025&DateTo=01/15/2025"));

        assert_eq!(
            build_team_details_url(STATS, "1610612744"),
            "https://stats.example.com/stats/teamdetails?TeamID=1610612744"
        );
        assert!(build_player_career_url(STATS, "2544").contains("PlayerID=2544"));
        assert!(build_all_players_url(STATS, "2024-25").contains("Season=2024-25"));
        assert!(build_all_teams_url(STATS).ends_with("/commonteamyears?LeagueID=00"));
        assert!(build_game_finder_by_season_url(STATS, "2023-24").contains("Season=2023-24"));
    }

    #[test]
    fn test_multiline_urls_have_no_whitespace() {
        for url in [
            build_player_advanced_url(STATS, "1", "2024-25"),
            build_shot_chart_url(STATS, "1", "2024-25"),
            build_league_team_stats_url(STATS, "2024-25", "Base"),
        ] {
            assert!(!url.contains(' '), "{url}");
        }
    }
}
