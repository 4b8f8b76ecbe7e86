//! Normalizers for the live data feeds (scoreboard, box score, play-by-play).

use serde_json::Value;
use tracing::debug;

use super::field_lookup::{f64_at, first_truthy_at, i64_at, json_i64, json_string, string_at};
use super::time_formatting::format_game_clock;
use crate::data_fetcher::models::{
    BoxScore, GameSummary, PlayByPlayAction, PlayerGameLine, TeamGameLine,
};
use crate::error::AppError;

const TEAM_NAME: &[&str] = &["/teamName", "/teamTricode"];
const TEAM_POINTS: &[&str] = &["/statistics/points", "/score"];
const TEAM_TURNOVERS: &[&str] = &["/statistics/turnovers", "/statistics/turnoversTotal"];
const PLAYER_NAME: &[&str] = &["/name", "/nameI", "/familyName"];

fn string_of(value: &Value, pointers: &[&str]) -> Option<String> {
    first_truthy_at(value, pointers).and_then(json_string)
}

fn i64_of(value: &Value, pointers: &[&str]) -> Option<i64> {
    first_truthy_at(value, pointers).and_then(json_i64)
}

/// Today's games from the live scoreboard.
pub fn normalize_scoreboard(payload: &Value) -> Result<Vec<GameSummary>, AppError> {
    let games = payload
        .pointer("/scoreboard/games")
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::upstream_malformed("scoreboard payload has no games list"))?;

    let summaries = games
        .iter()
        .map(|game| GameSummary {
            game_id: string_at(game, "/gameId"),
            status: string_at(game, "/gameStatusText"),
            home_team: string_of(game, &["/homeTeam/teamName", "/homeTeam/teamTricode"]),
            away_team: string_of(game, &["/awayTeam/teamName", "/awayTeam/teamTricode"]),
            home_score: i64_at(game, "/homeTeam/score"),
            away_score: i64_at(game, "/awayTeam/score"),
        })
        .collect::<Vec<_>>();

    debug!("Normalized {} scoreboard games", summaries.len());
    Ok(summaries)
}

fn team_line(team: &Value) -> TeamGameLine {
    TeamGameLine {
        team_id: i64_at(team, "/teamId"),
        name: string_of(team, TEAM_NAME),
        points: i64_of(team, TEAM_POINTS),
        rebounds: i64_at(team, "/statistics/reboundsTotal"),
        assists: i64_at(team, "/statistics/assists"),
        fg_pct: f64_at(team, "/statistics/fieldGoalsPercentage"),
        fg3_pct: f64_at(team, "/statistics/threePointersPercentage"),
        ft_pct: f64_at(team, "/statistics/freeThrowsPercentage"),
        steals: i64_at(team, "/statistics/steals"),
        blocks: i64_at(team, "/statistics/blocks"),
        turnovers: i64_of(team, TEAM_TURNOVERS),
    }
}

fn player_line(player: &Value, team: Option<&str>) -> PlayerGameLine {
    PlayerGameLine {
        player_id: i64_at(player, "/personId"),
        name: string_of(player, PLAYER_NAME),
        team: team.map(str::to_string),
        minutes: player
            .pointer("/statistics/minutes")
            .and_then(Value::as_str)
            .map(format_game_clock),
        points: i64_at(player, "/statistics/points"),
        rebounds: i64_at(player, "/statistics/reboundsTotal"),
        assists: i64_at(player, "/statistics/assists"),
        steals: i64_at(player, "/statistics/steals"),
        blocks: i64_at(player, "/statistics/blocks"),
        turnovers: i64_at(player, "/statistics/turnovers"),
    }
}

fn players_of(team: &Value) -> Vec<PlayerGameLine> {
    let tricode = team.get("teamTricode").and_then(Value::as_str);
    team.get("players")
        .and_then(Value::as_array)
        .map(|players| players.iter().map(|p| player_line(p, tricode)).collect())
        .unwrap_or_default()
}

/// Team and player lines of one game. Home players come before away players.
pub fn normalize_box_score(payload: &Value) -> Result<BoxScore, AppError> {
    let game = payload
        .get("game")
        .filter(|game| game.is_object())
        .ok_or_else(|| AppError::upstream_malformed("box score payload has no game object"))?;

    let home = game.get("homeTeam").unwrap_or(&Value::Null);
    let away = game.get("awayTeam").unwrap_or(&Value::Null);

    let mut players = players_of(home);
    players.extend(players_of(away));

    Ok(BoxScore {
        game_id: string_at(game, "/gameId"),
        status: string_at(game, "/gameStatusText"),
        home_team: team_line(home),
        away_team: team_line(away),
        players,
    })
}

/// All actions of one game in feed order.
pub fn normalize_play_by_play(payload: &Value) -> Result<Vec<PlayByPlayAction>, AppError> {
    let actions = payload
        .pointer("/game/actions")
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::upstream_malformed("play-by-play payload has no actions list"))?;

    Ok(actions
        .iter()
        .map(|action| PlayByPlayAction {
            clock: action
                .get("clock")
                .and_then(Value::as_str)
                .map(format_game_clock),
            period: i64_at(action, "/period"),
            team: string_at(action, "/teamTricode"),
            description: string_at(action, "/description"),
            home_score: i64_at(action, "/scoreHome"),
            away_score: i64_at(action, "/scoreAway"),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn box_score_payload() -> Value {
        json!({
            "game": {
                "gameId": "0022400500",
                "gameStatusText": "Final",
                "homeTeam": {
                    "teamId": 1610612738,
                    "teamName": "Celtics",
                    "teamTricode": "BOS",
                    "score": 118,
                    "statistics": {
                        "points": 118,
                        "reboundsTotal": 47,
                        "assists": 29,
                        "fieldGoalsPercentage": 0.512,
                        "threePointersPercentage": 0.41,
                        "freeThrowsPercentage": 0.8,
                        "steals": 8,
                        "blocks": 6,
                        "turnovers": 11
                    },
                    "players": [{
                        "personId": 1628369,
                        "name": "Jayson Tatum",
                        "nameI": "J. Tatum",
                        "statistics": {
                            "minutes": "PT36M12.00S",
                            "points": 31, "reboundsTotal": 9, "assists": 6,
                            "steals": 1, "blocks": 0, "turnovers": 3
                        }
                    }]
                },
                "awayTeam": {
                    "teamId": 1610612752,
                    "teamTricode": "NYK",
                    "score": 104,
                    "statistics": {"points": 0},
                    "players": [{"personId": 1628973, "nameI": "J. Brunson", "statistics": {}}]
                }
            }
        })
    }

    #[test]
    fn test_scoreboard_summaries() {
        let payload = json!({
            "scoreboard": {
                "games": [{
                    "gameId": "0022400500",
                    "gameStatusText": "Q3 5:12",
                    "homeTeam": {"teamName": "Celtics", "score": 80},
                    "awayTeam": {"teamTricode": "NYK", "score": 77}
                }]
            }
        });
        let games = normalize_scoreboard(&payload).unwrap();
        assert_eq!(
            games,
            vec![GameSummary {
                game_id: Some("0022400500".to_string()),
                status: Some("Q3 5:12".to_string()),
                home_team: Some("Celtics".to_string()),
                away_team: Some("NYK".to_string()),
                home_score: Some(80),
                away_score: Some(77),
            }]
        );
    }

    #[test]
    fn test_scoreboard_without_games_is_malformed() {
        let err = normalize_scoreboard(&json!({"scoreboard": {}})).unwrap_err();
        assert!(err.is_no_data());
    }

    #[test]
    fn test_scoreboard_with_no_games_today() {
        let games = normalize_scoreboard(&json!({"scoreboard": {"games": []}})).unwrap();
        assert!(games.is_empty());
    }

    #[test]
    fn test_box_score_team_lines() {
        let box_score = normalize_box_score(&box_score_payload()).unwrap();
        assert_eq!(box_score.game_id.as_deref(), Some("0022400500"));
        assert_eq!(box_score.home_team.points, Some(118));
        assert_eq!(box_score.home_team.fg_pct, Some(0.512));
        assert_eq!(box_score.home_team.turnovers, Some(11));
        // away team has no name and zero statistics points
        assert_eq!(box_score.away_team.name.as_deref(), Some("NYK"));
        assert_eq!(box_score.away_team.points, Some(104));
        assert_eq!(box_score.away_team.fg_pct, None);
        assert_eq!(box_score.away_team.steals, None);
    }

    #[test]
    fn test_box_score_player_lines() {
        let box_score = normalize_box_score(&box_score_payload()).unwrap();
        assert_eq!(box_score.players.len(), 2);

        let tatum = &box_score.players[0];
        assert_eq!(tatum.name.as_deref(), Some("Jayson Tatum"));
        assert_eq!(tatum.team.as_deref(), Some("BOS"));
        assert_eq!(tatum.minutes.as_deref(), Some("36:12"));
        assert_eq!(tatum.points, Some(31));

        let brunson = &box_score.players[1];
        assert_eq!(brunson.name.as_deref(), Some("J. Brunson"));
        assert_eq!(brunson.team.as_deref(), Some("NYK"));
        assert_eq!(brunson.points, None);
    }

    #[test]
    fn test_box_score_tolerates_missing_teams() {
        let box_score = normalize_box_score(&json!({"game": {"gameId": "1"}})).unwrap();
        assert!(box_score.players.is_empty());
        assert_eq!(box_score.home_team.points, None);
    }

    #[test]
    fn test_box_score_without_game_is_malformed() {
        assert!(normalize_box_score(&json!({"meta": {}})).is_err());
    }

    #[test]
    fn test_play_by_play_actions() {
        let payload = json!({
            "game": {
                "actions": [
                    {"clock": "PT11M42.00S", "period": 1, "teamTricode": "BOS",
                     "description": "Tatum 26' 3PT", "scoreHome": "3", "scoreAway": "0"},
                    {"clock": "PT11M20.00S", "period": 1, "description": "Timeout"}
                ]
            }
        });
        let actions = normalize_play_by_play(&payload).unwrap();
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].clock.as_deref(), Some("11:42"));
        assert_eq!(actions[0].home_score, Some(3));
        assert_eq!(actions[1].team, None);
        assert_eq!(actions[1].home_score, None);
    }

    #[test]
    fn test_play_by_play_without_actions_is_malformed() {
        assert!(normalize_play_by_play(&json!({"game": {}})).unwrap_err().is_no_data());
    }
}
