//! Upstream data provider adapter

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::fmt;

use super::fetch_utils::fetch_json;
use super::urls::*;
use crate::config::Config;
use crate::error::AppError;

/// Column family of the league team stats table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeamMeasure {
    /// Per-game box totals and shooting percentages
    Base,
    /// Offensive, defensive and net ratings
    Advanced,
}

impl TeamMeasure {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamMeasure::Base => "Base",
            TeamMeasure::Advanced => "Advanced",
        }
    }
}

/// One logical upstream call: which resource, with which parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UpstreamRequest {
    LiveScoreboard,
    LiveBoxScore { game_id: String },
    LivePlayByPlay { game_id: String },
    PlayerCareer { player_id: String },
    PlayerAdvanced { player_id: String, season: String },
    ShotChart { player_id: String, season: String },
    LeagueTeamStats { season: String, measure: TeamMeasure },
    /// `date` is already in the stats API's `MM/DD/YYYY` format
    GamesOnDate { date: String },
    GamesInSeason { season: String },
    AllPlayers { season: String },
    AllTeams,
    TeamDetails { team_id: String },
}

impl fmt::Display for UpstreamRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamRequest::LiveScoreboard => write!(f, "live scoreboard"),
            UpstreamRequest::LiveBoxScore { game_id } => write!(f, "box score {game_id}"),
            UpstreamRequest::LivePlayByPlay { game_id } => write!(f, "play-by-play {game_id}"),
            UpstreamRequest::PlayerCareer { player_id } => write!(f, "career {player_id}"),
            UpstreamRequest::PlayerAdvanced { player_id, season } => {
                write!(f, "advanced {player_id} {season}")
            }
            UpstreamRequest::ShotChart { player_id, season } => {
                write!(f, "shot chart {player_id} {season}")
            }
            UpstreamRequest::LeagueTeamStats { season, measure } => {
                write!(f, "team stats {season} ({})", measure.as_str())
            }
            UpstreamRequest::GamesOnDate { date } => write!(f, "games on {date}"),
            UpstreamRequest::GamesInSeason { season } => write!(f, "games in {season}"),
            UpstreamRequest::AllPlayers { season } => write!(f, "all players {season}"),
            UpstreamRequest::AllTeams => write!(f, "all teams"),
            UpstreamRequest::TeamDetails { team_id } => write!(f, "team details {team_id}"),
        }
    }
}

/// Source of raw upstream JSON.
///
/// Implementations perform exactly one attempt per call and report every
/// failure as [`AppError::UpstreamUnavailable`].
#[async_trait]
pub trait Upstream: Send + Sync {
    async fn fetch(&self, request: &UpstreamRequest) -> Result<Value, AppError>;
}

/// Base URLs of the two upstream services
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamEndpoints {
    pub stats_base: String,
    pub live_base: String,
}

impl UpstreamEndpoints {
    pub fn from_config(config: &Config) -> Self {
        Self {
            stats_base: config.stats_api_base.clone(),
            live_base: config.live_api_base.clone(),
        }
    }

    /// Full URL for a logical request
    pub fn url_for(&self, request: &UpstreamRequest) -> String {
        let stats = self.stats_base.as_str();
        let live = self.live_base.as_str();
        match request {
            UpstreamRequest::LiveScoreboard => build_scoreboard_url(live),
            UpstreamRequest::LiveBoxScore { game_id } => build_boxscore_url(live, game_id),
            UpstreamRequest::LivePlayByPlay { game_id } => build_playbyplay_url(live, game_id),
            UpstreamRequest::PlayerCareer { player_id } => {
                build_player_career_url(stats, player_id)
            }
            UpstreamRequest::PlayerAdvanced { player_id, season } => {
                build_player_advanced_url(stats, player_id, season)
            }
            UpstreamRequest::ShotChart { player_id, season } => {
                build_shot_chart_url(stats, player_id, season)
            }
            UpstreamRequest::LeagueTeamStats { season, measure } => {
                build_league_team_stats_url(stats, season, measure.as_str())
            }
            UpstreamRequest::GamesOnDate { date } => build_game_finder_by_date_url(stats, date),
            UpstreamRequest::GamesInSeason { season } => {
                build_game_finder_by_season_url(stats, season)
            }
            UpstreamRequest::AllPlayers { season } => build_all_players_url(stats, season),
            UpstreamRequest::AllTeams => build_all_teams_url(stats),
            UpstreamRequest::TeamDetails { team_id } => build_team_details_url(stats, team_id),
        }
    }
}

/// Upstream adapter backed by the public stats API and live data CDN
#[derive(Debug, Clone)]
pub struct NbaApiClient {
    client: Client,
    endpoints: UpstreamEndpoints,
}

impl NbaApiClient {
    pub fn new(client: Client, endpoints: UpstreamEndpoints) -> Self {
        Self { client, endpoints }
    }

    pub fn endpoints(&self) -> &UpstreamEndpoints {
        &self.endpoints
    }
}

#[async_trait]
impl Upstream for NbaApiClient {
    async fn fetch(&self, request: &UpstreamRequest) -> Result<Value, AppError> {
        let url = self.endpoints.url_for(request);
        fetch_json(&self.client, &url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn endpoints_for(uri: &str) -> UpstreamEndpoints {
        UpstreamEndpoints {
            stats_base: format!("{uri}/stats"),
            live_base: format!("{uri}/live"),
        }
    }

    #[test]
    fn test_endpoints_from_config() {
        let config = Config::default();
        let endpoints = UpstreamEndpoints::from_config(&config);
        assert_eq!(endpoints.stats_base, config.stats_api_base);
        assert_eq!(endpoints.live_base, config.live_api_base);
    }

    #[test]
    fn test_url_routing_by_request_kind() {
        let endpoints = endpoints_for("http://up");
        assert_eq!(
            endpoints.url_for(&UpstreamRequest::LiveScoreboard),
            "http://up/live/scoreboard/todaysScoreboard_00.json"
        );
        assert!(
            endpoints
                .url_for(&UpstreamRequest::TeamDetails {
                    team_id: "1610612744".into()
                })
                .starts_with("http://up/stats/teamdetails")
        );
    }

    #[test]
    fn test_request_display_names_parameters() {
        let request = UpstreamRequest::ShotChart {
            player_id: "201939".into(),
            season: "2024-25".into(),
        };
        assert_eq!(request.to_string(), "shot chart 201939 2024-25");
    }

    #[tokio::test]
    async fn test_client_fetches_stats_query() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stats/leaguedashteamstats"))
            .and(query_param("Season", "2024-25"))
            .and(query_param("MeasureType", "Base"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"resultSets": []})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = NbaApiClient::new(
            create_test_http_client(),
            endpoints_for(&mock_server.uri()),
        );
        let value = client
            .fetch(&UpstreamRequest::LeagueTeamStats {
                season: "2024-25".into(),
                measure: TeamMeasure::Base,
            })
            .await
            .unwrap();
        assert_eq!(value, json!({"resultSets": []}));
    }

    #[tokio::test]
    async fn test_stats_request_carries_stats_headers() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stats/shotchartdetail"))
            .and(header("x-nba-stats-origin", "stats"))
            .and(header("x-nba-stats-token", "true"))
            .and(header("referer", "https://www.nba.com/"))
            .and(header("origin", "https://www.nba.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"resultSets": []})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = NbaApiClient::new(
            create_test_http_client(),
            endpoints_for(&mock_server.uri()),
        );
        let request = UpstreamRequest::ShotChart {
            player_id: "201939".into(),
            season: "2024-25".into(),
        };
        assert!(client.fetch(&request).await.is_ok());

        let received = mock_server.received_requests().await.unwrap();
        let agent = received[0].headers["user-agent"].to_str().unwrap();
        assert!(agent.starts_with("Mozilla/5.0"));
        assert!(agent.contains("Chrome/"));
    }
}
