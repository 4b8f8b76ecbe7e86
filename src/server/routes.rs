use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::Uri,
    routing::get,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::trace::TraceLayer;
use tracing::debug;

use super::AppState;
use crate::data_fetcher::CacheStats;
use crate::data_fetcher::models::{
    BoxScore, CurrentSeason, GameSummary, HistoricalGame, PlayByPlayAction, PlayerAdvanced,
    PlayerGameLine, ShotChart, TeamGameLine, TeamSeasonStats,
};
use crate::error::AppError;
use crate::{NAME, VERSION};

type ApiResult<T> = Result<Json<T>, AppError>;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/live", get(live_games))
        .route("/live/:game_id", get(box_score))
        .route("/games", get(games))
        .route("/games/:game_id", get(box_score))
        .route("/games/:game_id/playbyplay", get(play_by_play))
        .route("/games/:game_id/players", get(game_players))
        .route("/games/:game_id/teams", get(game_teams))
        .route("/players", get(all_players))
        .route("/players/:player_id", get(player_career))
        .route("/players/:player_id/advanced", get(player_advanced))
        .route("/players/:player_id/shotchart", get(shot_chart))
        .route("/teams", get(all_teams))
        .route("/teams/:team_id", get(team_details))
        .route("/teams/:team_id/stats", get(team_stats))
        .route("/meta/current-season", get(current_season))
        .fallback(unknown_route)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `?season=` and `?date=` parameters. Empty values count as absent.
#[derive(Debug, Default, Deserialize)]
struct GatewayQuery {
    date: Option<String>,
    season: Option<String>,
}

impl GatewayQuery {
    fn date(&self) -> Option<&str> {
        self.date.as_deref().filter(|d| !d.is_empty())
    }

    fn season(&self) -> Option<&str> {
        self.season.as_deref().filter(|s| !s.is_empty())
    }
}

#[derive(Serialize)]
struct IndexResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    uptime_seconds: u64,
    cache: CacheStats,
}

#[derive(Serialize)]
struct LiveGamesResponse {
    games: Vec<GameSummary>,
}

#[derive(Serialize)]
struct PlayByPlayResponse {
    game_id: String,
    actions: Vec<PlayByPlayAction>,
}

#[derive(Serialize)]
struct GamePlayersResponse {
    game_id: String,
    players: Vec<PlayerGameLine>,
}

#[derive(Serialize)]
struct GameTeamsResponse {
    game_id: String,
    teams: Vec<TeamGameLine>,
}

/// Game history either for one day or for one season
#[derive(Serialize)]
#[serde(untagged)]
enum GamesResponse {
    OnDate {
        date: String,
        games: Vec<HistoricalGame>,
    },
    InSeason {
        season: String,
        games: Vec<HistoricalGame>,
    },
}

async fn index(State(state): State<AppState>) -> Json<IndexResponse> {
    Json(IndexResponse {
        status: "ok",
        service: NAME,
        version: VERSION,
        uptime_seconds: state.start_time.elapsed().as_secs(),
        cache: state.gateway.cache_stats().await,
    })
}

async fn live_games(State(state): State<AppState>) -> ApiResult<LiveGamesResponse> {
    let games = state.gateway.live_games().await?;
    Ok(Json(LiveGamesResponse { games }))
}

async fn box_score(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> ApiResult<BoxScore> {
    Ok(Json(state.gateway.box_score(&game_id).await?))
}

async fn play_by_play(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> ApiResult<PlayByPlayResponse> {
    let actions = state.gateway.play_by_play(&game_id).await?;
    Ok(Json(PlayByPlayResponse { game_id, actions }))
}

async fn game_players(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> ApiResult<GamePlayersResponse> {
    let box_score = state.gateway.box_score(&game_id).await?;
    Ok(Json(GamePlayersResponse {
        game_id,
        players: box_score.players,
    }))
}

async fn game_teams(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> ApiResult<GameTeamsResponse> {
    let box_score = state.gateway.box_score(&game_id).await?;
    Ok(Json(GameTeamsResponse {
        game_id,
        teams: vec![box_score.home_team, box_score.away_team],
    }))
}

/// A date takes precedence over a season; with neither, the current season.
async fn games(
    State(state): State<AppState>,
    Query(query): Query<GatewayQuery>,
) -> ApiResult<GamesResponse> {
    if let Some(date) = query.date() {
        let games = state.gateway.games_on_date(date).await?;
        return Ok(Json(GamesResponse::OnDate {
            date: date.to_string(),
            games,
        }));
    }

    let season = match query.season() {
        Some(season) => season.to_string(),
        None => state.gateway.current_season().await?.season,
    };
    let games = state.gateway.games_in_season(Some(&season)).await?;
    Ok(Json(GamesResponse::InSeason { season, games }))
}

async fn all_players(
    State(state): State<AppState>,
    Query(query): Query<GatewayQuery>,
) -> ApiResult<Value> {
    Ok(Json(state.gateway.all_players(query.season()).await?))
}

async fn player_career(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> ApiResult<Value> {
    Ok(Json(state.gateway.player_career(&player_id).await?))
}

async fn player_advanced(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> ApiResult<PlayerAdvanced> {
    Ok(Json(state.gateway.player_advanced(&player_id).await?))
}

async fn shot_chart(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
    Query(query): Query<GatewayQuery>,
) -> ApiResult<ShotChart> {
    Ok(Json(
        state.gateway.shot_chart(&player_id, query.season()).await?,
    ))
}

async fn all_teams(State(state): State<AppState>) -> ApiResult<Value> {
    Ok(Json(state.gateway.all_teams().await?))
}

async fn team_details(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> ApiResult<Value> {
    Ok(Json(state.gateway.team_details(&team_id).await?))
}

async fn team_stats(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
    Query(query): Query<GatewayQuery>,
) -> ApiResult<TeamSeasonStats> {
    Ok(Json(
        state.gateway.team_stats(&team_id, query.season()).await?,
    ))
}

async fn current_season(State(state): State<AppState>) -> ApiResult<CurrentSeason> {
    Ok(Json(state.gateway.current_season().await?))
}

async fn unknown_route(uri: Uri) -> AppError {
    debug!("No route for {}", uri.path());
    AppError::not_found(format!("no route for {}", uri.path()))
}
