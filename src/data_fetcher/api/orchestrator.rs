//! Request orchestration: validation, cache lookup, upstream fetch,
//! normalization and cache population for every gateway operation.

use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::date_logic::{format_stats_api_date, parse_game_date};
use super::season_utils::{current_season, previous_season, resolve_season};
use super::upstream::{TeamMeasure, Upstream, UpstreamRequest};
use crate::clock::Clock;
use crate::data_fetcher::cache::{
    CacheCategory, CacheStats, ResponseCache, create_advanced_key, create_current_season_key,
    create_live_key, create_play_by_play_key, create_shot_chart_key, create_team_stats_key,
};
use crate::data_fetcher::models::{
    BoxScore, CurrentSeason, GameSummary, HistoricalGame, PlayByPlayAction, PlayerAdvanced,
    ShotChart, TeamSeasonStats,
};
use crate::data_fetcher::processors::{
    normalize_box_score, normalize_game_finder, normalize_play_by_play, normalize_player_advanced,
    normalize_scoreboard, normalize_shot_chart, normalize_team_stats,
};
use crate::error::AppError;

/// Checks that a path identifier is a non-empty run of ASCII digits.
pub fn validate_numeric_id<'a>(kind: &str, id: &'a str) -> Result<&'a str, AppError> {
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::invalid_request(format!(
            "{kind} id '{id}' must contain only digits"
        )));
    }
    Ok(id)
}

/// Entry point for every gateway operation.
///
/// Owns the response cache and shares the clock with it, so cache freshness and
/// season resolution always agree on what "now" is.
pub struct Gateway {
    upstream: Arc<dyn Upstream>,
    cache: ResponseCache,
    clock: Arc<dyn Clock>,
}

impl Gateway {
    pub fn new(upstream: Arc<dyn Upstream>, clock: Arc<dyn Clock>) -> Self {
        Self {
            upstream,
            cache: ResponseCache::new(Arc::clone(&clock)),
            clock,
        }
    }

    fn today(&self) -> NaiveDate {
        self.clock.now().date_naive()
    }

    /// Returns the fresh cached value under `key`, or runs `load` and caches
    /// its result with the category's TTL.
    ///
    /// Errors are never cached. The cache lock is not held while `load` runs,
    /// so concurrent misses each fetch and the last write wins.
    async fn cached<T, F, Fut>(&self, category: CacheCategory, key: &str, load: F) -> Result<T, AppError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        if let Some(value) = self.cache.get(key).await {
            match serde_json::from_value::<T>(value) {
                Ok(hit) => {
                    debug!("Cache hit for {} ({})", key, category);
                    return Ok(hit);
                }
                Err(e) => warn!("Ignoring undecodable cache entry {}: {}", key, e),
            }
        }

        debug!("Cache miss for {} ({}), fetching from upstream", key, category);
        let fresh = load().await?;
        match serde_json::to_value(&fresh) {
            Ok(value) => self.cache.set_for(category, key, value).await,
            Err(e) => warn!("Could not cache {}: {}", key, e),
        }
        Ok(fresh)
    }

    async fn fetch(&self, request: UpstreamRequest) -> Result<Value, AppError> {
        debug!("Requesting {} from upstream", request);
        self.upstream.fetch(&request).await
    }

    /// Today's scoreboard
    #[instrument(skip(self))]
    pub async fn live_games(&self) -> Result<Vec<GameSummary>, AppError> {
        self.cached(CacheCategory::Live, &create_live_key(), || async {
            let payload = self.fetch(UpstreamRequest::LiveScoreboard).await?;
            normalize_scoreboard(&payload)
        })
        .await
    }

    /// Box score of one game. Never cached.
    #[instrument(skip(self))]
    pub async fn box_score(&self, game_id: &str) -> Result<BoxScore, AppError> {
        let game_id = validate_numeric_id("game", game_id)?;
        let payload = self
            .fetch(UpstreamRequest::LiveBoxScore {
                game_id: game_id.to_string(),
            })
            .await?;
        normalize_box_score(&payload)
    }

    #[instrument(skip(self))]
    pub async fn play_by_play(&self, game_id: &str) -> Result<Vec<PlayByPlayAction>, AppError> {
        let game_id = validate_numeric_id("game", game_id)?;
        self.cached(
            CacheCategory::PlayByPlay,
            &create_play_by_play_key(game_id),
            || async {
                let payload = self
                    .fetch(UpstreamRequest::LivePlayByPlay {
                        game_id: game_id.to_string(),
                    })
                    .await?;
                normalize_play_by_play(&payload)
            },
        )
        .await
    }

    /// Games played on a `YYYYMMDD` date. Never cached.
    #[instrument(skip(self))]
    pub async fn games_on_date(&self, date: &str) -> Result<Vec<HistoricalGame>, AppError> {
        let date = parse_game_date(date)?;
        let payload = self
            .fetch(UpstreamRequest::GamesOnDate {
                date: format_stats_api_date(date),
            })
            .await?;
        let games = normalize_game_finder(&payload, Some(date))?;
        info!("Found {} game rows on {}", games.len(), date);
        Ok(games)
    }

    /// Games of a season, defaulting to the current one. Never cached.
    #[instrument(skip(self))]
    pub async fn games_in_season(
        &self,
        season: Option<&str>,
    ) -> Result<Vec<HistoricalGame>, AppError> {
        let season = resolve_season(season, self.today())?;
        let payload = self
            .fetch(UpstreamRequest::GamesInSeason {
                season: season.clone(),
            })
            .await?;
        let games = normalize_game_finder(&payload, None)?;
        info!("Found {} game rows in season {}", games.len(), season);
        Ok(games)
    }

    /// Raw player directory for a season
    #[instrument(skip(self))]
    pub async fn all_players(&self, season: Option<&str>) -> Result<Value, AppError> {
        let season = resolve_season(season, self.today())?;
        self.fetch(UpstreamRequest::AllPlayers { season }).await
    }

    /// Raw career stats of one player
    #[instrument(skip(self))]
    pub async fn player_career(&self, player_id: &str) -> Result<Value, AppError> {
        let player_id = validate_numeric_id("player", player_id)?;
        self.fetch(UpstreamRequest::PlayerCareer {
            player_id: player_id.to_string(),
        })
        .await
    }

    /// Advanced metrics of a player for the current season
    #[instrument(skip(self))]
    pub async fn player_advanced(&self, player_id: &str) -> Result<PlayerAdvanced, AppError> {
        let player_id = validate_numeric_id("player", player_id)?;
        let season = current_season(&self.today());
        self.cached(
            CacheCategory::Advanced,
            &create_advanced_key(player_id),
            || async {
                let payload = self
                    .fetch(UpstreamRequest::PlayerAdvanced {
                        player_id: player_id.to_string(),
                        season: season.clone(),
                    })
                    .await?;
                normalize_player_advanced(&payload, player_id, &season)
            },
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn shot_chart(
        &self,
        player_id: &str,
        season: Option<&str>,
    ) -> Result<ShotChart, AppError> {
        let player_id = validate_numeric_id("player", player_id)?;
        let season = resolve_season(season, self.today())?;
        self.cached(
            CacheCategory::ShotChart,
            &create_shot_chart_key(player_id, &season),
            || async {
                let payload = self
                    .fetch(UpstreamRequest::ShotChart {
                        player_id: player_id.to_string(),
                        season: season.clone(),
                    })
                    .await?;
                Ok(ShotChart {
                    player_id: player_id.to_string(),
                    season: season.clone(),
                    shots: normalize_shot_chart(&payload)?,
                })
            },
        )
        .await
    }

    /// Raw team directory
    #[instrument(skip(self))]
    pub async fn all_teams(&self) -> Result<Value, AppError> {
        self.fetch(UpstreamRequest::AllTeams).await
    }

    /// Raw details of one team
    #[instrument(skip(self))]
    pub async fn team_details(&self, team_id: &str) -> Result<Value, AppError> {
        let team_id = validate_numeric_id("team", team_id)?;
        self.fetch(UpstreamRequest::TeamDetails {
            team_id: team_id.to_string(),
        })
        .await
    }

    /// Season stats of one team.
    ///
    /// When the requested season has no data yet (early in a new season) the
    /// previous season is tried exactly once. The result carries the season
    /// that produced it and is cached under the requested season's key.
    #[instrument(skip(self))]
    pub async fn team_stats(
        &self,
        team_id: &str,
        season: Option<&str>,
    ) -> Result<TeamSeasonStats, AppError> {
        let team_id = validate_numeric_id("team", team_id)?;
        let season = resolve_season(season, self.today())?;
        self.cached(
            CacheCategory::TeamStats,
            &create_team_stats_key(team_id, &season),
            || async {
                match self.fetch_team_stats(team_id, &season).await {
                    Err(e) if e.is_no_data() => {
                        let Some(fallback) = previous_season(&season) else {
                            return Err(e);
                        };
                        info!(
                            "No team stats for {} in {}, falling back to {}",
                            team_id, season, fallback
                        );
                        self.fetch_team_stats(team_id, &fallback).await
                    }
                    other => other,
                }
            },
        )
        .await
    }

    async fn fetch_team_stats(
        &self,
        team_id: &str,
        season: &str,
    ) -> Result<TeamSeasonStats, AppError> {
        let table = |measure| UpstreamRequest::LeagueTeamStats {
            season: season.to_string(),
            measure,
        };
        let (base, advanced) = tokio::try_join!(
            self.fetch(table(TeamMeasure::Base)),
            self.fetch(table(TeamMeasure::Advanced)),
        )?;
        normalize_team_stats(&base, &advanced, team_id, season)
    }

    /// The season the gateway currently treats as current
    #[instrument(skip(self))]
    pub async fn current_season(&self) -> Result<CurrentSeason, AppError> {
        self.cached(CacheCategory::Meta, &create_current_season_key(), || async {
            Ok(CurrentSeason {
                season: current_season(&self.today()),
            })
        })
        .await
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.stats().await
    }
}
