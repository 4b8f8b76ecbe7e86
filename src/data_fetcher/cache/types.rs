//! Cache data structures with TTL support

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::fmt;
use std::time::Duration;

use crate::constants::cache_ttl;

/// Class of requests sharing one TTL policy.
///
/// Box scores, career stats, team details and the player/team directories
/// have no category: they are always fetched fresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheCategory {
    Live,
    PlayByPlay,
    Advanced,
    ShotChart,
    TeamStats,
    Meta,
}

impl CacheCategory {
    pub const ALL: [CacheCategory; 6] = [
        CacheCategory::Live,
        CacheCategory::PlayByPlay,
        CacheCategory::Advanced,
        CacheCategory::ShotChart,
        CacheCategory::TeamStats,
        CacheCategory::Meta,
    ];

    pub fn ttl_seconds(self) -> u64 {
        match self {
            CacheCategory::Live => cache_ttl::LIVE_SECONDS,
            CacheCategory::PlayByPlay => cache_ttl::PLAY_BY_PLAY_SECONDS,
            CacheCategory::Advanced => cache_ttl::ADVANCED_SECONDS,
            CacheCategory::ShotChart => cache_ttl::SHOT_CHART_SECONDS,
            CacheCategory::TeamStats => cache_ttl::TEAM_STATS_SECONDS,
            CacheCategory::Meta => cache_ttl::META_SECONDS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CacheCategory::Live => "live",
            CacheCategory::PlayByPlay => "playbyplay",
            CacheCategory::Advanced => "advanced",
            CacheCategory::ShotChart => "shotchart",
            CacheCategory::TeamStats => "team_stats",
            CacheCategory::Meta => "meta",
        }
    }
}

impl fmt::Display for CacheCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One normalized result stored under its cache key
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub value: Value,
    pub inserted_at: DateTime<Utc>,
    pub ttl_seconds: u64,
}

impl CacheEntry {
    pub fn new(value: Value, inserted_at: DateTime<Utc>, ttl_seconds: u64) -> Self {
        Self {
            value,
            inserted_at,
            ttl_seconds,
        }
    }

    /// Age of the entry at `now`. A clock that stepped backwards yields zero.
    pub fn age_at(&self, now: DateTime<Utc>) -> Duration {
        now.signed_duration_since(self.inserted_at)
            .to_std()
            .unwrap_or_default()
    }

    /// An entry is fresh while `now - inserted_at < ttl`.
    pub fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        self.age_at(now) < Duration::from_secs(self.ttl_seconds)
    }
}
