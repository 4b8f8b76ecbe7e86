//! Application-wide constants and configuration values
//!
//! This module centralizes the magic numbers: cache lifetimes, upstream column
//! offsets and default endpoints.

/// Default timeout for upstream HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 10;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 32;

/// Default address the gateway listens on
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8000";

/// Default base URL of the tabular stats provider
pub const DEFAULT_STATS_API_BASE: &str = "https://stats.nba.com/stats";

/// Default base URL of the live data CDN
pub const DEFAULT_LIVE_API_BASE: &str = "https://cdn.nba.com/static/json/liveData";

/// League identifier used by every stats query (NBA)
pub const LEAGUE_ID: &str = "00";

/// Cache TTL (Time To Live) values in seconds, one per cache category
pub mod cache_ttl {
    /// Today's scoreboard
    pub const LIVE_SECONDS: u64 = 30;

    /// Play-by-play feed of a single game
    pub const PLAY_BY_PLAY_SECONDS: u64 = 15;

    /// Player advanced splits (6 hours)
    pub const ADVANCED_SECONDS: u64 = 21_600;

    /// Player shot chart (24 hours)
    pub const SHOT_CHART_SECONDS: u64 = 86_400;

    /// League team stats table (6 hours)
    pub const TEAM_STATS_SECONDS: u64 = 21_600;

    /// Resolved current season (1 hour)
    pub const META_SECONDS: u64 = 3_600;
}

/// Positional column offsets into stats result sets.
///
/// Assumes the stats API column layout current as of the 2024-25 season. The
/// upstream carries no schema version, so a reordered table silently shifts
/// these values instead of failing.
pub mod columns {
    /// `playerdashboardbygeneralsplits` (MeasureType=Advanced), OverallPlayerDashboard row
    pub const ADV_USAGE_PCT: usize = 26;
    pub const ADV_TRUE_SHOOTING_PCT: usize = 27;
    pub const ADV_PIE: usize = 30;

    /// `shotchartdetail`, Shot_Chart_Detail row
    pub const SHOT_TYPE: usize = 9;
    pub const SHOT_LOC_X: usize = 17;
    pub const SHOT_LOC_Y: usize = 18;
    pub const SHOT_MADE_FLAG: usize = 20;
}

/// Month (1-based) in which a new season's aggregate stats become the default
pub const SEASON_ROLLOVER_MONTH: u32 = 3;

/// Environment variable names
pub mod env_vars {
    /// Listen address override
    pub const BIND: &str = "NBA_GATEWAY_BIND";

    /// Stats API base URL override
    pub const STATS_API_BASE: &str = "NBA_STATS_API_BASE";

    /// Live data base URL override
    pub const LIVE_API_BASE: &str = "NBA_LIVE_API_BASE";

    /// Upstream HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "NBA_GATEWAY_HTTP_TIMEOUT";

    /// Log file path override
    pub const LOG_FILE: &str = "NBA_GATEWAY_LOG_FILE";
}
