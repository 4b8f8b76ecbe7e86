//! Normalized output shapes.
//!
//! These are the gateway's stable schema. Every field the upstream may omit is
//! an `Option` and serializes as `null` instead of failing the request.

pub mod live;
pub mod stats;

pub use live::{BoxScore, GameSummary, PlayByPlayAction, PlayerGameLine, TeamGameLine};
pub use stats::{
    CurrentSeason, HistoricalGame, PlayerAdvanced, ShotChart, ShotChartEntry, TeamSeasonStats,
};
