//! NBA statistics gateway
//!
//! Re-exposes the public NBA stats API and live data feeds as a small set of
//! stable JSON endpoints. Upstream payloads are normalized into fixed shapes
//! and cached in-process with per-category lifetimes.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use nba_gateway::clock::SystemClock;
//! use nba_gateway::data_fetcher::api::create_http_client_with_timeout;
//! use nba_gateway::data_fetcher::{Gateway, NbaApiClient, UpstreamEndpoints};
//! use nba_gateway::{AppError, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)
//!         .map_err(|e| AppError::config_error(e.to_string()))?;
//!     let upstream = NbaApiClient::new(client, UpstreamEndpoints::from_config(&config));
//!     let gateway = Gateway::new(Arc::new(upstream), Arc::new(SystemClock));
//!
//!     for game in gateway.live_games().await? {
//!         println!("{:?} {:?}-{:?}", game.game_id, game.home_score, game.away_score);
//!     }
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod server;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::{Gateway, NbaApiClient, Upstream, UpstreamEndpoints};
pub use error::AppError;
pub use server::{AppState, create_router};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
