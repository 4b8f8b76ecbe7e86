pub mod date_logic;
pub mod fetch_utils;
pub mod http_client;
pub mod orchestrator;
pub mod season_utils;
pub mod upstream;
pub mod urls;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::create_http_client_with_timeout;
// Re-export the gateway and the upstream seam it depends on
pub use orchestrator::{Gateway, validate_numeric_id};
pub use upstream::{NbaApiClient, TeamMeasure, Upstream, UpstreamEndpoints, UpstreamRequest};
