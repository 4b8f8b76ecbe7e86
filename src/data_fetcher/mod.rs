pub mod api;
pub mod cache;
pub mod models;
pub mod processors;

pub use api::{Gateway, NbaApiClient, TeamMeasure, Upstream, UpstreamEndpoints, UpstreamRequest};
pub use cache::{CacheCategory, CacheStats, ResponseCache};
