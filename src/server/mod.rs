//! HTTP surface of the gateway

mod routes;

pub use routes::create_router;

use std::sync::Arc;
use std::time::Instant;

use crate::data_fetcher::Gateway;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<Gateway>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self {
            gateway,
            start_time: Instant::now(),
        }
    }
}
