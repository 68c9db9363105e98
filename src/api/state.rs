use std::sync::Arc;

use crate::config::Config;
use crate::observability::Metrics;
use crate::store::FjallStore;

/// Shared state built once at startup and handed to every operation
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<FjallStore>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(config: Config, store: FjallStore) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            metrics: Arc::new(Metrics::new()),
        }
    }
}
