use std::sync::Arc;

use crate::catalog::FoodCatalog;
use crate::config::Config;

/// Shared, immutable request state.
pub struct AppState {
    pub catalog: FoodCatalog,
    pub config: Config,
}

impl AppState {
    pub fn new(catalog: FoodCatalog, config: Config) -> Arc<Self> {
        Arc::new(Self { catalog, config })
    }
}
