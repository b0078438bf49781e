use catalog::Catalog;
use query_view::PriceBounds;

use crate::{core::app_config::StorefrontConfig, error_handler::AppResult};

/// Shared state for all HTTP handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: StorefrontConfig,
    /// Read-only product table every listing is derived from.
    pub catalog: Catalog,
}

impl AppState {
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        Self { config, catalog }
    }

    /// Load config from environment variables and use the built-in catalog.
    ///
    /// # Errors
    /// Invalid configuration, or a built-in catalog with duplicate ids.
    pub fn from_env() -> AppResult<Self> {
        let config = StorefrontConfig::from_env()?;
        let catalog = Catalog::storefront()?;
        Ok(Self::new(config, catalog))
    }

    pub fn bounds(&self) -> &PriceBounds {
        &self.config.bounds
    }
}
