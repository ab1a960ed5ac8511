use std::sync::Arc;

use core_rtx::{BaseUrlResolver, RobotsConfig};

/// Shared, read-only state for the robots.txt routes.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The resolved config for the running environment.
    pub config: Arc<RobotsConfig>,
    /// Fixed base URL for sitemaps. When `None`, the base comes from each request.
    pub resolver: Option<Arc<BaseUrlResolver>>,
}

impl AppState {
    /// Fails if `app_url` is given but is not a valid URL.
    pub fn new(config: RobotsConfig, app_url: Option<&str>) -> core_rtx::Result<Self> {
        let resolver = app_url.map(BaseUrlResolver::new).transpose()?.map(Arc::new);
        Ok(Self {
            config: Arc::new(config),
            resolver,
        })
    }
}
