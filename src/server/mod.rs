//! HTTP surface: one JSON endpoint that stamps a photo, plus a health check.
pub mod config;
pub mod serializers;
pub mod urls;
pub mod views;

use crate::GeoStamper;
use std::sync::Arc;

pub use config::{ConfigError, ServerConfig};
pub use urls::router;

/// Shared by every handler; the stamper holds configuration only.
#[derive(Clone)]
pub struct AppState {
    pub stamper: Arc<GeoStamper>,
}

impl AppState {
    pub fn new(stamper: GeoStamper) -> Self {
        Self {
            stamper: Arc::new(stamper),
        }
    }
}
