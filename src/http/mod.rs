//! HTTP surface of the token service.

pub mod routes;

use crate::key_source::KeySource;
use std::sync::Arc;

pub use routes::router;

/// Shared state for every handler.
#[derive(Clone)]
pub struct AppState {
    pub key_source: Arc<dyn KeySource>,
}

impl AppState {
    pub fn new(key_source: impl KeySource + 'static) -> Self {
        Self {
            key_source: Arc::new(key_source),
        }
    }
}
