use std::sync::Arc;

use crate::{openai::ImageBackend, resolver::RequestResolver};

/// Shared, read-only application state. Cloned into every actix worker.
#[derive(Clone)]
pub struct AppState {
    pub resolver: RequestResolver,
}

impl AppState {
    pub fn new(backend: Arc<dyn ImageBackend>) -> Self {
        Self {
            resolver: RequestResolver::new(backend),
        }
    }
}
