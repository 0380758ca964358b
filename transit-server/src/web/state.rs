//! Shared application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedStopCatalog;
use crate::directions::DirectionsClient;
use crate::mbta::MbtaClient;
use crate::speech::SpeechClient;

/// State shared across request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Directions provider client
    pub directions: Arc<DirectionsClient>,

    /// MBTA client for the pass-through endpoints
    pub mbta: Arc<MbtaClient>,

    /// Cached stop catalog backing station-name resolution
    pub catalog: Arc<CachedStopCatalog>,

    /// Text-to-speech client
    pub speech: Arc<SpeechClient>,
}

impl AppState {
    /// Bundle the clients into shared state.
    pub fn new(
        directions: DirectionsClient,
        mbta: MbtaClient,
        catalog: CachedStopCatalog,
        speech: SpeechClient,
    ) -> Self {
        Self {
            directions: Arc::new(directions),
            mbta: Arc::new(mbta),
            catalog: Arc::new(catalog),
            speech: Arc::new(speech),
        }
    }
}
