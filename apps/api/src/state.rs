use std::sync::Arc;

use crate::config::Config;
use crate::palette::PaletteStore;
use crate::session::SessionStore;
use crate::source::DocumentSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sessions: SessionStore,
    /// Where imports and public renders fetch documents from. Default: GistSource.
    pub source: Arc<dyn DocumentSource>,
    pub palette: Arc<PaletteStore>,
}
