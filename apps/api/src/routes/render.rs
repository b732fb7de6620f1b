use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::models::cv::CvDocument;
use crate::routes::sessions::parse_theme;
use crate::source::sample::sample_document;
use crate::state::AppState;
use crate::themes::Theme;

/// Gist id that renders the bundled sample without a fetch.
const SAMPLE_ID: &str = "sample";

#[derive(Deserialize, Default)]
pub struct RenderQuery {
    /// `sample` renders the bundled CV when the fetch fails.
    pub fallback: Option<String>,
}

async fn load_document(
    state: &AppState,
    gist_id: &str,
    query: &RenderQuery,
) -> Result<CvDocument, AppError> {
    if gist_id == SAMPLE_ID {
        return Ok(sample_document());
    }
    match state.source.fetch(gist_id).await {
        Ok(document) => Ok(document),
        Err(e) if query.fallback.as_deref() == Some(SAMPLE_ID) => {
            warn!("Fetching gist {gist_id} failed ({e}); rendering the sample CV");
            Ok(sample_document())
        }
        Err(e) => Err(e.into()),
    }
}

async fn render(
    state: &AppState,
    theme: Theme,
    gist_id: &str,
    query: &RenderQuery,
) -> Result<Html<String>, AppError> {
    debug!(theme = theme.as_str(), gist_id, "rendering public CV");
    let document = load_document(state, gist_id, query).await?;
    let palette = state.palette.snapshot().await;
    Ok(Html(theme.render(&document, &palette)))
}

/// GET /render/:theme/:gist_id and GET /:theme/:gist_id
pub async fn handle_render(
    State(state): State<AppState>,
    Path((theme, gist_id)): Path<(String, String)>,
    Query(query): Query<RenderQuery>,
) -> Result<Html<String>, AppError> {
    let theme = parse_theme(&theme)?;
    render(&state, theme, &gist_id, &query).await
}

/// GET /cv/:gist_id
pub async fn handle_console_cv(
    State(state): State<AppState>,
    Path(gist_id): Path<String>,
    Query(query): Query<RenderQuery>,
) -> Result<Html<String>, AppError> {
    render(&state, Theme::Console, &gist_id, &query).await
}
