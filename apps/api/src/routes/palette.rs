use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::palette::PaletteEntry;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SetColorRequest {
    pub value: String,
}

/// GET /api/v1/palette
pub async fn handle_get_palette(State(state): State<AppState>) -> Json<Vec<PaletteEntry>> {
    Json(state.palette.snapshot().await.entries())
}

/// GET /api/v1/palette/css
pub async fn handle_palette_css(State(state): State<AppState>) -> impl IntoResponse {
    let css = state.palette.snapshot().await.css_block();
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], css)
}

/// PUT /api/v1/palette/:variable
pub async fn handle_set_color(
    State(state): State<AppState>,
    Path(variable): Path<String>,
    Json(req): Json<SetColorRequest>,
) -> Result<Json<Vec<PaletteEntry>>, AppError> {
    let palette = state.palette.set(&variable, &req.value).await?;
    info!("Palette {variable} set to {}", req.value);
    Ok(Json(palette.entries()))
}

/// DELETE /api/v1/palette
pub async fn handle_reset_palette(
    State(state): State<AppState>,
) -> Result<Json<Vec<PaletteEntry>>, AppError> {
    let palette = state.palette.reset().await?;
    info!("Palette reset to defaults");
    Ok(Json(palette.entries()))
}
