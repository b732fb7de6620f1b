use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::editor::JsonViewState;
use crate::errors::AppError;
use crate::models::cv::{CvDocument, Section, SectionKey};
use crate::session::{ActiveView, EditorSession, SectionEdit, SessionView};
use crate::state::AppState;
use crate::themes::console::{run_command, ConsoleOutput};
use crate::themes::retro::{render_screen, Key, MenuState};
use crate::themes::Theme;

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct CreateSessionRequest {
    pub document: Option<CvDocument>,
}

#[derive(Deserialize)]
pub struct ActiveViewRequest {
    pub view: ActiveView,
}

#[derive(Serialize)]
pub struct AddItemResponse {
    /// Section length after the append; the new item sits at `len - 1`.
    pub len: usize,
    pub session: SessionView,
}

#[derive(Deserialize)]
pub struct JsonEditRequest {
    pub text: String,
}

#[derive(Deserialize)]
pub struct ImportRequest {
    pub gist_id: String,
}

#[derive(Deserialize)]
pub struct ConsoleRequest {
    pub command: String,
}

#[derive(Deserialize)]
pub struct RetroRequest {
    #[serde(default)]
    pub state: MenuState,
    pub key: Key,
}

#[derive(Serialize)]
pub struct RetroResponse {
    pub state: MenuState,
    pub html: String,
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

pub(crate) fn parse_section_key(name: &str) -> Result<SectionKey, AppError> {
    SectionKey::ALL
        .into_iter()
        .find(|key| key.as_str() == name)
        .ok_or_else(|| AppError::NotFound(format!("Unknown section '{name}'")))
}

pub(crate) fn parse_theme(name: &str) -> Result<Theme, AppError> {
    Theme::from_name(name).ok_or_else(|| AppError::NotFound(format!("Unknown theme '{name}'")))
}

/// Runs `f` against the session, mapping a missing session to 404.
async fn on_session<R>(
    state: &AppState,
    id: Uuid,
    f: impl FnOnce(&mut EditorSession) -> R,
) -> Result<R, AppError> {
    state
        .sessions
        .with_session(id, f)
        .await
        .ok_or_else(|| session_not_found(id))
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> (StatusCode, Json<SessionView>) {
    let view = state
        .sessions
        .create(req.document.unwrap_or_default())
        .await;
    (StatusCode::CREATED, Json(view))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    Ok(Json(on_session(&state, id, |s| s.view()).await?))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(session_not_found(id))
    }
}

/// PUT /api/v1/sessions/:id/active
pub async fn handle_set_active(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ActiveViewRequest>,
) -> Result<Json<SessionView>, AppError> {
    let view = on_session(&state, id, |s| {
        s.set_active(req.view);
        s.view()
    })
    .await?;
    Ok(Json(view))
}

/// PUT /api/v1/sessions/:id/sections/:section
pub async fn handle_replace_section(
    State(state): State<AppState>,
    Path((id, section)): Path<(Uuid, String)>,
    Json(value): Json<Value>,
) -> Result<Json<SessionView>, AppError> {
    let key = parse_section_key(&section)?;
    let section = Section::from_value(key, value)
        .map_err(|e| AppError::UnprocessableEntity(format!("Invalid {} section: {e}", key.as_str())))?;
    let view = on_session(&state, id, |s| {
        s.replace_section(section);
        s.view()
    })
    .await?;
    Ok(Json(view))
}

/// POST /api/v1/sessions/:id/sections/:section/items
pub async fn handle_add_item(
    State(state): State<AppState>,
    Path((id, section)): Path<(Uuid, String)>,
) -> Result<(StatusCode, Json<AddItemResponse>), AppError> {
    let key = parse_section_key(&section)?;
    let (len, session) = on_session(&state, id, |s| {
        s.add_item(key).map(|len| (len, s.view()))
    })
    .await??;
    Ok((StatusCode::CREATED, Json(AddItemResponse { len, session })))
}

/// POST /api/v1/sessions/:id/edits
pub async fn handle_apply_edit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(edit): Json<SectionEdit>,
) -> Result<Json<SessionView>, AppError> {
    let view = on_session(&state, id, |s| s.apply(edit).map(|_| s.view())).await??;
    Ok(Json(view))
}

/// GET /api/v1/sessions/:id/json
pub async fn handle_get_json(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JsonViewState>, AppError> {
    Ok(Json(on_session(&state, id, |s| s.json_state()).await?))
}

/// PUT /api/v1/sessions/:id/json
pub async fn handle_edit_json(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<JsonEditRequest>,
) -> Result<Json<JsonViewState>, AppError> {
    Ok(Json(on_session(&state, id, |s| s.edit_json(req.text)).await?))
}

/// POST /api/v1/sessions/:id/json/apply
pub async fn handle_apply_json(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let view = on_session(&state, id, |s| s.apply_json().map(|_| s.view())).await??;
    Ok(Json(view))
}

/// POST /api/v1/sessions/:id/import
///
/// The fetch runs without holding the session lock; the session is looked
/// up again afterwards in case it was dropped meanwhile.
pub async fn handle_import(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ImportRequest>,
) -> Result<Json<SessionView>, AppError> {
    on_session(&state, id, |_| ()).await?;
    let document = state.source.fetch(&req.gist_id).await?;
    let view = on_session(&state, id, |s| {
        s.replace_document(document);
        s.view()
    })
    .await?;
    info!("Imported gist {} into session {id}", req.gist_id);
    Ok(Json(view))
}

/// GET /api/v1/sessions/:id/export
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let text = on_session(&state, id, |s| s.export())
        .await?
        .map_err(|e| AppError::Internal(e.into()))?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"cv.json\""),
        ],
        text,
    ))
}

/// GET /api/v1/sessions/:id/preview/:theme
pub async fn handle_preview(
    State(state): State<AppState>,
    Path((id, theme)): Path<(Uuid, String)>,
) -> Result<Html<String>, AppError> {
    let theme = parse_theme(&theme)?;
    let document = on_session(&state, id, |s| s.document().clone()).await?;
    let palette = state.palette.snapshot().await;
    Ok(Html(theme.render(&document, &palette)))
}

/// POST /api/v1/sessions/:id/console
pub async fn handle_console(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ConsoleRequest>,
) -> Result<Json<ConsoleOutput>, AppError> {
    let output = on_session(&state, id, |s| run_command(s.document(), &req.command)).await?;
    Ok(Json(output))
}

/// POST /api/v1/sessions/:id/retro
pub async fn handle_retro_key(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<RetroRequest>,
) -> Result<Json<RetroResponse>, AppError> {
    let next = req.state.handle_key(req.key);
    let html = on_session(&state, id, |s| render_screen(s.document(), next)).await?;
    Ok(Json(RetroResponse { state: next, html }))
}
