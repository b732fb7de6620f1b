pub mod health;
pub mod palette;
pub mod render;
pub mod sessions;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Editor sessions
        .route("/api/v1/sessions", post(sessions::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(sessions::handle_get_session).delete(sessions::handle_delete_session),
        )
        .route("/api/v1/sessions/:id/active", put(sessions::handle_set_active))
        .route(
            "/api/v1/sessions/:id/sections/:section",
            put(sessions::handle_replace_section),
        )
        .route(
            "/api/v1/sessions/:id/sections/:section/items",
            post(sessions::handle_add_item),
        )
        .route("/api/v1/sessions/:id/edits", post(sessions::handle_apply_edit))
        .route(
            "/api/v1/sessions/:id/json",
            get(sessions::handle_get_json).put(sessions::handle_edit_json),
        )
        .route(
            "/api/v1/sessions/:id/json/apply",
            post(sessions::handle_apply_json),
        )
        .route("/api/v1/sessions/:id/import", post(sessions::handle_import))
        .route("/api/v1/sessions/:id/export", get(sessions::handle_export))
        .route(
            "/api/v1/sessions/:id/preview/:theme",
            get(sessions::handle_preview),
        )
        .route("/api/v1/sessions/:id/console", post(sessions::handle_console))
        .route("/api/v1/sessions/:id/retro", post(sessions::handle_retro_key))
        // Theme palette
        .route(
            "/api/v1/palette",
            get(palette::handle_get_palette).delete(palette::handle_reset_palette),
        )
        .route("/api/v1/palette/css", get(palette::handle_palette_css))
        .route("/api/v1/palette/:variable", put(palette::handle_set_color))
        // Public renders
        .route("/render/:theme/:gist_id", get(render::handle_render))
        .route("/cv/:gist_id", get(render::handle_console_cv))
        .route("/:theme/:gist_id", get(render::handle_render))
        .with_state(state)
}
