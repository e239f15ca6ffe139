//! Calendar note API routes

use super::{parse_date, parse_user_id};
use crate::error::ApiResult;
use crate::services::HistoryService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use nutriplan_shared::types::{DateRangeQuery, NoteResponse, NotesResponse, UpsertNoteRequest};

/// Create note routes, nested under `/users`
pub fn note_routes() -> Router<AppState> {
    Router::new()
        .route("/:user_id/notes", get(list_notes))
        .route(
            "/:user_id/notes/:date",
            get(get_note).put(upsert_note).delete(delete_note),
        )
}

/// PUT /api/v1/users/:user_id/notes/:date - Create or replace a day's note
async fn upsert_note(
    State(state): State<AppState>,
    Path((user_id, date)): Path<(String, String)>,
    Json(req): Json<UpsertNoteRequest>,
) -> ApiResult<Json<NoteResponse>> {
    let user_id = parse_user_id(&user_id)?;
    let date = parse_date(&date)?;
    let note = HistoryService::upsert_note(
        state.history(),
        &state.config().history,
        user_id,
        date,
        req.text,
    )
    .await?;
    Ok(Json(note))
}

/// GET /api/v1/users/:user_id/notes/:date
async fn get_note(
    State(state): State<AppState>,
    Path((user_id, date)): Path<(String, String)>,
) -> ApiResult<Json<NoteResponse>> {
    let user_id = parse_user_id(&user_id)?;
    let date = parse_date(&date)?;
    Ok(Json(HistoryService::get_note(state.history(), user_id, date).await?))
}

/// DELETE /api/v1/users/:user_id/notes/:date
async fn delete_note(
    State(state): State<AppState>,
    Path((user_id, date)): Path<(String, String)>,
) -> ApiResult<StatusCode> {
    let user_id = parse_user_id(&user_id)?;
    let date = parse_date(&date)?;
    HistoryService::delete_note(state.history(), user_id, date).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/users/:user_id/notes - Notes in a date range
async fn list_notes(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<DateRangeQuery>,
) -> ApiResult<Json<NotesResponse>> {
    let user_id = parse_user_id(&user_id)?;
    let notes =
        HistoryService::list_notes(state.history(), &state.config().history, user_id, &query)
            .await?;
    Ok(Json(notes))
}
