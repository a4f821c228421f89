use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::{ctx::BaseParams, state::AppState, Result};

use super::{handlers, CreateNote, NotesQuery, UpdateNote};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/notes/", get(find_notes).post(create_note))
        .route(
            "/api/notes/{note_id}/",
            get(get_note).patch(update_note).delete(delete_note),
        )
        .with_state(state)
}

async fn find_notes(Query(query): Query<NotesQuery>, base: BaseParams) -> Result<impl IntoResponse> {
    handlers::find_notes(query, base).await.map(Json)
}

async fn create_note(base: BaseParams, Json(args): Json<CreateNote>) -> Result<impl IntoResponse> {
    handlers::create_note(args, base)
        .await
        .map(|r| (StatusCode::CREATED, Json(r)))
}

async fn get_note(Path(note_id): Path<Uuid>, base: BaseParams) -> Result<impl IntoResponse> {
    handlers::get_note(note_id, base).await.map(Json)
}

async fn update_note(
    Path(note_id): Path<Uuid>,
    base: BaseParams,
    Json(args): Json<UpdateNote>,
) -> Result<impl IntoResponse> {
    handlers::update_note(note_id, args, base).await.map(Json)
}

async fn delete_note(Path(note_id): Path<Uuid>, base: BaseParams) -> Result<impl IntoResponse> {
    handlers::delete_note(note_id, base).await.map(|_| StatusCode::NO_CONTENT)
}
