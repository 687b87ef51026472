//! Note handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use fintrax_core::domain::Note;
use fintrax_shared::ApiResponse;
use fintrax_shared::dto::{CreateNoteRequest, UpdateNoteRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

async fn fetch_owned(state: &AppState, identity: &Identity, id: Uuid) -> AppResult<Note> {
    state
        .notes
        .get(id)
        .await?
        .filter(|note| note.user_id == identity.user_id)
        .ok_or_else(|| AppError::NotFound("Note not found".to_string()))
}

/// POST /api/note
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateNoteRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.title.trim().is_empty() {
        return Err(AppError::BadRequest("Title is required".to_string()));
    }

    let note = Note::new(identity.user_id, req.title, req.content.unwrap_or_default());
    let saved = state.notes.insert(note).await?;

    Ok(HttpResponse::Created().json(ApiResponse::created("Note created successfully", saved)))
}

/// GET /api/note
pub async fn list(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let notes = state.notes.list(identity.user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Notes fetched successfully", notes)))
}

/// GET /api/note/{id}
pub async fn get(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let note = fetch_owned(&state, &identity, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Note fetched successfully", note)))
}

/// PATCH /api/note/{id}
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<UpdateNoteRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let mut note = fetch_owned(&state, &identity, path.into_inner()).await?;

    if let Some(title) = req.title {
        note.title = title;
    }
    if let Some(content) = req.content {
        note.content = content;
    }
    note.updated_at = chrono::Utc::now();

    let saved = state.notes.update(note).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Note updated successfully", saved)))
}

/// DELETE /api/note/{id}
pub async fn remove(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let note = fetch_owned(&state, &identity, path.into_inner()).await?;
    state.notes.soft_delete(note.id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message(200, "Note deleted successfully")))
}
