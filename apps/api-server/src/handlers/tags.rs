//! Tag handlers, including todo-tag assignment.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use fintrax_core::domain::{Tag, TodoTag};
use fintrax_shared::ApiResponse;
use fintrax_shared::dto::{CreateTagRequest, TagAssignmentRequest, UpdateTagRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

async fn fetch_owned(state: &AppState, identity: &Identity, id: Uuid) -> AppResult<Tag> {
    state
        .tags
        .get(id)
        .await?
        .filter(|tag| tag.user_id == identity.user_id)
        .ok_or_else(|| AppError::NotFound("Tag not found".to_string()))
}

/// POST /api/tag
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateTagRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.name.trim().is_empty() {
        return Err(AppError::BadRequest("Name is required".to_string()));
    }

    let mut tag = Tag::new(identity.user_id, req.name);
    if let Some(color) = req.color {
        tag.color = color;
    }

    let saved = state.tags.insert(tag).await?;

    Ok(HttpResponse::Created().json(ApiResponse::created("Tag created successfully", saved)))
}

/// GET /api/tag
pub async fn list(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let tags = state.tags.list(identity.user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Tags fetched successfully", tags)))
}

/// PATCH /api/tag/{id}
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<UpdateTagRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let mut tag = fetch_owned(&state, &identity, path.into_inner()).await?;

    if let Some(name) = req.name {
        tag.name = name;
    }
    if let Some(color) = req.color {
        tag.color = color;
    }
    tag.updated_at = chrono::Utc::now();

    let saved = state.tags.update(tag).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Tag updated successfully", saved)))
}

/// DELETE /api/tag/{id}
pub async fn remove(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let tag = fetch_owned(&state, &identity, path.into_inner()).await?;
    state.tags.soft_delete(tag.id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message(200, "Tag deleted successfully")))
}

/// POST /api/tag/attach
pub async fn attach(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<TagAssignmentRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Both ends of the association must exist and belong to the caller.
    let todo = state
        .todos
        .get(req.todo_id)
        .await?
        .filter(|todo| todo.user_id == identity.user_id)
        .ok_or_else(|| AppError::NotFound("Todo not found".to_string()))?;
    let tag = fetch_owned(&state, &identity, req.tag_id).await?;

    let existing = state.todo_tags.list(identity.user_id).await?;
    if existing
        .iter()
        .any(|link| link.todo_id == todo.id && link.tag_id == tag.id)
    {
        return Err(AppError::Conflict("Tag already attached".to_string()));
    }

    let link = TodoTag::new(identity.user_id, todo.id, tag.id);
    let saved = state.todo_tags.insert(link).await?;

    Ok(HttpResponse::Created().json(ApiResponse::created("Tag attached successfully", saved)))
}

/// POST /api/tag/detach
pub async fn detach(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<TagAssignmentRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let existing = state.todo_tags.list(identity.user_id).await?;
    let link = existing
        .iter()
        .find(|link| link.todo_id == req.todo_id && link.tag_id == req.tag_id)
        .ok_or_else(|| AppError::NotFound("Tag assignment not found".to_string()))?;

    state.todo_tags.soft_delete(link.id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message(200, "Tag detached successfully")))
}
