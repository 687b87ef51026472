//! Resource handlers - reference material attached to tasks.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use fintrax_core::domain::Resource;
use fintrax_shared::ApiResponse;
use fintrax_shared::dto::{CreateResourceRequest, UpdateResourceRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

async fn fetch_owned(state: &AppState, identity: &Identity, id: Uuid) -> AppResult<Resource> {
    state
        .resources
        .get(id)
        .await?
        .filter(|resource| resource.user_id == identity.user_id)
        .ok_or_else(|| AppError::NotFound("Resource not found".to_string()))
}

/// POST /api/resource
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateResourceRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Resources hang off a task owned by the caller.
    let todo = state
        .todos
        .get(req.todo_id)
        .await?
        .filter(|todo| todo.user_id == identity.user_id)
        .ok_or_else(|| AppError::NotFound("Todo not found".to_string()))?;

    let mut resource = Resource::new(identity.user_id, todo.id, req.kind);
    resource.link = req.link;

    let saved = state.resources.insert(resource).await?;

    Ok(HttpResponse::Created().json(ApiResponse::created("Resource created successfully", saved)))
}

/// GET /api/resource
pub async fn list(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let resources = state.resources.list(identity.user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Resources fetched successfully", resources)))
}

/// PATCH /api/resource/{id}
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<UpdateResourceRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let mut resource = fetch_owned(&state, &identity, path.into_inner()).await?;

    if let Some(kind) = req.kind {
        resource.kind = kind;
    }
    if let Some(link) = req.link {
        resource.link = Some(link);
    }
    resource.updated_at = chrono::Utc::now();

    let saved = state.resources.update(resource).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Resource updated successfully", saved)))
}

/// DELETE /api/resource/{id}
pub async fn remove(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let resource = fetch_owned(&state, &identity, path.into_inner()).await?;
    state.resources.soft_delete(resource.id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message(200, "Resource deleted successfully")))
}
