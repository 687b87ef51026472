//! Project handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use fintrax_core::domain::Project;
use fintrax_shared::ApiResponse;
use fintrax_shared::dto::{CreateProjectRequest, UpdateProjectRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

async fn fetch_owned(state: &AppState, identity: &Identity, id: Uuid) -> AppResult<Project> {
    state
        .projects
        .get(id)
        .await?
        .filter(|project| project.user_id == identity.user_id)
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
}

/// POST /api/project
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateProjectRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.name.trim().is_empty() {
        return Err(AppError::BadRequest("Name is required".to_string()));
    }

    let mut project = Project::new(identity.user_id, req.name);
    if let Some(description) = req.description {
        project.description = description;
    }
    if let Some(color) = req.color {
        project.color = color;
    }
    project.cover_image = req.cover_image;

    let saved = state.projects.insert(project).await?;

    Ok(HttpResponse::Created().json(ApiResponse::created("Project created successfully", saved)))
}

/// GET /api/project
pub async fn list(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let projects = state.projects.list(identity.user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Projects fetched successfully", projects)))
}

/// GET /api/project/{id}
pub async fn get(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let project = fetch_owned(&state, &identity, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Project fetched successfully", project)))
}

/// PATCH /api/project/{id}
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<UpdateProjectRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let mut project = fetch_owned(&state, &identity, path.into_inner()).await?;

    if let Some(name) = req.name {
        project.name = name;
    }
    if let Some(description) = req.description {
        project.description = description;
    }
    if let Some(color) = req.color {
        project.color = color;
    }
    if let Some(cover_image) = req.cover_image {
        project.cover_image = Some(cover_image);
    }
    if let Some(status) = req.status {
        project.status = status;
    }
    project.updated_at = chrono::Utc::now();

    let saved = state.projects.update(project).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Project updated successfully", saved)))
}

/// DELETE /api/project/{id}
pub async fn remove(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let project = fetch_owned(&state, &identity, path.into_inner()).await?;
    state.projects.soft_delete(project.id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message(200, "Project deleted successfully")))
}
