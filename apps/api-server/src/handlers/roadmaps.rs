//! Roadmap handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use fintrax_core::domain::Roadmap;
use fintrax_shared::ApiResponse;
use fintrax_shared::dto::{CreateRoadmapRequest, UpdateRoadmapRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

async fn fetch_owned(state: &AppState, identity: &Identity, id: Uuid) -> AppResult<Roadmap> {
    state
        .roadmaps
        .get(id)
        .await?
        .filter(|roadmap| roadmap.user_id == identity.user_id)
        .ok_or_else(|| AppError::NotFound("Roadmap not found".to_string()))
}

/// POST /api/roadmap
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateRoadmapRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.name.trim().is_empty() {
        return Err(AppError::BadRequest("Name is required".to_string()));
    }

    let mut roadmap = Roadmap::new(identity.user_id, req.name);
    roadmap.start_date = req.start_date;
    roadmap.end_date = req.end_date;

    let saved = state.roadmaps.insert(roadmap).await?;

    Ok(HttpResponse::Created().json(ApiResponse::created("Roadmap created successfully", saved)))
}

/// GET /api/roadmap
pub async fn list(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let roadmaps = state.roadmaps.list(identity.user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Roadmaps fetched successfully", roadmaps)))
}

/// GET /api/roadmap/{id}
pub async fn get(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let roadmap = fetch_owned(&state, &identity, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Roadmap fetched successfully", roadmap)))
}

/// PATCH /api/roadmap/{id}
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<UpdateRoadmapRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let mut roadmap = fetch_owned(&state, &identity, path.into_inner()).await?;

    if req.progress.is_some_and(|p| !(0.0..=100.0).contains(&p)) {
        return Err(AppError::BadRequest(
            "Progress must be between 0 and 100".to_string(),
        ));
    }

    if let Some(name) = req.name {
        roadmap.name = name;
    }
    if let Some(start_date) = req.start_date {
        roadmap.start_date = Some(start_date);
    }
    if let Some(end_date) = req.end_date {
        roadmap.end_date = Some(end_date);
    }
    if let Some(progress) = req.progress {
        roadmap.progress = progress;
    }
    if let Some(status) = req.status {
        roadmap.status = status;
    }
    roadmap.updated_at = chrono::Utc::now();

    let saved = state.roadmaps.update(roadmap).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Roadmap updated successfully", saved)))
}

/// DELETE /api/roadmap/{id}
pub async fn remove(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let roadmap = fetch_owned(&state, &identity, path.into_inner()).await?;
    state.roadmaps.soft_delete(roadmap.id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message(200, "Roadmap deleted successfully")))
}
