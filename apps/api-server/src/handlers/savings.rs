//! Savings goal handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use fintrax_core::domain::SavingsGoal;
use fintrax_shared::ApiResponse;
use fintrax_shared::dto::{CreateSavingsRequest, UpdateSavingsRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

async fn fetch_owned(state: &AppState, identity: &Identity, id: Uuid) -> AppResult<SavingsGoal> {
    state
        .savings
        .get(id)
        .await?
        .filter(|goal| goal.user_id == identity.user_id)
        .ok_or_else(|| AppError::NotFound("Savings goal not found".to_string()))
}

/// POST /api/savings
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateSavingsRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.name.trim().is_empty() {
        return Err(AppError::BadRequest("Name is required".to_string()));
    }
    if req.amount.is_some_and(|a| a < 0.0) || req.target_amount.is_some_and(|a| a < 0.0) {
        return Err(AppError::BadRequest(
            "Amounts must not be negative".to_string(),
        ));
    }

    let mut goal = SavingsGoal::new(identity.user_id, req.name);
    if let Some(amount) = req.amount {
        goal.amount = amount;
    }
    if let Some(target_amount) = req.target_amount {
        goal.target_amount = target_amount;
    }
    if let Some(rate) = req.rate {
        goal.rate = rate;
    }

    let saved = state.savings.insert(goal).await?;

    Ok(HttpResponse::Created().json(ApiResponse::created("Savings created successfully", saved)))
}

/// GET /api/savings
pub async fn list(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let goals = state.savings.list(identity.user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Savings fetched successfully", goals)))
}

/// GET /api/savings/{id}
pub async fn get(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let goal = fetch_owned(&state, &identity, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Savings fetched successfully", goal)))
}

/// PATCH /api/savings/{id}
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<UpdateSavingsRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let mut goal = fetch_owned(&state, &identity, path.into_inner()).await?;

    if req.amount.is_some_and(|a| a < 0.0) || req.target_amount.is_some_and(|a| a < 0.0) {
        return Err(AppError::BadRequest(
            "Amounts must not be negative".to_string(),
        ));
    }

    if let Some(name) = req.name {
        goal.name = name;
    }
    if let Some(amount) = req.amount {
        goal.amount = amount;
    }
    if let Some(target_amount) = req.target_amount {
        goal.target_amount = target_amount;
    }
    if let Some(rate) = req.rate {
        goal.rate = rate;
    }
    if let Some(status) = req.status {
        goal.status = status;
    }
    goal.updated_at = chrono::Utc::now();

    let saved = state.savings.update(goal).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Savings updated successfully", saved)))
}

/// DELETE /api/savings/{id}
pub async fn remove(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let goal = fetch_owned(&state, &identity, path.into_inner()).await?;
    state.savings.soft_delete(goal.id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message(200, "Savings deleted successfully")))
}
