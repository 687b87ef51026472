//! Loan handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use fintrax_core::domain::Loan;
use fintrax_shared::ApiResponse;
use fintrax_shared::dto::{CreateLoanRequest, UpdateLoanRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

async fn fetch_owned(state: &AppState, identity: &Identity, id: Uuid) -> AppResult<Loan> {
    state
        .loans
        .get(id)
        .await?
        .filter(|loan| loan.user_id == identity.user_id)
        .ok_or_else(|| AppError::NotFound("Loan not found".to_string()))
}

/// POST /api/loans
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateLoanRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.name.trim().is_empty() {
        return Err(AppError::BadRequest("Name is required".to_string()));
    }
    if req.total_amount < 0.0 {
        return Err(AppError::BadRequest(
            "Total amount must not be negative".to_string(),
        ));
    }

    let mut loan = Loan::new(identity.user_id, req.name, req.total_amount);
    if let Some(rate) = req.rate {
        loan.rate = rate;
    }
    if let Some(term) = req.term {
        loan.term = term;
    }
    if let Some(duration) = req.duration {
        loan.duration = duration;
    }
    if let Some(premium_amount) = req.premium_amount {
        loan.premium_amount = premium_amount;
    }

    let saved = state.loans.insert(loan).await?;

    Ok(HttpResponse::Created().json(ApiResponse::created("Loan created successfully", saved)))
}

/// GET /api/loans
pub async fn list(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let loans = state.loans.list(identity.user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Loans fetched successfully", loans)))
}

/// GET /api/loans/{id}
pub async fn get(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let loan = fetch_owned(&state, &identity, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Loan fetched successfully", loan)))
}

/// PATCH /api/loans/{id}
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<UpdateLoanRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let mut loan = fetch_owned(&state, &identity, path.into_inner()).await?;

    if req.total_amount.is_some_and(|a| a < 0.0) {
        return Err(AppError::BadRequest(
            "Total amount must not be negative".to_string(),
        ));
    }

    if let Some(name) = req.name {
        loan.name = name;
    }
    if let Some(total_amount) = req.total_amount {
        loan.total_amount = total_amount;
    }
    if let Some(rate) = req.rate {
        loan.rate = rate;
    }
    if let Some(term) = req.term {
        loan.term = term;
    }
    if let Some(duration) = req.duration {
        loan.duration = duration;
    }
    if let Some(premium_amount) = req.premium_amount {
        loan.premium_amount = premium_amount;
    }
    if let Some(status) = req.status {
        loan.status = status;
    }
    loan.updated_at = chrono::Utc::now();

    let saved = state.loans.update(loan).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Loan updated successfully", saved)))
}

/// DELETE /api/loans/{id}
pub async fn remove(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let loan = fetch_owned(&state, &identity, path.into_inner()).await?;
    state.loans.soft_delete(loan.id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message(200, "Loan deleted successfully")))
}
