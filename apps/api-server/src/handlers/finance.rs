//! Finance account handlers.

use actix_web::{HttpResponse, web};

use fintrax_core::domain::FinanceAccount;
use fintrax_shared::ApiResponse;
use fintrax_shared::dto::UpdateFinanceRequest;

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// The caller's finance account, created at registration.
pub(super) async fn account_for(
    state: &AppState,
    identity: &Identity,
) -> AppResult<FinanceAccount> {
    state
        .finances
        .list(identity.user_id)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::NotFound("Finance account not found".to_string()))
}

/// GET /api/finance
pub async fn get(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let account = account_for(&state, &identity).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Finance fetched successfully", account)))
}

/// PATCH /api/finance
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<UpdateFinanceRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let mut account = account_for(&state, &identity).await?;

    if let Some(balance) = req.balance {
        account.balance = balance;
    }
    if let Some(total_debt) = req.total_debt {
        account.total_debt = total_debt;
    }
    account.updated_at = chrono::Utc::now();

    let saved = state.finances.update(account).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Finance updated successfully", saved)))
}
