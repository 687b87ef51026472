//! Dashboard aggregation.

use actix_web::{HttpResponse, web};

use fintrax_core::domain::{FlowKind, Status};
use fintrax_shared::ApiResponse;
use fintrax_shared::dto::DashboardResponse;

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/dashboard
///
/// Collects headline figures across finance and task data for the
/// authenticated user. Net worth counts savings as assets and the
/// outstanding loan total alongside recorded debt as liabilities.
pub async fn get_dashboard(
    state: web::Data<AppState>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    let user_id = identity.user_id;

    let (total_balance, total_debt) = match state.finances.list(user_id).await?.into_iter().next() {
        Some(account) => (account.balance, account.total_debt),
        None => (0.0, 0.0),
    };

    let total_savings: f64 = state
        .savings
        .list(user_id)
        .await?
        .iter()
        .map(|goal| goal.amount)
        .sum();

    let total_loans: f64 = state
        .loans
        .list(user_id)
        .await?
        .iter()
        .map(|loan| loan.total_amount)
        .sum();

    let mut total_income = 0.0;
    let mut total_expense = 0.0;
    for tx in state.transactions.list(user_id).await? {
        match tx.flow {
            FlowKind::Income => total_income += tx.amount,
            FlowKind::Expense => total_expense += tx.amount,
        }
    }

    let total_todo = state.todos.list(user_id).await?.len();
    let total_projects = state.projects.list(user_id).await?.len();
    let active_roadmaps = state
        .roadmaps
        .list(user_id)
        .await?
        .iter()
        .filter(|roadmap| {
            matches!(roadmap.status, Status::NotStarted | Status::InProgress)
        })
        .count();

    let dashboard = DashboardResponse {
        total_balance,
        total_debt,
        total_savings,
        total_loans,
        total_income,
        total_expense,
        net_worth: total_balance + total_savings - total_debt - total_loans,
        total_todo,
        total_projects,
        active_roadmaps,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Dashboard fetched successfully",
        dashboard,
    )))
}
