//! Transaction handlers.
//!
//! Creating or deleting a transaction also adjusts the owner's finance
//! account balance by the transaction's signed amount.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use fintrax_core::domain::{Status, Transaction};
use fintrax_shared::ApiResponse;
use fintrax_shared::dto::{CreateTransactionRequest, UpdateTransactionRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

async fn fetch_owned(state: &AppState, identity: &Identity, id: Uuid) -> AppResult<Transaction> {
    state
        .transactions
        .get(id)
        .await?
        .filter(|tx| tx.user_id == identity.user_id)
        .ok_or_else(|| AppError::NotFound("Transaction not found".to_string()))
}

/// POST /api/transaction
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateTransactionRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.source.trim().is_empty() {
        return Err(AppError::BadRequest("Source is required".to_string()));
    }
    if req.amount <= 0.0 {
        return Err(AppError::BadRequest(
            "Amount must be greater than zero".to_string(),
        ));
    }

    let mut transaction = Transaction::new(identity.user_id, req.source, req.amount, req.flow);
    if let Some(category) = req.category {
        transaction.category = category;
    }
    if let Some(date) = req.date {
        transaction.date = date;
    }
    transaction.note_id = req.note_id;

    let mut account = super::finance::account_for(&state, &identity).await?;
    account.balance += transaction.signed_amount();
    account.updated_at = chrono::Utc::now();
    state.finances.update(account).await?;

    let saved = state.transactions.insert(transaction).await?;

    Ok(HttpResponse::Created().json(ApiResponse::created(
        "Transaction created successfully",
        saved,
    )))
}

/// GET /api/transaction
pub async fn list(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let mut transactions = state.transactions.list(identity.user_id).await?;
    transactions.sort_by(|a, b| b.date.cmp(&a.date));

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Transactions fetched successfully",
        transactions,
    )))
}

/// GET /api/transaction/{id}
pub async fn get(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let transaction = fetch_owned(&state, &identity, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Transaction fetched successfully",
        transaction,
    )))
}

/// PATCH /api/transaction/{id}
///
/// Amount and flow are immutable once recorded. Changing either would
/// require reconciling the account balance, so corrections are made by
/// deleting and re-creating the transaction.
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<UpdateTransactionRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let mut transaction = fetch_owned(&state, &identity, path.into_inner()).await?;

    // Deletion must go through DELETE so the account balance is
    // reconciled; a status write would hide the row and strand its amount.
    if req.status == Some(Status::Deleted) {
        return Err(AppError::BadRequest(
            "Use DELETE to remove a transaction".to_string(),
        ));
    }

    if let Some(source) = req.source {
        transaction.source = source;
    }
    if let Some(category) = req.category {
        transaction.category = category;
    }
    if let Some(date) = req.date {
        transaction.date = date;
    }
    if let Some(note_id) = req.note_id {
        transaction.note_id = Some(note_id);
    }
    if let Some(status) = req.status {
        transaction.status = status;
    }
    transaction.updated_at = chrono::Utc::now();

    let saved = state.transactions.update(transaction).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Transaction updated successfully",
        saved,
    )))
}

/// DELETE /api/transaction/{id}
pub async fn remove(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let transaction = fetch_owned(&state, &identity, path.into_inner()).await?;

    let mut account = super::finance::account_for(&state, &identity).await?;
    account.balance -= transaction.signed_amount();
    account.updated_at = chrono::Utc::now();
    state.finances.update(account).await?;

    state.transactions.soft_delete(transaction.id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message(
        200,
        "Transaction deleted successfully",
    )))
}

#[cfg(test)]
mod tests {
    use crate::handlers::configure_routes;
    use crate::middleware::rate_limit::Gates;
    use crate::state::AppState;
    use actix_web::{App, test, web};
    use fintrax_infra::FixedWindowLimiter;
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    fn open_gates() -> Gates {
        let gate =
            || Arc::new(FixedWindowLimiter::new(10_000, Duration::from_secs(60)).unwrap());
        Gates {
            general: gate(),
            auth: gate(),
            otp: gate(),
        }
    }

    #[actix_web::test]
    async fn test_create_and_remove_reconcile_balance() {
        let gates = open_gates();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new()))
                .configure(|cfg| configure_routes(cfg, &gates)),
        )
        .await;

        let register = test::TestRequest::post()
            .uri("/api/user/register")
            .set_json(json!({
                "username": "dave",
                "email": "dave@example.com",
                "password": "secret-password"
            }))
            .to_request();
        let res = test::call_service(&app, register).await;
        assert_eq!(res.status(), 201);
        let body: serde_json::Value = test::read_body_json(res).await;
        let token = body["data"]["token"].as_str().unwrap().to_string();
        let bearer = ("Authorization", format!("Bearer {token}"));

        let create = test::TestRequest::post()
            .uri("/api/transaction")
            .insert_header(bearer.clone())
            .set_json(json!({"source": "salary", "amount": 100.0, "flow": 1}))
            .to_request();
        let res = test::call_service(&app, create).await;
        assert_eq!(res.status(), 201);
        let body: serde_json::Value = test::read_body_json(res).await;
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let finance = test::TestRequest::get()
            .uri("/api/finance")
            .insert_header(bearer.clone())
            .to_request();
        let body: serde_json::Value =
            test::read_body_json(test::call_service(&app, finance).await).await;
        assert_eq!(body["data"]["balance"], 100.0);

        let delete = test::TestRequest::delete()
            .uri(&format!("/api/transaction/{id}"))
            .insert_header(bearer.clone())
            .to_request();
        assert_eq!(test::call_service(&app, delete).await.status(), 200);

        let finance = test::TestRequest::get()
            .uri("/api/finance")
            .insert_header(bearer)
            .to_request();
        let body: serde_json::Value =
            test::read_body_json(test::call_service(&app, finance).await).await;
        assert_eq!(body["data"]["balance"], 0.0);
    }

    #[actix_web::test]
    async fn test_update_rejects_deleted_status() {
        let gates = open_gates();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new()))
                .configure(|cfg| configure_routes(cfg, &gates)),
        )
        .await;

        let register = test::TestRequest::post()
            .uri("/api/user/register")
            .set_json(json!({
                "username": "erin",
                "email": "erin@example.com",
                "password": "secret-password"
            }))
            .to_request();
        let res = test::call_service(&app, register).await;
        assert_eq!(res.status(), 201);
        let body: serde_json::Value = test::read_body_json(res).await;
        let token = body["data"]["token"].as_str().unwrap().to_string();
        let bearer = ("Authorization", format!("Bearer {token}"));

        let create = test::TestRequest::post()
            .uri("/api/transaction")
            .insert_header(bearer.clone())
            .set_json(json!({"source": "salary", "amount": 100.0, "flow": 1}))
            .to_request();
        let res = test::call_service(&app, create).await;
        assert_eq!(res.status(), 201);
        let body: serde_json::Value = test::read_body_json(res).await;
        let id = body["data"]["id"].as_str().unwrap().to_string();

        // Writing Deleted through PATCH would hide the row without the
        // balance refund DELETE performs.
        let patch = test::TestRequest::patch()
            .uri(&format!("/api/transaction/{id}"))
            .insert_header(bearer.clone())
            .set_json(json!({"status": 5}))
            .to_request();
        assert_eq!(test::call_service(&app, patch).await.status(), 400);

        // The row is still visible and the balance untouched.
        let list = test::TestRequest::get()
            .uri("/api/transaction")
            .insert_header(bearer.clone())
            .to_request();
        let body: serde_json::Value =
            test::read_body_json(test::call_service(&app, list).await).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);

        let finance = test::TestRequest::get()
            .uri("/api/finance")
            .insert_header(bearer)
            .to_request();
        let body: serde_json::Value =
            test::read_body_json(test::call_service(&app, finance).await).await;
        assert_eq!(body["data"]["balance"], 100.0);
    }
}
