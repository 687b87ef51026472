//! Account handlers: registration, email verification, login, OTP and
//! password management, token refresh.

use actix_web::{HttpResponse, web};
use rand::Rng;

use fintrax_core::domain::{FinanceAccount, OTP_VALIDITY_MINUTES, User, UserStatus};
use fintrax_shared::ApiResponse;
use fintrax_shared::dto::{
    AuthResponse, ForgotPasswordRequest, GenerateOtpRequest, LoginRequest, RegisterRequest,
    ResetPasswordRequest, TokenResponse, VerifyEmailRequest,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn six_digit_code() -> u32 {
    rand::thread_rng().gen_range(100_000..=999_999)
}

async fn send_verification_mail(state: &AppState, user: &User, code: u32) -> AppResult<()> {
    let body = format!(
        "Welcome to Fintrax!\n\nYour verification code is {code}. It stays valid for {OTP_VALIDITY_MINUTES} minutes.\n\nPlease verify your email to start using Fintrax."
    );
    state
        .mailer
        .send(&user.email, "Fintrax - Verify Your Email", &body)
        .await?;
    Ok(())
}

/// POST /api/user/register
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.username.trim().is_empty() {
        return Err(AppError::BadRequest("Username is required".to_string()));
    }
    if req.email.is_empty() || !req.email.contains('@') {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }
    if req.password.len() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    if state.users.find_by_email(&req.email).await?.is_some() {
        return Err(AppError::Conflict("User already exists".to_string()));
    }

    let password_hash = state.password_service.hash(&req.password)?;

    let mut user = User::new(req.username, req.email, password_hash);
    let code = six_digit_code();
    user.issue_otp(code);
    let user = state.users.save(user).await?;

    // Every account starts with a zeroed finance position.
    state.finances.insert(FinanceAccount::new(user.id)).await?;

    send_verification_mail(&state, &user, code).await?;

    let token = state.token_service.generate_token(user.id)?;

    Ok(HttpResponse::Created().json(ApiResponse::created(
        "User created successfully",
        AuthResponse {
            token,
            user_id: user.id,
            email: user.email,
            username: user.username,
        },
    )))
}

/// POST /api/user/verify-email
pub async fn verify_email(
    state: web::Data<AppState>,
    body: web::Json<VerifyEmailRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let mut user = state
        .users
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    if !user.otp_matches(req.otp) {
        return Err(AppError::BadRequest("Invalid or expired OTP".to_string()));
    }

    user.status = UserStatus::Active;
    user.clear_otp();
    state.users.save(user).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message(200, "Email verified successfully")))
}

/// POST /api/user/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let user = state
        .users
        .find_by_email(&req.email)
        .await?
        .ok_or(AppError::Unauthorized)?;

    if user.status != UserStatus::Active {
        return Err(AppError::Forbidden("Please verify email first".to_string()));
    }

    let valid = state
        .password_service
        .verify(&req.password, &user.password_hash)?;
    if !valid {
        return Err(AppError::Unauthorized);
    }

    let token = state.token_service.generate_token(user.id)?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Login successful",
        AuthResponse {
            token,
            user_id: user.id,
            email: user.email,
            username: user.username,
        },
    )))
}

/// POST /api/user/generate-otp
pub async fn generate_otp(
    state: web::Data<AppState>,
    body: web::Json<GenerateOtpRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let mut user = state
        .users
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    if !user.can_regenerate_otp() {
        return Err(AppError::TooEarly(
            "OTP already generated, please wait before generating a new one".to_string(),
        ));
    }

    let code = six_digit_code();
    user.issue_otp(code);
    let user = state.users.save(user).await?;

    send_verification_mail(&state, &user, code).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message(200, "OTP sent successfully")))
}

/// POST /api/user/forgot-password
pub async fn forgot_password(
    state: web::Data<AppState>,
    body: web::Json<ForgotPasswordRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.password.len() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    let mut user = state
        .users
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    if !user.otp_matches(req.otp) {
        return Err(AppError::BadRequest("Invalid or expired OTP".to_string()));
    }

    user.password_hash = state.password_service.hash(&req.password)?;
    user.clear_otp();
    state.users.save(user).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message(200, "Password updated successfully")))
}

/// POST /api/user/reset-password
pub async fn reset_password(
    state: web::Data<AppState>,
    body: web::Json<ResetPasswordRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.new_password.len() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    let mut user = state
        .users
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let valid = state
        .password_service
        .verify(&req.old_password, &user.password_hash)?;
    if !valid {
        return Err(AppError::Unauthorized);
    }

    user.password_hash = state.password_service.hash(&req.new_password)?;
    state.users.save(user).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message(200, "Password updated successfully")))
}

/// POST /api/user/refresh-token
pub async fn refresh_token(
    state: web::Data<AppState>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    let token = state.token_service.generate_token(identity.user_id)?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Token refreshed successfully",
        TokenResponse {
            token,
            expires_in: state.token_service.expiration_seconds(),
        },
    )))
}

#[cfg(test)]
mod tests {
    use crate::handlers::configure_routes;
    use crate::middleware::rate_limit::Gates;
    use crate::state::AppState;
    use actix_web::{App, test, web};
    use fintrax_infra::FixedWindowLimiter;
    use fintrax_infra::mailer::LogMailer;
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

    fn otp_from(body: &str) -> u32 {
        body.split_whitespace()
            .find_map(|word| {
                word.trim_end_matches('.')
                    .parse::<u32>()
                    .ok()
                    .filter(|code| *code >= 100_000)
            })
            .expect("mail should carry a six digit code")
    }

    #[actix_web::test]
    async fn test_register_verify_login_flow() {
        let mailer = Arc::new(LogMailer::new());
        let mut state = AppState::new();
        state.mailer = mailer.clone();
        let gates = open_gates();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(|cfg| configure_routes(cfg, &gates)),
        )
        .await;

        let register = test::TestRequest::post()
            .uri("/api/user/register")
            .set_json(json!({
                "username": "alice",
                "email": "alice@example.com",
                "password": "secret-password"
            }))
            .to_request();
        let res = test::call_service(&app, register).await;
        assert_eq!(res.status(), 201);

        // Unverified accounts may not log in yet.
        let early_login = test::TestRequest::post()
            .uri("/api/user/login")
            .set_json(json!({"email": "alice@example.com", "password": "secret-password"}))
            .to_request();
        assert_eq!(test::call_service(&app, early_login).await.status(), 403);

        let sent = mailer.sent().await;
        assert_eq!(sent.len(), 1);
        let code = otp_from(&sent[0].body);

        let verify = test::TestRequest::post()
            .uri("/api/user/verify-email")
            .set_json(json!({"email": "alice@example.com", "otp": code}))
            .to_request();
        assert_eq!(test::call_service(&app, verify).await.status(), 200);

        let login = test::TestRequest::post()
            .uri("/api/user/login")
            .set_json(json!({"email": "alice@example.com", "password": "secret-password"}))
            .to_request();
        let res = test::call_service(&app, login).await;
        assert_eq!(res.status(), 200);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "Login successful");
        assert!(body["data"]["token"].as_str().is_some_and(|t| !t.is_empty()));
    }

    #[actix_web::test]
    async fn test_duplicate_registration_conflicts() {
        let state = AppState::new();
        let gates = open_gates();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(|cfg| configure_routes(cfg, &gates)),
        )
        .await;

        let payload = json!({
            "username": "bob",
            "email": "bob@example.com",
            "password": "secret-password"
        });
        let first = test::TestRequest::post()
            .uri("/api/user/register")
            .set_json(&payload)
            .to_request();
        assert_eq!(test::call_service(&app, first).await.status(), 201);

        let second = test::TestRequest::post()
            .uri("/api/user/register")
            .set_json(&payload)
            .to_request();
        assert_eq!(test::call_service(&app, second).await.status(), 409);
    }

    #[actix_web::test]
    async fn test_fresh_otp_regeneration_is_throttled() {
        let state = AppState::new();
        let gates = open_gates();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(|cfg| configure_routes(cfg, &gates)),
        )
        .await;

        let register = test::TestRequest::post()
            .uri("/api/user/register")
            .set_json(json!({
                "username": "carol",
                "email": "carol@example.com",
                "password": "secret-password"
            }))
            .to_request();
        assert_eq!(test::call_service(&app, register).await.status(), 201);

        // Registration just issued a code; asking again is too early.
        let regenerate = test::TestRequest::post()
            .uri("/api/user/generate-otp")
            .set_json(json!({"email": "carol@example.com"}))
            .to_request();
        assert_eq!(test::call_service(&app, regenerate).await.status(), 429);
    }
}
