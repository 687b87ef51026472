//! Rate limiting middleware.
//!
//! Wraps a gate around a route or scope: the caller's address is the key,
//! rejected requests get a 429 envelope and never reach a handler, and
//! CORS preflight requests bypass the gate entirely.

use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::Method,
};
use fintrax_shared::ApiResponse;
use std::future::{Future, Ready, ready};
use std::pin::Pin;
use std::sync::Arc;

use fintrax_core::ports::RateLimiter;
use fintrax_infra::rate_limit::{FixedWindowLimiter, GateConfigError};

use crate::config::AppConfig;

const REJECTION_MESSAGE: &str = "Too many requests. Please try again later.";

/// The three process-lifetime gate instances, built once in the
/// composition root and handed to the routing layer.
#[derive(Clone)]
pub struct Gates {
    pub general: Arc<FixedWindowLimiter>,
    pub auth: Arc<FixedWindowLimiter>,
    pub otp: Arc<FixedWindowLimiter>,
}

impl Gates {
    /// Construct all gates from configuration. Any invalid `(limit,
    /// window)` pair is fatal and keeps the server from starting.
    pub fn from_config(config: &AppConfig) -> Result<Self, GateConfigError> {
        Ok(Self {
            general: Arc::new(FixedWindowLimiter::new(
                config.rate_limit_general.limit,
                config.rate_limit_general.window,
            )?),
            auth: Arc::new(FixedWindowLimiter::new(
                config.rate_limit_auth.limit,
                config.rate_limit_auth.window,
            )?),
            otp: Arc::new(FixedWindowLimiter::new(
                config.rate_limit_otp.limit,
                config.rate_limit_otp.window,
            )?),
        })
    }

    /// Start one reclamation task per gate. The tasks run for the life of
    /// the process, so their handles are dropped.
    pub fn spawn_sweepers(&self, every: std::time::Duration) {
        let _ = self.general.spawn_sweeper(every);
        let _ = self.auth.spawn_sweeper(every);
        let _ = self.otp.spawn_sweeper(every);
    }
}

/// Rate limiting middleware factory.
pub struct RateLimitMiddleware {
    gate: Arc<dyn RateLimiter>,
}

impl RateLimitMiddleware {
    pub fn new(gate: Arc<dyn RateLimiter>) -> Self {
        Self { gate }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RateLimitMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RateLimitMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddlewareService {
            service,
            gate: self.gate.clone(),
        }))
    }
}

pub struct RateLimitMiddlewareService<S> {
    service: S,
    gate: Arc<dyn RateLimiter>,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // CORS preflight carries no business payload and is never
        // throttled.
        if req.method() == Method::OPTIONS {
            let fut = self.service.call(req);
            return Box::pin(async move {
                let res = fut.await?;
                Ok(res.map_into_left_body())
            });
        }

        // Client identifier: the caller's network address.
        let key = req
            .connection_info()
            .realip_remote_addr()
            .unwrap_or("unknown")
            .to_string();

        if self.gate.admit(&key) {
            let fut = self.service.call(req);
            return Box::pin(async move {
                let res = fut.await?;
                Ok(res.map_into_left_body())
            });
        }

        tracing::warn!(%key, "rate limit exceeded");

        let response = HttpResponse::TooManyRequests()
            .json(ApiResponse::failure(429, REJECTION_MESSAGE, None));

        let (http_req, _payload) = req.into_parts();
        let srv_response = ServiceResponse::new(http_req, response);

        Box::pin(async move { Ok(srv_response.map_into_right_body()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test, web};
    use std::time::Duration;

    async fn ping() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    fn gate(limit: u32) -> Arc<FixedWindowLimiter> {
        Arc::new(FixedWindowLimiter::new(limit, Duration::from_secs(60)).unwrap())
    }

    #[actix_web::test]
    async fn test_rejects_with_envelope_after_limit() {
        let app = test::init_service(
            App::new()
                .wrap(RateLimitMiddleware::new(gate(2)))
                .route("/ping", web::get().to(ping)),
        )
        .await;

        for _ in 0..2 {
            let req = test::TestRequest::get().uri("/ping").to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), 200);
        }

        let req = test::TestRequest::get().uri("/ping").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 429);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["status"], 429);
        assert_eq!(body["message"], REJECTION_MESSAGE);
    }

    #[actix_web::test]
    async fn test_options_requests_bypass_the_gate() {
        let limiter = gate(1);
        let app = test::init_service(
            App::new()
                .wrap(RateLimitMiddleware::new(limiter.clone()))
                .route("/ping", web::route().method(Method::OPTIONS).to(ping)),
        )
        .await;

        for _ in 0..5 {
            let req = test::TestRequest::with_uri("/ping")
                .method(Method::OPTIONS)
                .to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), 200);
        }

        // Preflight traffic left the gate untouched.
        assert_eq!(limiter.tracked_keys(), 0);
    }

    #[actix_web::test]
    async fn test_keys_tracked_per_peer_address() {
        let app = test::init_service(
            App::new()
                .wrap(RateLimitMiddleware::new(gate(1)))
                .route("/ping", web::get().to(ping)),
        )
        .await;

        let first = test::TestRequest::get()
            .uri("/ping")
            .peer_addr("10.0.0.1:4000".parse().unwrap())
            .to_request();
        assert_eq!(test::call_service(&app, first).await.status(), 200);

        let repeat = test::TestRequest::get()
            .uri("/ping")
            .peer_addr("10.0.0.1:4000".parse().unwrap())
            .to_request();
        assert_eq!(test::call_service(&app, repeat).await.status(), 429);

        // A different caller still gets through.
        let other = test::TestRequest::get()
            .uri("/ping")
            .peer_addr("10.0.0.2:4000".parse().unwrap())
            .to_request();
        assert_eq!(test::call_service(&app, other).await.status(), 200);
    }
}
