//! HTTP handlers and route configuration.

mod auth;
mod dashboard;
mod finance;
mod health;
mod loans;
mod notes;
mod preferences;
mod projects;
mod resources;
mod roadmaps;
mod savings;
mod tags;
mod todos;
mod transactions;

use actix_web::web;

use crate::middleware::rate_limit::{Gates, RateLimitMiddleware};

/// Configure all application routes.
///
/// Public auth routes carry the strict auth gate, OTP issuance its own
/// tighter gate, and every resource scope the general gate. Authorization
/// happens per handler through the `Identity` extractor.
pub fn configure_routes(cfg: &mut web::ServiceConfig, gates: &Gates) {
    let general = || RateLimitMiddleware::new(gates.general.clone());
    let auth_gate = || RateLimitMiddleware::new(gates.auth.clone());
    let otp_gate = || RateLimitMiddleware::new(gates.otp.clone());

    cfg.service(
        web::scope("/api")
            .service(
                web::resource("/health")
                    .wrap(general())
                    .route(web::get().to(health::health_check)),
            )
            .service(
                web::resource("/dashboard")
                    .wrap(general())
                    .route(web::get().to(dashboard::get_dashboard)),
            )
            .service(
                web::scope("/user")
                    .service(
                        web::resource("/register")
                            .wrap(auth_gate())
                            .route(web::post().to(auth::register)),
                    )
                    .service(
                        web::resource("/verify-email")
                            .wrap(auth_gate())
                            .route(web::post().to(auth::verify_email)),
                    )
                    .service(
                        web::resource("/login")
                            .wrap(auth_gate())
                            .route(web::post().to(auth::login)),
                    )
                    .service(
                        web::resource("/generate-otp")
                            .wrap(otp_gate())
                            .route(web::post().to(auth::generate_otp)),
                    )
                    .service(
                        web::resource("/forgot-password")
                            .wrap(auth_gate())
                            .route(web::post().to(auth::forgot_password)),
                    )
                    .service(
                        web::resource("/reset-password")
                            .wrap(auth_gate())
                            .route(web::post().to(auth::reset_password)),
                    )
                    .service(
                        web::resource("/refresh-token")
                            .wrap(auth_gate())
                            .route(web::post().to(auth::refresh_token)),
                    ),
            )
            .service(
                web::scope("/todo")
                    .wrap(general())
                    .route("", web::post().to(todos::create))
                    .route("", web::get().to(todos::list))
                    .route("/{id}", web::get().to(todos::get))
                    .route("/{id}", web::patch().to(todos::update))
                    .route("/{id}", web::delete().to(todos::remove)),
            )
            .service(
                web::scope("/project")
                    .wrap(general())
                    .route("", web::post().to(projects::create))
                    .route("", web::get().to(projects::list))
                    .route("/{id}", web::get().to(projects::get))
                    .route("/{id}", web::patch().to(projects::update))
                    .route("/{id}", web::delete().to(projects::remove)),
            )
            .service(
                web::scope("/roadmap")
                    .wrap(general())
                    .route("", web::post().to(roadmaps::create))
                    .route("", web::get().to(roadmaps::list))
                    .route("/{id}", web::get().to(roadmaps::get))
                    .route("/{id}", web::patch().to(roadmaps::update))
                    .route("/{id}", web::delete().to(roadmaps::remove)),
            )
            .service(
                web::scope("/tag")
                    .wrap(general())
                    .route("", web::post().to(tags::create))
                    .route("", web::get().to(tags::list))
                    .route("/attach", web::post().to(tags::attach))
                    .route("/detach", web::post().to(tags::detach))
                    .route("/{id}", web::patch().to(tags::update))
                    .route("/{id}", web::delete().to(tags::remove)),
            )
            .service(
                web::scope("/note")
                    .wrap(general())
                    .route("", web::post().to(notes::create))
                    .route("", web::get().to(notes::list))
                    .route("/{id}", web::get().to(notes::get))
                    .route("/{id}", web::patch().to(notes::update))
                    .route("/{id}", web::delete().to(notes::remove)),
            )
            .service(
                web::scope("/resource")
                    .wrap(general())
                    .route("", web::post().to(resources::create))
                    .route("", web::get().to(resources::list))
                    .route("/{id}", web::patch().to(resources::update))
                    .route("/{id}", web::delete().to(resources::remove)),
            )
            .service(
                web::scope("/finance")
                    .wrap(general())
                    .route("", web::get().to(finance::get))
                    .route("", web::patch().to(finance::update)),
            )
            .service(
                web::scope("/savings")
                    .wrap(general())
                    .route("", web::post().to(savings::create))
                    .route("", web::get().to(savings::list))
                    .route("/{id}", web::get().to(savings::get))
                    .route("/{id}", web::patch().to(savings::update))
                    .route("/{id}", web::delete().to(savings::remove)),
            )
            .service(
                web::scope("/loans")
                    .wrap(general())
                    .route("", web::post().to(loans::create))
                    .route("", web::get().to(loans::list))
                    .route("/{id}", web::get().to(loans::get))
                    .route("/{id}", web::patch().to(loans::update))
                    .route("/{id}", web::delete().to(loans::remove)),
            )
            .service(
                web::scope("/transaction")
                    .wrap(general())
                    .route("", web::post().to(transactions::create))
                    .route("", web::get().to(transactions::list))
                    .route("/{id}", web::get().to(transactions::get))
                    .route("/{id}", web::patch().to(transactions::update))
                    .route("/{id}", web::delete().to(transactions::remove)),
            )
            .service(
                web::scope("/preferences")
                    .wrap(general())
                    .route("", web::get().to(preferences::get))
                    .route("", web::patch().to(preferences::update)),
            ),
    );
}
