use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::web;
use utoipa::OpenApi;

use crate::handlers;
use crate::middleware::SessionAuth;
use crate::models::HealthResponse;
use crate::openapi::ApiDoc;
use crate::services::RevokedSessions;

pub fn configure_routes(cfg: &mut web::ServiceConfig, revoked: &RevokedSessions) {
    // Strict limit on the auth endpoints: burst of 5, one request
    // replenished every 6 seconds per client IP.
    let auth_limiter = GovernorConfigBuilder::default()
        .seconds_per_request(6)
        .burst_size(5)
        .finish()
        .expect("Failed to create auth rate limiter config");

    cfg.service(
        web::scope("/api")
            // Health check and API document
            .route("/health", web::get().to(health_check))
            .route("/docs/openapi.json", web::get().to(openapi_json))
            // Auth routes (rate limited; logout and profile need a session)
            .service(
                web::scope("/auth")
                    .wrap(Governor::new(&auth_limiter))
                    .route("/register", web::post().to(handlers::register))
                    .route("/login", web::post().to(handlers::login))
                    .service(
                        web::scope("")
                            .wrap(SessionAuth::new(revoked.clone()))
                            .route("/logout", web::post().to(handlers::logout))
                            .route("/me", web::get().to(handlers::current_user)),
                    ),
            )
            // Public feed
            .route("/thoughts", web::get().to(handlers::list_thoughts))
            // Personal dashboard and thought management (protected)
            .service(
                web::scope("/dashboard")
                    .wrap(SessionAuth::new(revoked.clone()))
                    .route("", web::get().to(handlers::dashboard))
                    .route("/thoughts", web::post().to(handlers::create_thought))
                    .route("/thoughts/{id}", web::get().to(handlers::get_thought))
                    .route("/thoughts/{id}", web::put().to(handlers::update_thought))
                    .route("/thoughts/{id}", web::delete().to(handlers::remove_thought)),
            ),
    );
}

/// Service liveness check
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: "Server is running".to_string(),
    })
}

async fn openapi_json() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(ApiDoc::openapi())
}
