mod config;
mod constants;
mod errors;
mod handlers;
mod middleware;
mod models;
mod openapi;
mod pagination;
mod repositories;
mod routes;
mod services;
mod utils;
mod validators;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use mongodb::bson::doc;
use mongodb::Client;

use crate::config::CONFIG;
use crate::repositories::{ThoughtRepository, UserRepository};
use crate::services::{AuthService, RevokedSessions, ThoughtService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Connect to MongoDB
    info!("Connecting to MongoDB...");
    let client = Client::with_uri_str(&CONFIG.mongodb_uri)
        .await
        .expect("Failed to connect to MongoDB");

    let db = client.database(&CONFIG.database_name);

    // Test MongoDB connection
    db.run_command(doc! { "ping": 1 })
        .await
        .expect("Failed to ping MongoDB");
    info!("Connected to MongoDB successfully!");

    // Ensure indexes exist before serving traffic
    UserRepository::new(&db)
        .create_indexes()
        .await
        .expect("Failed to create user indexes");
    ThoughtRepository::new(&db)
        .create_indexes()
        .await
        .expect("Failed to create thought indexes");

    // Initialize shared services
    let revoked = RevokedSessions::new();
    let auth_service = web::Data::new(AuthService::new(&db));
    let thought_service = web::Data::new(ThoughtService::new(&db));
    let revoked_data = web::Data::new(revoked.clone());

    // Start HTTP server
    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(auth_service.clone())
            .app_data(thought_service.clone())
            .app_data(revoked_data.clone())
            .configure(|cfg| routes::configure_routes(cfg, &revoked))
    })
    .bind(&server_addr)?
    .run()
    .await
}
