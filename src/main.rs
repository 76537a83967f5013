mod config;
mod constants;
mod errors;
mod handlers;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;
mod utils;
mod validators;

use std::sync::Arc;
use std::time::Duration;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info, warn};
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

use crate::config::CONFIG;
use crate::repositories::MongoUserRepository;
use crate::services::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let db = connect().await?;

    let repository = MongoUserRepository::new(&db);
    if let Err(e) = repository.create_indexes().await {
        warn!("Could not create indexes, continuing without them: {}", e);
    }

    let user_service = web::Data::new(UserService::new(Arc::new(repository)));

    // Start HTTP server
    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(user_service.clone())
            .configure(routes::configure_routes)
            .default_service(web::to(routes::not_found))
    })
    .bind(&server_addr)?
    .run()
    .await
}

/// Build the process-wide client and probe the server once.
///
/// An unreachable server is only logged; requests will report store errors
/// until it comes back. An unparsable connection string aborts startup.
async fn connect() -> std::io::Result<Database> {
    info!("Connecting to MongoDB...");
    let mut options = ClientOptions::parse(&CONFIG.mongodb_uri)
        .await
        .map_err(|e| {
            error!("Invalid MongoDB connection string: {}", e);
            std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
        })?;
    options.server_selection_timeout = Some(Duration::from_millis(
        CONFIG.server_selection_timeout_ms,
    ));

    let client = Client::with_options(options).map_err(|e| {
        error!("Failed to build MongoDB client: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;
    let db = client.database(&CONFIG.database_name);

    match db.run_command(doc! { "buildInfo": 1 }).await {
        Ok(info) => info!(
            "Connected to MongoDB {}",
            info.get_str("version").unwrap_or("(unknown version)")
        ),
        Err(e) => error!("Unable to connect to MongoDB Server: {}", e),
    }

    Ok(db)
}
