#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web server for the suicide incident heat-map dashboard.
//!
//! Serves the embedded dashboard page at `/` and the REST API behind it:
//! filter option lists, rendered heat-map documents for the current filter
//! selection, and a health check. The dataset is loaded once before the
//! server accepts connections and shared immutably across requests.

mod handlers;
mod html;

use std::path::Path;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use mapa_calor_dataset::{IncidentSet, loader};

/// Shared application state.
pub struct AppState {
    /// Immutable incident record set loaded at startup.
    pub dataset: Arc<IncidentSet>,
}

/// Starts the dashboard server.
///
/// Loads the incident dataset from `data_path` and starts the Actix-Web
/// HTTP server. This is a regular async function — the caller is
/// responsible for providing the async runtime (e.g. via
/// `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
///
/// # Panics
///
/// Panics if the dataset cannot be loaded (unreadable file, malformed CSV,
/// or a missing required column).
#[allow(clippy::future_not_send)]
pub async fn run_server(data_path: &Path) -> std::io::Result<()> {
    let dataset = loader::load_csv(data_path).expect("Failed to load incident dataset");

    let state = web::Data::new(AppState {
        dataset: Arc::new(dataset),
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/filters", web::get().to(handlers::filters))
                    .route("/map", web::get().to(handlers::map)),
            )
            .route("/", web::get().to(handlers::dashboard))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
