//! Pet Clinic API Server
//!
//! Create and edit forms for the pets of a veterinary clinic's owners.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;
mod view;

#[cfg(test)]
mod test_utils;


use adapters::PostgresOwnerRepository;
use app::PetFormService;
use config::Config;
use domain::ports::{Clock, OwnerRepository, SystemClock};
use domain::validation::PetValidator;

/// Application state shared across all handlers
pub struct AppState<OR, C>
where
    OR: OwnerRepository,
    C: Clock,
{
    pub pet_form_service: Arc<PetFormService<OR, C, PetValidator>>,
}

impl<OR, C> Clone for AppState<OR, C>
where
    OR: OwnerRepository,
    C: Clock,
{
    fn clone(&self) -> Self {
        Self {
            pet_form_service: self.pet_form_service.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router for the given state
pub fn build_router<OR, C>(state: AppState<OR, C>) -> Router
where
    OR: OwnerRepository + 'static,
    C: Clock + 'static,
{
    Router::new()
        // Health check
        .route("/health", get(health))
        // Owners
        .route("/pettypes", get(handlers::list_pet_types::<OR, C>))
        .route("/owners/:owner_id", get(handlers::show_owner::<OR, C>))
        // Pet forms
        .route(
            "/owners/:owner_id/pets/new",
            get(handlers::init_creation_form::<OR, C>)
                .post(handlers::process_creation_form::<OR, C>),
        )
        .route(
            "/owners/:owner_id/pets/:pet_id/edit",
            get(handlers::init_update_form::<OR, C>)
                .post(handlers::process_update_form::<OR, C>),
        )
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,petclinic_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Pet Clinic API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Create adapters
    let owner_repo = Arc::new(PostgresOwnerRepository::new(db));

    // Create application services
    let pet_form_service = Arc::new(PetFormService::new(
        owner_repo,
        Arc::new(SystemClock),
        Arc::new(PetValidator::new()),
    ));

    let app = build_router(AppState { pet_form_service });

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {} ({})", addr, config.api_base_url);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
