//! Taskboard Backend
//!
//! REST backend for the team task-board: boards, roles, memberships, and
//! invite links, with SQLite persistence.

mod api;
mod auth;
mod config;
mod db;
mod errors;
mod models;
mod notify;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;
use notify::Notifier;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub notifier: Arc<Notifier>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Taskboard Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);
    tracing::info!("Frontend base URL: {}", config.frontend_url);

    // Warn if PSK is not configured
    if config.api_psk.is_none() {
        tracing::warn!("No API PSK configured (TASKBOARD_API_PSK). Authentication is disabled!");
    }

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool.clone()));

    // Seed system roles; safe on every start
    repo.init_system_roles().await?;
    tracing::info!("System roles ready");

    let notifier = Arc::new(Notifier::new(pool));

    // Create application state
    let state = AppState {
        repo,
        notifier,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Clone PSK for the auth layer
    let psk = state.config.api_psk.clone();

    // API routes
    let api_routes = Router::new()
        // Users
        .route("/users", get(api::list_users))
        .route("/users", post(api::create_user))
        .route("/users/{id}", get(api::get_user))
        // Boards
        .route("/boards", get(api::list_boards))
        .route("/boards", post(api::create_board))
        .route("/boards/{id}", get(api::get_board))
        .route("/boards/{id}", delete(api::delete_board))
        // Roles
        .route("/boards/{id}/roles", get(api::list_board_roles))
        .route("/boards/{id}/roles", post(api::create_board_role))
        // Members
        .route("/boards/{id}/members", get(api::list_board_members))
        .route("/boards/{id}/members", post(api::add_member))
        .route("/boards/{id}/members/{user_id}", put(api::update_member_role))
        .route("/boards/{id}/members/{user_id}", delete(api::remove_member))
        // Invite links
        .route("/boards/{id}/invites", get(api::list_board_invites))
        .route("/boards/{id}/invites", post(api::create_invite))
        .route("/invites/{id}", get(api::inspect_invite))
        .route("/invites/{id}", delete(api::deactivate_invite))
        .route("/invites/{id}/uses", get(api::list_invite_uses))
        .route("/invites/{id}/redeem", post(api::redeem_invite))
        // Notifications
        .route("/notifications", get(api::list_notifications))
        // Apply PSK auth middleware
        .layer(middleware::from_fn(move |req, next| {
            auth::psk_auth_layer(psk.clone(), req, next)
        }));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests;
