//! HTTP server bootstrap for UPI Bridge.
//!
//! This module wires together:
//! - configuration
//! - database connection pool
//! - the typed stores
//! - the Axum router

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::Method;
use axum::Router;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use crate::infra::{
    PaymentRequestStore, PgPaymentRequestStore, PgUpiIndexStore, PgUserStore, UpiIndexStore,
    UserStore,
};

/// Server configuration.
///
/// Environment variables and their defaults:
///
/// | variable | default |
/// |---|---|
/// | `DATABASE_URL` | `postgres://localhost/upi_bridge` |
/// | `HOST` | `0.0.0.0` |
/// | `PORT` | `8080` |
/// | `MAX_DB_CONNECTIONS` | `10` |
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL (the database name is the URL path).
    pub database_url: String,
    /// Server listen address.
    pub listen_addr: SocketAddr,
    /// Maximum database connections.
    pub max_connections: u32,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/upi_bridge".to_string());

        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let listen_addr: SocketAddr = format!("{host}:{port}")
            .parse()
            .expect("Invalid listen address");

        let max_connections: u32 = std::env::var("MAX_DB_CONNECTIONS")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(10);

        Self {
            database_url,
            listen_addr,
            max_connections,
        }
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub users: Arc<dyn UserStore>,
    pub payment_requests: Arc<dyn PaymentRequestStore>,
    pub upi_index: Arc<dyn UpiIndexStore>,
}

impl AppState {
    /// Postgres-backed state over one shared pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: Arc::new(PgUserStore::new(pool.clone())),
            payment_requests: Arc::new(PgPaymentRequestStore::new(pool.clone())),
            upi_index: Arc::new(PgUpiIndexStore::new(pool.clone())),
            pool,
        }
    }
}

/// Start the HTTP server.
///
/// Connects eagerly: a failed initial connection is fatal and exits the
/// process rather than limping along per-request.
pub async fn run() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting UPI Bridge v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::from_env();
    info!("Configuration loaded");
    info!("  Listen address: {}", config.listen_addr);
    info!("  Max connections: {}", config.max_connections);

    // Connect to PostgreSQL
    info!("Connecting to PostgreSQL...");
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    info!("Connected to PostgreSQL");

    let migrate_on_startup = std::env::var("DB_MIGRATE_ON_STARTUP")
        .ok()
        .map(|v| {
            !matches!(
                v.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "off"
            )
        })
        .unwrap_or(true);
    if migrate_on_startup {
        info!("Running database migrations...");
        crate::migrations::run(&pool).await?;
        info!("Database migrations applied");
    } else {
        info!("DB migrations skipped (DB_MIGRATE_ON_STARTUP=0)");
    }

    // Create application state and router
    let state = AppState::new(pool);
    let app = build_router().with_state(state);

    // Start server
    info!("Starting HTTP server on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;

    info!("UPI Bridge is ready to accept connections");
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .init();
}

/// Router with permissive CORS and request tracing.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .nest("/api", crate::api::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

/// CORS is deliberately open: any origin may call the API.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}
