//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use anyhow::Context;
use axum::{
    Router, http,
    http::{Method, header},
    routing::get,
};
use catalog::{CatalogConfig, category_router};
use kernel::error::app_error::AppError;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_PORT: u16 = 31113;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// Settings read from the environment at startup
#[derive(Debug, Clone)]
struct ApiConfig {
    port: u16,
    frontend_origins: Vec<http::HeaderValue>,
    catalog: CatalogConfig,
}

impl ApiConfig {
    fn from_env() -> anyhow::Result<Self> {
        let port = match env::var("API_PORT") {
            Ok(raw) => raw.parse().context("API_PORT must be a port number")?,
            Err(_) => DEFAULT_PORT,
        };

        let frontend_origins = env::var("FRONTEND_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGINS.to_string());

        let catalog = match env::var("CATEGORY_MAX_BODY_BYTES") {
            Ok(raw) => CatalogConfig::with_max_body_bytes(
                raw.parse()
                    .context("CATEGORY_MAX_BODY_BYTES must be a byte count")?,
            ),
            Err(_) => CatalogConfig::default(),
        };

        Ok(Self {
            port,
            frontend_origins: parse_origins(&frontend_origins),
            catalog,
        })
    }
}

fn parse_origins(raw: &str) -> Vec<http::HeaderValue> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| origin.parse().ok())
        .collect()
}

/// Fallback for unknown routes, rendered like every other error
async fn route_not_found() -> AppError {
    AppError::not_found("Route not found")
}

fn build_app(config: &ApiConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(config.frontend_origins.clone())
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest("/api/categories", category_router(config.catalog.clone()))
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,catalog=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env()?;
    tracing::info!(
        max_body_bytes = config.catalog.max_body_bytes,
        origins = config.frontend_origins.len(),
        "Configuration loaded"
    );

    let app = build_app(&config);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
