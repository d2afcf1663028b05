use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tzfinder_core::config::LayeredConfig;
use tzfinder_workflow::AppContext;

use tzfinder_api::{create_router, ApiConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tzfinder_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_config = ApiConfig::from_env();

    let config = LayeredConfig::with_defaults()
        .load_from_optional_file(Path::new("tzfinder.toml"))
        .context("Failed to load tzfinder.toml")?
        .load_from_env()
        .resolve();

    tracing::info!(
        port = api_config.port,
        base_url = %config.base_url,
        credential_configured = config.has_credential(),
        "Starting tzfinder API server"
    );

    let state = Arc::new(AppState::new(AppContext::from_config(config)));

    let origin = api_config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid TZFINDER_CORS_ORIGIN: {}", api_config.cors_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let app = create_router(state).layer(cors).layer(TraceLayer::new_for_http());

    let addr = api_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("CORS enabled for {}", api_config.cors_origin);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
