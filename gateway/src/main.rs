use anyhow::Result;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hazard_signals::{SignalHub, SignalSettings};
use risk_engine::{load_default_regions, RegionRegistry, RiskConfig};

mod routes;

#[derive(Clone)]
pub struct AppState {
    pub regions: Arc<RegionRegistry>,
    pub hub: Arc<SignalHub>,
    pub config: Arc<RiskConfig>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warning_gateway=debug,info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let regions = load_default_regions();
    tracing::info!("   Loaded {} regions", regions.len());

    // Collaborator credentials are read here, once; nothing below main
    // touches process environment.
    let settings = SignalSettings {
        ambee_key: std::env::var("AMBEE_KEY").ok(),
        hf_token: std::env::var("HF_TOKEN").ok(),
        ..SignalSettings::default()
    };
    if settings.ambee_key.is_none() {
        tracing::warn!("   AMBEE_KEY not set - event feed will fall back to the baseline score");
    }
    if settings.hf_token.is_none() {
        tracing::warn!("   HF_TOKEN not set - semantic source will fall back to neutral");
    }

    let state = AppState {
        regions: Arc::new(regions),
        hub: Arc::new(SignalHub::from_settings(&settings)),
        config: Arc::new(RiskConfig::default()),
    };

    let app = Router::new()
        .route("/health", get(routes::health))
        .route("/regions", get(routes::list_regions))
        .route("/predict/:region", get(routes::predict))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let port = std::env::var("GATEWAY_PORT")
        .or_else(|_| std::env::var("PORT"))
        .unwrap_or_else(|_| "8000".to_string());
    let addr = format!("0.0.0.0:{}", port);

    tracing::info!("⚠️  Disaster early warning gateway starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
