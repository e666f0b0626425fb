//! ELIGO Eligibility HTTP Server
//!
//! Provides a REST API for evaluating workflow rule trees against posted
//! subject batches.

use anyhow::Result;
use eligo_repository::PostgresRepository;
use eligo_runtime::BooleanRuleEngine;
use eligo_sdk::EligibilityEngineBuilder;
use eligo_server::api::rest::{create_router, AppState};
use eligo_server::config::ServerConfig;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    init_tracing()?;

    // Load configuration
    let config = ServerConfig::load()?;
    info!("Loaded configuration: {:?}", config);

    // Connect the rule row source
    let database_url = config.database_url.clone().ok_or_else(|| {
        anyhow::anyhow!("database_url is required (set ELIGO_DATABASE_URL or config/server)")
    })?;
    let repository = PostgresRepository::new(&database_url).await?;
    info!("Rule row source connected");

    // Wire the eligibility engine
    let engine = EligibilityEngineBuilder::new()
        .with_repository(Arc::new(repository))
        .with_evaluator(Arc::new(BooleanRuleEngine::new()))
        .build()?;
    info!("Eligibility engine initialized");

    // Create router
    let state = AppState {
        engine: Arc::new(engine),
        default_workflow: config.workflow.clone(),
    };
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    info!("✓ Server listening on http://{}", addr);
    info!("  Health check: http://{}/health", addr);
    info!(
        "  Eligibility API: POST http://{}/v1/eligibility (workflow '{}')",
        addr, config.workflow
    );

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "eligo_server=info,eligo_sdk=info,eligo_repository=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
