//! Menu router server
//!
//! Serves the menu dispatcher over HTTP with in-memory sessions.

use menu_router::api::{create_router, AppState};
use menu_router::modules::ModuleRegistry;
use menu_router::{AppConfig, Dispatcher};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "menu_router=info,tower_http=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let config = AppConfig::from_env()?;

    // The registry is built once and shared read-only by every conversation
    let registry = Arc::new(ModuleRegistry::standard(&config.modules)?);
    tracing::info!(
        modules = ?registry.names(),
        tables_image = %config.modules.tables_image_url,
        "Module registry initialized"
    );

    let state = AppState::new(Dispatcher::new(registry));
    let app = create_router(state);

    // Start server
    let addr = config.addr();
    tracing::info!("Menu router listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
