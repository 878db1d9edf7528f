mod catalog;
mod config;
mod errors;
mod models;
mod resume;
mod routes;
mod seo;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::ProjectCatalog;
use crate::config::Config;
use crate::resume::ResumeStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // Résumé is read on first request, not here; a bad file must not stop the catalog.
    let resume = Arc::new(ResumeStore::from_file(config.resume_path.clone()));
    info!("Résumé source: {}", config.resume_path.display());

    let catalog = Arc::new(ProjectCatalog::builtin());
    info!(
        "Project catalog ready: {} projects, {} tags",
        catalog.len(),
        catalog.tags().len()
    );

    let state = AppState {
        config: config.clone(),
        resume,
        catalog,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr} ({})", config.site.base_url);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
