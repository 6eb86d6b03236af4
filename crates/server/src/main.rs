//! HTTP entry point for the internship recommendation service.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use data_loader::Catalog;
use pipeline::RecommenderOptions;
use server::{Config, RecommendationOrchestrator, build_router};

/// Internship Recommender API
#[derive(Parser)]
#[command(name = "internship-api")]
#[command(about = "Serves TF-IDF internship recommendations over HTTP", long_about = None)]
struct Args {
    /// Path to the internship catalog JSON (overrides DATA_PATH)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = Config::from_env()?;
    if let Some(data) = args.data {
        config.data_path = data;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .init();

    info!("Starting Internship Recommender API v{}", env!("CARGO_PKG_VERSION"));

    let data_path = config.data_path.display();
    info!("Loading catalog from {}...", data_path);
    let catalog = Arc::new(
        Catalog::load_from_file(&config.data_path)
            .with_context(|| format!("Failed to load catalog from {}", data_path))?,
    );

    let options = RecommenderOptions {
        location_boost: config.location_boost,
        ..RecommenderOptions::default()
    };
    let orchestrator = RecommendationOrchestrator::new(catalog, options)?;

    let app = build_router(orchestrator, &config.allowed_origins);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
