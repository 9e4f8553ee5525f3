//! # Lexi Case Search Main Driver
//!
//! ## Purpose
//! Main entry point for the case search server. Orchestrates initialization
//! of all system components and starts the web server for handling search
//! requests.
//!
//! ## Input/Output Specification
//! - **Input**: Configuration file, command line arguments, environment
//!   variables
//! - **Output**: Running web server with the case-search API endpoints
//!
//! ## Architecture Flow
//! 1. Parse command line arguments and load configuration
//! 2. Initialize logging and tracing
//! 3. Ingest case records and build the store
//! 4. Initialize reference data and the query engine
//! 5. Start the web API server
//! 6. Handle shutdown signals gracefully

use clap::{Arg, Command};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::prelude::*;

use lexi_case_search::{
    api::ApiServer,
    config::Config,
    engine::QueryEngine,
    errors::{Result, SearchError},
    ingestion,
    reference::ReferenceData,
    AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Command::new("lexi-server")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Lexi Team")
        .about("Search engine for Indian District Consumer Court case records")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
                .default_value("config.toml"),
        )
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .value_name("PORT")
                .help("Server port")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("cases")
                .long("cases")
                .value_name("FILE")
                .help("JSON file with case records (overrides the built-in seed data)"),
        )
        .arg(
            Arg::new("check-health")
                .long("check-health")
                .help("Run health checks and exit")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    // Load configuration
    let config_path = matches.get_one::<String>("config").expect("has default");
    let mut config = Config::from_file(config_path)?;

    // Apply command line overrides
    if let Some(port) = matches.get_one::<u16>("port") {
        config.server.port = *port;
    }
    if let Some(cases) = matches.get_one::<String>("cases") {
        config.data.cases_path = Some(PathBuf::from(cases));
    }

    let config = Arc::new(config);

    // Initialize logging
    init_logging(&config)?;

    info!("Starting Lexi Case Search v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded from: {}", config_path);

    // Initialize application components
    let app_state = initialize_components(config.clone()).await?;

    // Run health checks and exit if requested
    if matches.get_flag("check-health") {
        app_state.engine.health_check()?;
        info!("All health checks passed!");
        return Ok(());
    }

    // Start the API server
    let server = ApiServer::new(app_state);
    let server_handle = tokio::spawn(async move {
        if let Err(e) = server.run().await {
            error!("Server error: {}", e);
        }
    });

    info!(
        "Lexi Case Search started successfully on {}:{}",
        config.server.host, config.server.port
    );

    // Wait for shutdown signal
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = server_handle => {
            warn!("Server stopped unexpectedly");
        }
    }

    info!("Lexi Case Search shut down successfully");
    Ok(())
}

/// Initialize logging and tracing
fn init_logging(config: &Config) -> Result<()> {
    let log_level: tracing::Level =
        config
            .logging
            .level
            .parse()
            .map_err(|_| SearchError::Config {
                message: format!("Invalid log level: {}", config.logging.level),
            })?;
    let filter = tracing_subscriber::filter::LevelFilter::from_level(log_level);

    if config.logging.json_format {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .json()
                    .with_filter(filter),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_filter(filter),
            )
            .init();
    }

    info!("Logging initialized with level: {}", config.logging.level);
    Ok(())
}

/// Initialize all application components
async fn initialize_components(config: Arc<Config>) -> Result<AppState> {
    info!("Initializing application components...");

    info!("Ingesting case records...");
    let store = Arc::new(ingestion::load_cases(&config.data).await?);

    info!("Loading reference data...");
    let reference = Arc::new(ReferenceData::seed());

    info!("Initializing query engine...");
    let engine = Arc::new(QueryEngine::new(
        config.clone(),
        store.clone(),
        reference.clone(),
    ));

    engine.health_check()?;
    info!("✓ Query engine is healthy");
    info!(
        "✓ Store holds {} case records, {} states, reference loaded",
        store.len(),
        reference.states().len()
    );

    Ok(AppState {
        config,
        engine,
        store,
        reference,
        started_at: Instant::now(),
    })
}
