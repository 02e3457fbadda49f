//! Cafe HTTP server entry point
//!
//! Starts the REST API server for the cafe directory.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cafe_service::core::config::Config;
use cafe_service::core::services::Services;
use cafe_service::http;

/// Log output format
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

/// Cafe directory HTTP server
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to bind (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides config)
    #[arg(long)]
    port: Option<u16>,

    /// Log output format
    #[arg(long, env = "CAFE_LOG_FORMAT", value_enum, default_value = "text")]
    log_format: LogFormat,
}

fn init_logging(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cafe_service=info,tower_http=debug".into());

    match format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.log_format);

    tracing::info!("Starting cafe service");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    config.validate()?;
    config.log_config();

    let services = Services::new(config.clone());
    tracing::info!(
        "Directory ready: {} cities, {} cafes",
        services.directory.len(),
        services.directory.total_cafes()
    );

    let app = http::router(services);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Service ready - try http://{}/cafe?city=moscow", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
