//! ddns-backend binary entry point.

use clap::Parser;
use ddns_backend::{telemetry, Backend, Config, MemoryStore};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

/// HTTP lookup backend serving a dynamic-DNS zone to an authoritative DNS server.
#[derive(Parser, Debug)]
#[command(name = "ddns-backend")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file (TOML).
    #[arg(short, long, default_value = "ddns-backend.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration
    let config: Config = config::Config::builder()
        .add_source(config::File::from(args.config.clone()))
        .add_source(
            config::Environment::with_prefix("DDNS_BACKEND")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()?;

    // Initialize telemetry
    telemetry::init(&config.telemetry).map_err(|e| e as Box<dyn std::error::Error>)?;

    info!(
        config_file = %args.config.display(),
        listen_addr = %config.backend.listen_addr,
        domain = %config.backend.domain,
        preloaded_records = config.backend.records.len(),
        "Starting ddns-backend"
    );

    // Seed the in-memory store with the configured records
    let store = Arc::new(MemoryStore::with_records(config.backend.records.clone()));

    let backend = Backend::new(config.backend, store);
    let result = backend.run().await;

    // Shutdown telemetry
    telemetry::shutdown();

    if let Err(e) = result {
        error!("Backend error: {}", e);
        return Err(e.into());
    }

    info!("ddns-backend shutdown complete");
    Ok(())
}
