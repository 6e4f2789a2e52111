mod cli;
mod config;
mod cover;
mod errors;
mod export;
mod ingest;
mod llm_client;
mod models;
mod preview;
mod refine;
mod session;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let args = cli::Cli::parse();

    // .env first, so RUST_LOG set there is honored by the filter below.
    dotenvy::dotenv().ok();

    // Initialize structured logging
    let default_filter = if args.verbose {
        concat!(env!("CARGO_PKG_NAME"), "=debug")
    } else {
        concat!(env!("CARGO_PKG_NAME"), "=info")
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Tailor v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = cli::run(args.command).await {
        error!("Command failed: {e:?}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
