//! TalentHub CLI - serve the job board frontend
//!
//! ```bash
//! talenthub serve                          # Serve frontend/dist on port 8080
//! talenthub serve --port 3000 --dist dist  # Override env values
//! ```
//!
//! Environment variables (or a `.env` file): `HOST`, `PORT`, `DIST_DIR`,
//! `ALLOWED_ORIGINS`, `RUST_LOG`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use talenthub::{
    start_server,
    telemetry::{get_subscriber, init_subscriber},
    ServerConfig, ServerResult,
};

#[derive(Parser)]
#[command(name = "talenthub")]
#[command(about = "Serve the TalentHub job board frontend", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        /// Address to bind (overrides HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Frontend bundle directory (overrides DIST_DIR)
        #[arg(short, long)]
        dist: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    init_subscriber(get_subscriber("info"));

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { host, port, dist } => cmd_serve(host, port, dist).await,
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn cmd_serve(
    host: Option<String>,
    port: Option<u16>,
    dist: Option<PathBuf>,
) -> ServerResult<()> {
    let config = ServerConfig::from_env()?.with_overrides(host, port, dist);
    start_server(&config).await
}
