// Gitstr Auth: Application Entry Point
//
// Parses CLI arguments, initializes structured logging (to stderr, never
// including key material) and dispatches to the command handler.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gitstr_auth::cli::{execute, Cli};

#[tokio::main]
async fn main() {
    // RUST_LOG=gitstr_auth=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gitstr_auth=warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = execute(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
