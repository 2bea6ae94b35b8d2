//! stationwatch main entrypoint.

use clap::Parser;
use stationwatch::server;

/// Check-in tracker API server.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Override the SQLite database path from the config
    #[arg(long)]
    db: Option<String>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();
    server::run_server(cli.config.as_deref(), cli.db.as_deref()).await
}
