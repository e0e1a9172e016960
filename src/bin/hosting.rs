//! Hosting Server Binary
//!
//! Runs the HTTP server for playing rock-paper-scissors against the computer.
//! See `hosting --help` for configuration flags and their environment variables.

use clap::Parser;
use roshambo::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    kys();
    let config = hosting::Config::parse();
    let arena = hosting::Arena::configure(&config).await?;
    hosting::Server::run(&config, arena).await?;
    Ok(())
}
