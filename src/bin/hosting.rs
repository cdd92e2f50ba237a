//! Hosting Server Binary
//!
//! Serves backgammon rooms over WebSocket at `/ws`.

use clap::Parser;
use tavla::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    kys();
    hosting::Server::run(hosting::Config::parse()).await
}
