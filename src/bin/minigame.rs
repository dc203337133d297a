//! Mini game binary
//!
//! Rock-paper-scissors in the terminal against a sandbox wallet.
//!
//! Options: --seed, --balance, --fail-claims, --address

use clap::Parser;
use minigame::terminal::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    minigame::log();
    let args = Args::parse();
    log::info!("starting with {:?}", args);
    Console::new(args.arcade()).run().await
}
