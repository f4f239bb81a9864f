//! extbot: run the marketplace search bot. Config from env (`.env` is loaded first) and optional CLI args.

use anyhow::Result;
use clap::Parser;
use extbot_cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => extbot_telegram::run_bot(token).await,
    }
}
