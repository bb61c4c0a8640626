//! Tic-tac-toe terminal client.

use anyhow::Result;
use clap::Parser;
use tictactoe_client::ClientSettings;
use tictactoe_client::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = cli.apply(ClientSettings::load(&cli.config)?);

    tictactoe_client::tui::run_tui(settings).await
}
