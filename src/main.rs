use clap::Parser;
use user_roster::cli::{roster, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::List => roster::list().await,
        Command::Refresh => roster::refresh().await,
        Command::Add => roster::add().await,
        Command::Remove(args) => roster::remove(args).await,
    }
}
