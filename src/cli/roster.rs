//! Roster subcommand implementations

use clap::Args;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{User, UserStore};
use crate::infrastructure::logging;

#[derive(Args)]
pub struct RemoveArgs {
    /// uid of the record to remove
    pub uid: String,
}

pub async fn list() -> anyhow::Result<()> {
    let store = bootstrap().await?;

    // Trust the persisted roster when one exists; only hit the source on a
    // cold start.
    if store.is_empty() {
        store.initialize().await?;
    }

    print_roster(&store.snapshot());
    Ok(())
}

pub async fn refresh() -> anyhow::Result<()> {
    let store = bootstrap().await?;
    store.initialize().await?;

    print_roster(&store.snapshot());
    Ok(())
}

pub async fn add() -> anyhow::Result<()> {
    let store = bootstrap().await?;
    let user = store.add_from_source().await?;

    info!(uid = user.uid(), "User added");
    print_roster(&[user]);
    Ok(())
}

pub async fn remove(args: RemoveArgs) -> anyhow::Result<()> {
    let store = bootstrap().await?;
    store.remove(&args.uid).await;

    info!(uid = %args.uid, "User removed");
    Ok(())
}

async fn bootstrap() -> anyhow::Result<UserStore> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    Ok(crate::create_store(&config).await?)
}

fn print_roster(users: &[User]) {
    println!(
        "{:<38} {:<14} {:<14} {:<22} {:>4} {:>14}",
        "uid", "first_name", "last_name", "username", "age", "salary"
    );

    for user in users {
        println!(
            "{:<38} {:<14} {:<14} {:<22} {:>4} {:>14}",
            user.uid(),
            user.first_name(),
            user.last_name(),
            user.username(),
            user.age(),
            user.salary()
        );
    }
}
