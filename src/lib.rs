//! User Roster
//!
//! Reactive record store for user entities backed by a random-user HTTP
//! source, with support for:
//! - Derived-field formatting (age from birthdate, synthetic salary)
//! - Publish/subscribe change notification
//! - Pluggable snapshot persistence (JSON file, in-memory)

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{DomainError, SubscriptionId, User, UserStore};

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use infrastructure::snapshot::JsonFileSnapshotStore;
use infrastructure::source::HttpUserSource;

/// Build a store wired to the HTTP source and the JSON file snapshot slot,
/// seeded from a previously persisted snapshot when one exists.
pub async fn create_store(config: &AppConfig) -> Result<UserStore, DomainError> {
    let source = Arc::new(HttpUserSource::with_timeout(
        config.source.base_url.as_str(),
        Duration::from_secs(config.source.timeout_secs),
    ));
    let snapshots = Arc::new(JsonFileSnapshotStore::new(&config.storage.path));

    let store = UserStore::restore(source, snapshots, config.source.batch_size).await?;
    info!(seeded = store.len(), "User store ready");

    Ok(store)
}
