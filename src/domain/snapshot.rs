//! Durable snapshot slot seam

use std::fmt::Debug;

use async_trait::async_trait;

use super::error::DomainError;
use super::user::User;

/// Fixed key the roster snapshot is stored under.
pub const SNAPSHOT_SLOT: &str = "user-storage";

/// Persistence strategy for the full roster snapshot.
///
/// `load` runs once at store construction to seed in-memory state; `save`
/// runs after every successful mutation and overwrites the slot wholesale.
/// There is no transactional guarantee between a mutation and its write: a
/// crash in between loses at most that one mutation.
#[async_trait]
pub trait SnapshotStore: Send + Sync + Debug {
    /// Read the previously written snapshot, if any.
    async fn load(&self) -> Result<Option<Vec<User>>, DomainError>;

    /// Overwrite the slot with the full current snapshot.
    async fn save(&self, snapshot: &[User]) -> Result<(), DomainError>;
}
