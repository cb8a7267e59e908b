//! In-memory snapshot slot

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::snapshot::SnapshotStore;
use crate::domain::user::User;
use crate::domain::DomainError;

/// Thread-safe in-memory snapshot slot.
///
/// Useful for testing and development. Data is lost when the process
/// terminates.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    slot: RwLock<Option<Vec<User>>>,
}

impl InMemorySnapshotStore {
    /// Creates a new empty slot
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn load(&self) -> Result<Option<Vec<User>>, DomainError> {
        let slot = self
            .slot
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {e}")))?;

        Ok(slot.clone())
    }

    async fn save(&self, snapshot: &[User]) -> Result<(), DomainError> {
        let mut slot = self
            .slot
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {e}")))?;

        *slot = Some(snapshot.to_vec());
        Ok(())
    }
}
