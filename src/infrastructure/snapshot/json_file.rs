//! JSON file snapshot slot

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::snapshot::{SnapshotStore, SNAPSHOT_SLOT};
use crate::domain::user::User;
use crate::domain::DomainError;

/// Durable snapshot slot persisted as `<dir>/user-storage.json`.
#[derive(Debug, Clone)]
pub struct JsonFileSnapshotStore {
    path: PathBuf,
}

impl JsonFileSnapshotStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{SNAPSHOT_SLOT}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SnapshotStore for JsonFileSnapshotStore {
    async fn load(&self) -> Result<Option<Vec<User>>, DomainError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(DomainError::storage(format!(
                    "Failed to read snapshot slot: {e}"
                )));
            }
        };

        let users = serde_json::from_slice(&bytes)
            .map_err(|e| DomainError::storage(format!("Corrupt snapshot slot: {e}")))?;

        Ok(Some(users))
    }

    async fn save(&self, snapshot: &[User]) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                DomainError::storage(format!("Failed to create snapshot directory: {e}"))
            })?;
        }

        let bytes = serde_json::to_vec_pretty(snapshot)
            .map_err(|e| DomainError::storage(format!("Failed to serialize snapshot: {e}")))?;

        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to write snapshot slot: {e}")))?;

        debug!(path = %self.path.display(), count = snapshot.len(), "Snapshot written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn user(uid: &str) -> User {
        User::new(uid, "Ada", "Lovelace", "ada", 30, "R$ 1234,00")
    }

    #[tokio::test]
    async fn test_missing_file_loads_none() {
        let dir = tempdir().unwrap();
        let store = JsonFileSnapshotStore::new(dir.path());

        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip_in_order() {
        let dir = tempdir().unwrap();
        let store = JsonFileSnapshotStore::new(dir.path());
        let snapshot = vec![user("a"), user("b")];

        store.save(&snapshot).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(snapshot));
    }

    #[tokio::test]
    async fn test_slot_file_uses_fixed_key() {
        let dir = tempdir().unwrap();
        let store = JsonFileSnapshotStore::new(dir.path());

        store.save(&[user("a")]).await.unwrap();

        assert_eq!(store.path(), dir.path().join("user-storage.json"));
        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn test_save_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let store = JsonFileSnapshotStore::new(dir.path().join("nested/data"));

        store.save(&[user("a")]).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(vec![user("a")]));
    }

    #[tokio::test]
    async fn test_corrupt_slot_is_storage_error() {
        let dir = tempdir().unwrap();
        let store = JsonFileSnapshotStore::new(dir.path());
        tokio::fs::write(store.path(), b"{ not json").await.unwrap();

        let error = store.load().await.unwrap_err();
        assert!(matches!(error, DomainError::Storage { .. }));
    }
}
