//! Data source adapter seam

use std::fmt::Debug;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Raw user payload as returned by the remote source, before formatting.
///
/// Unknown fields on the wire are ignored; the formatter only needs these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawUser {
    pub uid: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    /// ISO-parseable date string.
    pub date_of_birth: String,
}

/// Adapter over the remote random-user endpoint.
///
/// Both calls suspend on network I/O and fail with
/// [`DomainError::SourceUnavailable`]. The store does not retry; failures
/// propagate to the caller of the operation that triggered the fetch.
#[async_trait]
pub trait UserSource: Send + Sync + Debug {
    /// Fetch one randomly generated raw record.
    async fn fetch_one(&self) -> Result<RawUser, DomainError>;

    /// Fetch `count` raw records, in source document order.
    async fn fetch_many(&self, count: usize) -> Result<Vec<RawUser>, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use tokio::sync::RwLock;

    /// Mock user source for testing
    ///
    /// `fetch_many` serves the first `count` scripted records without
    /// consuming them; `fetch_one` consumes from the front so successive
    /// adds yield distinct records.
    #[derive(Debug, Default)]
    pub struct MockUserSource {
        records: RwLock<Vec<RawUser>>,
        should_fail: RwLock<bool>,
    }

    impl MockUserSource {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_records(records: Vec<RawUser>) -> Self {
            Self {
                records: RwLock::new(records),
                should_fail: RwLock::new(false),
            }
        }

        /// Set whether fetches should fail
        pub async fn set_should_fail(&self, fail: bool) {
            *self.should_fail.write().await = fail;
        }

        async fn check_should_fail(&self) -> Result<(), DomainError> {
            if *self.should_fail.read().await {
                return Err(DomainError::source_unavailable(
                    "Mock source configured to fail",
                ));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl UserSource for MockUserSource {
        async fn fetch_one(&self) -> Result<RawUser, DomainError> {
            self.check_should_fail().await?;
            let mut records = self.records.write().await;

            if records.is_empty() {
                return Err(DomainError::source_unavailable("Mock source exhausted"));
            }
            Ok(records.remove(0))
        }

        async fn fetch_many(&self, count: usize) -> Result<Vec<RawUser>, DomainError> {
            self.check_should_fail().await?;
            let records = self.records.read().await;
            Ok(records.iter().take(count).cloned().collect())
        }
    }
}
