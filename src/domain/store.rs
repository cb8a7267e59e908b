//! Record store - the single authoritative collection of user entities

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use tracing::{debug, warn};

use super::error::DomainError;
use super::snapshot::SnapshotStore;
use super::source::UserSource;
use super::user::{format_batch, format_user_now, User};

/// Handle returned by [`UserStore::subscribe`]; pass it back to
/// [`UserStore::unsubscribe`] to stop receiving notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Arc<dyn Fn(&[User]) + Send + Sync>;

/// Reactive, persisted collection of [`User`] entities.
///
/// The store is the sole owner of the snapshot: consumers read through
/// [`snapshot`](Self::snapshot) or a subscription and route every mutation
/// through the operations here. Index 0 holds the newest addition.
///
/// Mutations are atomic with respect to each other; fetches from the source
/// complete before the collection lock is taken, so the critical section
/// never suspends. Subscribers are invoked synchronously after each
/// successful mutation, outside the collection lock, and observe mutations
/// in the order they were issued.
pub struct UserStore {
    users: RwLock<Vec<User>>,
    subscribers: RwLock<HashMap<SubscriptionId, Subscriber>>,
    next_subscription: AtomicU64,
    source: Arc<dyn UserSource>,
    snapshots: Arc<dyn SnapshotStore>,
    batch_size: usize,
}

impl UserStore {
    /// Create an empty store.
    pub fn new(
        source: Arc<dyn UserSource>,
        snapshots: Arc<dyn SnapshotStore>,
        batch_size: usize,
    ) -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            subscribers: RwLock::new(HashMap::new()),
            next_subscription: AtomicU64::new(0),
            source,
            snapshots,
            batch_size,
        }
    }

    /// Create a store seeded from the persisted snapshot slot, when present.
    ///
    /// Whether to still call [`initialize`](Self::initialize) afterwards is
    /// the consumer's policy; the store takes the persisted roster as-is.
    pub async fn restore(
        source: Arc<dyn UserSource>,
        snapshots: Arc<dyn SnapshotStore>,
        batch_size: usize,
    ) -> Result<Self, DomainError> {
        let store = Self::new(source, snapshots, batch_size);

        if let Some(seed) = store.snapshots.load().await? {
            debug!(count = seed.len(), "Seeding store from persisted snapshot");
            *store.users_write() = seed;
        }

        Ok(store)
    }

    /// Replace the collection with a fresh batch from the source.
    ///
    /// Fetches `batch_size` raw records, formats them, and swaps the whole
    /// collection in document order. Notifies subscribers exactly once. On
    /// any fetch or formatting failure the existing collection is left
    /// untouched and no notification goes out.
    pub async fn initialize(&self) -> Result<(), DomainError> {
        let raws = self.source.fetch_many(self.batch_size).await?;
        let users = format_batch(&raws, Utc::now().date_naive())?;

        let count = users.len();
        *self.users_write() = users;
        debug!(count, "Roster replaced from source");

        self.persist_and_notify().await;
        Ok(())
    }

    /// Prepend `user` at index 0.
    ///
    /// No uniqueness check is performed against existing uids.
    pub async fn add(&self, user: User) {
        self.users_write().insert(0, user);
        self.persist_and_notify().await;
    }

    /// Fetch one raw record from the source, format it, and prepend it.
    ///
    /// Returns the inserted entity. On fetch failure nothing is inserted.
    pub async fn add_from_source(&self) -> Result<User, DomainError> {
        let raw = self.source.fetch_one().await?;
        let user = format_user_now(&raw)?;

        self.add(user.clone()).await;
        Ok(user)
    }

    /// Remove every record whose uid equals `uid`.
    ///
    /// Removing an unknown uid is a no-op that still notifies subscribers.
    pub async fn remove(&self, uid: &str) {
        self.users_write().retain(|user| user.uid() != uid);
        self.persist_and_notify().await;
    }

    /// The current collection, newest first. Does not mutate.
    pub fn snapshot(&self) -> Vec<User> {
        self.users_read().clone()
    }

    pub fn len(&self) -> usize {
        self.users_read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users_read().is_empty()
    }

    /// Register a callback invoked with the full collection after every
    /// successful mutation. Notification order across subscribers is
    /// unspecified; each subscriber observes every mutation. Callbacks run
    /// outside the store's locks, so subscribing or unsubscribing from
    /// within a callback is allowed.
    pub fn subscribe(&self, callback: impl Fn(&[User]) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.subscribers_write().insert(id, Arc::new(callback));
        id
    }

    /// Drop a subscription. Returns false when the handle is unknown.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers_write().remove(&id).is_some()
    }

    /// Write the snapshot slot, then notify subscribers.
    ///
    /// The write is fire-and-forget relative to the mutation: a failure is
    /// logged and subscribers are still notified.
    async fn persist_and_notify(&self) {
        let snapshot = self.snapshot();

        if let Err(error) = self.snapshots.save(&snapshot).await {
            warn!(%error, "Failed to persist roster snapshot");
        }

        // Snapshot the registry first: callbacks must not run under the
        // subscriber lock, or re-entrant subscribe/unsubscribe would
        // deadlock.
        let callbacks: Vec<Subscriber> = self.subscribers_read().values().cloned().collect();
        for callback in callbacks {
            callback(&snapshot);
        }
    }

    // The critical sections below never panic or suspend; recover a
    // poisoned guard rather than surface it.

    fn users_read(&self) -> RwLockReadGuard<'_, Vec<User>> {
        self.users.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn users_write(&self) -> RwLockWriteGuard<'_, Vec<User>> {
        self.users.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn subscribers_read(&self) -> RwLockReadGuard<'_, HashMap<SubscriptionId, Subscriber>> {
        self.subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn subscribers_write(&self) -> RwLockWriteGuard<'_, HashMap<SubscriptionId, Subscriber>> {
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for UserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserStore")
            .field("users", &self.len())
            .field("subscribers", &self.subscribers_read().len())
            .field("batch_size", &self.batch_size)
            .finish_non_exhaustive()
    }
}
