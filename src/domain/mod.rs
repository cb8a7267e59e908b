//! Domain layer - entities, the formatting pipeline, and trait seams

pub mod error;
pub mod snapshot;
pub mod source;
pub mod store;
pub mod user;

pub use error::DomainError;
pub use snapshot::{SnapshotStore, SNAPSHOT_SLOT};
pub use source::{RawUser, UserSource};
pub use store::{SubscriptionId, UserStore};
pub use user::{format_batch, format_user, format_user_now, User};
