//! Snapshot infrastructure - snapshot slot implementations

mod in_memory;
mod json_file;

pub use in_memory::InMemorySnapshotStore;
pub use json_file::JsonFileSnapshotStore;
