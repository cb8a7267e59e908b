//! Infrastructure layer - remote source and persistence implementations

pub mod logging;
pub mod snapshot;
pub mod source;
