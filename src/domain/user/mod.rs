//! User entity and the formatting pipeline that produces it

mod entity;
mod formatter;

pub use entity::User;
pub use formatter::{format_batch, format_user, format_user_now};
