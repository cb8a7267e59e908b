//! Source infrastructure - user source implementations

mod http;

pub use http::HttpUserSource;
