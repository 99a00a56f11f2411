//! Built-in request handlers
//!
//! Each handler turns a routed request into a complete [`Response`]. None of
//! them fail: errors are reported through the status code.
//!
//! [`Response`]: crate::http::response::Response

pub mod files;
pub mod text;
