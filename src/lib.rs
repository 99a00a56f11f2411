//! Filedock - a small HTTP/1.1 file server
//!
//! Core library for request parsing, routing and the built-in handlers.

pub mod config;
pub mod handlers;
pub mod http;
pub mod server;
