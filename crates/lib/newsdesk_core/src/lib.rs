//! # newsdesk_core
//!
//! Core domain logic for Newsdesk.

pub mod articles;
pub mod auth;
pub mod db;
pub mod migrate;
pub mod models;
pub mod uuid;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
