//! Request handlers.

pub mod accounts;
pub mod articles;
pub mod auth;
pub mod index;
