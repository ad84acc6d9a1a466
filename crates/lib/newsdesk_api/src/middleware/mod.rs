//! Request middleware.

pub mod auth;
pub mod db_gate;
