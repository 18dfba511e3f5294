//! Data models shared across the engine and its callers.

pub mod config;
pub mod filing;
