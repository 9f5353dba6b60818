//! Database and configuration models shared across the directory service.

#[cfg(feature = "server")]
pub mod config;
pub mod school;
