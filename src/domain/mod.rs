//! Domain aggregates exposed by the directory service layer.

pub mod listing;
pub mod school;
pub mod types;
