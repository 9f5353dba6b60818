//! Form definitions backing the directory routes.

use thiserror::Error;

pub mod school;

#[derive(Debug, Error, PartialEq, Eq)]
/// Errors that can occur when processing form data.
pub enum FormError {
    /// One message per failing field, in form order.
    #[error("{}", .0.join(", "))]
    Invalid(Vec<String>),
}
