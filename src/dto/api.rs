//! JSON bodies of the `/api/schools` endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::school::School;

/// Message returned alongside a freshly created school.
pub const SCHOOL_CREATED: &str = "School added successfully";
/// Generic label of every 500 response.
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Transport shape of a school: flat strings, contact included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SchoolResponse {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub contact: String,
    pub email_id: String,
    pub image: String,
}

impl From<School> for SchoolResponse {
    fn from(school: School) -> Self {
        Self {
            id: school.id.get(),
            name: school.name.into_inner(),
            address: school.address.into_inner(),
            city: school.city.into_inner(),
            state: school.state.into_inner(),
            contact: school.contact.into_inner(),
            email_id: school.email_id.into_inner(),
            image: school.image.into_inner(),
        }
    }
}

/// `201 Created` body.
#[derive(Debug, Serialize, Deserialize)]
pub struct SchoolCreatedResponse {
    pub message: String,
    pub school: SchoolResponse,
}

impl From<School> for SchoolCreatedResponse {
    fn from(school: School) -> Self {
        Self {
            message: SCHOOL_CREATED.to_string(),
            school: school.into(),
        }
    }
}

/// `400 Bad Request` body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<String>,
}

/// `500 Internal Server Error` body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
}

impl ErrorResponse {
    pub fn internal(details: impl Into<String>) -> Self {
        Self {
            error: INTERNAL_SERVER_ERROR.to_string(),
            details: details.into(),
        }
    }
}

/// Query parameters accepted by `GET /api/schools`.
#[derive(Debug, Default, Deserialize)]
pub struct SchoolsQuery {
    /// Optional free-form search string applied to name and city.
    pub search: Option<String>,
    /// Optional page number for pagination.
    pub page: Option<usize>,
}

/// `GET /api/schools` body.
#[derive(Debug, Serialize, Deserialize)]
pub struct SchoolsResponse {
    /// Total number of schools matching the filter.
    pub total: usize,
    pub schools: Vec<SchoolResponse>,
}
