//! DTOs shaped for the school listing template.

use serde::{Deserialize, Serialize};

use crate::domain::listing::SampleSchool;

/// Query parameters of `GET /showSchools`.
#[derive(Debug, Default, Deserialize)]
pub struct ShowSchoolsQuery {
    pub search: Option<String>,
}

/// Data required to render the listing page.
#[derive(Debug, Serialize)]
pub struct ShowSchoolsPageData {
    pub schools: Vec<SampleSchool>,
    /// Search term echoed back into the search box.
    pub search_query: Option<String>,
}
