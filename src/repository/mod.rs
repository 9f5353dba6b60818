//! Persistence traits and their Diesel implementation.

use crate::db::DbPool;
use crate::domain::school::{NewSchool, School};
use crate::domain::types::SchoolId;
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod school;

/// Rows per page for paginated listings.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Zero-based row offset; page `0` is treated as the first page.
    ///
    /// Saturates instead of overflowing for huge page numbers.
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1).saturating_mul(self.per_page)
    }
}

/// Filters applied when listing stored schools.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchoolListQuery {
    /// Case-insensitive substring matched against name or city.
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl SchoolListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait SchoolReader {
    fn get_school_by_id(&self, id: SchoolId) -> RepositoryResult<Option<School>>;
    /// Returns the total number of matches and the requested page.
    fn list_schools(&self, query: SchoolListQuery) -> RepositoryResult<(usize, Vec<School>)>;
}

pub trait SchoolWriter {
    fn create_school(&self, new_school: &NewSchool) -> RepositoryResult<School>;
}

/// Diesel-backed repository shared across handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<crate::db::DbConnection> {
        Ok(crate::db::get_connection(&self.pool)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_offset_starts_at_first_page() {
        assert_eq!(Pagination { page: 0, per_page: 20 }.offset(), 0);
        assert_eq!(Pagination { page: 1, per_page: 20 }.offset(), 0);
        assert_eq!(Pagination { page: 3, per_page: 20 }.offset(), 40);
    }

    #[test]
    fn pagination_offset_saturates() {
        let pagination = Pagination {
            page: usize::MAX,
            per_page: 20,
        };
        assert_eq!(pagination.offset(), usize::MAX);
    }

    #[test]
    fn list_query_builder_sets_fields() {
        let query = SchoolListQuery::new().search("noida").paginate(2, 5);
        assert_eq!(query.search.as_deref(), Some("noida"));
        assert_eq!(query.pagination, Some(Pagination { page: 2, per_page: 5 }));
    }
}
