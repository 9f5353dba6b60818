//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::school::{NewSchool, School};
use crate::domain::types::SchoolId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{SchoolListQuery, SchoolReader, SchoolWriter};

mock! {
    pub Repository {}

    impl SchoolReader for Repository {
        fn get_school_by_id(&self, id: SchoolId) -> RepositoryResult<Option<School>>;
        fn list_schools(&self, query: SchoolListQuery) -> RepositoryResult<(usize, Vec<School>)>;
    }

    impl SchoolWriter for Repository {
        fn create_school(&self, new_school: &NewSchool) -> RepositoryResult<School>;
    }
}
