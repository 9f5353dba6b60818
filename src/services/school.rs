//! Services coordinating school registration and lookup.

use crate::domain::school::School;
use crate::dto::api::{SchoolsQuery, SchoolsResponse};
use crate::forms::school::{AddSchoolForm, AddSchoolPayload};
use crate::repository::{DEFAULT_ITEMS_PER_PAGE, SchoolListQuery, SchoolReader, SchoolWriter};
use crate::services::{ServiceError, ServiceResult};
use crate::storage::{ImageWriter, StorageError};

/// Validates the submission, stores its image and inserts the school.
///
/// The image is written before the row; when the insert fails the stored file
/// is left behind.
pub fn add_school<R, S>(form: AddSchoolForm, repo: &R, images: &S) -> ServiceResult<School>
where
    R: SchoolWriter + ?Sized,
    S: ImageWriter + ?Sized,
{
    let payload = AddSchoolPayload::try_from(form).map_err(|err| {
        log::warn!("Rejected school submission: {err}");
        ServiceError::from(err)
    })?;

    let (fields, upload) = payload.into_parts();

    let mut source = upload.open().map_err(|source| StorageError::Read {
        path: upload.file.file.path().to_path_buf(),
        source,
    })?;

    let image = images
        .store_image(&upload.file_name, &mut source)
        .map_err(|err| {
            log::error!("Failed to store school image: {err}");
            err
        })?;

    let school = repo
        .create_school(&fields.into_new_school(image))
        .map_err(|err| {
            log::error!("Failed to add a school: {err}");
            err
        })?;

    log::info!("Added school #{} ({})", school.id, school.name);

    Ok(school)
}

/// Returns the stored schools matching the query.
pub fn list_schools<R>(repo: &R, params: SchoolsQuery) -> ServiceResult<SchoolsResponse>
where
    R: SchoolReader + ?Sized,
{
    let mut query = SchoolListQuery::new();

    if let Some(page) = params.page {
        query = query.paginate(page, DEFAULT_ITEMS_PER_PAGE);
    }

    if let Some(term) = params
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
    {
        query = query.search(term);
    }

    let (total, schools) = repo.list_schools(query).map_err(|err| {
        log::error!("Failed to list schools: {err}");
        err
    })?;

    Ok(SchoolsResponse {
        total,
        schools: schools.into_iter().map(Into::into).collect(),
    })
}
