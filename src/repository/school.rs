use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::school::{NewSchool, School};
use crate::domain::types::SchoolId;
use crate::models::school::{NewSchool as DbNewSchool, School as DbSchool};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, SchoolListQuery, SchoolReader, SchoolWriter};
use crate::schema::schools;

/// Escapes `LIKE` wildcards so the term matches literally.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// `LIMIT`/`OFFSET` operand, clamped to what SQLite accepts.
fn to_sql_count(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Schools whose name or city contains `search`.
///
/// SQLite `LIKE` is case-insensitive for ASCII, which matches the listing page.
fn filtered(search: Option<&str>) -> schools::BoxedQuery<'static, Sqlite> {
    let mut query = schools::table.into_boxed();
    if let Some(term) = search.map(str::trim).filter(|t| !t.is_empty()) {
        let pattern = like_pattern(term);
        query = query.filter(
            schools::name
                .like(pattern.clone())
                .escape('\\')
                .or(schools::city.like(pattern).escape('\\')),
        );
    }
    query
}

impl SchoolReader for DieselRepository {
    fn get_school_by_id(&self, id: SchoolId) -> RepositoryResult<Option<School>> {
        let mut conn = self.conn()?;

        let school = schools::table
            .find(id.get())
            .select(DbSchool::as_select())
            .first::<DbSchool>(&mut conn)
            .optional()?;

        Ok(school.map(School::try_from).transpose()?)
    }

    fn list_schools(&self, query: SchoolListQuery) -> RepositoryResult<(usize, Vec<School>)> {
        let mut conn = self.conn()?;

        let total: i64 = filtered(query.search.as_deref()).count().get_result(&mut conn)?;

        let mut items = filtered(query.search.as_deref()).order(schools::id.asc());
        if let Some(pagination) = &query.pagination {
            items = items
                .limit(to_sql_count(pagination.per_page))
                .offset(to_sql_count(pagination.offset()));
        }

        let page = items
            .select(DbSchool::as_select())
            .load::<DbSchool>(&mut conn)?
            .into_iter()
            .map(School::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((total as usize, page))
    }
}

impl SchoolWriter for DieselRepository {
    fn create_school(&self, new_school: &NewSchool) -> RepositoryResult<School> {
        let mut conn = self.conn()?;

        let insertable: DbNewSchool = new_school.into();
        let created = diesel::insert_into(schools::table)
            .values(&insertable)
            .returning(DbSchool::as_returning())
            .get_result::<DbSchool>(&mut conn)?;

        Ok(School::try_from(created)?)
    }
}
