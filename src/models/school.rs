use diesel::prelude::*;

use crate::domain::school::{NewSchool as DomainNewSchool, School as DomainSchool};
use crate::domain::types::{
    CityName, ContactNumber, ImagePath, SchoolAddress, SchoolEmail, SchoolId, SchoolName,
    StateName, TypeConstraintError,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::schools)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::school::School`].
pub struct School {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub contact: i64,
    pub email_id: String,
    pub image: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::schools)]
/// Insertable form of [`School`].
pub struct NewSchool<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub contact: i64,
    pub email_id: &'a str,
    pub image: &'a str,
}

impl TryFrom<School> for DomainSchool {
    type Error = TypeConstraintError;

    fn try_from(school: School) -> Result<Self, Self::Error> {
        Ok(Self {
            id: SchoolId::new(school.id)?,
            name: SchoolName::new(school.name)?,
            address: SchoolAddress::new(school.address)?,
            city: CityName::new(school.city)?,
            state: StateName::new(school.state)?,
            contact: ContactNumber::from_stored(school.contact)?,
            email_id: SchoolEmail::new(school.email_id)?,
            image: ImagePath::new(school.image)?,
        })
    }
}

impl<'a> From<&'a DomainNewSchool> for NewSchool<'a> {
    fn from(school: &'a DomainNewSchool) -> Self {
        Self {
            name: school.name.as_str(),
            address: school.address.as_str(),
            city: school.city.as_str(),
            state: school.state.as_str(),
            contact: school.contact.to_stored(),
            email_id: school.email_id.as_str(),
            image: school.image.as_str(),
        }
    }
}
