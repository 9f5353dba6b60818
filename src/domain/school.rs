use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CityName, ContactNumber, ImagePath, SchoolAddress, SchoolEmail, SchoolId, SchoolName,
    StateName,
};

/// A school stored in the directory.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct School {
    pub id: SchoolId,
    pub name: SchoolName,
    pub address: SchoolAddress,
    pub city: CityName,
    pub state: StateName,
    pub contact: ContactNumber,
    pub email_id: SchoolEmail,
    /// Public path of the uploaded image.
    pub image: ImagePath,
}

/// Validated school details ready to be inserted.
#[derive(Clone, Debug, PartialEq)]
pub struct NewSchool {
    pub name: SchoolName,
    pub address: SchoolAddress,
    pub city: CityName,
    pub state: StateName,
    pub contact: ContactNumber,
    pub email_id: SchoolEmail,
    pub image: ImagePath,
}

impl NewSchool {
    #[must_use]
    pub fn new(
        name: SchoolName,
        address: SchoolAddress,
        city: CityName,
        state: StateName,
        contact: ContactNumber,
        email_id: SchoolEmail,
        image: ImagePath,
    ) -> Self {
        Self {
            name,
            address,
            city,
            state,
            contact,
            email_id,
            image,
        }
    }
}
