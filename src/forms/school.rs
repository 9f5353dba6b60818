//! Multipart form for registering a school and its validation rules.

use std::fs::File;
use std::io;

use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};

use crate::domain::school::NewSchool;
use crate::domain::types::{
    CityName, ContactNumber, ImagePath, SchoolAddress, SchoolEmail, SchoolName, StateName,
    TypeConstraintError,
};
use crate::forms::FormError;

pub const NAME_REQUIRED: &str = "Name is required";
pub const ADDRESS_REQUIRED: &str = "Address is required";
pub const CITY_REQUIRED: &str = "City is required";
pub const STATE_REQUIRED: &str = "State is required";
pub const CONTACT_REQUIRED: &str = "Contact is required";
pub const CONTACT_FORMAT: &str = "Contact must be 10 digits";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_FORMAT: &str = "Invalid email format";
pub const IMAGE_REQUIRED: &str = "Image file is required";

/// Raw submission; every part is optional so that missing fields surface as
/// validation messages rather than extractor failures.
#[derive(MultipartForm)]
pub struct AddSchoolForm {
    pub name: Option<Text<String>>,
    pub address: Option<Text<String>>,
    pub city: Option<Text<String>>,
    pub state: Option<Text<String>>,
    pub contact: Option<Text<String>>,
    pub email_id: Option<Text<String>>,
    #[multipart(limit = "10MB")]
    pub image: Option<TempFile>,
}

/// Uploaded image that passed validation.
pub struct ImageUpload {
    /// Name declared by the client, unsanitized.
    pub file_name: String,
    pub file: TempFile,
}

impl ImageUpload {
    /// Opens the spooled upload from the beginning.
    pub fn open(&self) -> io::Result<File> {
        File::open(self.file.file.path())
    }
}

/// Fully validated submission.
pub struct AddSchoolPayload {
    pub name: SchoolName,
    pub address: SchoolAddress,
    pub city: CityName,
    pub state: StateName,
    pub contact: ContactNumber,
    pub email_id: SchoolEmail,
    pub image: ImageUpload,
}

impl AddSchoolPayload {
    /// Separates the text fields from the upload so the image can be stored
    /// before the record is built.
    pub fn into_parts(self) -> (SchoolFields, ImageUpload) {
        let fields = SchoolFields {
            name: self.name,
            address: self.address,
            city: self.city,
            state: self.state,
            contact: self.contact,
            email_id: self.email_id,
        };
        (fields, self.image)
    }
}

/// Validated text fields waiting for the stored image path.
pub struct SchoolFields {
    pub name: SchoolName,
    pub address: SchoolAddress,
    pub city: CityName,
    pub state: StateName,
    pub contact: ContactNumber,
    pub email_id: SchoolEmail,
}

impl SchoolFields {
    pub fn into_new_school(self, image: ImagePath) -> NewSchool {
        NewSchool::new(
            self.name,
            self.address,
            self.city,
            self.state,
            self.contact,
            self.email_id,
            image,
        )
    }
}

/// Text content of a part, `None` when absent or blank.
fn submitted(value: Option<Text<String>>) -> Option<String> {
    value.map(|text| text.0).filter(|s| !s.trim().is_empty())
}

/// Parses a submitted field, recording `missing` or `invalid` on failure.
fn check<T>(
    value: Option<Text<String>>,
    missing: &str,
    invalid: &str,
    parse: impl FnOnce(String) -> Result<T, TypeConstraintError>,
    errors: &mut Vec<String>,
) -> Option<T> {
    let Some(value) = submitted(value) else {
        errors.push(missing.to_string());
        return None;
    };
    match parse(value) {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            errors.push(invalid.to_string());
            None
        }
    }
}

impl TryFrom<AddSchoolForm> for AddSchoolPayload {
    type Error = FormError;

    /// Validates every field, collecting all failures instead of stopping at
    /// the first one.
    fn try_from(form: AddSchoolForm) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();

        let name = check(form.name, NAME_REQUIRED, NAME_REQUIRED, SchoolName::new, &mut errors);
        let address = check(
            form.address,
            ADDRESS_REQUIRED,
            ADDRESS_REQUIRED,
            SchoolAddress::new,
            &mut errors,
        );
        let city = check(form.city, CITY_REQUIRED, CITY_REQUIRED, CityName::new, &mut errors);
        let state = check(form.state, STATE_REQUIRED, STATE_REQUIRED, StateName::new, &mut errors);
        let contact = check(
            form.contact,
            CONTACT_REQUIRED,
            CONTACT_FORMAT,
            ContactNumber::new,
            &mut errors,
        );
        let email_id = check(
            form.email_id,
            EMAIL_REQUIRED,
            EMAIL_FORMAT,
            SchoolEmail::new,
            &mut errors,
        );

        let image = form.image.and_then(|file| {
            let file_name = file.file_name.clone().filter(|n| !n.trim().is_empty())?;
            Some(ImageUpload { file_name, file })
        });
        if image.is_none() {
            errors.push(IMAGE_REQUIRED.to_string());
        }

        match (name, address, city, state, contact, email_id, image) {
            (
                Some(name),
                Some(address),
                Some(city),
                Some(state),
                Some(contact),
                Some(email_id),
                Some(image),
            ) => Ok(Self {
                name,
                address,
                city,
                state,
                contact,
                email_id,
                image,
            }),
            _ => Err(FormError::Invalid(errors)),
        }
    }
}
