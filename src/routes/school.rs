use actix_multipart::form::MultipartForm;
use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::api::SCHOOL_CREATED;
use crate::forms::school::AddSchoolForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::school as school_service;
use crate::storage::DiskImageStorage;

const ADD_SCHOOL_FAILED: &str = "Something went wrong while adding the school.";

#[get("/addSchool")]
pub async fn show_add_school(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, "add_school");
    render_template(&tera, "school/add.html", &context)
}

#[post("/addSchool")]
pub async fn submit_add_school(
    repo: web::Data<DieselRepository>,
    images: web::Data<DiskImageStorage>,
    MultipartForm(form): MultipartForm<AddSchoolForm>,
) -> impl Responder {
    match school_service::add_school(form, repo.get_ref(), images.get_ref()) {
        Ok(_) => {
            FlashMessage::success(SCHOOL_CREATED).send();
        }
        Err(ServiceError::Validation(errors)) => {
            FlashMessage::error(errors.join(", ")).send();
        }
        Err(err) => {
            log::error!("Error adding school: {err}");
            FlashMessage::error(ADD_SCHOOL_FAILED).send();
        }
    }

    redirect("/addSchool")
}
