use actix_multipart::MultipartError;
use actix_multipart::form::{MultipartForm, MultipartFormConfig};
use actix_web::error::InternalError;
use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};

use crate::dto::api::{ErrorResponse, SchoolCreatedResponse, SchoolsQuery, ValidationErrorResponse};
use crate::forms::school::AddSchoolForm;
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::school as school_service;
use crate::storage::DiskImageStorage;

/// Multipart settings for the JSON API: malformed bodies answer with the
/// same `{ "errors": [...] }` shape as validation failures.
pub fn multipart_config() -> MultipartFormConfig {
    MultipartFormConfig::default().error_handler(multipart_error_handler)
}

fn multipart_error_handler(err: MultipartError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected multipart body: {err}");
    let response = HttpResponse::BadRequest().json(ValidationErrorResponse {
        errors: vec![err.to_string()],
    });
    InternalError::from_response(err, response).into()
}

/// Translates a service failure into the API error bodies.
fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Validation(errors) => {
            HttpResponse::BadRequest().json(ValidationErrorResponse { errors })
        }
        err => {
            log::error!("Error handling school request: {err}");
            HttpResponse::InternalServerError().json(ErrorResponse::internal(err.to_string()))
        }
    }
}

#[post("/schools")]
pub async fn create_school(
    repo: web::Data<DieselRepository>,
    images: web::Data<DiskImageStorage>,
    MultipartForm(form): MultipartForm<AddSchoolForm>,
) -> impl Responder {
    match school_service::add_school(form, repo.get_ref(), images.get_ref()) {
        Ok(school) => HttpResponse::Created().json(SchoolCreatedResponse::from(school)),
        Err(err) => error_response(err),
    }
}

#[get("/schools")]
pub async fn list_schools(
    params: web::Query<SchoolsQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match school_service::list_schools(repo.get_ref(), params.into_inner()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => error_response(err),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;

    use super::*;
    use crate::repository::errors::RepositoryError;

    #[actix_web::test]
    async fn validation_errors_are_bad_requests() {
        let response = error_response(ServiceError::Validation(vec![
            "Name is required".to_string(),
        ]));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "errors": ["Name is required"] }));
    }

    #[actix_web::test]
    async fn other_errors_are_internal() {
        let response = error_response(ServiceError::Repository(RepositoryError::DatabaseError(
            "database is locked".to_string(),
        )));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Internal Server Error");
        assert_eq!(json["details"], "Database error: database is locked");
    }
}
