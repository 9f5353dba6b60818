use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::dto::listing::ShowSchoolsQuery;
use crate::routes::{base_context, redirect, render_template};
use crate::services::listing::load_show_schools;

#[get("/")]
pub async fn index() -> impl Responder {
    redirect("/showSchools")
}

#[get("/showSchools")]
pub async fn show_schools(
    query: web::Query<ShowSchoolsQuery>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = load_show_schools(query.into_inner());

    let mut context = base_context(&flash_messages, "show_schools");
    context.insert("schools", &data.schools);
    context.insert("search_query", &data.search_query);

    render_template(&tera, "school/list.html", &context)
}
