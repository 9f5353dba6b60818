use actix_cors::Cors;
use actix_files::Files;
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use crate::db::establish_connection_pool;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::api::{create_school, list_schools, multipart_config};
use crate::routes::listing::{index, show_schools};
use crate::routes::school::{show_add_school, submit_add_school};
use crate::storage::{DiskImageStorage, IMAGE_DIR};

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);

    let images = DiskImageStorage::new(&server_config.public_dir);
    std::fs::create_dir_all(images.upload_dir())?;

    // Flash messages carry form notifications across the post/redirect cycle.
    let secret_key = Key::try_from(server_config.secret.as_bytes())
        .map_err(|e| std::io::Error::other(format!("Invalid secret key: {e}")))?;

    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Serving school directory on {}:{}",
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new(&format!("/{IMAGE_DIR}"), images.upload_dir()))
            .service(
                web::scope("/api")
                    .app_data(multipart_config())
                    .service(create_school)
                    .service(list_schools),
            )
            .service(index)
            .service(show_schools)
            .service(show_add_school)
            .service(submit_add_school)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(images.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
