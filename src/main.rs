use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use dotenvy::dotenv;
use std::sync::Arc;

use staff_page::config::Config;
use staff_page::db::init_db;
use staff_page::routes;
use staff_page::store::{PgEmployeeStore, RecordSource};

use tracing::info;
use tracing_appender::rolling;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    let config = Config::from_env();

    // Rolling daily log
    let file_appender = rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("Server starting...");

    let pool = init_db(&config.database_url).await;

    // One shared read-only store client, injected into every page load.
    let store: Arc<dyn RecordSource> = Arc::new(PgEmployeeStore::new(pool));
    let store_data = Data::from(store);

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .app_data(store_data.clone())
            .configure(routes::configure)
    })
    .bind(config.server_addr)?
    .run()
    .await
}
