mod handlers;
mod models;
mod pg;
mod service;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::web;
use log::info;
use pg::PgBeerService;
use service::BeerService;
use shuttle_actix_web::ShuttleActixWeb;
use sqlx::PgPool;

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] connection_string: String,
) -> ShuttleActixWeb<impl FnOnce(&mut actix_web::web::ServiceConfig) + Send + Clone + 'static> {
    info!("Starting brewery API...");

    let connection_string = if connection_string.contains('?') {
        format!("{}&sslmode=require", connection_string)
    } else {
        format!("{}?sslmode=require", connection_string)
    };

    let pool = PgPool::connect(&connection_string)
        .await
        .expect("Failed to create PgPool");
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed migrations");

    let beer_service: Arc<dyn BeerService> = Arc::new(PgBeerService::new(pool));
    let beer_service = web::Data::from(beer_service);

    let config = move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(beer_service.clone()).service(
            actix_web::web::scope("")
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .service(handlers::get_beer_by_id)
                .service(handlers::list_beers),
        );
    };

    Ok(config.into())
}
