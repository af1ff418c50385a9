use actix_web::{get, web, HttpResponse, Responder};
use log::{error, info};
use serde::Deserialize;
use uuid::Uuid;

use crate::models::{BeerStyle, PageRequest};
use crate::service::BeerService;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBeersParams {
    pub beer_name: Option<String>,
    pub beer_style: Option<BeerStyle>,
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
}

#[get("/api/v1/beer/{id}")]
pub async fn get_beer_by_id(
    service: web::Data<dyn BeerService>,
    id: web::Path<Uuid>,
) -> impl Responder {
    info!("GET /api/v1/beer/{}", id);
    match service.find_beer_by_id(*id).await {
        Ok(Some(beer)) => HttpResponse::Ok().json(beer),
        Ok(None) => {
            info!("Beer not found: {}", id);
            HttpResponse::NotFound().body("Beer not found")
        }
        Err(e) => {
            error!("Error fetching beer {}: {:?}", id, e);
            HttpResponse::InternalServerError().body("Internal server error")
        }
    }
}

#[get("/api/v1/beer")]
pub async fn list_beers(
    service: web::Data<dyn BeerService>,
    params: web::Query<ListBeersParams>,
) -> impl Responder {
    let params = params.into_inner();
    info!(
        "GET /api/v1/beer name={:?} style={:?}",
        params.beer_name, params.beer_style
    );
    let page = PageRequest::of(params.page_number, params.page_size);
    match service
        .list_beers(params.beer_name.as_deref(), params.beer_style, page)
        .await
    {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(e) => {
            error!("Error listing beers: {:?}", e);
            HttpResponse::InternalServerError().body("Internal server error")
        }
    }
}
