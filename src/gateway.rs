//! Frontend-facing endpoints under `/djangoapp`, answering in the envelope
//! shapes the review pages read (`{status, dealer}`, `{cars}`, ...).
use crate::error::{GatewayError, StoreError};
use crate::models::review::{parse_id, NewReview};
use crate::store::Repository;
use actix_web::{web, HttpResponse};
use leptos::logging::{error, log};
use serde::Deserialize;
use serde_json::json;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/djangoapp")
            .route("/get_dealers/", web::get().to(get_dealers))
            .route("/dealer/{id}/", web::get().to(get_dealer_details))
            .route("/reviews/dealer/{id}/", web::get().to(get_dealer_reviews))
            .route("/get_cars/", web::get().to(get_cars))
            .service(
                web::resource("/add_review/")
                    .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                        log!("[GATEWAY] Invalid review JSON: {}", err);
                        GatewayError::BadRequest("Invalid JSON".into()).into()
                    }))
                    .route(web::post().to(add_review)),
            ),
    );
}

#[derive(Deserialize)]
pub struct StateQuery {
    state: Option<String>,
}

fn store_fault(context: &str) -> impl FnOnce(StoreError) -> GatewayError + '_ {
    move |e| {
        error!("[GATEWAY] {} failed: {:?}", context, e);
        GatewayError::from(e)
    }
}

pub async fn get_dealers(
    repo: web::Data<dyn Repository>,
    query: web::Query<StateQuery>,
) -> Result<HttpResponse, GatewayError> {
    let dealers = match query.state.as_deref() {
        None | Some("") | Some("All") => repo.dealers(),
        Some(state) => repo.dealers_in_state(state),
    }
    .map_err(store_fault("Listing dealers"))?;
    Ok(HttpResponse::Ok().json(json!({ "status": 200, "dealers": dealers })))
}

pub async fn get_dealer_details(
    repo: web::Data<dyn Repository>,
    id: web::Path<String>,
) -> Result<HttpResponse, GatewayError> {
    let dealer_id = parse_id(&id).ok_or(GatewayError::NotFound)?;
    let dealer = repo
        .dealer(dealer_id)
        .map_err(store_fault("Dealer lookup"))?
        .ok_or(GatewayError::NotFound)?;
    Ok(HttpResponse::Ok().json(json!({ "status": 200, "dealer": dealer })))
}

pub async fn get_dealer_reviews(
    repo: web::Data<dyn Repository>,
    id: web::Path<String>,
) -> Result<HttpResponse, GatewayError> {
    let dealer_id = parse_id(&id).ok_or_else(|| GatewayError::BadRequest("Bad Request".into()))?;
    let reviews = repo
        .reviews_for_dealer(dealer_id)
        .map_err(store_fault("Listing reviews"))?;
    Ok(HttpResponse::Ok().json(json!({ "status": 200, "reviews": reviews })))
}

pub async fn get_cars(repo: web::Data<dyn Repository>) -> Result<HttpResponse, GatewayError> {
    let cars = repo.cars().map_err(store_fault("Listing cars"))?;
    Ok(HttpResponse::Ok().json(json!({ "cars": cars })))
}

pub async fn add_review(
    repo: web::Data<dyn Repository>,
    review: web::Json<NewReview>,
) -> Result<HttpResponse, GatewayError> {
    let review = review.into_inner();
    if review.dealership == 0 || review.review.trim().is_empty() {
        return Err(GatewayError::BadRequest("dealer_id and review are required".into()));
    }

    let created = repo.insert_review(review).map_err(store_fault("Insert"))?;
    // the refreshed list lets the caller render without another round trip
    let reviews = repo
        .reviews_for_dealer(created.dealership)
        .map_err(store_fault("Listing reviews"))?;
    log!("[GATEWAY] Added review {} for dealer {}", created.id, created.dealership);

    Ok(HttpResponse::Created().json(json!({
        "status": 201,
        "review": created,
        "reviews": reviews,
    })))
}
