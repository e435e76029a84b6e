use crate::error::ApiError;
use crate::models::review::{parse_id, NewReview};
use crate::store::Repository;
use actix_web::{web, HttpResponse};
use leptos::logging::{error, log};
use serde_json::json;

/// Registers the JSON API routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/healthz", web::get().to(healthz))
        .route("/fetchReviews", web::get().to(fetch_reviews))
        .route("/fetchReviews/dealer/{id}", web::get().to(fetch_dealer_reviews))
        .route("/fetchDealers", web::get().to(fetch_dealers))
        .route("/fetchDealers/{state}", web::get().to(fetch_dealers_by_state))
        .route("/fetchDealer/{id}", web::get().to(fetch_dealer))
        .service(
            web::resource("/insert_review")
                .app_data(insert_json_config())
                .route(web::post().to(insert_review)),
        );
}

/// Body decoding for `/insert_review`: a body that does not decode into
/// [`NewReview`] is answered as a failed insert.
fn insert_json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log!("[API] Rejected review payload: {}", err);
        ApiError::InsertReview { details: err.to_string() }.into()
    })
}

pub async fn index() -> HttpResponse {
    HttpResponse::Ok().body("Welcome to the JSON API")
}

pub async fn healthz() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "ok": true }))
}

pub async fn fetch_reviews(repo: web::Data<dyn Repository>) -> Result<HttpResponse, ApiError> {
    let reviews = repo.reviews().map_err(|e| {
        error!("[API] Failed to fetch reviews: {:?}", e);
        ApiError::FetchReviews(e)
    })?;
    Ok(HttpResponse::Ok().json(reviews))
}

pub async fn fetch_dealer_reviews(
    repo: web::Data<dyn Repository>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let Some(dealer_id) = parse_id(&id) else {
        return Ok(HttpResponse::Ok().json(json!([])));
    };
    let reviews = repo.reviews_for_dealer(dealer_id).map_err(|e| {
        error!("[API] Failed to fetch reviews for dealer {}: {:?}", dealer_id, e);
        ApiError::FetchReviews(e)
    })?;
    log!("[API] Returning {} reviews for dealer {}", reviews.len(), dealer_id);
    Ok(HttpResponse::Ok().json(reviews))
}

pub async fn fetch_dealers(repo: web::Data<dyn Repository>) -> Result<HttpResponse, ApiError> {
    let dealers = repo.dealers().map_err(|e| {
        error!("[API] Failed to fetch dealerships: {:?}", e);
        ApiError::FetchDealers(e)
    })?;
    Ok(HttpResponse::Ok().json(dealers))
}

pub async fn fetch_dealers_by_state(
    repo: web::Data<dyn Repository>,
    state: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let dealers = repo.dealers_in_state(&state).map_err(|e| {
        error!("[API] Failed to fetch dealerships in {}: {:?}", state, e);
        ApiError::FetchDealers(e)
    })?;
    Ok(HttpResponse::Ok().json(dealers))
}

pub async fn fetch_dealer(
    repo: web::Data<dyn Repository>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let dealer_id = parse_id(&id).ok_or(ApiError::DealerNotFound)?;
    let dealer = repo.dealer(dealer_id).map_err(|e| {
        error!("[API] Failed to fetch dealer {}: {:?}", dealer_id, e);
        ApiError::FetchDealer(e)
    })?;
    match dealer {
        Some(dealer) => Ok(HttpResponse::Ok().json(dealer)),
        None => Err(ApiError::DealerNotFound),
    }
}

pub async fn insert_review(
    repo: web::Data<dyn Repository>,
    review: web::Json<NewReview>,
) -> Result<HttpResponse, ApiError> {
    log!("[API] Received review for dealership {}", review.dealership);
    let created = repo.insert_review(review.into_inner()).map_err(|e| {
        error!("[API] Failed to insert review: {:?}", e);
        ApiError::InsertReview { details: e.to_string() }
    })?;
    log!("[API] Successfully saved review ID: {}", created.id);
    Ok(HttpResponse::Created().json(created))
}
