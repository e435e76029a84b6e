//! Browser-side calls to the `/djangoapp` gateway.
use crate::models::car::CarModel;
use crate::models::dealership::Dealership;
use crate::models::review::{NewReview, Review};
use gloo_net::http::Request;
use gloo_net::Error;
use leptos::logging::error;
use serde::Deserialize;
use web_sys::RequestCredentials;

pub const REVIEW_URL: &str = "/djangoapp/add_review/";
pub const CARS_URL: &str = "/djangoapp/get_cars/";

#[derive(Deserialize)]
struct DealerResponse {
    dealer: Option<Dealership>,
}

#[derive(Deserialize)]
struct CarsResponse {
    #[serde(default)]
    cars: Vec<CarModel>,
}

#[derive(Deserialize)]
struct ReviewsResponse {
    #[serde(default)]
    reviews: Vec<Review>,
}

async fn get_dealer(dealer_id: i64) -> Result<Option<Dealership>, Error> {
    let url = format!("/djangoapp/dealer/{}/", dealer_id);
    let body: DealerResponse = Request::get(&url).send().await?.json().await?;
    Ok(body.dealer)
}

async fn get_cars() -> Result<Vec<CarModel>, Error> {
    let body: CarsResponse = Request::get(CARS_URL).send().await?.json().await?;
    Ok(body.cars)
}

async fn get_reviews(dealer_id: i64) -> Result<Vec<Review>, Error> {
    let url = format!("/djangoapp/reviews/dealer/{}/", dealer_id);
    let body: ReviewsResponse = Request::get(&url).send().await?.json().await?;
    Ok(body.reviews)
}

/// Dealer detail, `None` when it could not be loaded (the failure is logged).
pub async fn fetch_dealer(dealer_id: i64) -> Option<Dealership> {
    get_dealer(dealer_id).await.unwrap_or_else(|e| {
        error!("[FORM] dealer fetch error: {}", e);
        None
    })
}

pub async fn fetch_cars() -> Vec<CarModel> {
    get_cars().await.unwrap_or_else(|e| {
        error!("[FORM] car models fetch error: {}", e);
        Vec::new()
    })
}

pub async fn fetch_reviews(dealer_id: i64) -> Vec<Review> {
    get_reviews(dealer_id).await.unwrap_or_else(|e| {
        error!("[FORM] reviews fetch error: {}", e);
        Vec::new()
    })
}

/// Posts a review with the session cookie attached. Returns the HTTP status
/// and raw body; interpreting them is left to the caller.
pub async fn post_review(payload: &NewReview) -> Result<(u16, String), Error> {
    let response = Request::post(REVIEW_URL)
        .credentials(RequestCredentials::Include)
        .json(payload)?
        .send()
        .await?;
    let status = response.status();
    let body = response.text().await?;
    Ok((status, body))
}
