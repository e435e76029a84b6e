use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Store lock poisoned")]
    Poisoned,

    #[error("No review id left after {last}")]
    IdsExhausted { last: i64 },
}

/// Errors of the JSON API. Fetch failures carry their cause for the log but
/// answer with a fixed message.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Error fetching reviews")]
    FetchReviews(#[source] StoreError),

    #[error("Error fetching dealerships")]
    FetchDealers(#[source] StoreError),

    #[error("Error fetching dealer")]
    FetchDealer(#[source] StoreError),

    #[error("Dealer not found")]
    DealerNotFound,

    #[error("Error inserting review")]
    InsertReview { details: String },
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::FetchReviews(_) | ApiError::FetchDealers(_) | ApiError::FetchDealer(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::DealerNotFound => StatusCode::NOT_FOUND,
            ApiError::InsertReview { .. } => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::InsertReview { details } => json!({ "error": self.to_string(), "details": details }),
            _ => json!({ "error": self.to_string() }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Errors of the frontend-facing gateway, answered as `{status, message}`.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Dealer not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Store(#[from] StoreError),
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::NotFound => StatusCode::NOT_FOUND,
            GatewayError::Store(StoreError::IdsExhausted { .. }) => StatusCode::BAD_REQUEST,
            GatewayError::Store(StoreError::Poisoned) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(json!({
            "status": status.as_u16(),
            "message": self.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(response: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_fetch_errors_hide_their_cause() {
        let err = ApiError::FetchReviews(StoreError::Poisoned);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(err.error_response()).await;
        assert_eq!(body, json!({ "error": "Error fetching reviews" }));
    }

    #[actix_web::test]
    async fn test_insert_error_carries_details() {
        let err = ApiError::InsertReview { details: "expected value".into() };
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        let body = body_json(err.error_response()).await;
        assert_eq!(body["error"], "Error inserting review");
        assert_eq!(body["details"], "expected value");
    }

    #[actix_web::test]
    async fn test_gateway_error_shape() {
        let err = GatewayError::BadRequest("dealer_id and review are required".into());
        let body = body_json(err.error_response()).await;
        assert_eq!(body, json!({ "status": 400, "message": "dealer_id and review are required" }));
    }

    #[test]
    fn test_exhausted_ids_are_a_client_error() {
        let err = GatewayError::from(StoreError::IdsExhausted { last: i64::MAX });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(GatewayError::from(StoreError::Poisoned).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
