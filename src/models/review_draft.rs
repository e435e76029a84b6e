//! Client-side state of the review form: what the user typed, how it is
//! validated and how the server's answer is read.
//!
//! Nothing here touches the DOM or the network so it runs in native tests.
use crate::models::review::{parse_id, NewReview, ANONYMOUS};
use serde::Deserialize;
use thiserror::Error;

/// Oldest model year the form accepts.
pub const MIN_CAR_YEAR: i64 = 2010;

pub const GENERIC_FAILURE: &str = "Posting review failed. Please try again.";
pub const NETWORK_FAILURE: &str = "Network error while posting review.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("All details are mandatory (review, date, make/model, year).")]
    MissingDetails,
    #[error("Car year must be between {min} and {max}")]
    YearOutOfRange { min: i64, max: i64 },
    #[error("Choose a valid car make and model.")]
    InvalidCarSelection,
}

/// Raw field values, as bound to the form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub review: String,
    /// `"<make>|<model>"`, see [`crate::models::car::CarModel::selection_value`].
    pub model: String,
    pub year: String,
    pub date: String,
}

impl ReviewDraft {
    /// Validates the draft and builds the insertion payload.
    ///
    /// `this_year` is the upper bound for the car year; the caller reads it
    /// from the browser clock.
    pub fn to_payload(
        &self,
        name: &str,
        dealer_id: i64,
        this_year: i64,
    ) -> Result<NewReview, FormError> {
        let review = self.review.trim();
        if review.is_empty() || self.date.is_empty() || self.model.is_empty() || self.year.is_empty() {
            return Err(FormError::MissingDetails);
        }

        let car_year = parse_id(&self.year)
            .filter(|year| (MIN_CAR_YEAR..=this_year).contains(year))
            .ok_or(FormError::YearOutOfRange { min: MIN_CAR_YEAR, max: this_year })?;

        let mut halves = self.model.split('|');
        let car_make = halves.next().unwrap_or_default().trim();
        let car_model = halves.next().unwrap_or_default().trim();
        if car_make.is_empty() || car_model.is_empty() {
            return Err(FormError::InvalidCarSelection);
        }

        Ok(NewReview {
            name: name.to_string(),
            dealership: dealer_id,
            review: review.to_string(),
            purchase: true,
            purchase_date: self.date.clone(),
            car_make: car_make.to_string(),
            car_model: car_model.to_string(),
            car_year: Some(car_year),
        })
    }
}

/// Outcome of pressing "Post Review".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// A post is already in flight; the press is ignored.
    InFlight,
    /// The draft failed validation; nothing is sent.
    Invalid(FormError),
    /// The payload to post.
    Ready(NewReview),
}

/// Decides what a press of the submit button does. Only [`Submission::Ready`]
/// leads to a request, and the caller marks the form as posting before sending.
pub fn begin_submission(
    posting: bool,
    draft: &ReviewDraft,
    name: &str,
    dealer_id: i64,
    this_year: i64,
) -> Submission {
    if posting {
        return Submission::InFlight;
    }
    match draft.to_payload(name, dealer_id, this_year) {
        Ok(payload) => Submission::Ready(payload),
        Err(e) => Submission::Invalid(e),
    }
}

/// Reviewer name from the session: first and last name, falling back to the
/// username when that is blank or carries a literal "null".
pub fn name_from_session(
    first_name: Option<&str>,
    last_name: Option<&str>,
    username: Option<&str>,
) -> String {
    let name = format!("{} {}", first_name.unwrap_or_default(), last_name.unwrap_or_default());
    let name = name.trim();
    if !name.is_empty() && !name.to_lowercase().contains("null") {
        return name.to_string();
    }
    username.unwrap_or(ANONYMOUS).to_string()
}

#[derive(Deserialize, Default)]
struct FailureBody {
    message: Option<String>,
    error: Option<String>,
}

/// Only a 2xx status counts as a successful post.
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// User-facing message for a failed post, taken from the response body when it has one.
pub fn failure_message(body: &str) -> String {
    let body: FailureBody = serde_json::from_str(body).unwrap_or_default();
    body.message
        .or(body.error)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}

/// Dealer page URL with a cache-busting timestamp (milliseconds since epoch).
pub fn dealer_page_url(origin: &str, dealer_id: i64, timestamp_ms: u64) -> String {
    format!("{}/dealer/{}?t={}", origin.trim_end_matches('/'), dealer_id, timestamp_ms)
}
