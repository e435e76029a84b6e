use crate::components::gateway_client::{fetch_cars, fetch_dealer, post_review, REVIEW_URL};
use crate::models::review::parse_id;
use crate::models::review_draft::{
    begin_submission, dealer_page_url, failure_message, is_success, name_from_session, ReviewDraft,
    Submission, MIN_CAR_YEAR, NETWORK_FAILURE,
};
use leptos::logging::{error, log, warn};
use leptos::*;
use leptos_router::use_params_map;

fn current_year() -> i64 {
    js_sys::Date::new_0().get_full_year() as i64
}

fn session_name() -> String {
    let storage = window().session_storage().ok().flatten();
    let get = |key: &str| storage.as_ref().and_then(|s| s.get_item(key).ok().flatten());
    name_from_session(
        get("firstname").as_deref(),
        get("lastname").as_deref(),
        get("username").as_deref(),
    )
}

fn alert(message: &str) {
    if let Err(e) = window().alert_with_message(message) {
        error!("[FORM] alert failed: {:?}", e);
    }
}

/// Full page load so the dealer page refetches and shows the new review.
fn navigate_to_dealer(dealer_id: i64) {
    let location = window().location();
    let origin = location.origin().unwrap_or_default();
    let url = dealer_page_url(&origin, dealer_id, js_sys::Date::now() as u64);
    if let Err(e) = location.set_href(&url) {
        error!("[FORM] navigation to {} failed: {:?}", url, e);
    }
}

/// Review form for the dealer in the `:id` route parameter.
#[component]
pub fn PostReview() -> impl IntoView {
    let params = use_params_map();
    let dealer_id = move || params.with(|p| p.get("id").and_then(|id| parse_id(id)).unwrap_or_default());

    // both loads start on mount and run side by side
    let dealer = create_local_resource(dealer_id, fetch_dealer);
    let cars = create_local_resource(|| (), |_| fetch_cars());

    let (review, set_review) = create_signal(String::new());
    let (model, set_model) = create_signal(String::new());
    let (year, set_year) = create_signal(String::new());
    let (date, set_date) = create_signal(String::new());
    let (posting, set_posting) = create_signal(false);

    let submit_review = move |_| {
        let dealer_id = params.with_untracked(|p| p.get("id").and_then(|id| parse_id(id)).unwrap_or_default());
        let draft = ReviewDraft {
            review: review.get_untracked(),
            model: model.get_untracked(),
            year: year.get_untracked(),
            date: date.get_untracked(),
        };
        let payload = match begin_submission(
            posting.get_untracked(),
            &draft,
            &session_name(),
            dealer_id,
            current_year(),
        ) {
            Submission::Ready(payload) => payload,
            Submission::InFlight => return,
            Submission::Invalid(e) => {
                alert(&e.to_string());
                return;
            }
        };

        set_posting.set(true);
        spawn_local(async move {
            match post_review(&payload).await {
                Ok((status, _)) if is_success(status) => {
                    log!("[FORM] Review posted for dealer {}", dealer_id);
                    navigate_to_dealer(dealer_id);
                }
                Ok((status, body)) => {
                    warn!("[FORM] POST {} failed: {} {} {:?}", REVIEW_URL, status, body, payload);
                    alert(&failure_message(&body));
                }
                Err(e) => {
                    error!("[FORM] Network error posting review: {}", e);
                    alert(NETWORK_FAILURE);
                }
            }
            set_posting.set(false);
        });
    };

    view! {
        <div class="post-review">
            <h1>{ "Write a Review" }</h1>
            <p class="dealer-name">
                {move || {
                    dealer
                        .get()
                        .flatten()
                        .map(|d| d.full_name)
                        .unwrap_or_else(|| "Loading dealer...".to_string())
                }}
            </p>

            <label for="review">{ "Your Review *" }</label>
            <textarea
                id="review"
                placeholder="Share your experience with this dealership."
                prop:value=review
                on:input=move |e| set_review.set(event_target_value(&e))
            />

            <h3>{ "Vehicle Information" }</h3>
            <label for="cars">{ "Car Make & Model *" }</label>
            <select
                id="cars"
                name="cars"
                prop:value=model
                on:change=move |e| set_model.set(event_target_value(&e))
            >
                <option value="" disabled=true hidden=true>{ "Choose Car Make and Model" }</option>
                {move || {
                    cars.get()
                        .unwrap_or_default()
                        .into_iter()
                        .map(|car| view! { <option value=car.selection_value()>{ car.label() }</option> })
                        .collect_view()
                }}
            </select>

            <label for="year">{ "Car Year *" }</label>
            <input
                id="year"
                type="number"
                min=MIN_CAR_YEAR.to_string()
                placeholder="2023"
                prop:value=year
                on:input=move |e| set_year.set(event_target_value(&e))
            />

            <label for="purchase-date">{ "Purchase Date *" }</label>
            <input
                id="purchase-date"
                type="date"
                prop:value=date
                on:input=move |e| set_date.set(event_target_value(&e))
            />

            <button class="post-button" on:click=submit_review disabled=move || posting.get()>
                {move || if posting.get() { "Posting Review..." } else { "Post Review" }}
            </button>
        </div>
    }
}
