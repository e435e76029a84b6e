use crate::components::gateway_client::{fetch_dealer, fetch_reviews};
use crate::models::review::{parse_id, Review};
use leptos::*;
use leptos_router::use_params_map;

#[component]
pub fn ReviewsList(reviews: Vec<Review>) -> impl IntoView {
    if reviews.is_empty() {
        return view! { <p class="no-reviews">{ "No reviews yet!" }</p> }.into_view();
    }

    view! {
        <ul class="reviews">
            {
                reviews.into_iter().map(|review| {
                    let car = format!("{} {} {}", review.car_make, review.car_model,
                        review.car_year.map(|y| y.to_string()).unwrap_or_default());
                    view! {
                        <li>
                            <p class="review-text">{ review.review }</p>
                            <p class="reviewer">{ review.name }</p>
                            <p class="car">{ car.trim().to_string() }</p>
                        </li>
                    }
                }).collect::<Vec<_>>()
            }
        </ul>
    }
    .into_view()
}

/// Dealer page: name, reviews and a link to the review form.
#[component]
pub fn DealerReviews() -> impl IntoView {
    let params = use_params_map();
    let dealer_id = move || params.with(|p| p.get("id").and_then(|id| parse_id(id)).unwrap_or_default());

    let dealer = create_local_resource(dealer_id, fetch_dealer);
    let reviews = create_local_resource(dealer_id, fetch_reviews);

    view! {
        <div class="dealer">
            <h1>
                {move || dealer.get().flatten().map(|d| d.full_name).unwrap_or_else(|| "Loading dealer...".to_string())}
            </h1>
            <a href=move || format!("/postreview/{}", dealer_id())>{ "Write a review" }</a>
            <h3>{ "Reviews" }</h3>
            {move || match reviews.get() {
                Some(reviews) => view! { <ReviewsList reviews=reviews /> }.into_view(),
                None => view! { <p>{ "Loading reviews..." }</p> }.into_view(),
            }}
        </div>
    }
}
