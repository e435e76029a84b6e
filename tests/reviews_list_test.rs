#![cfg(target_arch = "wasm32")]
// Browser tests, run with:
// wasm-pack test --headless --firefox --no-default-features --features wasm-test
use dealer_review::components::reviews_list::ReviewsList;
use dealer_review::models::review::{NewReview, Review};
use gloo_timers::future::sleep;
use leptos::*;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

// Helper function to mount a component into a fresh container
fn mount_container(id: &str) -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    container.set_id(id);
    document.body().unwrap().append_child(&container).unwrap();
    container.unchecked_into::<web_sys::HtmlElement>()
}

fn review(id: i64, name: &str, text: &str) -> Review {
    NewReview {
        name: name.into(),
        dealership: 1,
        review: text.into(),
        purchase: true,
        purchase_date: "2023-05-01".into(),
        car_make: "Toyota".into(),
        car_model: "Camry".into(),
        car_year: Some(2022),
    }
    .into_review(id)
}

#[wasm_bindgen_test]
async fn test_reviews_list_renders_each_review() {
    let container = mount_container("reviews-list");
    let reviews = vec![review(1, "Jane Doe", "Great!"), review(2, "", "Okay")];

    mount_to(container.clone(), move || view! { <ReviewsList reviews=reviews.clone() /> });
    sleep(Duration::from_millis(50)).await;

    let items = container.query_selector_all("li").unwrap();
    assert_eq!(items.length(), 2);

    let text = container.text_content().unwrap_or_default();
    assert!(text.contains("Great!"));
    assert!(text.contains("Jane Doe"));
    // blank names were defaulted when the record was built
    assert!(text.contains("Anonymous"));
    assert!(text.contains("Toyota Camry 2022"));
}

#[wasm_bindgen_test]
async fn test_reviews_list_empty_state() {
    let container = mount_container("reviews-list-empty");

    mount_to(container.clone(), || view! { <ReviewsList reviews=Vec::new() /> });
    sleep(Duration::from_millis(50)).await;

    assert_eq!(container.query_selector_all("li").unwrap().length(), 0);
    assert!(container.text_content().unwrap_or_default().contains("No reviews yet!"));
}
