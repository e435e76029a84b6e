#![cfg(target_arch = "wasm32")]
// Browser tests, run with:
// wasm-pack test --headless --firefox --no-default-features --features wasm-test
use dealer_review::components::review_form::PostReview;
use gloo_timers::future::sleep;
use leptos::*;
use leptos_router::*;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

// Helper function to mount the form under a catch-all route
fn mount_form(id: &str) -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    container.set_id(id);
    document.body().unwrap().append_child(&container).unwrap();
    let container = container.unchecked_into::<web_sys::HtmlElement>();

    mount_to(container.clone(), || {
        view! {
            <Router>
                <Routes>
                    <Route path="/*any" view=PostReview />
                </Routes>
            </Router>
        }
    });
    container
}

#[wasm_bindgen_test]
async fn test_header_keeps_placeholder_when_dealer_fetch_fails() {
    // the test server has no gateway, so both loads fail
    let container = mount_form("post-review-loading");
    sleep(Duration::from_millis(300)).await;

    let header = container.query_selector(".dealer-name").unwrap().unwrap();
    assert_eq!(header.text_content().unwrap_or_default(), "Loading dealer...");

    // only the hidden placeholder option is left in the selector
    let options = container.query_selector_all("#cars option").unwrap();
    assert_eq!(options.length(), 1);
}

#[wasm_bindgen_test]
async fn test_post_button_starts_enabled() {
    let container = mount_form("post-review-button");
    sleep(Duration::from_millis(50)).await;

    let button = container.query_selector(".post-button").unwrap().unwrap();
    assert_eq!(button.text_content().unwrap_or_default(), "Post Review");
    assert!(!button.has_attribute("disabled"));

    for field in ["#review", "#year", "#purchase-date"] {
        assert!(container.query_selector(field).unwrap().is_some(), "{field}");
    }
}
