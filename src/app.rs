/// Application root for the dealer review pages.
/// `/postreview/:id` hosts the review form, `/dealer/:id` lists a dealer's reviews.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use crate::components::{review_form::PostReview, reviews_list::DealerReviews};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/dealer-review.css"/>
        <Title text="Dealership Reviews"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/postreview/:id" view=PostReview/>
                    <Route path="/dealer/:id" view=DealerReviews/>
                </Routes>
            </main>
        </Router>
    }
}
