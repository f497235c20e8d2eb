use leptos::prelude::*;
use leptos_router::components::A;

/// 404 page with a route back to the search view.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <div class="not-found-card">
                <div class="not-found-code">"404"</div>
                <h1>"Page Not Found"</h1>
                <p>
                    "The page you're looking for doesn't exist. Reports live at "
                    <code>"/report/{address}"</code>
                    " and are created by running a search."
                </p>
                <A href="/">
                    <button class="report-back-btn">"Go to search"</button>
                </A>
            </div>
        </div>
    }
}
