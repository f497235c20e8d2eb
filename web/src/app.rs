use demographics::DemographicsResponse;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    ParamSegment, StaticSegment,
};
use thaw::ssr::SSRMountStyleProvider;
use thaw::*;

use crate::views::{report::ReportPage, search::SearchPage, not_found::NotFoundPage};

/// In-memory slot holding the most recent successful lookup. Populated by
/// the search view, read by the report view; lost on a full page reload.
#[derive(Clone, Copy)]
pub struct ReportSlot(pub RwSignal<Option<DemographicsResponse>>);

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <link
                    rel="stylesheet"
                    href="https://unpkg.com/leaflet@1.9.3/dist/leaflet.css"
                />
                <script
                    src="https://unpkg.com/leaflet@1.9.3/dist/leaflet.js"
                    defer
                ></script>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // One slot, one writer: only the most recent search updates it.
    provide_context(ReportSlot(RwSignal::new(None)));

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/web.css"/>

        // sets the document title
        <Title text="demoscope"/>

        <ConfigProvider>
            <Router>
                <main>
                    <Routes fallback=NotFoundPage>
                        <Route path=StaticSegment("") view=SearchPage/>
                        <Route path=(StaticSegment("report"), ParamSegment("address")) view=ReportPage/>
                    </Routes>
                </main>
            </Router>
        </ConfigProvider>
    }
}
