use demographics::LookupError;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::use_navigate;

use crate::{
    app::ReportSlot,
    components::{AddressSearch, ErrorBanner, LoadingView},
    server::lookup_demographics,
};

/// Strips the server-fn wrapper so the banner shows the lookup failure
/// itself, not the transport framing around it.
fn server_error_message(e: ServerFnError) -> String {
    match e {
        ServerFnError::ServerError(message) => message,
        other => other.to_string(),
    }
}

/// Landing page: address form plus the error banner for failed lookups.
///
/// Only the most recent submission may update visible state: each submit
/// bumps a sequence counter and a resolving request that is no longer the
/// latest drops its result on the floor.
#[component]
pub fn SearchPage() -> impl IntoView {
    let slot = expect_context::<ReportSlot>();
    let navigate = use_navigate();

    let is_searching = RwSignal::new(false);
    let banner = RwSignal::new(Option::<String>::None);
    let latest_request = RwSignal::new(0u64);

    let handle_submit = move |address: String| {
        let navigate = navigate.clone();
        let request_id = latest_request.get_untracked() + 1;
        latest_request.set(request_id);
        banner.set(None);
        is_searching.set(true);

        spawn_local(async move {
            let result = lookup_demographics(address.clone()).await;

            // A newer search superseded this one; ignore the result.
            if latest_request.get_untracked() != request_id {
                return;
            }
            is_searching.set(false);

            match result {
                Ok(response) => {
                    if let Some(message) = response.error.clone() {
                        banner.set(Some(message));
                    } else if response.demographics().is_some() {
                        slot.0.set(Some(response));
                        navigate(
                            &format!("/report/{}", urlencoding::encode(&address)),
                            Default::default(),
                        );
                    } else {
                        banner.set(Some(LookupError::MissingDemographics.to_string()));
                    }
                }
                Err(e) => {
                    banner.set(Some(server_error_message(e)));
                }
            }
        });
    };

    view! {
        <div class="search-page">
            <div class="search-hero">
                <h1>"Demoscope"</h1>
                <p class="search-tagline">
                    "Population, income, and education statistics for the 1, 3, and 5 mile radius around any US address"
                </p>
            </div>

            <ErrorBanner message=banner/>

            <AddressSearch is_searching=is_searching on_submit=handle_submit/>

            // The upstream lookup fans out to several census calls and can
            // take a few seconds.
            {move || is_searching.get().then(|| view! {
                <LoadingView message=Some("Looking up demographics... this can take a few seconds".to_string())/>
            })}

            <div class="search-footnote">
                <p>
                    "Demographics are sourced from US Census Bureau ACS 5-year estimates, aggregated by census tract."
                </p>
            </div>
        </div>
    }
}
