use demographics::LookupError;
use leptos::prelude::*;
use web_sys::KeyboardEvent;

/// Address entry form. Blank submissions surface an inline message without
/// costing a network call; the submit control is disabled while a lookup
/// is outstanding.
#[component]
pub fn AddressSearch<F>(is_searching: RwSignal<bool>, on_submit: F) -> impl IntoView
where
    F: Fn(String) + Clone + Send + Sync + 'static,
{
    let address_input = RwSignal::new(String::new());
    let input_error = RwSignal::new(Option::<String>::None);

    let submit = move |raw: String| {
        let address = raw.trim().to_string();
        if address.is_empty() {
            input_error.set(Some(LookupError::EmptyAddress.to_string()));
            return;
        }
        input_error.set(None);
        on_submit(address);
    };

    let submit_on_enter = submit.clone();
    let handle_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" && !is_searching.get() {
            ev.prevent_default();
            submit_on_enter(address_input.get());
        }
    };

    let handle_input = move |ev: web_sys::Event| {
        address_input.set(event_target_value(&ev));
        input_error.set(None);
    };

    let submit_click = submit.clone();
    let submit_example_sf = submit.clone();
    let submit_example_ny = submit.clone();
    let submit_example_chi = submit;

    view! {
        <div class="address-search-container">
            <div class="address-search-input-wrapper">
                <input
                    type="text"
                    class="address-search-input"
                    placeholder="Enter a street address, e.g. 555 California St, San Francisco, CA"
                    value=move || address_input.get()
                    on:input=handle_input
                    on:keydown=handle_keydown
                    disabled=move || is_searching.get()
                />

                <button
                    class="address-search-button"
                    class:searching=move || is_searching.get()
                    on:click=move |_| submit_click(address_input.get())
                    disabled=move || is_searching.get()
                >
                    {move || if is_searching.get() {
                        "Searching..."
                    } else {
                        "Search"
                    }}
                </button>
            </div>

            // Inline validation message
            {move || input_error.get().map(|error| view! {
                <div class="address-search-error">
                    {error}
                </div>
            })}

            // Example addresses
            <div class="address-search-examples">
                <span class="address-search-examples-label">"Try: "</span>
                <button
                    class="address-search-example-btn"
                    on:click=move |_| submit_example_sf("555 California St, San Francisco, CA".to_string())
                >
                    "555 California St, San Francisco"
                </button>
                <button
                    class="address-search-example-btn"
                    on:click=move |_| submit_example_ny("350 5th Ave, New York, NY".to_string())
                >
                    "350 5th Ave, New York"
                </button>
                <button
                    class="address-search-example-btn"
                    on:click=move |_| submit_example_chi("233 S Wacker Dr, Chicago, IL".to_string())
                >
                    "233 S Wacker Dr, Chicago"
                </button>
            </div>
        </div>
    }
}
