use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

/// Dismissible error banner. The owning view clears `message` on dismiss;
/// failures are never retried automatically.
#[component]
pub fn ErrorBanner(message: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        {move || message.get().map(|text| view! {
            <div class="error-banner">
                <MessageBar intent=MessageBarIntent::Error>
                    {text}
                </MessageBar>
                <button
                    class="error-banner-dismiss"
                    on:click=move |_| message.set(None)
                >
                    "Dismiss"
                </button>
            </div>
        })}
    }
}
