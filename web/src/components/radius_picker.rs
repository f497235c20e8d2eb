use demographics::Radius;
use leptos::prelude::*;

/// Selector for the 1/3/5 mile catchment the report cards describe.
#[component]
pub fn RadiusPicker(selected: RwSignal<Radius>) -> impl IntoView {
    view! {
        <div class="radius-picker">
            {Radius::ALL.into_iter().map(|radius| {
                view! {
                    <button
                        class="radius-picker-btn"
                        class:active=move || selected.get() == radius
                        on:click=move |_| selected.set(radius)
                    >
                        {radius.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
