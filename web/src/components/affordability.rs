use demographics::derived::AffordabilityBand;
use leptos::prelude::*;

use crate::utils::format::format_dollars;

/// Housing affordability: home value over income, with its classification
/// band. A zero ratio means one of the inputs was missing upstream.
#[component]
pub fn AffordabilityCard(
    ratio: f64,
    band: AffordabilityBand,
    median_home_value: f64,
    median_household_income: f64,
) -> impl IntoView {
    let band_class = match band {
        AffordabilityBand::Affordable => "affordable",
        AffordabilityBand::ModeratelyUnaffordable => "moderate",
        AffordabilityBand::SeverelyUnaffordable => "severe",
    };

    view! {
        <div class="card affordability-card">
            <h3>"Housing Affordability"</h3>
            {if ratio == 0.0 {
                view! {
                    <p class="affordability-empty">
                        "Not enough income or home-value data for this radius."
                    </p>
                }.into_any()
            } else {
                view! {
                    <div class="affordability-body">
                        <span class="affordability-ratio">{format!("{ratio:.1}x")}</span>
                        <span class=format!("affordability-band {band_class}")>
                            {band.label()}
                        </span>
                        <p class="affordability-detail">
                            {format!(
                                "Median home value {} vs median household income {}",
                                format_dollars(median_home_value),
                                format_dollars(median_household_income)
                            )}
                        </p>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
