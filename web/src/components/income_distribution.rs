use demographics::derived::IncomeDistribution;
use leptos::prelude::*;

use crate::utils::format::format_percent;

/// Household income share across the four coarse buckets, as horizontal
/// bars. When `has_data` is false the even split is a declared placeholder
/// and is labeled as such instead of being passed off as measured.
#[component]
pub fn IncomeDistributionCard(distribution: IncomeDistribution) -> impl IntoView {
    let has_data = distribution.has_data;
    let rows: Vec<(&'static str, f64)> = IncomeDistribution::BUCKET_LABELS
        .into_iter()
        .zip(distribution.percentages())
        .collect();

    view! {
        <div class="card income-distribution-card">
            <h3>"Income Distribution"</h3>
            {if !has_data {
                view! {
                    <p class="income-distribution-empty">
                        "No household income counts were reported for this radius."
                    </p>
                }.into_any()
            } else {
                view! {
                    <div class="income-distribution-bars">
                        {rows.into_iter().map(|(label, pct)| {
                            view! {
                                <div class="income-bar-row">
                                    <span class="income-bar-label">{label}</span>
                                    <div class="income-bar-track">
                                        <div
                                            class="income-bar-fill"
                                            style=format!("width: {:.1}%", pct.clamp(0.0, 100.0))
                                        ></div>
                                    </div>
                                    <span class="income-bar-pct">{format_percent(pct)}</span>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_any()
            }}
        </div>
    }
}
