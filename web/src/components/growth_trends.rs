use demographics::GrowthMetrics;
use leptos::prelude::*;

use crate::utils::format::{format_count, format_percent, format_signed_percent};

/// Five-year growth trends as computed upstream, passed through unmodified,
/// plus the locally-derived employment figures for the selected radius.
#[component]
pub fn GrowthTrendsCard(
    growth: GrowthMetrics,
    jobs_added: i64,
    unemployment_rate: f64,
) -> impl IntoView {
    view! {
        <div class="card growth-trends-card">
            <h3>"Growth Trends"</h3>
            <div class="growth-trends-rows">
                <GrowthRow label="Population Growth" value=growth.population_growth/>
                <GrowthRow label="Income Growth" value=growth.income_growth/>
                <GrowthRow label="Job Growth" value=growth.job_growth/>
                <GrowthRow label="Unemployment Rate Change" value=growth.unemployment_rate_change/>

                <div class="growth-row">
                    <span class="growth-row-label">"Unemployment Rate"</span>
                    <span class="growth-row-value neutral">
                        {format_percent(unemployment_rate)}
                    </span>
                </div>

                <div class="growth-row">
                    <span class="growth-row-label">"Jobs Added"</span>
                    {if jobs_added < 0 {
                        // Employment declined; the sign is kept.
                        view! {
                            <span class="growth-row-value declined">
                                {format_count(jobs_added as f64)} " (declined)"
                            </span>
                        }.into_any()
                    } else {
                        view! {
                            <span class="growth-row-value">
                                {format_count(jobs_added as f64)}
                            </span>
                        }.into_any()
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn GrowthRow(label: &'static str, value: Option<f64>) -> impl IntoView {
    view! {
        <div class="growth-row">
            <span class="growth-row-label">{label}</span>
            {match value {
                Some(pct) => view! {
                    <span
                        class="growth-row-value"
                        class:negative=move || pct < 0.0
                    >
                        {format_signed_percent(pct)}
                    </span>
                }.into_any(),
                None => view! {
                    <span class="growth-row-value missing">"N/A"</span>
                }.into_any(),
            }}
        </div>
    }
}
