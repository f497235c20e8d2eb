use demographics::NormalizedMetrics;
use leptos::prelude::*;

use crate::utils::format::{format_count, format_dollars, format_signed_percent};

/// Headline per-radius stats: population, income, age, home value.
/// Pure formatting; all values arrive normalized.
#[component]
pub fn StatCardsGrid(
    current: NormalizedMetrics,
    population_growth: f64,
    income_growth: f64,
    historical_year: i32,
) -> impl IntoView {
    let since = move |pct: f64| format!("{} since {}", format_signed_percent(pct), historical_year);

    view! {
        <div class="stat-cards-grid">
            <StatCard
                title="Population"
                value=placeholder_or(current.population, format_count)
                detail=Some(since(population_growth))
            />
            <StatCard
                title="Median Household Income"
                value=placeholder_or(current.median_household_income, format_dollars)
                detail=Some(since(income_growth))
            />
            <StatCard
                title="Median Age"
                value=placeholder_or(current.median_age, |age| format!("{age:.1}"))
                detail=None
            />
            <StatCard
                title="Median Home Value"
                value=placeholder_or(current.median_home_value, format_dollars)
                detail=None
            />
        </div>
    }
}

#[component]
fn StatCard(
    title: &'static str,
    value: String,
    detail: Option<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card-title">{title}</span>
            <span class="stat-card-value">{value}</span>
            {detail.map(|d| view! { <span class="stat-card-detail">{d}</span> })}
        </div>
    }
}

/// Zero means the field was absent upstream; show a placeholder rather
/// than a misleading zero.
fn placeholder_or(value: f64, fmt: impl Fn(f64) -> String) -> String {
    if value == 0.0 {
        "\u{2014}".to_string()
    } else {
        fmt(value)
    }
}
