use demographics::MarketInsights;
use leptos::prelude::*;

/// AI/rule-generated market insight lists. Opaque pass-through text; an
/// absent or empty payload renders a placeholder instead of nothing.
#[component]
pub fn MarketInsightsCard(insights: Option<MarketInsights>) -> impl IntoView {
    let insights = insights.filter(|i| !i.is_empty());

    view! {
        <div class="card market-insights-card">
            <h3>"Market Insights"</h3>
            {match insights {
                None => view! {
                    <p class="market-insights-empty">
                        "No market insights were generated for this address."
                    </p>
                }.into_any(),
                Some(insights) => view! {
                    <div class="market-insights-columns">
                        <InsightList title="Demographic Strengths" items=insights.demographic_strengths/>
                        <InsightList title="Market Opportunities" items=insights.market_opportunities/>
                        <InsightList title="Target Demographics" items=insights.target_demographics/>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn InsightList(title: &'static str, items: Vec<String>) -> impl IntoView {
    view! {
        <div class="insight-list">
            <h4>{title}</h4>
            {if items.is_empty() {
                view! { <p class="insight-list-empty">"None identified"</p> }.into_any()
            } else {
                view! {
                    <ul>
                        {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                    </ul>
                }.into_any()
            }}
        </div>
    }
}
