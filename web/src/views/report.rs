use demographics::{
    derived::{
        affordability_ratio, education_series, growth_percent, income_distribution, jobs_added,
        AffordabilityBand,
    },
    normalize_radius, DemographicsResponse, Radius,
};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_params_map};

use crate::{
    app::ReportSlot,
    components::{
        affordability::AffordabilityCard, education_chart::EducationChart,
        growth_trends::GrowthTrendsCard, income_distribution::IncomeDistributionCard,
        market_insights::MarketInsightsCard, radius_picker::RadiusPicker,
        stat_cards::StatCardsGrid,
    },
    views::map::radius_map::RadiusMap,
};

/// Detail page. Renders entirely from the in-memory report slot filled by
/// the search view; a page reload empties the slot and shows the
/// search-again fallback instead.
#[component]
pub fn ReportPage() -> impl IntoView {
    let params = use_params_map();
    let slot = expect_context::<ReportSlot>();

    let address_param = Memo::new(move |_| {
        params
            .read()
            .get("address")
            .map(|a| {
                urlencoding::decode(&a)
                    .map(|decoded| decoded.into_owned())
                    .unwrap_or(a)
            })
            .unwrap_or_default()
    });

    view! {
        <div class="report-page">
            {move || match slot.0.get() {
                Some(response) => view! { <ReportBody response=response/> }.into_any(),
                None => view! { <MissingReport address=address_param.get()/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ReportBody(response: DemographicsResponse) -> impl IntoView {
    // The search view only navigates here for responses that pass the
    // error gate, but a stale slot could still miss demographics.
    let Some(demographics) = response.demographics().cloned() else {
        return view! { <MissingReport address=response.address.clone()/> }.into_any();
    };

    let selected_radius = RwSignal::new(Radius::ThreeMile);

    let coordinates = response.coordinates().cloned();
    let matched_address = coordinates
        .as_ref()
        .and_then(|c| c.matched_address.clone());
    let current_year = demographics.current_year();
    let historical_year = demographics.historical_year();
    let growth = demographics.growth_metrics.clone();
    let insights = demographics.market_insights.clone();
    let map_circles = demographics.map_circles.clone();
    let data_source = demographics.data_source.clone();
    let total_time = response.performance.total_time;
    let timestamp = response.timestamp.clone();

    let radius_section = {
        let demographics = demographics.clone();
        move || {
            let radius = selected_radius.get();
            let record = demographics.radius_record(radius);
            let tract_note = record.and_then(|r| {
                (r.tract_count > 0)
                    .then(|| format!("Aggregated from {} census tracts", r.tract_count))
            });
            let normalized = normalize_radius(record);

            let population_growth = growth_percent(
                normalized.current.population,
                normalized.historical.population,
            );
            let income_growth = growth_percent(
                normalized.current.median_household_income,
                normalized.historical.median_household_income,
            );
            let ratio = affordability_ratio(
                normalized.current.median_home_value,
                normalized.current.median_household_income,
            );
            let band = AffordabilityBand::classify(ratio);
            let distribution = income_distribution(&normalized.current.income_brackets);
            let series = education_series(
                &normalized.current,
                &normalized.historical,
                current_year,
                historical_year,
            );
            let jobs = jobs_added(&normalized.current, &normalized.historical);

            view! {
                {tract_note.map(|note| view! { <p class="report-tract-note">{note}</p> })}

                <StatCardsGrid
                    current=normalized.current.clone()
                    population_growth=population_growth
                    income_growth=income_growth
                    historical_year=historical_year
                />

                <div class="report-cards-row">
                    <GrowthTrendsCard
                        growth=growth.clone()
                        jobs_added=jobs
                        unemployment_rate=normalized.current.unemployment_rate
                    />
                    <AffordabilityCard
                        ratio=ratio
                        band=band
                        median_home_value=normalized.current.median_home_value
                        median_household_income=normalized.current.median_household_income
                    />
                </div>

                <div class="report-cards-row">
                    <IncomeDistributionCard distribution=distribution/>
                    <EducationChart
                        series=series
                        college_grad_percent=normalized.current.college_grad_percent()
                    />
                </div>
            }
        }
    };

    view! {
        <div class="report-container">
            <div class="report-header">
                <A href="/">
                    <button class="report-back-btn">"\u{2190} New search"</button>
                </A>
                <h1>{response.address.clone()}</h1>
                {matched_address.map(|matched| view! {
                    <p class="report-matched-address">{format!("Matched: {matched}")}</p>
                })}
                {data_source.map(|source| view! {
                    <p class="report-data-source">{source}</p>
                })}
            </div>

            <RadiusPicker selected=selected_radius/>

            {radius_section}

            <div class="report-cards-row">
                <MarketInsightsCard insights=insights/>
            </div>

            {match coordinates {
                Some(coordinates) => view! {
                    <RadiusMap coordinates=coordinates circles=map_circles/>
                }.into_any(),
                None => view! {
                    <div class="report-map-placeholder">
                        <p>"This address could not be placed on the map."</p>
                    </div>
                }.into_any(),
            }}

            <div class="report-footer">
                {total_time.map(|t| view! {
                    <span>{format!("Generated in {t:.1}s")}</span>
                })}
                {timestamp.map(|ts| view! {
                    <span>{ts}</span>
                })}
            </div>
        </div>
    }
    .into_any()
}

#[component]
fn MissingReport(address: String) -> impl IntoView {
    view! {
        <div class="report-missing">
            <h2>"No report data"</h2>
            <p>
                {if address.is_empty() {
                    "There is no demographic data loaded. Please run a search first.".to_string()
                } else {
                    format!(
                        "The report for \"{address}\" is no longer available. \
                         Results are kept in memory only, so reloading the page clears them. \
                         Please search again."
                    )
                }}
            </p>
            <A href="/">
                <button class="report-back-btn">"Back to search"</button>
            </A>
        </div>
    }
}
