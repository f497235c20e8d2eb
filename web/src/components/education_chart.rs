use demographics::derived::EducationPoint;
use leptos::prelude::*;

use crate::utils::format::format_count;

const CHART_WIDTH: f64 = 320.0;
const CHART_HEIGHT: f64 = 150.0;
const PAD_X: f64 = 14.0;
const PAD_Y: f64 = 12.0;

/// Bachelor's-and-above degree holders, interpolated year by year between
/// the two sampled years and drawn as an SVG line.
#[component]
pub fn EducationChart(series: Vec<EducationPoint>, college_grad_percent: f64) -> impl IntoView {
    let (Some(first), Some(last)) = (series.first().copied(), series.last().copied()) else {
        return view! {
            <div class="card education-card">
                <h3>"Education"</h3>
                <p class="education-empty">"No education data for this radius."</p>
            </div>
        }
        .into_any();
    };
    let max_total = series.iter().map(|p| p.total).max().unwrap_or(0).max(1) as f64;
    let span_years = (last.year - first.year).max(1) as f64;

    let x = |year: i32| PAD_X + f64::from(year - first.year) / span_years * (CHART_WIDTH - 2.0 * PAD_X);
    let y = |total: i64| CHART_HEIGHT - PAD_Y - (total as f64 / max_total) * (CHART_HEIGHT - 2.0 * PAD_Y);

    let points = series
        .iter()
        .map(|p| format!("{:.1},{:.1}", x(p.year), y(p.total)))
        .collect::<Vec<_>>()
        .join(" ");

    view! {
        <div class="card education-card">
            <h3>"Education"</h3>
            <p class="education-summary">
                {format!(
                    "{} residents ({:.1}% of the population) hold a bachelor's degree or higher, vs {} in {}",
                    format_count(last.total as f64),
                    college_grad_percent,
                    format_count(first.total as f64),
                    first.year
                )}
            </p>
            <svg
                class="education-chart"
                viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")
                preserveAspectRatio="xMidYMid meet"
            >
                <polyline
                    points=points
                    fill="none"
                    stroke="#5b21b6"
                    stroke-width="2"
                />
                {series.iter().map(|p| {
                    view! {
                        <circle
                            cx=format!("{:.1}", x(p.year))
                            cy=format!("{:.1}", y(p.total))
                            r="2.5"
                            fill="#5b21b6"
                        >
                            <title>{format!("{}: {}", p.year, format_count(p.total as f64))}</title>
                        </circle>
                    }
                }).collect_view()}
                <text
                    x=format!("{:.1}", x(first.year))
                    y=format!("{CHART_HEIGHT}")
                    class="education-axis-label"
                    text-anchor="start"
                >
                    {first.year.to_string()}
                </text>
                <text
                    x=format!("{:.1}", x(last.year))
                    y=format!("{CHART_HEIGHT}")
                    class="education-axis-label"
                    text-anchor="end"
                >
                    {last.year.to_string()}
                </text>
            </svg>
            <div class="education-breakdown">
                <span>{format!("Bachelors: {}", format_count(last.bachelors as f64))}</span>
                <span>{format!("Masters: {}", format_count(last.masters as f64))}</span>
                <span>{format!("Professional: {}", format_count(last.professional as f64))}</span>
                <span>{format!("Doctorate: {}", format_count(last.doctorate as f64))}</span>
            </div>
        </div>
    }
    .into_any()
}
