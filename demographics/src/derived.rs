//! Secondary quantities computed from normalized metrics.
//!
//! Everything here is a pure function; nothing writes back to the payload.

use serde::{Deserialize, Serialize};

use crate::normalize::{IncomeBrackets, NormalizedMetrics};

/// Percentage change between two yearly values, rounded to one decimal.
///
/// Returns 0.0 when the historical value is zero; never NaN or infinite.
pub fn growth_percent(current: f64, historical: f64) -> f64 {
    if historical == 0.0 {
        return 0.0;
    }
    ((current - historical) / historical * 1000.0).round() / 10.0
}

/// Median home value divided by median household income; 0 when income is 0.
pub fn affordability_ratio(median_home_value: f64, median_household_income: f64) -> f64 {
    if median_household_income == 0.0 {
        return 0.0;
    }
    median_home_value / median_household_income
}

/// Housing-cost-burden classification. Thresholds are a fixed policy, both
/// boundaries inclusive: ratio 3.0 is still Affordable, 5.0 is still
/// ModeratelyUnaffordable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AffordabilityBand {
    Affordable,
    ModeratelyUnaffordable,
    SeverelyUnaffordable,
}

impl AffordabilityBand {
    pub fn classify(ratio: f64) -> Self {
        if ratio <= 3.0 {
            Self::Affordable
        } else if ratio <= 5.0 {
            Self::ModeratelyUnaffordable
        } else {
            Self::SeverelyUnaffordable
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Affordable => "Affordable",
            Self::ModeratelyUnaffordable => "Moderately Unaffordable",
            Self::SeverelyUnaffordable => "Severely Unaffordable",
        }
    }
}

/// Household share per coarse income bucket, as percentages of the bucket
/// total. `has_data` distinguishes a measured distribution from the even
/// placeholder returned when no bracket counts were reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeDistribution {
    pub under_50k: f64,
    pub from_50k_100k: f64,
    pub from_100k_150k: f64,
    pub over_150k: f64,
    pub has_data: bool,
}

impl IncomeDistribution {
    pub const BUCKET_LABELS: [&'static str; 4] =
        ["<$50k", "$50k\u{2013}$100k", "$100k\u{2013}$150k", "$150k+"];

    pub fn percentages(&self) -> [f64; 4] {
        [self.under_50k, self.from_50k_100k, self.from_100k_150k, self.over_150k]
    }
}

/// Collapses the 16 fine income bands into four coarse buckets.
pub fn income_distribution(brackets: &IncomeBrackets) -> IncomeDistribution {
    let total = brackets.total();
    if total == 0.0 {
        // Declared placeholder, not a measured value.
        return IncomeDistribution {
            under_50k: 25.0,
            from_50k_100k: 25.0,
            from_100k_150k: 25.0,
            over_150k: 25.0,
            has_data: false,
        };
    }

    IncomeDistribution {
        under_50k: brackets.under_50k() / total * 100.0,
        from_50k_100k: brackets.from_50k_100k() / total * 100.0,
        from_100k_150k: brackets.from_100k_150k() / total * 100.0,
        over_150k: brackets.over_150k() / total * 100.0,
        has_data: true,
    }
}

/// Degree counts for one chart year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationPoint {
    pub year: i32,
    pub bachelors: i64,
    pub masters: i64,
    pub professional: i64,
    pub doctorate: i64,
    pub total: i64,
}

/// Linear year-by-year interpolation between the two sampled years,
/// inclusive, rounded to the nearest whole count.
///
/// When the two years coincide the series collapses to the single current
/// point instead of dividing by zero.
pub fn education_series(
    current: &NormalizedMetrics,
    historical: &NormalizedMetrics,
    current_year: i32,
    historical_year: i32,
) -> Vec<EducationPoint> {
    let point = |year: i32, m: &NormalizedMetrics| EducationPoint {
        year,
        bachelors: m.bachelors_degree.round() as i64,
        masters: m.masters_degree.round() as i64,
        professional: m.professional_degree.round() as i64,
        doctorate: m.doctorate_degree.round() as i64,
        total: m.degree_total().round() as i64,
    };

    if current_year <= historical_year {
        return vec![point(current_year, current)];
    }

    let span = f64::from(current_year - historical_year);
    let lerp = |h: f64, c: f64, year: i32| -> i64 {
        let t = f64::from(year - historical_year) / span;
        (h + (c - h) * t).round() as i64
    };

    (historical_year..=current_year)
        .map(|year| EducationPoint {
            year,
            bachelors: lerp(historical.bachelors_degree, current.bachelors_degree, year),
            masters: lerp(historical.masters_degree, current.masters_degree, year),
            professional: lerp(historical.professional_degree, current.professional_degree, year),
            doctorate: lerp(historical.doctorate_degree, current.doctorate_degree, year),
            total: lerp(historical.degree_total(), current.degree_total(), year),
        })
        .collect()
}

/// Change in employed count between the sampled years. Negative when
/// employment declined; the view decides how to present that.
pub fn jobs_added(current: &NormalizedMetrics, historical: &NormalizedMetrics) -> i64 {
    (current.employed - historical.employed).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DemographicsResponse, Radius};
    use crate::normalize::normalize_radius;

    #[test]
    fn growth_rounds_to_one_decimal() {
        assert_eq!(growth_percent(12000.0, 10000.0), 20.0);
        assert_eq!(growth_percent(10345.0, 10000.0), 3.5);
        assert_eq!(growth_percent(9000.0, 10000.0), -10.0);
    }

    #[test]
    fn growth_is_zero_when_historical_is_zero() {
        let pct = growth_percent(5000.0, 0.0);
        assert_eq!(pct, 0.0);
        assert!(pct.is_finite());
    }

    #[test]
    fn affordability_ratio_handles_zero_income() {
        assert_eq!(affordability_ratio(600000.0, 0.0), 0.0);
        assert_eq!(affordability_ratio(600000.0, 120000.0), 5.0);
    }

    #[test]
    fn affordability_bands_are_inclusive_at_boundaries() {
        assert_eq!(AffordabilityBand::classify(3.0), AffordabilityBand::Affordable);
        assert_eq!(
            AffordabilityBand::classify(3.01),
            AffordabilityBand::ModeratelyUnaffordable
        );
        assert_eq!(
            AffordabilityBand::classify(5.0),
            AffordabilityBand::ModeratelyUnaffordable
        );
        assert_eq!(
            AffordabilityBand::classify(5.01),
            AffordabilityBand::SeverelyUnaffordable
        );
        assert_eq!(AffordabilityBand::classify(0.0), AffordabilityBand::Affordable);
    }

    #[test]
    fn income_distribution_sums_to_100() {
        let brackets = IncomeBrackets {
            less_10k: 50.0,
            from_25k_30k: 150.0,
            from_50k_60k: 300.0,
            from_75k_100k: 200.0,
            from_100k_125k: 120.0,
            from_150k_200k: 100.0,
            from_200k_plus: 80.0,
            ..IncomeBrackets::default()
        };

        let dist = income_distribution(&brackets);
        assert!(dist.has_data);
        let sum: f64 = dist.percentages().iter().sum();
        assert!((sum - 100.0).abs() < 1e-9, "sum={sum}");
        assert!((dist.under_50k - 20.0).abs() < 1e-9);
        assert!((dist.from_50k_100k - 50.0).abs() < 1e-9);
    }

    #[test]
    fn empty_brackets_yield_declared_placeholder() {
        let dist = income_distribution(&IncomeBrackets::default());
        assert!(!dist.has_data);
        assert_eq!(dist.percentages(), [25.0, 25.0, 25.0, 25.0]);
    }

    #[test]
    fn education_series_hits_endpoints_and_is_monotonic() {
        let historical = NormalizedMetrics {
            bachelors_degree: 1000.0,
            masters_degree: 400.0,
            professional_degree: 100.0,
            doctorate_degree: 50.0,
            ..NormalizedMetrics::default()
        };
        let current = NormalizedMetrics {
            bachelors_degree: 1500.0,
            masters_degree: 700.0,
            professional_degree: 160.0,
            doctorate_degree: 90.0,
            ..NormalizedMetrics::default()
        };

        let series = education_series(&current, &historical, 2022, 2017);
        assert_eq!(series.len(), 6);
        assert_eq!(series.first().unwrap().year, 2017);
        assert_eq!(series.first().unwrap().total, 1550);
        assert_eq!(series.last().unwrap().year, 2022);
        assert_eq!(series.last().unwrap().total, 2450);
        for pair in series.windows(2) {
            assert!(pair[1].total >= pair[0].total);
        }
    }

    #[test]
    fn education_series_collapses_when_years_coincide() {
        let metrics = NormalizedMetrics {
            bachelors_degree: 1200.0,
            ..NormalizedMetrics::default()
        };
        let series = education_series(&metrics, &metrics, 2022, 2022);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].year, 2022);
        assert_eq!(series[0].total, 1200);
    }

    #[test]
    fn jobs_added_keeps_its_sign() {
        let grow = NormalizedMetrics { employed: 5200.0, ..NormalizedMetrics::default() };
        let shrink = NormalizedMetrics { employed: 4800.0, ..NormalizedMetrics::default() };
        assert_eq!(jobs_added(&grow, &shrink), 400);
        assert_eq!(jobs_added(&shrink, &grow), -400);
    }

    // Full payload fixture: deserialize -> normalize -> derive.
    #[test]
    fn end_to_end_population_growth_and_affordability() {
        let response: DemographicsResponse = serde_json::from_value(serde_json::json!({
            "address": "555 California St, San Francisco, CA",
            "coordinates": {
                "lat": 37.7919,
                "lng": -122.4037,
                "matched_address": "555 CALIFORNIA ST, SAN FRANCISCO, CA, 94104",
                "source": "US Census Bureau Geocoder"
            },
            "demographics": {
                "current_year": "2022",
                "historical_year": "2017",
                "radius_data": {
                    "3_mile": {
                        "current": {
                            "data": {
                                "total_population": 12000.0,
                                "median_household_income": 120000.0,
                                "median_home_value": 600000.0,
                                "median_age": 36.2
                            }
                        },
                        "historical": {
                            "total_population": 10000.0,
                            "median_household_income": 95000.0
                        },
                        "tract_count": 1
                    }
                }
            },
            "performance": { "total_time": 1.8 },
            "error": null,
            "timestamp": "2024-06-01T12:00:00"
        }))
        .unwrap();

        let demographics = response.demographics().expect("no error in payload");
        let normalized = normalize_radius(demographics.radius_record(Radius::ThreeMile));

        assert_eq!(
            growth_percent(normalized.current.population, normalized.historical.population),
            20.0
        );

        let ratio = affordability_ratio(
            normalized.current.median_home_value,
            normalized.current.median_household_income,
        );
        assert_eq!(ratio, 5.0);
        assert_eq!(
            AffordabilityBand::classify(ratio),
            AffordabilityBand::ModeratelyUnaffordable
        );
    }
}
