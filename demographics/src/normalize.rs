//! Metric normalization: one pass per radius resolving the raw payload
//! into concrete scalars every component can render.
//!
//! Two classes of metric come out of the upstream tract aggregation:
//!
//! * count-class: true sums across tracts (population, degree counts,
//!   labor force, income brackets). Used as-is.
//! * averaged-class: medians (income, home value, age) that some payload
//!   variants deliver summed across tracts instead of averaged.
//!
//! Correction policy for averaged-class metrics: the upstream aggregator is
//! the source of truth. When `per_radius_corrected` is `true` the value is
//! already per-radius and is used unchanged. When the flag is absent or
//! false and `tract_count > 1`, the value is divided by `tract_count`.
//! There are no magnitude heuristics.

use serde::{Deserialize, Serialize};

use crate::models::{MetricBag, RadiusRecord};

/// Substituted when a corrected median age still falls outside [0, 100].
pub const MEDIAN_AGE_FALLBACK: f64 = 38.0;

/// Fully-concrete metrics for one radius and one year. No optional fields;
/// anything the payload omitted is zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedMetrics {
    pub population: f64,
    pub median_household_income: f64,
    pub median_home_value: f64,
    pub median_age: f64,

    pub bachelors_degree: f64,
    pub masters_degree: f64,
    pub professional_degree: f64,
    pub doctorate_degree: f64,

    pub labor_force: f64,
    pub employed: f64,
    pub unemployed: f64,
    /// Percentage. Taken from the payload when supplied, otherwise derived
    /// from the unemployed/labor-force counts.
    pub unemployment_rate: f64,

    pub income_brackets: IncomeBrackets,
}

impl NormalizedMetrics {
    /// Bachelors + masters + professional + doctorate.
    pub fn degree_total(&self) -> f64 {
        self.bachelors_degree + self.masters_degree + self.professional_degree + self.doctorate_degree
    }

    /// Share of the population holding a bachelors degree or higher.
    pub fn college_grad_percent(&self) -> f64 {
        if self.population > 0.0 {
            self.degree_total() / self.population * 100.0
        } else {
            0.0
        }
    }
}

/// The 16 fine-grained household-income band counts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IncomeBrackets {
    pub less_10k: f64,
    pub from_10k_15k: f64,
    pub from_15k_20k: f64,
    pub from_20k_25k: f64,
    pub from_25k_30k: f64,
    pub from_30k_35k: f64,
    pub from_35k_40k: f64,
    pub from_40k_45k: f64,
    pub from_45k_50k: f64,
    pub from_50k_60k: f64,
    pub from_60k_75k: f64,
    pub from_75k_100k: f64,
    pub from_100k_125k: f64,
    pub from_125k_150k: f64,
    pub from_150k_200k: f64,
    pub from_200k_plus: f64,
}

impl IncomeBrackets {
    pub fn under_50k(&self) -> f64 {
        self.less_10k
            + self.from_10k_15k
            + self.from_15k_20k
            + self.from_20k_25k
            + self.from_25k_30k
            + self.from_30k_35k
            + self.from_35k_40k
            + self.from_40k_45k
            + self.from_45k_50k
    }

    pub fn from_50k_100k(&self) -> f64 {
        self.from_50k_60k + self.from_60k_75k + self.from_75k_100k
    }

    pub fn from_100k_150k(&self) -> f64 {
        self.from_100k_125k + self.from_125k_150k
    }

    pub fn over_150k(&self) -> f64 {
        self.from_150k_200k + self.from_200k_plus
    }

    pub fn total(&self) -> f64 {
        self.under_50k() + self.from_50k_100k() + self.from_100k_150k() + self.over_150k()
    }
}

/// Normalized current + historical metrics for one radius.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedRadius {
    pub current: NormalizedMetrics,
    pub historical: NormalizedMetrics,
    pub tract_count: u32,
}

/// Normalizes one radius record. A missing record yields all zeros; this
/// never fails.
pub fn normalize_radius(record: Option<&RadiusRecord>) -> NormalizedRadius {
    let Some(record) = record else {
        return NormalizedRadius::default();
    };

    NormalizedRadius {
        current: normalize_bag(record.current.metrics(), record),
        historical: normalize_bag(record.historical.metrics(), record),
        tract_count: record.tract_count,
    }
}

fn normalize_bag(bag: &MetricBag, record: &RadiusRecord) -> NormalizedMetrics {
    let value = |v: Option<f64>| v.unwrap_or(0.0);

    let labor_force = value(bag.labor_force);
    let unemployed = value(bag.unemployed);
    let unemployment_rate = bag.unemployment_rate.unwrap_or(if labor_force > 0.0 {
        unemployed / labor_force * 100.0
    } else {
        0.0
    });

    NormalizedMetrics {
        population: value(bag.total_population),
        median_household_income: deaggregate(value(bag.median_household_income), record),
        median_home_value: deaggregate(value(bag.median_home_value), record),
        median_age: bound_median_age(deaggregate(value(bag.median_age), record)),

        bachelors_degree: value(bag.bachelors_degree),
        masters_degree: value(bag.masters_degree),
        professional_degree: value(bag.professional_degree),
        doctorate_degree: value(bag.doctorate_degree),

        labor_force,
        employed: value(bag.employed),
        unemployed,
        unemployment_rate,

        income_brackets: IncomeBrackets {
            less_10k: value(bag.income_less_10k),
            from_10k_15k: value(bag.income_10k_15k),
            from_15k_20k: value(bag.income_15k_20k),
            from_20k_25k: value(bag.income_20k_25k),
            from_25k_30k: value(bag.income_25k_30k),
            from_30k_35k: value(bag.income_30k_35k),
            from_35k_40k: value(bag.income_35k_40k),
            from_40k_45k: value(bag.income_40k_45k),
            from_45k_50k: value(bag.income_45k_50k),
            from_50k_60k: value(bag.income_50k_60k),
            from_60k_75k: value(bag.income_60k_75k),
            from_75k_100k: value(bag.income_75k_100k),
            from_100k_125k: value(bag.income_100k_125k),
            from_125k_150k: value(bag.income_125k_150k),
            from_150k_200k: value(bag.income_150k_200k),
            from_200k_plus: value(bag.income_200k_plus),
        },
    }
}

/// Averaged-class correction. Counts never go through here.
fn deaggregate(raw: f64, record: &RadiusRecord) -> f64 {
    if record.per_radius_corrected == Some(true) || record.tract_count <= 1 {
        raw
    } else {
        raw / f64::from(record.tract_count)
    }
}

fn bound_median_age(age: f64) -> f64 {
    if (0.0..=100.0).contains(&age) {
        age
    } else {
        MEDIAN_AGE_FALLBACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RadiusSnapshot;

    fn record_with(current: serde_json::Value, tract_count: u32) -> RadiusRecord {
        RadiusRecord {
            current: serde_json::from_value(current).unwrap(),
            historical: RadiusSnapshot::default(),
            tract_count,
            ..RadiusRecord::default()
        }
    }

    #[test]
    fn single_tract_values_pass_through_unchanged() {
        let record = record_with(
            serde_json::json!({
                "total_population": 4200.0,
                "median_household_income": 85000.0,
                "median_home_value": 410000.0,
                "median_age": 33.4
            }),
            1,
        );

        let normalized = normalize_radius(Some(&record));
        assert_eq!(normalized.current.population, 4200.0);
        assert_eq!(normalized.current.median_household_income, 85000.0);
        assert_eq!(normalized.current.median_home_value, 410000.0);
        assert_eq!(normalized.current.median_age, 33.4);
    }

    #[test]
    fn averaged_class_metrics_divide_by_tract_count() {
        let record = record_with(
            serde_json::json!({
                "total_population": 120000.0,
                "median_household_income": 850000.0,
                "median_home_value": 4100000.0,
                "median_age": 340.0
            }),
            10,
        );

        let normalized = normalize_radius(Some(&record));
        // Counts are true sums and stay whole.
        assert_eq!(normalized.current.population, 120000.0);
        assert_eq!(normalized.current.median_household_income, 85000.0);
        assert_eq!(normalized.current.median_home_value, 410000.0);
        assert_eq!(normalized.current.median_age, 34.0);
    }

    #[test]
    fn corrected_flag_skips_division() {
        let mut record = record_with(
            serde_json::json!({ "median_household_income": 85000.0, "median_age": 36.0 }),
            10,
        );
        record.per_radius_corrected = Some(true);

        let normalized = normalize_radius(Some(&record));
        assert_eq!(normalized.current.median_household_income, 85000.0);
        assert_eq!(normalized.current.median_age, 36.0);
    }

    #[test]
    fn out_of_range_age_falls_back_to_38() {
        for (raw, tracts) in [(560.0, 1), (-4.0, 1), (101.0, 1)] {
            let record = record_with(serde_json::json!({ "median_age": raw }), tracts);
            let normalized = normalize_radius(Some(&record));
            assert_eq!(normalized.current.median_age, MEDIAN_AGE_FALLBACK, "raw={raw}");
        }
        // Boundary values are in range and kept.
        for raw in [0.0, 100.0] {
            let record = record_with(serde_json::json!({ "median_age": raw }), 1);
            assert_eq!(normalize_radius(Some(&record)).current.median_age, raw);
        }
    }

    #[test]
    fn missing_record_and_missing_fields_yield_zeros() {
        let normalized = normalize_radius(None);
        assert_eq!(normalized, NormalizedRadius::default());

        let record = record_with(serde_json::json!({}), 3);
        let normalized = normalize_radius(Some(&record));
        assert_eq!(normalized.current.population, 0.0);
        assert_eq!(normalized.current.median_age, 0.0);
        assert_eq!(normalized.current.income_brackets.total(), 0.0);
    }

    #[test]
    fn nested_and_flat_layouts_normalize_identically() {
        let nested = record_with(
            serde_json::json!({ "data": { "total_population": 9876.0 } }),
            1,
        );
        let flat = record_with(serde_json::json!({ "total_population": 9876.0 }), 1);

        assert_eq!(
            normalize_radius(Some(&nested)).current.population,
            normalize_radius(Some(&flat)).current.population
        );
    }

    #[test]
    fn college_grad_percent_guards_zero_population() {
        let with_data = record_with(
            serde_json::json!({
                "total_population": 10000.0,
                "bachelors_degree": 2000.0,
                "masters_degree": 800.0,
                "professional_degree": 150.0,
                "doctorate_degree": 50.0
            }),
            1,
        );
        let normalized = normalize_radius(Some(&with_data));
        assert_eq!(normalized.current.degree_total(), 3000.0);
        assert_eq!(normalized.current.college_grad_percent(), 30.0);

        let empty = normalize_radius(None);
        assert_eq!(empty.current.college_grad_percent(), 0.0);
    }

    #[test]
    fn unemployment_rate_prefers_payload_then_counts() {
        let from_payload = record_with(
            serde_json::json!({ "unemployment_rate": 5.5, "labor_force": 1000.0, "unemployed": 200.0 }),
            1,
        );
        assert_eq!(
            normalize_radius(Some(&from_payload)).current.unemployment_rate,
            5.5
        );

        let from_counts = record_with(
            serde_json::json!({ "labor_force": 1000.0, "unemployed": 40.0 }),
            1,
        );
        assert_eq!(
            normalize_radius(Some(&from_counts)).current.unemployment_rate,
            4.0
        );
    }
}
