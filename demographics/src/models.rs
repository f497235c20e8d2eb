//! Serde schema for the demographics API response.
//!
//! The schema is deliberately lenient: every metric is optional, unknown
//! fields are ignored, and snapshot bags accept both the flat layout and
//! the `data`-nested layout that occur in live payloads. Consumers never
//! read these fields directly for display math; they go through
//! [`crate::normalize`] first.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The fixed set of catchment radii the service reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Radius {
    OneMile,
    ThreeMile,
    FiveMile,
}

impl Radius {
    pub const ALL: [Self; 3] = [Self::OneMile, Self::ThreeMile, Self::FiveMile];

    /// Key used in the payload's `radius_data` map.
    pub fn key(self) -> &'static str {
        match self {
            Self::OneMile => "1_mile",
            Self::ThreeMile => "3_mile",
            Self::FiveMile => "5_mile",
        }
    }

    pub fn miles(self) -> f64 {
        match self {
            Self::OneMile => 1.0,
            Self::ThreeMile => 3.0,
            Self::FiveMile => 5.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::OneMile => "1 Mile",
            Self::ThreeMile => "3 Miles",
            Self::FiveMile => "5 Miles",
        }
    }
}

/// Root entity returned by `POST /demographics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicsResponse {
    pub address: String,
    pub coordinates: Option<Coordinates>,
    pub demographics: Option<Demographics>,
    #[serde(default)]
    pub performance: Performance,
    pub error: Option<String>,
    pub timestamp: Option<String>,
}

impl DemographicsResponse {
    /// Demographics payload, gated on the error invariant: when `error` is
    /// set, the payload is treated as absent regardless of its content.
    pub fn demographics(&self) -> Option<&Demographics> {
        if self.error.is_some() {
            None
        } else {
            self.demographics.as_ref()
        }
    }

    /// Coordinates, gated the same way as [`Self::demographics`].
    pub fn coordinates(&self) -> Option<&Coordinates> {
        if self.error.is_some() {
            None
        } else {
            self.coordinates.as_ref()
        }
    }
}

/// Geocoding result for the submitted address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
    pub matched_address: Option<String>,
    pub match_type: Option<String>,
    pub source: Option<String>,
}

/// Request timing breakdown. Informational only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Performance {
    pub geocoding_time: Option<f64>,
    pub api_time: Option<f64>,
    pub total_time: Option<f64>,
}

/// The structured demographic payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Demographics {
    #[serde(default)]
    pub radius_data: BTreeMap<String, RadiusRecord>,
    #[serde(default)]
    pub growth_metrics: GrowthMetrics,
    pub market_insights: Option<MarketInsights>,
    #[serde(default)]
    pub map_circles: Vec<MapCircle>,
    pub current_year: Option<String>,
    pub historical_year: Option<String>,
    pub data_source: Option<String>,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Sample years the service defaults to when the payload omits them.
pub const DEFAULT_CURRENT_YEAR: i32 = 2022;
pub const DEFAULT_HISTORICAL_YEAR: i32 = 2017;

impl Demographics {
    pub fn radius_record(&self, radius: Radius) -> Option<&RadiusRecord> {
        self.radius_data.get(radius.key())
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
            .as_deref()
            .and_then(|y| y.parse().ok())
            .unwrap_or(DEFAULT_CURRENT_YEAR)
    }

    pub fn historical_year(&self) -> i32 {
        self.historical_year
            .as_deref()
            .and_then(|y| y.parse().ok())
            .unwrap_or(DEFAULT_HISTORICAL_YEAR)
    }
}

/// Demographic snapshot for one catchment radius.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RadiusRecord {
    #[serde(default)]
    pub current: RadiusSnapshot,
    #[serde(default)]
    pub historical: RadiusSnapshot,
    /// Number of census tracts aggregated into this radius.
    #[serde(default)]
    pub tract_count: u32,
    /// Set by the upstream aggregator when averaged-class metrics were
    /// already corrected to per-radius values.
    pub per_radius_corrected: Option<bool>,
    pub aggregation_info: Option<String>,
    pub geography_level: Option<String>,
    pub radius_miles: Option<f64>,
}

/// One year's metric bag, tolerant of both observed layouts: metrics flat
/// on the snapshot, or nested one level under `data`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RadiusSnapshot {
    pub data: Option<MetricBag>,
    #[serde(flatten)]
    pub inline: MetricBag,
}

impl RadiusSnapshot {
    /// Resolves the layout: the nested bag wins when present.
    pub fn metrics(&self) -> &MetricBag {
        self.data.as_ref().unwrap_or(&self.inline)
    }
}

/// Raw scalar metrics for one radius and one year. All optional; upstream
/// data coverage varies by geography.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricBag {
    pub year: Option<String>,
    pub geography_name: Option<String>,

    pub total_population: Option<f64>,
    pub median_household_income: Option<f64>,
    pub median_home_value: Option<f64>,
    pub median_age: Option<f64>,

    pub bachelors_degree: Option<f64>,
    pub masters_degree: Option<f64>,
    pub professional_degree: Option<f64>,
    pub doctorate_degree: Option<f64>,

    pub labor_force: Option<f64>,
    pub employed: Option<f64>,
    pub unemployed: Option<f64>,
    pub unemployment_rate: Option<f64>,
    pub college_grad_percentage: Option<f64>,

    pub income_less_10k: Option<f64>,
    pub income_10k_15k: Option<f64>,
    pub income_15k_20k: Option<f64>,
    pub income_20k_25k: Option<f64>,
    pub income_25k_30k: Option<f64>,
    pub income_30k_35k: Option<f64>,
    pub income_35k_40k: Option<f64>,
    pub income_40k_45k: Option<f64>,
    pub income_45k_50k: Option<f64>,
    pub income_50k_60k: Option<f64>,
    pub income_60k_75k: Option<f64>,
    pub income_75k_100k: Option<f64>,
    pub income_100k_125k: Option<f64>,
    pub income_125k_150k: Option<f64>,
    pub income_150k_200k: Option<f64>,
    pub income_200k_plus: Option<f64>,
}

/// Growth percentages computed upstream, passed through unmodified.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GrowthMetrics {
    pub population_growth: Option<f64>,
    pub income_growth: Option<f64>,
    pub job_growth: Option<f64>,
    pub unemployment_rate_change: Option<f64>,
}

/// Free-text market insight lists. Opaque pass-through content.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MarketInsights {
    #[serde(default)]
    pub demographic_strengths: Vec<String>,
    #[serde(default)]
    pub market_opportunities: Vec<String>,
    #[serde(default)]
    pub target_demographics: Vec<String>,
    pub insights_metadata: Option<InsightsMetadata>,
}

impl MarketInsights {
    pub fn is_empty(&self) -> bool {
        self.demographic_strengths.is_empty()
            && self.market_opportunities.is_empty()
            && self.target_demographics.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InsightsMetadata {
    #[serde(default)]
    pub generated: bool,
    pub version: Option<String>,
    pub engine: Option<String>,
    pub error: Option<String>,
}

/// GeoJSON-style radius ring for map rendering. Pass-through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapCircle {
    #[serde(rename = "type", default)]
    pub feature_type: String,
    pub properties: MapCircleProperties,
    pub geometry: Option<MapCircleGeometry>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MapCircleProperties {
    #[serde(default)]
    pub radius_miles: f64,
    #[serde(default)]
    pub population: i64,
    pub population_formatted: Option<String>,
    /// `[lng, lat]`, GeoJSON axis order.
    #[serde(default)]
    pub center: Vec<f64>,
    pub color: Option<String>,
    #[serde(rename = "fillOpacity")]
    pub fill_opacity: Option<f64>,
    #[serde(rename = "strokeOpacity")]
    pub stroke_opacity: Option<f64>,
    #[serde(rename = "strokeWeight")]
    pub stroke_weight: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MapCircleGeometry {
    #[serde(rename = "type", default)]
    pub geometry_type: String,
    #[serde(default)]
    pub coordinates: Vec<Vec<Vec<f64>>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_and_flat_snapshots_resolve_to_same_metrics() {
        let nested: RadiusSnapshot = serde_json::from_value(serde_json::json!({
            "data": { "total_population": 12000.0, "median_age": 36.5 },
            "tract_count": 4
        }))
        .unwrap();
        let flat: RadiusSnapshot = serde_json::from_value(serde_json::json!({
            "total_population": 12000.0,
            "median_age": 36.5
        }))
        .unwrap();

        assert_eq!(nested.metrics().total_population, Some(12000.0));
        assert_eq!(nested.metrics(), flat.metrics());
    }

    #[test]
    fn error_response_hides_demographics_and_coordinates() {
        let response: DemographicsResponse = serde_json::from_value(serde_json::json!({
            "address": "nowhere",
            "coordinates": { "lat": 37.7, "lng": -122.4 },
            "demographics": { "radius_data": {} },
            "performance": { "total_time": 0.2 },
            "error": "No address found",
            "timestamp": "2024-01-01T00:00:00"
        }))
        .unwrap();

        assert!(response.demographics.is_some());
        assert!(response.demographics().is_none());
        assert!(response.coordinates().is_none());
    }

    #[test]
    fn missing_optional_sections_deserialize_to_defaults() {
        let response: DemographicsResponse = serde_json::from_value(serde_json::json!({
            "address": "1 Main St",
            "coordinates": null,
            "demographics": null,
            "error": null,
            "timestamp": null
        }))
        .unwrap();

        assert!(response.demographics().is_none());
        assert_eq!(response.performance, Performance::default());
    }

    #[test]
    fn year_defaults_apply_when_payload_omits_them() {
        let demographics = Demographics::default();
        assert_eq!(demographics.current_year(), 2022);
        assert_eq!(demographics.historical_year(), 2017);

        let demographics: Demographics = serde_json::from_value(serde_json::json!({
            "current_year": "2023",
            "historical_year": "2018"
        }))
        .unwrap();
        assert_eq!(demographics.current_year(), 2023);
        assert_eq!(demographics.historical_year(), 2018);
    }

    #[test]
    fn radius_keys_match_payload_map() {
        let demographics: Demographics = serde_json::from_value(serde_json::json!({
            "radius_data": {
                "1_mile": { "tract_count": 2 },
                "3_mile": { "tract_count": 9 },
                "5_mile": { "tract_count": 21 }
            }
        }))
        .unwrap();

        for radius in Radius::ALL {
            assert!(demographics.radius_record(radius).is_some(), "{:?}", radius);
        }
        assert_eq!(
            demographics.radius_record(Radius::ThreeMile).unwrap().tract_count,
            9
        );
    }

    #[test]
    fn map_circles_parse_geojson_properties() {
        let circle: MapCircle = serde_json::from_value(serde_json::json!({
            "type": "Feature",
            "properties": {
                "radius_miles": 3,
                "population": 185000,
                "population_formatted": "185,000",
                "center": [-122.4194, 37.7749],
                "color": "#4ECDC4",
                "fillOpacity": 0.15,
                "strokeOpacity": 0.8,
                "strokeWeight": 2
            },
            "geometry": { "type": "Polygon", "coordinates": [[[0.0, 0.0]]] }
        }))
        .unwrap();

        assert_eq!(circle.properties.radius_miles, 3.0);
        assert_eq!(circle.properties.center, vec![-122.4194, 37.7749]);
        assert_eq!(circle.properties.fill_opacity, Some(0.15));
    }
}
