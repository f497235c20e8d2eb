//! Domain types and calculations for the demographics lookup app.
//!
//! The external demographics API returns a loosely-typed payload: metric
//! bags may or may not be nested under a `data` field, most fields are
//! optional, and some values arrive summed across census tracts instead of
//! averaged. This crate is the single place where that payload is resolved
//! into concrete numbers:
//!
//! 1. [`models`]: serde schema for the raw response, tolerant of both
//!    payload layouts.
//! 2. [`normalize`]: one pass per radius producing fully-concrete metric
//!    values (tract correction, age bounding, zero defaults).
//! 3. [`derived`]: growth, affordability, income distribution, education
//!    interpolation, jobs added.
//!
//! The web crate renders from the normalized/derived values only; raw
//! payload fields are passed through untouched where the UI displays them
//! verbatim (map circles, market insights).

pub mod derived;
pub mod models;
pub mod normalize;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use models::{
    Coordinates, Demographics, DemographicsResponse, GrowthMetrics, MapCircle, MarketInsights,
    MetricBag, Radius, RadiusRecord, RadiusSnapshot,
};
pub use normalize::{normalize_radius, NormalizedMetrics, NormalizedRadius};

/// Errors surfaced to the user during an address lookup.
///
/// Everything here degrades to a visible message; nothing is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum LookupError {
    /// The user submitted a blank address. Caught before any network call.
    #[error("Please enter an address to look up")]
    EmptyAddress,

    /// Transport or HTTP-level failure reaching the demographics service.
    /// The message is the server-supplied detail when one was present.
    #[error("{message}")]
    RequestFailed {
        /// Server-supplied detail or a generic fallback.
        message: String,
    },

    /// The service answered 2xx but returned no demographics and no error
    /// message of its own.
    #[error("No demographic data is available for this address")]
    MissingDemographics,
}
