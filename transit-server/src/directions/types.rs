//! Google Directions API response DTOs.
//!
//! These types map directly to the Directions JSON payload. `Option` is
//! used liberally because the provider omits fields rather than sending
//! null - notably transit departure/arrival times for frequent services.

use serde::{Deserialize, Serialize};

/// A request origin or destination: free text or a coordinate pair.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Place {
    /// A latitude/longitude pair.
    Coords { lat: f64, lng: f64 },
    /// A free-text place description.
    Text(String),
}

/// Top-level Directions response.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    /// Provider status string; "OK" on success.
    pub status: String,

    /// Candidate routes, best-first by the provider's own ranking.
    #[serde(default)]
    pub routes: Vec<RawRoute>,

    /// Human-readable error detail for non-OK statuses.
    pub error_message: Option<String>,
}

/// One candidate route.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRoute {
    /// Legs of the route. Transit requests without waypoints have one.
    #[serde(default)]
    pub legs: Vec<RawLeg>,

    /// Encoded overview path for the whole route.
    pub overview_polyline: Option<RawPolyline>,
}

/// An encoded polyline wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPolyline {
    pub points: String,
}

/// One origin-to-destination leg, composed of steps.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLeg {
    /// Total leg duration.
    pub duration: Option<ValueField>,

    /// Arrival time at the leg's destination (transit legs only).
    pub arrival_time: Option<TimeValue>,

    /// Ordered atomic steps.
    #[serde(default)]
    pub steps: Vec<RawStep>,
}

/// One atomic step within a leg.
#[derive(Debug, Clone, Deserialize)]
pub struct RawStep {
    /// "WALKING", "TRANSIT", or occasionally something else.
    pub travel_mode: String,

    /// HTML instruction text.
    pub html_instructions: Option<String>,

    /// Step distance.
    pub distance: Option<ValueField>,

    /// Step duration.
    pub duration: Option<ValueField>,

    /// Present only for transit steps.
    pub transit_details: Option<RawTransitDetails>,
}

/// Transit detail attached to a TRANSIT step.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTransitDetails {
    pub line: Option<RawLine>,
    pub departure_stop: Option<RawStop>,
    pub arrival_stop: Option<RawStop>,
    /// Omitted for frequent services.
    pub departure_time: Option<TimeValue>,
    /// Omitted for frequent services.
    pub arrival_time: Option<TimeValue>,
}

/// A transit line.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLine {
    pub name: Option<String>,
    pub short_name: Option<String>,
}

/// A transit stop.
#[derive(Debug, Clone, Deserialize)]
pub struct RawStop {
    pub name: Option<String>,
}

/// A `{text, value}` pair where value is a scalar quantity
/// (metres for distances, seconds for durations).
#[derive(Debug, Clone, Deserialize)]
pub struct ValueField {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub value: f64,
}

/// A `{text, value}` pair where value is an epoch timestamp.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeValue {
    pub text: Option<String>,
    pub value: Option<i64>,
}

/// A decoded path coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathPoint {
    pub lat: f64,
    pub lng: f64,
}
