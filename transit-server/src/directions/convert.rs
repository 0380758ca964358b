//! Conversion from raw Directions payloads to classified steps.
//!
//! Missing fields are replaced with safe defaults (empty string, zero,
//! "Unknown Stop") so a sparse payload never aborts a whole route; the
//! normalizer's fallback rules handle the missing timestamps.

use tracing::warn;

use crate::itinerary::{Step, TransitStep};

use super::types::{PathPoint, RawLeg, RawRoute, RawStep};

/// Line name used when the provider omits one.
const UNKNOWN_LINE: &str = "Transit";

/// Stop name used when the provider omits one.
const UNKNOWN_STOP: &str = "Unknown Stop";

/// Classify a leg's raw steps by travel mode.
pub fn classify_steps(leg: &RawLeg) -> Vec<Step> {
    leg.steps.iter().map(classify_step).collect()
}

fn classify_step(raw: &RawStep) -> Step {
    let instruction = raw.html_instructions.clone().unwrap_or_default();

    match raw.travel_mode.as_str() {
        "WALKING" => Step::Walk {
            distance_metres: raw.distance.as_ref().map(|d| d.value).unwrap_or(0.0),
            instruction,
        },
        "TRANSIT" => Step::Transit(classify_transit(raw)),
        _ => Step::Other { instruction },
    }
}

fn classify_transit(raw: &RawStep) -> TransitStep {
    let details = raw.transit_details.as_ref();

    let line = details
        .and_then(|d| d.line.as_ref())
        .and_then(|l| l.name.clone().or_else(|| l.short_name.clone()))
        .unwrap_or_else(|| UNKNOWN_LINE.to_string());

    let departure_stop = details
        .and_then(|d| d.departure_stop.as_ref())
        .and_then(|s| s.name.clone())
        .unwrap_or_else(|| UNKNOWN_STOP.to_string());

    let arrival_stop = details
        .and_then(|d| d.arrival_stop.as_ref())
        .and_then(|s| s.name.clone())
        .unwrap_or_else(|| UNKNOWN_STOP.to_string());

    TransitStep {
        line,
        departure_stop,
        arrival_stop,
        departure_ts: details.and_then(|d| d.departure_time.as_ref()).and_then(|t| t.value),
        arrival_ts: details.and_then(|d| d.arrival_time.as_ref()).and_then(|t| t.value),
        duration_secs: raw.duration.as_ref().map(|d| d.value as i64).unwrap_or(0),
    }
}

/// Decode a route's overview polyline into coordinate pairs.
///
/// A missing or malformed polyline degrades to an empty path; it never
/// fails the route.
pub fn decode_path(route: &RawRoute) -> Vec<PathPoint> {
    let Some(encoded) = route.overview_polyline.as_ref() else {
        return Vec::new();
    };

    match polyline::decode_polyline(&encoded.points, 5) {
        Ok(line) => line
            .coords()
            .map(|c| PathPoint { lat: c.y, lng: c.x })
            .collect(),
        Err(e) => {
            warn!("failed to decode overview polyline: {e}");
            Vec::new()
        }
    }
}
