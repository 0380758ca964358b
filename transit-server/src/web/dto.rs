//! Data transfer objects for web requests and responses.

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::directions::{PathPoint, Place};
use crate::itinerary::{ConfidenceTier, NormalizedStep, RouteCandidate};
use crate::mbta::{PredictionResource, StopResource, VehicleResource, line_color};
use crate::walk::SpeedProfile;

/// Request to plan transit routes.
#[derive(Debug, Deserialize)]
pub struct DirectionsRequest {
    /// Starting point: free text or coordinates
    pub origin: Place,

    /// Destination: free text or coordinates
    pub destination: Place,

    /// Speed profile key ("slow" | "normal" | "fast", defaults to normal)
    pub walking_speed: Option<String>,
}

/// Successful list response envelope.
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    /// Wrap data in a success envelope.
    pub fn ok(data: Vec<T>) -> Self {
        Self {
            success: true,
            data,
        }
    }

    /// An empty failure envelope (used by the pass-through endpoints).
    pub fn failed() -> Self {
        Self {
            success: false,
            data: Vec::new(),
        }
    }
}

/// Failure response with a message.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

impl ErrorBody {
    /// Build a failure body from any displayable error.
    pub fn new(error: impl ToString) -> Self {
        Self {
            success: false,
            error: error.to_string(),
        }
    }
}

/// One evaluated route in the directions response.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// Original provider index
    pub id: usize,

    /// Line summary, e.g. "Via Red Line & Green Line"
    pub summary: String,

    /// Provider's total duration text
    pub duration: String,

    /// Arrival summary, e.g. "Arr: 3:45 PM"
    pub time_range: String,

    /// "Reach {station} by {time}" guidance
    pub station_eta: String,

    /// Normalized steps
    pub steps: Vec<StepResult>,

    /// Decoded overview path
    pub path: Vec<PathPoint>,

    /// Confidence tier for catching every train on this route
    pub catch_confidence: ConfidenceTier,

    /// Why the route was downgraded, if it was
    pub warning: Option<String>,

    /// Walking summary, e.g. "7 min walk"
    pub walk_minutes: String,

    /// When the rider reaches the first station
    pub user_arrival_time: String,

    /// When the first train departs, or "N/A" for walking routes
    pub train_departure_time: String,
}

/// One normalized step in a route.
#[derive(Debug, Serialize)]
pub struct StepResult {
    /// Instruction text
    pub instruction: String,

    /// Whether this step is a transit ride
    pub is_transit: bool,

    /// Departure instant, epoch seconds (transit only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<i64>,

    /// Arrival instant, epoch seconds (transit only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<i64>,

    /// Resolved boarding stop id (transit only, best-effort)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_id: Option<String>,

    /// Resolved alighting stop id (transit only, best-effort)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dest_stop_id: Option<String>,

    /// Boarding stop name (transit only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station_name: Option<String>,
}

/// A station in the stations response.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub id: String,
    pub name: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub routes: Vec<String>,
}

/// An arrival prediction for a stop.
#[derive(Debug, Serialize)]
pub struct PredictionResult {
    pub id: String,
    pub route: String,
    pub destination: String,
    pub minutes: i64,
    pub status: String,
}

/// A live vehicle position.
#[derive(Debug, Serialize)]
pub struct VehicleResult {
    pub id: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub bearing: Option<f64>,
    pub route: String,
    pub status: String,
}

/// Text-to-speech request (query or JSON body).
#[derive(Debug, Default, Deserialize)]
pub struct SpeakRequest {
    pub text: Option<String>,
}

// Conversion implementations

impl RouteResult {
    /// Package an evaluated candidate for the response.
    pub fn from_candidate(
        candidate: &RouteCandidate,
        now: DateTime<Local>,
        speed: SpeedProfile,
    ) -> Self {
        let route = &candidate.route;

        let walk_seconds = speed.walk_seconds(route.pre_transit_walk_metres);
        let walk_minutes = walk_seconds / 60;
        let user_arrival = now + chrono::Duration::seconds(walk_seconds);
        let user_arrival_text = format_clock_time(&user_arrival);

        let train_departure_time = route
            .first_departure_ts
            .map(format_epoch)
            .unwrap_or_else(|| "N/A".to_string());

        let summary = if route.lines.is_empty() {
            "Walking Route".to_string()
        } else {
            format!("Via {}", route.lines.join(" & "))
        };

        Self {
            id: candidate.index,
            summary,
            duration: candidate.duration_text.clone(),
            time_range: format!("Arr: {}", candidate.arrival_text),
            station_eta: format!("Reach {} by {}", route.first_station, user_arrival_text),
            steps: route.steps.iter().map(StepResult::from_step).collect(),
            path: candidate.path.clone(),
            catch_confidence: route.assessment.tier,
            warning: route.assessment.warning.clone(),
            walk_minutes: format!("{walk_minutes} min walk"),
            user_arrival_time: user_arrival_text,
            train_departure_time,
        }
    }
}

impl StepResult {
    /// Flatten a normalized step for the wire.
    pub fn from_step(step: &NormalizedStep) -> Self {
        match &step.transit {
            Some(detail) => Self {
                instruction: step.instruction.clone(),
                is_transit: true,
                departure_time: Some(detail.departure_ts),
                arrival_time: Some(detail.arrival_ts),
                stop_id: detail.stop_id.clone(),
                dest_stop_id: detail.dest_stop_id.clone(),
                station_name: Some(detail.station_name.clone()),
            },
            None => Self {
                instruction: step.instruction.clone(),
                is_transit: false,
                departure_time: None,
                arrival_time: None,
                stop_id: None,
                dest_stop_id: None,
                station_name: None,
            },
        }
    }
}

impl StationResult {
    /// Map a stop resource, inferring the line color from its description.
    pub fn from_stop(stop: &StopResource) -> Self {
        let color = line_color(stop.attributes.description.as_deref());

        Self {
            id: stop.id.clone(),
            name: stop.attributes.name.clone(),
            lat: stop.attributes.latitude,
            lng: stop.attributes.longitude,
            routes: vec![color.to_string()],
        }
    }
}

impl PredictionResult {
    /// Map a prediction resource to a minute countdown.
    pub fn from_prediction(prediction: &PredictionResource, now: DateTime<Utc>) -> Self {
        let minutes = prediction
            .attributes
            .arrival_time
            .as_deref()
            .and_then(|t| DateTime::parse_from_rfc3339(t).ok())
            .map(|arrival| ((arrival.with_timezone(&Utc) - now).num_seconds() / 60).max(0))
            .unwrap_or(0);

        let destination = match prediction.attributes.direction_id {
            Some(0) => "Outbound",
            _ => "Inbound",
        };

        Self {
            id: prediction.id.clone(),
            route: prediction.route_id().unwrap_or("Subway").to_string(),
            destination: destination.to_string(),
            minutes,
            status: prediction
                .attributes
                .status
                .clone()
                .unwrap_or_else(|| "On Time".to_string()),
        }
    }
}

impl VehicleResult {
    /// Map a vehicle resource. Vehicles without a route link are skipped.
    pub fn from_vehicle(vehicle: &VehicleResource) -> Option<Self> {
        let route = vehicle.route_id()?.to_string();

        Some(Self {
            id: vehicle.id.clone(),
            lat: vehicle.attributes.latitude,
            lng: vehicle.attributes.longitude,
            bearing: vehicle.attributes.bearing,
            route,
            status: vehicle
                .attributes
                .current_status
                .clone()
                .unwrap_or_default(),
        })
    }
}

/// Format a time in the rider-facing convention: 12-hour clock with
/// minutes and AM/PM, no leading zero on the hour.
pub fn format_clock_time<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%-I:%M %p").to_string()
}

/// Format an epoch second in local time, rider-facing convention.
pub fn format_epoch(ts: i64) -> String {
    match Local.timestamp_opt(ts, 0).single() {
        Some(time) => format_clock_time(&time),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itinerary::{Assessment, NormalizedRoute, NormalizedStep, TransitDetail};
    use crate::mbta::types::{PredictionAttributes, StopAttributes};
    use chrono::FixedOffset;

    #[test]
    fn clock_time_has_no_leading_zero() {
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        let morning = tz.with_ymd_and_hms(2024, 3, 15, 9, 5, 0).unwrap();
        assert_eq!(format_clock_time(&morning), "9:05 AM");

        let afternoon = tz.with_ymd_and_hms(2024, 3, 15, 15, 45, 0).unwrap();
        assert_eq!(format_clock_time(&afternoon), "3:45 PM");

        let midnight = tz.with_ymd_and_hms(2024, 3, 15, 0, 30, 0).unwrap();
        assert_eq!(format_clock_time(&midnight), "12:30 AM");
    }

    fn walking_candidate() -> RouteCandidate {
        RouteCandidate {
            index: 2,
            route: NormalizedRoute {
                steps: vec![NormalizedStep::plain("Walk east")],
                pre_transit_walk_metres: 840.0,
                first_station: "Destination".into(),
                first_departure_ts: None,
                lines: Vec::new(),
                final_arrival_ts: None,
                assessment: Assessment::new(),
            },
            duration_text: "12 mins".into(),
            arrival_text: "3:45 PM".into(),
            path: Vec::new(),
        }
    }

    #[test]
    fn walking_route_summary_and_na_departure() {
        let result =
            RouteResult::from_candidate(&walking_candidate(), Local::now(), SpeedProfile::Normal);

        assert_eq!(result.id, 2);
        assert_eq!(result.summary, "Walking Route");
        assert_eq!(result.train_departure_time, "N/A");
        assert_eq!(result.duration, "12 mins");
        assert_eq!(result.time_range, "Arr: 3:45 PM");
        // 840m at 1.4 m/s = 10 minutes
        assert_eq!(result.walk_minutes, "10 min walk");
        assert!(result.station_eta.starts_with("Reach Destination by "));
        assert_eq!(result.catch_confidence, ConfidenceTier::High);
        assert!(result.warning.is_none());
    }

    #[test]
    fn transit_route_summary_joins_lines() {
        let mut candidate = walking_candidate();
        candidate.route.lines = vec!["Red Line".into(), "Green Line".into()];
        candidate.route.first_departure_ts = Some(1_700_000_000);

        let result =
            RouteResult::from_candidate(&candidate, Local::now(), SpeedProfile::Normal);

        assert_eq!(result.summary, "Via Red Line & Green Line");
        assert_ne!(result.train_departure_time, "N/A");
    }

    #[test]
    fn step_result_flattens_transit_detail() {
        let step = NormalizedStep::transit(
            "Take <b>Red Line</b> from Park Street",
            TransitDetail {
                departure_ts: 100,
                arrival_ts: 700,
                stop_id: Some("place-pktrm".into()),
                dest_stop_id: None,
                station_name: "Park Street".into(),
            },
        );

        let result = StepResult::from_step(&step);
        assert!(result.is_transit);
        assert_eq!(result.departure_time, Some(100));
        assert_eq!(result.arrival_time, Some(700));
        assert_eq!(result.stop_id.as_deref(), Some("place-pktrm"));
        assert!(result.dest_stop_id.is_none());
        assert_eq!(result.station_name.as_deref(), Some("Park Street"));
    }

    #[test]
    fn plain_step_omits_transit_fields() {
        let result = StepResult::from_step(&NormalizedStep::plain("Walk"));
        assert!(!result.is_transit);

        let json = serde_json::to_value(&result).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("departure_time"));
        assert!(!obj.contains_key("stop_id"));
        assert!(!obj.contains_key("station_name"));
    }

    #[test]
    fn station_result_infers_color() {
        let stop = StopResource {
            id: "place-pktrm".into(),
            attributes: StopAttributes {
                name: "Park Street".into(),
                description: Some("Park Street - Red Line - Ashmont".into()),
                latitude: Some(42.36),
                longitude: Some(-71.06),
            },
        };

        let result = StationResult::from_stop(&stop);
        assert_eq!(result.routes, vec!["Red".to_string()]);
        assert_eq!(result.name, "Park Street");
    }

    fn prediction(arrival: Option<&str>, direction: Option<u8>) -> PredictionResource {
        PredictionResource {
            id: "p1".into(),
            attributes: PredictionAttributes {
                arrival_time: arrival.map(String::from),
                direction_id: direction,
                status: None,
            },
            relationships: None,
        }
    }

    #[test]
    fn prediction_minutes_from_arrival() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();

        let result =
            PredictionResult::from_prediction(&prediction(Some("2024-03-15T12:07:30Z"), Some(1)), now);
        assert_eq!(result.minutes, 7);
        assert_eq!(result.destination, "Inbound");
        assert_eq!(result.route, "Subway");
        assert_eq!(result.status, "On Time");
    }

    #[test]
    fn prediction_minutes_clamped_at_zero() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();

        let result =
            PredictionResult::from_prediction(&prediction(Some("2024-03-15T11:55:00Z"), Some(0)), now);
        assert_eq!(result.minutes, 0);
        assert_eq!(result.destination, "Outbound");
    }

    #[test]
    fn prediction_without_arrival_is_zero_minutes() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let result = PredictionResult::from_prediction(&prediction(None, None), now);
        assert_eq!(result.minutes, 0);
        assert_eq!(result.destination, "Inbound");
    }

    #[test]
    fn vehicle_without_route_is_skipped() {
        let vehicle: VehicleResource = serde_json::from_str(
            r#"{"id": "v1", "attributes": {"latitude": 42.3, "longitude": -71.0}}"#,
        )
        .unwrap();
        assert!(VehicleResult::from_vehicle(&vehicle).is_none());

        let vehicle: VehicleResource = serde_json::from_str(
            r#"{
                "id": "v1",
                "attributes": {"latitude": 42.3, "longitude": -71.0, "bearing": 90.0, "current_status": "IN_TRANSIT_TO"},
                "relationships": {"route": {"data": {"id": "Red"}}}
            }"#,
        )
        .unwrap();
        let result = VehicleResult::from_vehicle(&vehicle).unwrap();
        assert_eq!(result.route, "Red");
        assert_eq!(result.status, "IN_TRANSIT_TO");
    }
}
