//! Step representations.
//!
//! [`Step`] is the classified form of one provider instruction; the
//! normalizer turns a step sequence into [`NormalizedStep`]s, whose transit
//! timing is guaranteed present (fallback-filled during traversal).

/// One atomic instruction within an itinerary leg.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// A walking segment.
    Walk {
        distance_metres: f64,
        instruction: String,
    },
    /// A transit ride.
    Transit(TransitStep),
    /// Anything else (e.g. a driving segment). Not expected, but tolerated.
    Other { instruction: String },
}

/// A transit ride as the provider describes it.
///
/// Departure and arrival timestamps are optional because the provider omits
/// them for frequent services; the normalizer fills them in.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitStep {
    /// Line name, e.g. "Red Line".
    pub line: String,
    /// Name of the boarding stop.
    pub departure_stop: String,
    /// Name of the alighting stop.
    pub arrival_stop: String,
    /// Scheduled departure, epoch seconds.
    pub departure_ts: Option<i64>,
    /// Scheduled arrival, epoch seconds.
    pub arrival_ts: Option<i64>,
    /// Ride duration in seconds.
    pub duration_secs: i64,
}

/// A step after normalization.
///
/// Every step carries an instruction; transit steps additionally carry a
/// [`TransitDetail`] whose timestamps are always resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedStep {
    /// Human-readable instruction text.
    pub instruction: String,
    /// Present exactly when this step is a transit ride.
    pub transit: Option<TransitDetail>,
}

/// Resolved transit data attached to a normalized step.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitDetail {
    /// Departure instant, epoch seconds. Never missing: fallback-filled.
    pub departure_ts: i64,
    /// Arrival instant, epoch seconds. Never missing: fallback-filled.
    pub arrival_ts: i64,
    /// Canonical id of the boarding stop, if resolution succeeded.
    pub stop_id: Option<String>,
    /// Canonical id of the alighting stop, if resolution succeeded.
    pub dest_stop_id: Option<String>,
    /// Name of the boarding stop as the provider gave it.
    pub station_name: String,
}

impl NormalizedStep {
    /// A non-transit step carrying only instruction text.
    pub fn plain(instruction: impl Into<String>) -> Self {
        Self {
            instruction: instruction.into(),
            transit: None,
        }
    }

    /// A transit step with resolved detail.
    pub fn transit(instruction: impl Into<String>, detail: TransitDetail) -> Self {
        Self {
            instruction: instruction.into(),
            transit: Some(detail),
        }
    }

    /// Whether this step is a transit ride.
    pub fn is_transit(&self) -> bool {
        self.transit.is_some()
    }
}
