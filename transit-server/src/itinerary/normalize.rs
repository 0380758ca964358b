//! Itinerary normalization and feasibility evaluation.
//!
//! One pass over a route's classified steps produces the normalized step
//! sequence, the aggregate timing scalars, and the confidence verdict. The
//! feasibility checks run interleaved with the traversal because they read
//! state (pre-transit walk metres, virtual clock) that only exists
//! mid-traversal.

use tracing::debug;

use crate::walk::SpeedProfile;

use super::confidence::{Assessment, ConfidenceTier};
use super::step::{NormalizedStep, Step, TransitDetail};

/// Slack below which catching the first train is flagged as a rush (seconds).
const FIRST_TRAIN_RUSH_SECS: i64 = 90;

/// Transfer gap below which a transfer is flagged as tight (seconds).
const TRANSFER_TIGHT_SECS: i64 = 120;

/// Transfer gap below which a transfer is flagged as impossible (seconds).
const TRANSFER_IMPOSSIBLE_SECS: i64 = 60;

/// First-station placeholder for routes with no transit step.
const NO_STATION: &str = "Destination";

/// The running "current arrival instant" carried across transit steps.
///
/// Unset until the first transit step has been processed; thereafter fixed
/// to the resolved arrival of the most recent transit step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VirtualClock(Option<i64>);

impl VirtualClock {
    /// An unset clock.
    pub fn unset() -> Self {
        Self(None)
    }

    /// The clock value, if any transit step has been processed.
    pub fn get(self) -> Option<i64> {
        self.0
    }

    /// Whether any transit step has been processed.
    pub fn is_set(self) -> bool {
        self.0.is_some()
    }

    /// Fix the clock to a transit step's arrival instant.
    pub fn advance_to(&mut self, arrival_ts: i64) {
        self.0 = Some(arrival_ts);
    }
}

/// Resolves a free-text stop name to a canonical stop identifier.
///
/// Resolution is best-effort: `None` means "no identifier", which callers
/// must treat as non-fatal.
pub trait StopResolver {
    async fn resolve(&self, name: &str) -> Option<String>;
}

/// The output of normalizing one raw route.
#[derive(Debug, Clone)]
pub struct NormalizedRoute {
    /// The uniform step sequence, in original order.
    pub steps: Vec<NormalizedStep>,
    /// Walk metres accrued before the first transit step only.
    pub pre_transit_walk_metres: f64,
    /// Name of the first boarding station, or "Destination" if the route
    /// has no transit step.
    pub first_station: String,
    /// Departure instant of the first transit step, if any.
    pub first_departure_ts: Option<i64>,
    /// Transit line names in boarding order, deduplicated.
    pub lines: Vec<String>,
    /// Final virtual-clock value: arrival of the last transit step.
    pub final_arrival_ts: Option<i64>,
    /// Confidence verdict accumulated across the traversal.
    pub assessment: Assessment,
}

/// Normalize one route's steps and evaluate its catchability.
///
/// `now_ts` is the request instant in epoch seconds; it anchors the
/// first-train projection and the departure fallback for the first transit
/// step when the provider omits times.
pub async fn normalize_route(
    steps: &[Step],
    now_ts: i64,
    speed: SpeedProfile,
    resolver: &impl StopResolver,
) -> NormalizedRoute {
    let mut clock = VirtualClock::unset();
    let mut assessment = Assessment::new();
    let mut pre_transit_walk_metres = 0.0;
    let mut first_station = NO_STATION.to_string();
    let mut first_departure_ts = None;
    let mut lines: Vec<String> = Vec::new();
    let mut normalized = Vec::with_capacity(steps.len());

    for step in steps {
        match step {
            Step::Walk {
                distance_metres,
                instruction,
            } => {
                // Walking only counts toward the first-train projection
                // until the rider has boarded something.
                if !clock.is_set() {
                    pre_transit_walk_metres += distance_metres;
                }
                normalized.push(NormalizedStep::plain(instruction.clone()));
            }

            Step::Transit(transit) => {
                // Timestamp fallbacks: the provider omits times for
                // frequent services. Departure falls back to the previous
                // arrival, or to "now" for the first ride; arrival falls
                // back to departure plus ride duration.
                let departure_ts = transit
                    .departure_ts
                    .unwrap_or_else(|| clock.get().unwrap_or(now_ts));
                let arrival_ts = transit
                    .arrival_ts
                    .unwrap_or(departure_ts + transit.duration_secs);

                let (stop_id, dest_stop_id) = tokio::join!(
                    resolver.resolve(&transit.departure_stop),
                    resolver.resolve(&transit.arrival_stop),
                );

                if let Some(prev_arrival) = clock.get() {
                    check_transfer(
                        &mut assessment,
                        departure_ts,
                        prev_arrival,
                        &transit.departure_stop,
                    );
                } else {
                    first_station = transit.departure_stop.clone();
                    check_first_train(
                        &mut assessment,
                        departure_ts,
                        now_ts,
                        pre_transit_walk_metres,
                        speed,
                    );
                }

                clock.advance_to(arrival_ts);
                if first_departure_ts.is_none() {
                    first_departure_ts = Some(departure_ts);
                }
                if !lines.contains(&transit.line) {
                    lines.push(transit.line.clone());
                }

                normalized.push(NormalizedStep::transit(
                    format!(
                        "Take <b>{}</b> from {}",
                        transit.line, transit.departure_stop
                    ),
                    TransitDetail {
                        departure_ts,
                        arrival_ts,
                        stop_id,
                        dest_stop_id,
                        station_name: transit.departure_stop.clone(),
                    },
                ));
            }

            Step::Other { instruction } => {
                normalized.push(NormalizedStep::plain(instruction.clone()));
            }
        }
    }

    NormalizedRoute {
        steps: normalized,
        pre_transit_walk_metres,
        first_station,
        first_departure_ts,
        lines,
        final_arrival_ts: clock.get(),
        assessment,
    }
}

/// First-train check: can the rider reach the first station before the
/// train leaves?
fn check_first_train(
    assessment: &mut Assessment,
    departure_ts: i64,
    now_ts: i64,
    walk_metres: f64,
    speed: SpeedProfile,
) {
    let projected_arrival = now_ts + speed.walk_seconds(walk_metres);
    let slack = departure_ts - projected_arrival;
    debug!(slack, "first-train check");

    if slack < 0 {
        assessment.degrade(ConfidenceTier::Low, "Impossible: Departs before you arrive");
    } else if slack < FIRST_TRAIN_RUSH_SECS {
        assessment.degrade(ConfidenceTier::Medium, "Rush: Catching first train is tight");
    }
}

/// Transfer check: is there enough gap between arriving on the previous
/// ride and this ride's departure?
fn check_transfer(
    assessment: &mut Assessment,
    departure_ts: i64,
    prev_arrival_ts: i64,
    departure_stop: &str,
) {
    let gap = departure_ts - prev_arrival_ts;
    debug!(gap, stop = departure_stop, "transfer check");

    if gap < TRANSFER_TIGHT_SECS {
        assessment.degrade(
            ConfidenceTier::Medium,
            format!("Tight Transfer at {departure_stop}"),
        );
        if gap < TRANSFER_IMPOSSIBLE_SECS {
            assessment.degrade(
                ConfidenceTier::Low,
                format!("Impossible Transfer at {departure_stop}"),
            );
        }
    }
}
