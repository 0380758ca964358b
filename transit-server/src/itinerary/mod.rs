//! Itinerary normalization, feasibility evaluation, and ranking.
//!
//! This is the core of the server: a single pass over each raw route
//! produces a uniform step sequence, fills in timestamps the provider
//! omitted, evaluates whether the rider can catch the first train and
//! every transfer, and ranks the evaluated routes by safety.

mod confidence;
mod normalize;
mod rank;
mod step;

pub use confidence::{Assessment, ConfidenceTier};
pub use normalize::{NormalizedRoute, StopResolver, VirtualClock, normalize_route};
pub use rank::{MAX_ROUTES, rank_routes};
pub use step::{NormalizedStep, Step, TransitDetail, TransitStep};

use crate::directions::PathPoint;

/// One fully evaluated route, ready for ranking and presentation.
#[derive(Debug, Clone)]
pub struct RouteCandidate {
    /// Original index in the provider's response, used as ranking tie-break.
    pub index: usize,

    /// Normalized steps, timing scalars, and the confidence verdict.
    pub route: NormalizedRoute,

    /// Provider's total duration text, e.g. "32 mins".
    pub duration_text: String,

    /// Provider's arrival time text, e.g. "3:45 PM".
    pub arrival_text: String,

    /// Decoded overview path.
    pub path: Vec<PathPoint>,
}
