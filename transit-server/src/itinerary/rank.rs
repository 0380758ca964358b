//! Route ranking.
//!
//! Orders evaluated routes by confidence tier, then by the provider's
//! original ordering, and truncates to a short list. Low-confidence routes
//! are demoted, never dropped: a rider may still want the only available
//! route even if it is risky.

use super::RouteCandidate;

/// Maximum number of routes returned to the caller.
pub const MAX_ROUTES: usize = 5;

/// Sort routes safest-first and truncate to [`MAX_ROUTES`].
///
/// The sort key is `(tier rank, original index)`, so routes with equal
/// confidence keep the provider's order.
pub fn rank_routes(mut routes: Vec<RouteCandidate>) -> Vec<RouteCandidate> {
    routes.sort_by_key(|r| (r.route.assessment.tier.rank(), r.index));
    routes.truncate(MAX_ROUTES);
    routes
}
