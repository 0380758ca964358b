//! Station name resolution.
//!
//! Maps a free-text stop name from the directions provider (e.g.
//! "Park Street Station") to a canonical MBTA stop id (e.g.
//! "place-pktrm"). The matching rule is fuzzy: exact normalized equality
//! first, then substring containment in either direction.

use std::sync::Arc;

use tracing::warn;

use crate::cache::CachedStopCatalog;
use crate::itinerary::StopResolver;

use super::types::StopResource;

/// Normalize a stop name for matching: lowercase, strip a trailing
/// " station" suffix, trim whitespace.
pub fn normalize_name(name: &str) -> String {
    let lower = name.to_lowercase();
    let trimmed = lower.trim();
    let stripped = trimmed.strip_suffix(" station").unwrap_or(trimmed);
    stripped.trim().to_string()
}

/// Find the catalog entry matching a free-text name.
///
/// Exact matches on normalized names win; otherwise the first entry whose
/// normalized name contains the target, or vice versa, is taken. An empty
/// normalized target matches nothing (containment would otherwise match
/// every stop).
pub fn match_stop<'a>(stops: &'a [StopResource], name: &str) -> Option<&'a StopResource> {
    let target = normalize_name(name);
    if target.is_empty() {
        return None;
    }

    if let Some(exact) = stops
        .iter()
        .find(|s| normalize_name(&s.attributes.name) == target)
    {
        return Some(exact);
    }

    stops.iter().find(|s| {
        let stop_name = normalize_name(&s.attributes.name);
        stop_name.contains(&target) || target.contains(&stop_name)
    })
}

/// [`StopResolver`] backed by the cached MBTA stop catalog.
///
/// Resolution never fails past this boundary: a catalog error or a miss
/// both come back as `None`, and route evaluation continues without the
/// identifier.
#[derive(Clone)]
pub struct CatalogResolver {
    catalog: Arc<CachedStopCatalog>,
}

impl CatalogResolver {
    /// Create a resolver over the given catalog.
    pub fn new(catalog: Arc<CachedStopCatalog>) -> Self {
        Self { catalog }
    }
}

impl StopResolver for CatalogResolver {
    async fn resolve(&self, name: &str) -> Option<String> {
        let stops = match self.catalog.rail_stops().await {
            Ok(stops) => stops,
            Err(e) => {
                warn!("stop catalog unavailable, skipping resolution: {e}");
                return None;
            }
        };

        match_stop(&stops, name).map(|s| s.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mbta::types::StopAttributes;

    fn stop(id: &str, name: &str) -> StopResource {
        StopResource {
            id: id.to_string(),
            attributes: StopAttributes {
                name: name.to_string(),
                description: None,
                latitude: None,
                longitude: None,
            },
        }
    }

    fn catalog() -> Vec<StopResource> {
        vec![
            stop("place-alfcl", "Alewife"),
            stop("place-pktrm", "Park Street"),
            stop("place-dwnxg", "Downtown Crossing"),
        ]
    }

    #[test]
    fn normalizes_case_suffix_and_whitespace() {
        assert_eq!(normalize_name("Park Street Station"), "park street");
        assert_eq!(normalize_name("park street"), "park street");
        assert_eq!(normalize_name("  Park Street Station  "), "park street");
        assert_eq!(normalize_name("Alewife"), "alewife");
    }

    #[test]
    fn suffix_only_stripped_at_end() {
        // "station" in the middle of a name must survive.
        assert_eq!(normalize_name("Station Landing"), "station landing");
    }

    #[test]
    fn exact_match_wins() {
        let stops = catalog();
        let matched = match_stop(&stops, "Park Street").unwrap();
        assert_eq!(matched.id, "place-pktrm");
    }

    #[test]
    fn suffix_variants_resolve_identically() {
        let stops = catalog();
        let a = match_stop(&stops, "Park Street Station").unwrap();
        let b = match_stop(&stops, "park street").unwrap();
        assert_eq!(a.id, b.id);
        assert_eq!(a.id, "place-pktrm");
    }

    #[test]
    fn containment_match_either_direction() {
        let stops = catalog();

        // Target contained in catalog name.
        let matched = match_stop(&stops, "Downtown").unwrap();
        assert_eq!(matched.id, "place-dwnxg");

        // Catalog name contained in target.
        let matched = match_stop(&stops, "Alewife Busway").unwrap();
        assert_eq!(matched.id, "place-alfcl");
    }

    #[test]
    fn exact_match_beats_earlier_containment() {
        let stops = vec![
            stop("place-first", "Park Street North"),
            stop("place-exact", "Park Street"),
        ];
        let matched = match_stop(&stops, "Park Street").unwrap();
        assert_eq!(matched.id, "place-exact");
    }

    #[test]
    fn no_match_is_none() {
        let stops = catalog();
        assert!(match_stop(&stops, "Kendall/MIT").is_none());
    }

    #[test]
    fn empty_target_matches_nothing() {
        let stops = catalog();
        assert!(match_stop(&stops, "").is_none());
        assert!(match_stop(&stops, "   ").is_none());
    }
}
