//! Route confidence classification.
//!
//! A route's confidence tier may only degrade as checks run: once a check
//! marks a route `Low`, no later check can raise it back. The transition
//! rule lives here so the traversal code never compares tiers ad hoc.

use serde::Serialize;

/// Coarse classification of whether a route can be completed as planned.
///
/// Ordered by severity: `High < Medium < Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    /// Every timing check passed with margin.
    High,
    /// At least one check was tight but survivable.
    Medium,
    /// At least one check is infeasible.
    Low,
}

impl ConfidenceTier {
    /// Sort rank: `high=1`, `medium=2`, `low=3`.
    pub fn rank(self) -> u8 {
        match self {
            ConfidenceTier::High => 1,
            ConfidenceTier::Medium => 2,
            ConfidenceTier::Low => 3,
        }
    }

    /// The wire representation of this tier.
    pub fn as_str(self) -> &'static str {
        match self {
            ConfidenceTier::High => "high",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::Low => "low",
        }
    }
}

/// A route's running confidence verdict: the tier plus the warning that
/// explains the most recent downgrade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub tier: ConfidenceTier,
    pub warning: Option<String>,
}

impl Assessment {
    /// A fresh assessment: `High` with no warning.
    pub fn new() -> Self {
        Self {
            tier: ConfidenceTier::High,
            warning: None,
        }
    }

    /// Apply a downgrade.
    ///
    /// The downgrade takes effect only if `tier` is at least as severe as
    /// the current tier; a `Medium` downgrade never touches a route that is
    /// already `Low`. Equal-severity downgrades replace the warning, so a
    /// later `Low` check overwrites an earlier `Low` message. Degrading to
    /// `High` is a no-op: `High` carries no warning.
    pub fn degrade(&mut self, tier: ConfidenceTier, warning: impl Into<String>) {
        if tier != ConfidenceTier::High && tier >= self.tier {
            self.tier = tier;
            self.warning = Some(warning.into());
        }
    }
}

impl Default for Assessment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_ordering() {
        assert!(ConfidenceTier::High < ConfidenceTier::Medium);
        assert!(ConfidenceTier::Medium < ConfidenceTier::Low);
    }

    #[test]
    fn tier_ranks() {
        assert_eq!(ConfidenceTier::High.rank(), 1);
        assert_eq!(ConfidenceTier::Medium.rank(), 2);
        assert_eq!(ConfidenceTier::Low.rank(), 3);
    }

    #[test]
    fn starts_high_with_no_warning() {
        let a = Assessment::new();
        assert_eq!(a.tier, ConfidenceTier::High);
        assert!(a.warning.is_none());
    }

    #[test]
    fn degrade_high_to_medium() {
        let mut a = Assessment::new();
        a.degrade(ConfidenceTier::Medium, "tight");
        assert_eq!(a.tier, ConfidenceTier::Medium);
        assert_eq!(a.warning.as_deref(), Some("tight"));
    }

    #[test]
    fn low_is_terminal() {
        let mut a = Assessment::new();
        a.degrade(ConfidenceTier::Low, "impossible");
        a.degrade(ConfidenceTier::Medium, "tight");
        assert_eq!(a.tier, ConfidenceTier::Low);
        // The medium warning must not clobber the low one.
        assert_eq!(a.warning.as_deref(), Some("impossible"));
    }

    #[test]
    fn medium_can_still_degrade_to_low() {
        let mut a = Assessment::new();
        a.degrade(ConfidenceTier::Medium, "tight");
        a.degrade(ConfidenceTier::Low, "impossible");
        assert_eq!(a.tier, ConfidenceTier::Low);
        assert_eq!(a.warning.as_deref(), Some("impossible"));
    }

    #[test]
    fn equal_tier_replaces_warning() {
        let mut a = Assessment::new();
        a.degrade(ConfidenceTier::Medium, "tight at A");
        a.degrade(ConfidenceTier::Medium, "tight at B");
        assert_eq!(a.tier, ConfidenceTier::Medium);
        assert_eq!(a.warning.as_deref(), Some("tight at B"));
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ConfidenceTier::Medium).unwrap(),
            "\"medium\""
        );
        assert_eq!(ConfidenceTier::Low.as_str(), "low");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn tier_strategy() -> impl Strategy<Value = ConfidenceTier> {
        prop_oneof![
            Just(ConfidenceTier::High),
            Just(ConfidenceTier::Medium),
            Just(ConfidenceTier::Low),
        ]
    }

    proptest! {
        /// The tier never improves, whatever sequence of downgrades runs.
        #[test]
        fn degrade_is_monotone(tiers in prop::collection::vec(tier_strategy(), 0..20)) {
            let mut a = Assessment::new();
            let mut previous = a.tier;
            for (i, tier) in tiers.into_iter().enumerate() {
                a.degrade(tier, format!("check {i}"));
                prop_assert!(a.tier >= previous);
                previous = a.tier;
            }
        }

        /// A warning exists exactly when the tier has left High.
        #[test]
        fn warning_tracks_downgrades(tiers in prop::collection::vec(tier_strategy(), 0..20)) {
            let mut a = Assessment::new();
            for tier in tiers {
                a.degrade(tier, "w");
            }
            if a.tier == ConfidenceTier::High {
                prop_assert!(a.warning.is_none());
            } else {
                prop_assert!(a.warning.is_some());
            }
        }
    }
}
