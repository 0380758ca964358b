//! Walking time model.
//!
//! Converts a walking distance into travel time at one of three rider
//! speed profiles. This is a pure, total function: every distance and
//! every profile key (including unrecognized ones) produces a result.

/// A rider's walking speed profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedProfile {
    /// 0.9 m/s - mobility-limited or encumbered walking.
    Slow,
    /// 1.4 m/s - typical adult walking pace.
    #[default]
    Normal,
    /// 1.8 m/s - brisk walking.
    Fast,
}

impl SpeedProfile {
    /// Parse a profile key ("slow", "normal", "fast").
    ///
    /// Unrecognized keys fall back to [`SpeedProfile::Normal`].
    pub fn from_key(key: &str) -> Self {
        match key {
            "slow" => SpeedProfile::Slow,
            "fast" => SpeedProfile::Fast,
            _ => SpeedProfile::Normal,
        }
    }

    /// Walking speed in metres per second.
    pub fn metres_per_second(self) -> f64 {
        match self {
            SpeedProfile::Slow => 0.9,
            SpeedProfile::Normal => 1.4,
            SpeedProfile::Fast => 1.8,
        }
    }

    /// Whole seconds needed to walk `distance_metres` at this profile.
    pub fn walk_seconds(self, distance_metres: f64) -> i64 {
        (distance_metres / self.metres_per_second()) as i64
    }

    /// Whole minutes needed to walk `distance_metres` at this profile.
    pub fn walk_minutes(self, distance_metres: f64) -> i64 {
        self.walk_seconds(distance_metres) / 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys() {
        assert_eq!(SpeedProfile::from_key("slow"), SpeedProfile::Slow);
        assert_eq!(SpeedProfile::from_key("normal"), SpeedProfile::Normal);
        assert_eq!(SpeedProfile::from_key("fast"), SpeedProfile::Fast);
    }

    #[test]
    fn unknown_keys_fall_back_to_normal() {
        assert_eq!(SpeedProfile::from_key(""), SpeedProfile::Normal);
        assert_eq!(SpeedProfile::from_key("sprint"), SpeedProfile::Normal);
        assert_eq!(SpeedProfile::from_key("SLOW"), SpeedProfile::Normal);
    }

    #[test]
    fn walk_seconds_by_profile() {
        // 140m at 1.4 m/s = 100s exactly
        assert_eq!(SpeedProfile::Normal.walk_seconds(140.0), 100);
        // 90m at 0.9 m/s = 100s exactly
        assert_eq!(SpeedProfile::Slow.walk_seconds(90.0), 100);
        // 90m at 1.8 m/s = 50s exactly
        assert_eq!(SpeedProfile::Fast.walk_seconds(90.0), 50);
    }

    #[test]
    fn walk_seconds_truncates() {
        // 100m at 1.4 m/s = 71.42...s -> 71
        assert_eq!(SpeedProfile::Normal.walk_seconds(100.0), 71);
    }

    #[test]
    fn zero_distance() {
        assert_eq!(SpeedProfile::Normal.walk_seconds(0.0), 0);
        assert_eq!(SpeedProfile::Normal.walk_minutes(0.0), 0);
    }

    #[test]
    fn walk_minutes() {
        // 840m at 1.4 m/s = 600s = 10 minutes
        assert_eq!(SpeedProfile::Normal.walk_minutes(840.0), 10);
        // 839m = 599s -> 9 minutes
        assert_eq!(SpeedProfile::Normal.walk_minutes(839.0), 9);
    }
}
