//! Navigation preferences for the route planner.

/// Error returned when preferences would make planning meaningless.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PreferencesError {
    /// Walking speed must be a positive, finite number of m/s
    #[error("walking speed must be positive and finite, got {0}")]
    InvalidWalkingSpeed(f64),

    /// Floor change penalty must be non-negative and finite
    #[error("floor change penalty must be non-negative and finite, got {0}")]
    InvalidFloorChangePenalty(f64),
}

/// User preferences that shape the route cost function.
///
/// A plain value supplied fresh for every planning call.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationPreferences {
    /// Strongly deter nodes that are not wheelchair accessible.
    pub require_wheelchair_access: bool,

    /// Deter stairways.
    pub avoid_stairs: bool,

    /// Favour elevators (otherwise they are mildly deterred).
    pub prefer_elevators: bool,

    /// Walking speed in meters per second. Must be > 0.
    pub walking_speed: f64,

    /// Cost added for every edge that changes floor.
    pub floor_change_penalty: f64,

    /// With `require_wheelchair_access`, treat non-accessible nodes as
    /// impassable instead of merely expensive.
    pub strict_accessibility: bool,
}

impl NavigationPreferences {
    /// Default walking speed (m/s).
    pub const DEFAULT_WALKING_SPEED: f64 = 1.4;

    /// Default floor change penalty (cost units).
    pub const DEFAULT_FLOOR_CHANGE_PENALTY: f64 = 10.0;

    /// Create preferences with the given parameters.
    pub fn new(
        require_wheelchair_access: bool,
        avoid_stairs: bool,
        prefer_elevators: bool,
        walking_speed: f64,
        floor_change_penalty: f64,
    ) -> Self {
        Self {
            require_wheelchair_access,
            avoid_stairs,
            prefer_elevators,
            walking_speed,
            floor_change_penalty,
            strict_accessibility: false,
        }
    }

    /// Preferences for a wheelchair user: accessibility required, stairs
    /// avoided, elevators preferred.
    pub fn wheelchair() -> Self {
        Self {
            require_wheelchair_access: true,
            avoid_stairs: true,
            prefer_elevators: true,
            ..Self::default()
        }
    }

    /// Check the numeric fields.
    pub fn validate(&self) -> Result<(), PreferencesError> {
        if !(self.walking_speed.is_finite() && self.walking_speed > 0.0) {
            return Err(PreferencesError::InvalidWalkingSpeed(self.walking_speed));
        }
        if !(self.floor_change_penalty.is_finite() && self.floor_change_penalty >= 0.0) {
            return Err(PreferencesError::InvalidFloorChangePenalty(
                self.floor_change_penalty,
            ));
        }
        Ok(())
    }
}

impl Default for NavigationPreferences {
    fn default() -> Self {
        Self {
            require_wheelchair_access: false,
            avoid_stairs: false,
            prefer_elevators: false,
            walking_speed: Self::DEFAULT_WALKING_SPEED,
            floor_change_penalty: Self::DEFAULT_FLOOR_CHANGE_PENALTY,
            strict_accessibility: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_preferences() {
        let prefs = NavigationPreferences::default();

        assert!(!prefs.require_wheelchair_access);
        assert!(!prefs.avoid_stairs);
        assert!(!prefs.prefer_elevators);
        assert_eq!(prefs.walking_speed, 1.4);
        assert_eq!(prefs.floor_change_penalty, 10.0);
        assert!(!prefs.strict_accessibility);
        assert!(prefs.validate().is_ok());
    }

    #[test]
    fn custom_preferences() {
        let prefs = NavigationPreferences::new(true, true, false, 0.8, 25.0);

        assert!(prefs.require_wheelchair_access);
        assert!(prefs.avoid_stairs);
        assert!(!prefs.prefer_elevators);
        assert_eq!(prefs.walking_speed, 0.8);
        assert_eq!(prefs.floor_change_penalty, 25.0);
    }

    #[test]
    fn wheelchair_preset() {
        let prefs = NavigationPreferences::wheelchair();
        assert!(prefs.require_wheelchair_access);
        assert!(prefs.avoid_stairs);
        assert!(prefs.prefer_elevators);
        assert_eq!(prefs.walking_speed, 1.4);
    }

    #[test]
    fn rejects_non_positive_speed() {
        for speed in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let prefs = NavigationPreferences {
                walking_speed: speed,
                ..NavigationPreferences::default()
            };
            assert!(matches!(
                prefs.validate(),
                Err(PreferencesError::InvalidWalkingSpeed(_))
            ));
        }
    }

    #[test]
    fn rejects_negative_penalty() {
        let prefs = NavigationPreferences {
            floor_change_penalty: -0.5,
            ..NavigationPreferences::default()
        };
        assert_eq!(
            prefs.validate(),
            Err(PreferencesError::InvalidFloorChangePenalty(-0.5))
        );
    }

    #[test]
    fn zero_penalty_is_valid() {
        let prefs = NavigationPreferences {
            floor_change_penalty: 0.0,
            ..NavigationPreferences::default()
        };
        assert!(prefs.validate().is_ok());
    }

    #[test]
    fn error_display() {
        let err = PreferencesError::InvalidWalkingSpeed(0.0);
        assert_eq!(
            err.to_string(),
            "walking speed must be positive and finite, got 0"
        );
    }
}
