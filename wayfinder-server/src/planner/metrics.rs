//! Route distance and travel time.

use crate::domain::NavigationNode;

/// Slack applied to walking time to account for turns and stops.
pub const TIME_BUFFER: f64 = 1.2;

/// Sum of straight-line segment lengths along a path, in meters.
pub fn total_distance(path: &[NavigationNode]) -> f64 {
    path.windows(2).map(|pair| pair[0].distance_to(&pair[1])).sum()
}

/// Estimated walking time in seconds.
///
/// `walking_speed` must already be validated as positive.
pub fn estimated_time(distance: f64, walking_speed: f64) -> f64 {
    (distance / walking_speed) * TIME_BUFFER
}

/// Distance and time for a resolved path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteMetrics {
    pub total_distance: f64,
    pub estimated_time: f64,
}

impl RouteMetrics {
    pub fn compute(path: &[NavigationNode], walking_speed: f64) -> Self {
        let total_distance = total_distance(path);
        Self {
            total_distance,
            estimated_time: estimated_time(total_distance, walking_speed),
        }
    }
}
