//! Route planner using A* search.
//!
//! This module implements the core planning algorithm that answers:
//! "I'm standing here - how do I get to that shop?"
//!
//! The search runs over an immutable node snapshot with a pluggable edge
//! cost policy derived from the user's accessibility preferences.

mod config;
mod cost;
mod metrics;
mod search;


pub use config::{NavigationPreferences, PreferencesError};
pub use cost::{
    CostModel, ELEVATOR_NOT_PREFERRED, ELEVATOR_PREFERRED, EMERGENCY_PENALTY, PreferenceCost,
    STAIRS_PENALTY, StrictAccessibility, WHEELCHAIR_PENALTY, cost_model_for, movement_cost,
};
pub use metrics::{RouteMetrics, TIME_BUFFER, estimated_time, total_distance};
pub use search::{PlanError, PlanResult, Planner, SearchOutcome};

use crate::domain::{NavigationRoute, PointOfInterest, Vector3};
use crate::graph::NodeSet;

/// Computes a route from `start` to `destination`.
///
/// This is the single entry point for collaborators. `Ok(None)` means no
/// route exists (empty graph or unreachable goal); errors are reserved for
/// invalid preferences.
pub fn compute_route(
    start: Vector3,
    destination: &PointOfInterest,
    nodes: &NodeSet,
    preferences: &NavigationPreferences,
) -> Result<Option<NavigationRoute>, PlanError> {
    Planner::new(nodes, preferences).find_path(start, destination)
}
