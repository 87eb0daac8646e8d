//! Edge cost policy.
//!
//! The planner asks a [`CostModel`] for the cost of every edge it relaxes.
//! The default model turns [`NavigationPreferences`] into multipliers on the
//! straight-line distance plus an additive floor-change penalty.

use crate::domain::{NavigationNode, NodeType};

use super::config::NavigationPreferences;

/// Multiplier when wheelchair access is required and the target is not accessible.
pub const WHEELCHAIR_PENALTY: f64 = 10.0;

/// Multiplier for entering a stairway while avoiding stairs.
pub const STAIRS_PENALTY: f64 = 5.0;

/// Multiplier for entering an elevator when elevators are preferred.
pub const ELEVATOR_PREFERRED: f64 = 0.8;

/// Multiplier for entering an elevator when elevators are not preferred.
pub const ELEVATOR_NOT_PREFERRED: f64 = 1.2;

/// Multiplier for entering an emergency node, regardless of preferences.
pub const EMERGENCY_PENALTY: f64 = 2.0;

/// Cost of moving along a directed edge.
///
/// Returning `None` makes the edge impassable.
pub trait CostModel {
    fn edge_cost(&self, from: &NavigationNode, to: &NavigationNode) -> Option<f64>;
}

impl<C: CostModel + ?Sized> CostModel for &C {
    fn edge_cost(&self, from: &NavigationNode, to: &NavigationNode) -> Option<f64> {
        (**self).edge_cost(from, to)
    }
}

/// Cost of moving from `from` to the adjacent node `to`.
///
/// Starts from the Euclidean distance, applies the accessibility penalty,
/// then at most one node-type multiplier, then adds the floor change
/// penalty.
pub fn movement_cost(
    from: &NavigationNode,
    to: &NavigationNode,
    preferences: &NavigationPreferences,
) -> f64 {
    let mut cost = from.distance_to(to);

    if preferences.require_wheelchair_access && !to.is_wheelchair_accessible() {
        cost *= WHEELCHAIR_PENALTY;
    }

    match to.node_type() {
        NodeType::Stairway if preferences.avoid_stairs => cost *= STAIRS_PENALTY,
        NodeType::Elevator if preferences.prefer_elevators => cost *= ELEVATOR_PREFERRED,
        NodeType::Elevator => cost *= ELEVATOR_NOT_PREFERRED,
        NodeType::Emergency => cost *= EMERGENCY_PENALTY,
        NodeType::Stairway
        | NodeType::Entrance
        | NodeType::Corridor
        | NodeType::Junction
        | NodeType::Destination => {}
    }

    if from.floor() != to.floor() {
        cost += preferences.floor_change_penalty;
    }

    cost
}

/// The preference-driven cost policy. Every edge is passable.
#[derive(Debug, Clone, Copy)]
pub struct PreferenceCost<'a> {
    preferences: &'a NavigationPreferences,
}

impl<'a> PreferenceCost<'a> {
    pub fn new(preferences: &'a NavigationPreferences) -> Self {
        Self { preferences }
    }
}

impl CostModel for PreferenceCost<'_> {
    fn edge_cost(&self, from: &NavigationNode, to: &NavigationNode) -> Option<f64> {
        Some(movement_cost(from, to, self.preferences))
    }
}

/// Wraps another model and refuses to enter non-accessible nodes.
#[derive(Debug, Clone, Copy)]
pub struct StrictAccessibility<C> {
    inner: C,
}

impl<C: CostModel> StrictAccessibility<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: CostModel> CostModel for StrictAccessibility<C> {
    fn edge_cost(&self, from: &NavigationNode, to: &NavigationNode) -> Option<f64> {
        if !to.is_wheelchair_accessible() {
            return None;
        }
        self.inner.edge_cost(from, to)
    }
}

/// The cost model implied by a set of preferences.
///
/// Strict accessibility only takes effect when wheelchair access is required.
pub fn cost_model_for(preferences: &NavigationPreferences) -> Box<dyn CostModel + Send + Sync + '_> {
    let base = PreferenceCost::new(preferences);
    if preferences.require_wheelchair_access && preferences.strict_accessibility {
        Box::new(StrictAccessibility::new(base))
    } else {
        Box::new(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Accessibility, NodeId, Vector3};

    const EPS: f64 = 1e-9;

    fn node(id: &str, x: f64, node_type: NodeType, floor: i32) -> NavigationNode {
        NavigationNode::new(
            NodeId::parse(id).unwrap(),
            Vector3::new(x, 0.0, 0.0),
            node_type,
            floor,
        )
    }

    fn origin() -> NavigationNode {
        node("o", 0.0, NodeType::Corridor, 0)
    }

    #[test]
    fn plain_edge_costs_distance() {
        let to = node("t", 4.0, NodeType::Corridor, 0);
        let cost = movement_cost(&origin(), &to, &NavigationPreferences::default());
        assert!((cost - 4.0).abs() < EPS);
    }

    #[test]
    fn wheelchair_penalty_only_when_required() {
        let to = node("t", 2.0, NodeType::Corridor, 0).with_accessibility(Accessibility::none());

        let relaxed = NavigationPreferences::default();
        assert!((movement_cost(&origin(), &to, &relaxed) - 2.0).abs() < EPS);

        let required = NavigationPreferences {
            require_wheelchair_access: true,
            ..NavigationPreferences::default()
        };
        assert!((movement_cost(&origin(), &to, &required) - 20.0).abs() < EPS);
    }

    #[test]
    fn stairs_penalty_only_when_avoiding() {
        let to = node("s", 3.0, NodeType::Stairway, 0);

        let relaxed = NavigationPreferences::default();
        assert!((movement_cost(&origin(), &to, &relaxed) - 3.0).abs() < EPS);

        let avoiding = NavigationPreferences {
            avoid_stairs: true,
            ..NavigationPreferences::default()
        };
        assert!((movement_cost(&origin(), &to, &avoiding) - 15.0).abs() < EPS);
    }

    #[test]
    fn elevator_nudge_both_ways() {
        let to = node("e", 10.0, NodeType::Elevator, 0);

        let preferred = NavigationPreferences {
            prefer_elevators: true,
            ..NavigationPreferences::default()
        };
        assert!((movement_cost(&origin(), &to, &preferred) - 8.0).abs() < EPS);

        let neutral = NavigationPreferences::default();
        assert!((movement_cost(&origin(), &to, &neutral) - 12.0).abs() < EPS);
    }

    #[test]
    fn emergency_always_deterred() {
        let to = node("x", 5.0, NodeType::Emergency, 0);
        let cost = movement_cost(&origin(), &to, &NavigationPreferences::default());
        assert!((cost - 10.0).abs() < EPS);
    }

    #[test]
    fn floor_change_penalty_is_additive() {
        let to = node("u", 2.0, NodeType::Corridor, 1);
        let cost = movement_cost(&origin(), &to, &NavigationPreferences::default());
        assert!((cost - 12.0).abs() < EPS);
    }

    #[test]
    fn penalties_compose_in_order() {
        // Non-accessible stairway on another floor: (3 * 10 * 5) + 10
        let to = node("s", 3.0, NodeType::Stairway, 1).with_accessibility(Accessibility::none());
        let prefs = NavigationPreferences {
            require_wheelchair_access: true,
            avoid_stairs: true,
            ..NavigationPreferences::default()
        };
        let cost = movement_cost(&origin(), &to, &prefs);
        assert!((cost - 160.0).abs() < EPS);
    }

    #[test]
    fn source_node_type_does_not_matter() {
        let from = node("s", 0.0, NodeType::Stairway, 0);
        let to = node("c", 3.0, NodeType::Corridor, 0);
        let prefs = NavigationPreferences {
            avoid_stairs: true,
            ..NavigationPreferences::default()
        };
        assert!((movement_cost(&from, &to, &prefs) - 3.0).abs() < EPS);
    }

    #[test]
    fn zero_length_edge_costs_nothing() {
        let to = node("t", 0.0, NodeType::Corridor, 0);
        assert_eq!(
            movement_cost(&origin(), &to, &NavigationPreferences::default()),
            0.0
        );
    }

    #[test]
    fn strict_model_blocks_inaccessible_nodes() {
        let prefs = NavigationPreferences {
            require_wheelchair_access: true,
            strict_accessibility: true,
            ..NavigationPreferences::default()
        };
        let model = cost_model_for(&prefs);

        let blocked = node("b", 1.0, NodeType::Corridor, 0).with_accessibility(Accessibility::none());
        let open = node("c", 1.0, NodeType::Corridor, 0);

        assert_eq!(model.edge_cost(&origin(), &blocked), None);
        assert!(model.edge_cost(&origin(), &open).is_some());
    }

    #[test]
    fn strict_flag_alone_is_ignored() {
        let prefs = NavigationPreferences {
            strict_accessibility: true,
            ..NavigationPreferences::default()
        };
        let model = cost_model_for(&prefs);
        let blocked = node("b", 1.0, NodeType::Corridor, 0).with_accessibility(Accessibility::none());
        assert!(model.edge_cost(&origin(), &blocked).is_some());
    }
}
