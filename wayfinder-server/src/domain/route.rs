//! Route and instruction types.
//!
//! A `NavigationRoute` is the result of one successful planning call: the
//! node path, its metrics, and the narrated instructions for walking it.

use std::fmt;

use super::{DomainError, NavigationNode, NodeId, PointOfInterest, Vector3};
use crate::instructions::format_distance;

/// The kind of a navigation instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstructionType {
    Start,
    Straight,
    TurnLeft,
    TurnRight,
    Upstairs,
    Downstairs,
    Elevator,
    Destination,
}

impl InstructionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstructionType::Start => "start",
            InstructionType::Straight => "straight",
            InstructionType::TurnLeft => "turn-left",
            InstructionType::TurnRight => "turn-right",
            InstructionType::Upstairs => "upstairs",
            InstructionType::Downstairs => "downstairs",
            InstructionType::Elevator => "elevator",
            InstructionType::Destination => "destination",
        }
    }
}

impl fmt::Display for InstructionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step of turn-by-turn guidance.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationInstruction {
    /// Sequence number within the route, starting at 0.
    pub id: usize,
    pub instruction_type: InstructionType,
    pub description: String,
    /// Length of the segment leading to `position`, in meters.
    pub distance: f64,
    pub position: Vector3,
}

impl NavigationInstruction {
    /// The segment distance formatted for display.
    pub fn distance_text(&self) -> String {
        format_distance(self.distance)
    }
}

/// A planned route to a destination.
///
/// # Invariants
///
/// - The node path is never empty: start first, destination-side node last.
#[derive(Debug, Clone)]
pub struct NavigationRoute {
    destination: PointOfInterest,
    nodes: Vec<NavigationNode>,
    total_distance: f64,
    estimated_time: f64,
    instructions: Vec<NavigationInstruction>,
}

impl NavigationRoute {
    /// Assembles a route from its parts.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyRoute` if `nodes` is empty.
    pub fn new(
        destination: PointOfInterest,
        nodes: Vec<NavigationNode>,
        total_distance: f64,
        estimated_time: f64,
        instructions: Vec<NavigationInstruction>,
    ) -> Result<Self, DomainError> {
        if nodes.is_empty() {
            return Err(DomainError::EmptyRoute);
        }
        Ok(Self {
            destination,
            nodes,
            total_distance,
            estimated_time,
            instructions,
        })
    }

    pub fn destination(&self) -> &PointOfInterest {
        &self.destination
    }

    pub fn nodes(&self) -> &[NavigationNode] {
        &self.nodes
    }

    /// Total walking distance in meters.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Estimated walking time in seconds.
    pub fn estimated_time(&self) -> f64 {
        self.estimated_time
    }

    pub fn instructions(&self) -> &[NavigationInstruction] {
        &self.instructions
    }

    pub fn start(&self) -> &NavigationNode {
        &self.nodes[0]
    }

    pub fn end(&self) -> &NavigationNode {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Node identifiers along the path.
    pub fn node_ids(&self) -> Vec<&NodeId> {
        self.nodes.iter().map(|n| n.id()).collect()
    }

    /// Number of consecutive node pairs on different floors.
    pub fn floor_changes(&self) -> usize {
        self.nodes
            .windows(2)
            .filter(|pair| pair[0].floor() != pair[1].floor())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NodeType, PoiCategory, PoiId};

    fn node(id: &str, floor: i32) -> NavigationNode {
        NavigationNode::new(
            NodeId::parse(id).unwrap(),
            Vector3::ZERO,
            NodeType::Corridor,
            floor,
        )
    }

    fn destination() -> PointOfInterest {
        PointOfInterest::new(
            PoiId::parse("desk").unwrap(),
            "Front desk",
            PoiCategory::Service,
            0,
            Vector3::ZERO,
        )
    }

    #[test]
    fn empty_route_rejected() {
        let result = NavigationRoute::new(destination(), vec![], 0.0, 0.0, vec![]);
        assert!(matches!(result, Err(DomainError::EmptyRoute)));
    }

    #[test]
    fn start_end_and_ids() {
        let route = NavigationRoute::new(
            destination(),
            vec![node("a", 0), node("b", 0), node("c", 1)],
            12.0,
            10.0,
            vec![],
        )
        .unwrap();

        assert_eq!(route.start().id().as_str(), "a");
        assert_eq!(route.end().id().as_str(), "c");
        let ids: Vec<&str> = route.node_ids().iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn floor_changes_counts_transitions() {
        let route = NavigationRoute::new(
            destination(),
            vec![node("a", 0), node("b", 1), node("c", 1), node("d", 0)],
            0.0,
            0.0,
            vec![],
        )
        .unwrap();
        assert_eq!(route.floor_changes(), 2);
    }

    #[test]
    fn single_node_route() {
        let route = NavigationRoute::new(destination(), vec![node("a", 0)], 0.0, 0.0, vec![])
            .unwrap();
        assert_eq!(route.start().id(), route.end().id());
        assert_eq!(route.floor_changes(), 0);
    }

    #[test]
    fn instruction_distance_text() {
        let instruction = NavigationInstruction {
            id: 1,
            instruction_type: InstructionType::Straight,
            description: "Continue straight for 5.0 m".to_string(),
            distance: 5.0,
            position: Vector3::ZERO,
        };
        assert_eq!(instruction.distance_text(), "5.0 m");
    }

    #[test]
    fn instruction_type_names() {
        assert_eq!(InstructionType::TurnLeft.as_str(), "turn-left");
        assert_eq!(InstructionType::Downstairs.to_string(), "downstairs");
    }
}
