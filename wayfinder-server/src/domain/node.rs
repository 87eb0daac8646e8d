//! Navigation graph nodes.

use std::fmt;

use super::{NodeId, Vector3};

/// What kind of place a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Entrance,
    Corridor,
    Junction,
    Stairway,
    Elevator,
    Destination,
    Emergency,
}

impl NodeType {
    /// Stable machine-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Entrance => "entrance",
            NodeType::Corridor => "corridor",
            NodeType::Junction => "junction",
            NodeType::Stairway => "stairway",
            NodeType::Elevator => "elevator",
            NodeType::Destination => "destination",
            NodeType::Emergency => "emergency",
        }
    }

    /// Human-readable label used in instruction text.
    pub fn label(&self) -> &'static str {
        match self {
            NodeType::Emergency => "emergency exit",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accessibility features of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Accessibility {
    pub wheelchair_accessible: bool,
    pub elevator_access: bool,
    pub ramp_access: bool,
    pub visual_aid_support: bool,
    pub audio_aid_support: bool,
}

impl Accessibility {
    /// Every feature available.
    pub const fn full() -> Self {
        Self {
            wheelchair_accessible: true,
            elevator_access: true,
            ramp_access: true,
            visual_aid_support: true,
            audio_aid_support: true,
        }
    }

    /// No feature available.
    pub const fn none() -> Self {
        Self {
            wheelchair_accessible: false,
            elevator_access: false,
            ramp_access: false,
            visual_aid_support: false,
            audio_aid_support: false,
        }
    }

    /// Accessible except for wheelchairs (e.g. a stairway).
    pub const fn no_wheelchair() -> Self {
        Self {
            wheelchair_accessible: false,
            ..Self::full()
        }
    }
}

/// A point in the navigable graph.
///
/// Nodes are immutable once built. Connections are directed and refer to
/// other nodes by identifier; [`crate::graph::NodeSet`] checks that they
/// resolve. New nodes are fully accessible until told otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationNode {
    id: NodeId,
    position: Vector3,
    node_type: NodeType,
    connections: Vec<NodeId>,
    accessibility: Accessibility,
    floor: i32,
}

impl NavigationNode {
    /// Creates an unconnected, fully accessible node.
    pub fn new(id: NodeId, position: Vector3, node_type: NodeType, floor: i32) -> Self {
        Self {
            id,
            position,
            node_type,
            connections: Vec::new(),
            accessibility: Accessibility::full(),
            floor,
        }
    }

    /// Adds a directed connection. Duplicates are ignored.
    pub fn connect_to(mut self, to: NodeId) -> Self {
        if !self.connections.contains(&to) {
            self.connections.push(to);
        }
        self
    }

    /// Adds several directed connections in order.
    pub fn connect_all<I: IntoIterator<Item = NodeId>>(self, to: I) -> Self {
        to.into_iter().fold(self, |node, id| node.connect_to(id))
    }

    /// Replaces the accessibility descriptor.
    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    /// Connected node identifiers in insertion order.
    pub fn connections(&self) -> &[NodeId] {
        &self.connections
    }

    pub fn accessibility(&self) -> &Accessibility {
        &self.accessibility
    }

    pub fn floor(&self) -> i32 {
        self.floor
    }

    pub fn is_wheelchair_accessible(&self) -> bool {
        self.accessibility.wheelchair_accessible
    }

    /// Euclidean distance to another node.
    pub fn distance_to(&self, other: &NavigationNode) -> f64 {
        self.position.distance(&other.position)
    }
}
