//! Building snapshots: the node graph plus the POI catalog.
//!
//! A `Building` is what the data layer hands to the planner: a validated
//! [`NodeSet`] and the destinations that can be requested against it.
//! This module also provides a fluent builder and a small built-in
//! demonstration building.

use std::collections::HashMap;

use crate::domain::{
    Accessibility, InvalidId, NavigationNode, NodeId, NodeType, PoiCategory, PoiId,
    PointOfInterest, Vector3,
};
use crate::graph::{GraphError, NodeSet};

/// Error building a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildingError {
    /// An identifier failed validation
    #[error("invalid identifier {id:?}: {source}")]
    InvalidId { id: String, source: InvalidId },

    /// A link or attribute refers to a node that was never declared
    #[error("unknown node: {0}")]
    UnknownNode(String),

    /// Two POIs share an identifier
    #[error("duplicate point of interest: {0}")]
    DuplicatePoi(PoiId),

    /// The node graph is inconsistent
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// An immutable building snapshot.
#[derive(Debug, Clone)]
pub struct Building {
    name: String,
    nodes: NodeSet,
    pois: Vec<PointOfInterest>,
    poi_index: HashMap<PoiId, usize>,
}

impl Building {
    /// Creates a building from parts, checking POI identifiers are unique.
    pub fn new(
        name: impl Into<String>,
        nodes: NodeSet,
        pois: Vec<PointOfInterest>,
    ) -> Result<Self, BuildingError> {
        let mut poi_index = HashMap::with_capacity(pois.len());
        for (i, poi) in pois.iter().enumerate() {
            if poi_index.insert(poi.id.clone(), i).is_some() {
                return Err(BuildingError::DuplicatePoi(poi.id.clone()));
            }
        }
        Ok(Self {
            name: name.into(),
            nodes,
            pois,
            poi_index,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nodes(&self) -> &NodeSet {
        &self.nodes
    }

    /// POIs in catalog order.
    pub fn pois(&self) -> &[PointOfInterest] {
        &self.pois
    }

    /// Looks up a POI by identifier.
    pub fn poi(&self, id: &PoiId) -> Option<&PointOfInterest> {
        self.poi_index.get(id).map(|&i| &self.pois[i])
    }

    /// POIs on a given floor.
    pub fn pois_on_floor(&self, floor: i32) -> impl Iterator<Item = &PointOfInterest> {
        self.pois.iter().filter(move |p| p.floor == floor)
    }
}

/// A node being assembled by [`BuildingBuilder`].
#[derive(Debug)]
struct NodeDraft {
    id: NodeId,
    position: Vector3,
    node_type: NodeType,
    floor: i32,
    accessibility: Accessibility,
    links: Vec<NodeId>,
}

/// Builder for building snapshots.
///
/// Provides a fluent API for declaring nodes, links and POIs. The first
/// problem encountered is remembered and reported by [`BuildingBuilder::build`].
#[derive(Debug, Default)]
pub struct BuildingBuilder {
    name: String,
    drafts: Vec<NodeDraft>,
    draft_index: HashMap<NodeId, usize>,
    pois: Vec<PointOfInterest>,
    error: Option<BuildingError>,
}

impl BuildingBuilder {
    /// Create a new builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    fn fail(&mut self, error: BuildingError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    fn parse_node_id(&mut self, id: &str) -> Option<NodeId> {
        match NodeId::parse(id) {
            Ok(id) => Some(id),
            Err(source) => {
                self.fail(BuildingError::InvalidId {
                    id: id.to_string(),
                    source,
                });
                None
            }
        }
    }

    fn draft_mut(&mut self, id: &str) -> Option<&mut NodeDraft> {
        let index = NodeId::parse(id)
            .ok()
            .and_then(|id| self.draft_index.get(&id).copied());
        match index {
            Some(i) => Some(&mut self.drafts[i]),
            None => {
                self.fail(BuildingError::UnknownNode(id.to_string()));
                None
            }
        }
    }

    /// Declare a fully accessible node.
    pub fn node(mut self, id: &str, position: Vector3, node_type: NodeType, floor: i32) -> Self {
        if let Some(node_id) = self.parse_node_id(id) {
            if self.draft_index.contains_key(&node_id) {
                self.fail(BuildingError::Graph(GraphError::DuplicateNode(node_id)));
                return self;
            }
            self.draft_index.insert(node_id.clone(), self.drafts.len());
            self.drafts.push(NodeDraft {
                id: node_id,
                position,
                node_type,
                floor,
                accessibility: Accessibility::full(),
                links: Vec::new(),
            });
        }
        self
    }

    /// Connect two declared nodes in both directions.
    pub fn link(self, a: &str, b: &str) -> Self {
        self.one_way(a, b).one_way(b, a)
    }

    /// Connect `from` to `to` only.
    pub fn one_way(mut self, from: &str, to: &str) -> Self {
        let Some(to_id) = self.parse_node_id(to) else {
            return self;
        };
        if !self.draft_index.contains_key(&to_id) {
            self.fail(BuildingError::UnknownNode(to.to_string()));
            return self;
        }
        if let Some(draft) = self.draft_mut(from) {
            if !draft.links.contains(&to_id) {
                draft.links.push(to_id);
            }
        }
        self
    }

    /// Override a declared node's accessibility.
    pub fn accessibility(mut self, id: &str, accessibility: Accessibility) -> Self {
        if let Some(draft) = self.draft_mut(id) {
            draft.accessibility = accessibility;
        }
        self
    }

    /// Add a point of interest.
    pub fn poi(
        mut self,
        id: &str,
        name: &str,
        category: PoiCategory,
        floor: i32,
        position: Vector3,
        description: &str,
    ) -> Self {
        match PoiId::parse(id) {
            Ok(poi_id) => self.pois.push(
                PointOfInterest::new(poi_id, name, category, floor, position)
                    .with_description(description),
            ),
            Err(source) => self.fail(BuildingError::InvalidId {
                id: id.to_string(),
                source,
            }),
        }
        self
    }

    /// Build the snapshot.
    pub fn build(self) -> Result<Building, BuildingError> {
        if let Some(error) = self.error {
            return Err(error);
        }

        let nodes = self
            .drafts
            .into_iter()
            .map(|d| {
                NavigationNode::new(d.id, d.position, d.node_type, d.floor)
                    .with_accessibility(d.accessibility)
                    .connect_all(d.links)
            })
            .collect();

        Building::new(self.name, NodeSet::new(nodes)?, self.pois)
    }
}

/// Height of one storey in meters.
const STOREY_HEIGHT: f64 = 4.0;

fn on_floor(x: f64, floor: i32, z: f64) -> Vector3 {
    Vector3::new(x, floor as f64 * STOREY_HEIGHT, z)
}

/// A small two-storey demonstration building.
///
/// Vertical links are one-way so that each stairway or elevator node is the
/// arrival point on the floor being moved to: going up you arrive at the
/// upper landing, going down at the lower one.
pub fn demo_building() -> Result<Building, BuildingError> {
    BuildingBuilder::new("Demo Building")
        // Ground floor
        .node("g-entrance", on_floor(0.0, 0, 0.0), NodeType::Entrance, 0)
        .node("g-hall", on_floor(10.0, 0, 0.0), NodeType::Corridor, 0)
        .node("g-junction", on_floor(20.0, 0, 0.0), NodeType::Junction, 0)
        .node("g-cafe", on_floor(20.0, 0, 8.0), NodeType::Destination, 0)
        .node("g-stairs", on_floor(25.0, 0, 0.0), NodeType::Stairway, 0)
        .node("g-lift", on_floor(20.0, 0, -6.0), NodeType::Elevator, 0)
        .node("g-fire-exit", on_floor(30.0, 0, 0.0), NodeType::Emergency, 0)
        // First floor
        .node("f1-stairs", on_floor(25.0, 1, 0.0), NodeType::Stairway, 1)
        .node("f1-lift", on_floor(20.0, 1, -6.0), NodeType::Elevator, 1)
        .node("f1-junction", on_floor(20.0, 1, 0.0), NodeType::Junction, 1)
        .node("f1-office", on_floor(10.0, 1, 0.0), NodeType::Destination, 1)
        .node("f1-restroom", on_floor(20.0, 1, 8.0), NodeType::Destination, 1)
        // Level links
        .link("g-entrance", "g-hall")
        .link("g-hall", "g-junction")
        .link("g-junction", "g-cafe")
        .link("g-junction", "g-fire-exit")
        .link("f1-junction", "f1-office")
        .link("f1-junction", "f1-restroom")
        // Going up
        .one_way("g-junction", "f1-stairs")
        .one_way("f1-stairs", "f1-junction")
        .one_way("g-junction", "f1-lift")
        .one_way("f1-lift", "f1-junction")
        // Going down
        .one_way("f1-junction", "g-stairs")
        .one_way("g-stairs", "g-junction")
        .one_way("f1-junction", "g-lift")
        .one_way("g-lift", "g-junction")
        .accessibility("g-stairs", Accessibility::no_wheelchair())
        .accessibility("f1-stairs", Accessibility::no_wheelchair())
        .poi(
            "cafe",
            "Cafe",
            PoiCategory::Dining,
            0,
            on_floor(20.0, 0, 8.0),
            "Coffee and light lunches",
        )
        .poi(
            "fire-exit",
            "Fire exit",
            PoiCategory::Exit,
            0,
            on_floor(30.0, 0, 0.0),
            "East emergency exit",
        )
        .poi(
            "office",
            "Main office",
            PoiCategory::Office,
            1,
            on_floor(10.0, 1, 0.0),
            "Reception and enquiries",
        )
        .poi(
            "restroom",
            "Restrooms",
            PoiCategory::Restroom,
            1,
            on_floor(20.0, 1, 8.0),
            "Accessible restrooms",
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InstructionType;
    use crate::planner::{NavigationPreferences, compute_route};

    fn poi_id(s: &str) -> PoiId {
        PoiId::parse(s).unwrap()
    }

    #[test]
    fn builder_links_both_ways() {
        let building = BuildingBuilder::new("B")
            .node("a", Vector3::ZERO, NodeType::Corridor, 0)
            .node("b", Vector3::new(1.0, 0.0, 0.0), NodeType::Corridor, 0)
            .link("a", "b")
            .build()
            .unwrap();

        let a = building.nodes().get(&NodeId::parse("a").unwrap()).unwrap();
        let b = building.nodes().get(&NodeId::parse("b").unwrap()).unwrap();
        assert_eq!(a.connections().len(), 1);
        assert_eq!(b.connections().len(), 1);
    }

    #[test]
    fn builder_one_way() {
        let building = BuildingBuilder::new("B")
            .node("a", Vector3::ZERO, NodeType::Corridor, 0)
            .node("b", Vector3::new(1.0, 0.0, 0.0), NodeType::Corridor, 0)
            .one_way("a", "b")
            .build()
            .unwrap();

        let b = building.nodes().get(&NodeId::parse("b").unwrap()).unwrap();
        assert!(b.connections().is_empty());
    }

    #[test]
    fn builder_reports_unknown_node() {
        let result = BuildingBuilder::new("B")
            .node("a", Vector3::ZERO, NodeType::Corridor, 0)
            .link("a", "nowhere")
            .build();

        assert_eq!(
            result.unwrap_err(),
            BuildingError::UnknownNode("nowhere".to_string())
        );
    }

    #[test]
    fn builder_reports_first_error_only() {
        let result = BuildingBuilder::new("B")
            .node("bad id", Vector3::ZERO, NodeType::Corridor, 0)
            .accessibility("missing", Accessibility::none())
            .build();

        assert!(matches!(result, Err(BuildingError::InvalidId { .. })));
    }

    #[test]
    fn builder_rejects_duplicate_node() {
        let result = BuildingBuilder::new("B")
            .node("a", Vector3::ZERO, NodeType::Corridor, 0)
            .node("a", Vector3::ZERO, NodeType::Junction, 0)
            .build();

        assert!(matches!(
            result,
            Err(BuildingError::Graph(GraphError::DuplicateNode(_)))
        ));
    }

    #[test]
    fn duplicate_poi_rejected() {
        let result = BuildingBuilder::new("B")
            .poi("x", "X", PoiCategory::Other, 0, Vector3::ZERO, "")
            .poi("x", "Y", PoiCategory::Other, 0, Vector3::ZERO, "")
            .build();

        assert_eq!(result.unwrap_err(), BuildingError::DuplicatePoi(poi_id("x")));
    }

    #[test]
    fn demo_building_is_valid() {
        let building = demo_building().unwrap();

        assert_eq!(building.name(), "Demo Building");
        assert_eq!(building.nodes().len(), 12);
        assert_eq!(building.pois().len(), 4);
        assert_eq!(
            building.poi(&poi_id("office")).map(|p| p.floor),
            Some(1)
        );
        assert!(building.poi(&poi_id("gym")).is_none());
        assert_eq!(building.pois_on_floor(1).count(), 2);
    }

    #[test]
    fn demo_route_upstairs_by_default() {
        let building = demo_building().unwrap();
        let office = building.poi(&poi_id("office")).unwrap();

        let route = compute_route(
            Vector3::ZERO,
            office,
            building.nodes(),
            &NavigationPreferences::default(),
        )
        .unwrap()
        .unwrap();

        assert_eq!(route.end().id().as_str(), "f1-office");
        assert!(
            route
                .instructions()
                .iter()
                .any(|i| i.instruction_type == InstructionType::Upstairs)
        );
    }

    #[test]
    fn demo_route_uses_lift_for_wheelchair() {
        let building = demo_building().unwrap();
        let office = building.poi(&poi_id("office")).unwrap();

        let route = compute_route(
            Vector3::ZERO,
            office,
            building.nodes(),
            &NavigationPreferences::wheelchair(),
        )
        .unwrap()
        .unwrap();

        let types: Vec<InstructionType> =
            route.instructions().iter().map(|i| i.instruction_type).collect();
        assert!(types.contains(&InstructionType::Elevator));
        assert!(!types.contains(&InstructionType::Upstairs));
        assert!(route.nodes().iter().all(|n| n.is_wheelchair_accessible()));
    }

    #[test]
    fn demo_route_back_down() {
        let building = demo_building().unwrap();
        let cafe = building.poi(&poi_id("cafe")).unwrap();

        let route = compute_route(
            on_floor(10.0, 1, 0.0),
            cafe,
            building.nodes(),
            &NavigationPreferences::default(),
        )
        .unwrap()
        .unwrap();

        assert_eq!(route.start().id().as_str(), "f1-office");
        assert_eq!(route.end().id().as_str(), "g-cafe");
        assert!(
            route
                .instructions()
                .iter()
                .any(|i| i.instruction_type == InstructionType::Downstairs)
        );
    }
}
