//! Graph model: an immutable snapshot of navigable nodes.
//!
//! Nodes live in a single arena and refer to each other by identifier.
//! A lookup map from identifier to arena index is built once when the
//! snapshot is created, so the planner can work on plain indices.

use std::collections::HashMap;

use crate::domain::{NavigationNode, NodeId, Vector3};

/// Error building a node set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Two nodes share an identifier
    #[error("duplicate node identifier: {0}")]
    DuplicateNode(NodeId),

    /// A connection points at a node that is not in the snapshot
    #[error("node {from} connects to unknown node {to}")]
    DanglingConnection { from: NodeId, to: NodeId },
}

/// An immutable set of navigation nodes.
///
/// # Invariants
///
/// - Node identifiers are unique
/// - Every connection resolves to a node in the set
#[derive(Debug, Clone, Default)]
pub struct NodeSet {
    nodes: Vec<NavigationNode>,
    index: HashMap<NodeId, usize>,
    /// Resolved connections per node, as arena indices.
    adjacency: Vec<Vec<usize>>,
    /// Position of each node when all nodes are sorted by identifier.
    id_rank: Vec<usize>,
}

impl NodeSet {
    /// Builds a snapshot, checking identifier uniqueness and connections.
    pub fn new(nodes: Vec<NavigationNode>) -> Result<Self, GraphError> {
        let mut index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if index.insert(node.id().clone(), i).is_some() {
                return Err(GraphError::DuplicateNode(node.id().clone()));
            }
        }

        let mut adjacency = Vec::with_capacity(nodes.len());
        for node in &nodes {
            let mut neighbors = Vec::with_capacity(node.connections().len());
            for to in node.connections() {
                match index.get(to) {
                    Some(&j) => neighbors.push(j),
                    None => {
                        return Err(GraphError::DanglingConnection {
                            from: node.id().clone(),
                            to: to.clone(),
                        });
                    }
                }
            }
            adjacency.push(neighbors);
        }

        let mut order: Vec<usize> = (0..nodes.len()).collect();
        order.sort_by(|&a, &b| nodes[a].id().cmp(nodes[b].id()));
        let mut id_rank = vec![0; nodes.len()];
        for (rank, &i) in order.iter().enumerate() {
            id_rank[i] = rank;
        }

        Ok(Self {
            nodes,
            index,
            adjacency,
            id_rank,
        })
    }

    /// Creates an empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates nodes in input order.
    pub fn iter(&self) -> impl Iterator<Item = &NavigationNode> {
        self.nodes.iter()
    }

    /// Looks up a node by identifier.
    pub fn get(&self, id: &NodeId) -> Option<&NavigationNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// Arena index of a node.
    pub fn index_of(&self, id: &NodeId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Node at an arena index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn node(&self, index: usize) -> &NavigationNode {
        &self.nodes[index]
    }

    /// Arena indices of the nodes `index` connects to, in declaration order.
    pub fn neighbors(&self, index: usize) -> &[usize] {
        &self.adjacency[index]
    }

    /// Rank of a node's identifier among all identifiers (0 = smallest).
    pub(crate) fn id_rank(&self, index: usize) -> usize {
        self.id_rank[index]
    }

    /// Arena index of the node closest to `position`.
    ///
    /// Ties go to the node that appears first in input order.
    pub fn nearest_index(&self, position: &Vector3) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, node) in self.nodes.iter().enumerate() {
            let d = node.position().distance(position);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((i, d)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// The node closest to `position`, or `None` if the set is empty.
    pub fn nearest_node(&self, position: &Vector3) -> Option<&NavigationNode> {
        self.nearest_index(position).map(|i| &self.nodes[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NodeType;

    fn id(s: &str) -> NodeId {
        NodeId::parse(s).unwrap()
    }

    fn node(name: &str, x: f64, z: f64) -> NavigationNode {
        NavigationNode::new(id(name), Vector3::new(x, 0.0, z), NodeType::Corridor, 0)
    }

    #[test]
    fn empty_set() {
        let set = NodeSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.nearest_node(&Vector3::ZERO).is_none());
    }

    #[test]
    fn lookup_by_id() {
        let set = NodeSet::new(vec![node("a", 0.0, 0.0), node("b", 1.0, 0.0)]).unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.get(&id("b")).map(|n| n.position().x), Some(1.0));
        assert!(set.get(&id("zzz")).is_none());
        assert_eq!(set.index_of(&id("a")), Some(0));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = NodeSet::new(vec![node("a", 0.0, 0.0), node("a", 1.0, 0.0)]);
        assert_eq!(result.unwrap_err(), GraphError::DuplicateNode(id("a")));
    }

    #[test]
    fn rejects_dangling_connection() {
        let result = NodeSet::new(vec![node("a", 0.0, 0.0).connect_to(id("ghost"))]);
        assert_eq!(
            result.unwrap_err(),
            GraphError::DanglingConnection {
                from: id("a"),
                to: id("ghost"),
            }
        );
    }

    #[test]
    fn error_display() {
        let err = GraphError::DanglingConnection {
            from: id("a"),
            to: id("b"),
        };
        assert_eq!(err.to_string(), "node a connects to unknown node b");
        assert_eq!(
            GraphError::DuplicateNode(id("x")).to_string(),
            "duplicate node identifier: x"
        );
    }

    #[test]
    fn adjacency_is_directed() {
        let set = NodeSet::new(vec![
            node("a", 0.0, 0.0).connect_to(id("b")),
            node("b", 1.0, 0.0),
        ])
        .unwrap();

        assert_eq!(set.neighbors(0), &[1]);
        assert!(set.neighbors(1).is_empty());
    }

    #[test]
    fn nearest_node_picks_closest() {
        let set = NodeSet::new(vec![
            node("a", 0.0, 0.0),
            node("b", 10.0, 0.0),
            node("c", 10.0, 10.0),
        ])
        .unwrap();

        let nearest = set.nearest_node(&Vector3::new(9.0, 0.0, 8.0)).unwrap();
        assert_eq!(nearest.id(), &id("c"));
    }

    #[test]
    fn nearest_node_tie_goes_to_first() {
        let set = NodeSet::new(vec![node("b", -1.0, 0.0), node("a", 1.0, 0.0)]).unwrap();

        let nearest = set.nearest_node(&Vector3::ZERO).unwrap();
        assert_eq!(nearest.id(), &id("b"));
    }

    #[test]
    fn id_rank_follows_identifier_order() {
        let set = NodeSet::new(vec![node("c", 0.0, 0.0), node("a", 0.0, 0.0), node("b", 0.0, 0.0)])
            .unwrap();

        assert_eq!(set.id_rank(0), 2);
        assert_eq!(set.id_rank(1), 0);
        assert_eq!(set.id_rank(2), 1);
    }
}
