//! A* route search.
//!
//! Finds a minimum-cost node path from the node nearest the user to the
//! node nearest the destination, then packages it with metrics and
//! instructions into a [`NavigationRoute`].
//!
//! The heuristic is the straight-line distance to the goal. Cost multipliers
//! below 1 (the elevator preference) make it overestimate, so with those
//! preferences the search is best-effort rather than strictly optimal.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

use tracing::{debug, trace};

use crate::domain::{DomainError, NavigationRoute, PointOfInterest, Vector3};
use crate::graph::NodeSet;
use crate::instructions::synthesize;

use super::config::{NavigationPreferences, PreferencesError};
use super::cost::{CostModel, cost_model_for};
use super::metrics::RouteMetrics;

/// Error from route planning.
///
/// Not finding a route is not an error; see [`PlanResult::route`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// Preferences failed validation
    #[error("invalid preferences: {0}")]
    InvalidPreferences(#[from] PreferencesError),

    /// The cancellation flag was raised during search
    #[error("route search cancelled")]
    Cancelled,

    /// A found path could not be packaged into a route
    #[error("invalid route: {0}")]
    InvalidRoute(#[from] DomainError),
}

/// Result of a planning call.
#[derive(Debug, Clone)]
pub struct PlanResult {
    /// The route, or `None` if the graph is empty or the goal is unreachable.
    pub route: Option<NavigationRoute>,

    /// Number of nodes expanded during search.
    pub nodes_expanded: usize,
}

impl PlanResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self {
            route: None,
            nodes_expanded: 0,
        }
    }
}

/// Open set entry, ordered so that `BinaryHeap` pops the lowest f-score
/// first and, among equal f-scores, the lowest node identifier.
#[derive(Debug, Clone, Copy)]
struct OpenEntry {
    f_score: f64,
    g_score: f64,
    rank: usize,
    index: usize,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f_score
            .total_cmp(&self.f_score)
            .then_with(|| other.rank.cmp(&self.rank))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

/// Node path found by [`Planner::search`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Arena indices from start to goal, or `None` if unreachable.
    pub path: Option<Vec<usize>>,

    /// Total cost of `path` under the cost model used.
    pub cost: f64,

    pub nodes_expanded: usize,
}

/// Route planner over one graph snapshot.
///
/// Holds only borrowed, read-only inputs, so any number of planners may
/// share a snapshot across threads.
pub struct Planner<'a> {
    nodes: &'a NodeSet,
    preferences: &'a NavigationPreferences,
    cancel: Option<&'a AtomicBool>,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(nodes: &'a NodeSet, preferences: &'a NavigationPreferences) -> Self {
        Self {
            nodes,
            preferences,
            cancel: None,
        }
    }

    /// Stop searching with [`PlanError::Cancelled`] once `flag` is set.
    ///
    /// The flag is checked once per expanded node.
    pub fn with_cancel_flag(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Plan a route from `start` to `destination` using the cost model
    /// implied by the preferences.
    pub fn plan(
        &self,
        start: Vector3,
        destination: &PointOfInterest,
    ) -> Result<PlanResult, PlanError> {
        let cost = cost_model_for(self.preferences);
        self.plan_with_cost(start, destination, &*cost)
    }

    /// Plan a route, returning only the route.
    pub fn find_path(
        &self,
        start: Vector3,
        destination: &PointOfInterest,
    ) -> Result<Option<NavigationRoute>, PlanError> {
        self.plan(start, destination).map(|result| result.route)
    }

    /// Plan a route with a caller-supplied cost model.
    pub fn plan_with_cost<C: CostModel>(
        &self,
        start: Vector3,
        destination: &PointOfInterest,
        cost: C,
    ) -> Result<PlanResult, PlanError> {
        self.preferences.validate()?;

        let (Some(start_idx), Some(goal_idx)) = (
            self.nodes.nearest_index(&start),
            self.nodes.nearest_index(&destination.position),
        ) else {
            debug!(destination = %destination.id, "Empty graph, no route");
            return Ok(PlanResult::empty());
        };

        debug!(
            start = %self.nodes.node(start_idx).id(),
            goal = %self.nodes.node(goal_idx).id(),
            destination = %destination.id,
            "Planning route"
        );

        let outcome = self.search(start_idx, goal_idx, cost)?;

        let Some(indices) = outcome.path else {
            debug!(
                nodes_expanded = outcome.nodes_expanded,
                "No route to destination"
            );
            return Ok(PlanResult {
                route: None,
                nodes_expanded: outcome.nodes_expanded,
            });
        };

        let path: Vec<_> = indices
            .iter()
            .map(|&i| self.nodes.node(i).clone())
            .collect();
        let metrics = RouteMetrics::compute(&path, self.preferences.walking_speed);
        let instructions = synthesize(&path, &destination.name);

        debug!(
            nodes = path.len(),
            cost = outcome.cost,
            distance = metrics.total_distance,
            nodes_expanded = outcome.nodes_expanded,
            "Route found"
        );

        let route = NavigationRoute::new(
            destination.clone(),
            path,
            metrics.total_distance,
            metrics.estimated_time,
            instructions,
        )?;

        Ok(PlanResult {
            route: Some(route),
            nodes_expanded: outcome.nodes_expanded,
        })
    }

    /// A* between two arena indices.
    ///
    /// Edge costs must be non-negative. Nodes are not closed: a node whose
    /// g-score improves after expansion is pushed again.
    pub fn search<C: CostModel>(
        &self,
        start: usize,
        goal: usize,
        cost: C,
    ) -> Result<SearchOutcome, PlanError> {
        let goal_position = self.nodes.node(goal).position();
        let heuristic = |i: usize| self.nodes.node(i).position().distance(&goal_position);

        let mut g_score = vec![f64::INFINITY; self.nodes.len()];
        let mut came_from: Vec<Option<usize>> = vec![None; self.nodes.len()];
        let mut open = BinaryHeap::new();

        g_score[start] = 0.0;
        open.push(OpenEntry {
            f_score: heuristic(start),
            g_score: 0.0,
            rank: self.nodes.id_rank(start),
            index: start,
        });

        let mut nodes_expanded = 0;

        while let Some(entry) = open.pop() {
            if self
                .cancel
                .is_some_and(|flag| flag.load(AtomicOrdering::Relaxed))
            {
                debug!(nodes_expanded, "Route search cancelled");
                return Err(PlanError::Cancelled);
            }

            // Superseded by a cheaper push of the same node
            if entry.g_score > g_score[entry.index] {
                continue;
            }

            nodes_expanded += 1;

            if entry.index == goal {
                return Ok(SearchOutcome {
                    path: Some(reconstruct_path(&came_from, goal)),
                    cost: entry.g_score,
                    nodes_expanded,
                });
            }

            let current = self.nodes.node(entry.index);
            for &next in self.nodes.neighbors(entry.index) {
                let neighbor = self.nodes.node(next);
                let Some(step) = cost.edge_cost(current, neighbor) else {
                    trace!(from = %current.id(), to = %neighbor.id(), "Edge impassable");
                    continue;
                };

                let tentative = entry.g_score + step;
                if tentative < g_score[next] {
                    came_from[next] = Some(entry.index);
                    g_score[next] = tentative;
                    open.push(OpenEntry {
                        f_score: tentative + heuristic(next),
                        g_score: tentative,
                        rank: self.nodes.id_rank(next),
                        index: next,
                    });
                }
            }
        }

        Ok(SearchOutcome {
            path: None,
            cost: f64::INFINITY,
            nodes_expanded,
        })
    }
}

/// Walks predecessors back from `goal` and returns the path start-first.
fn reconstruct_path(came_from: &[Option<usize>], goal: usize) -> Vec<usize> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(prev) = came_from[current] {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
