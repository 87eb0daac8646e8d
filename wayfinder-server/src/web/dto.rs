//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{NavigationInstruction, NavigationRoute, PointOfInterest, Vector3};
use crate::instructions::{format_distance, format_duration};
use crate::planner::{NavigationPreferences, PlanResult};

/// A position on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionDto {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<PositionDto> for Vector3 {
    fn from(p: PositionDto) -> Self {
        Vector3::new(p.x, p.y, p.z)
    }
}

impl From<Vector3> for PositionDto {
    fn from(v: Vector3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

/// Preference overrides; missing fields take their defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PreferencesDto {
    pub require_wheelchair_access: Option<bool>,
    pub avoid_stairs: Option<bool>,
    pub prefer_elevators: Option<bool>,
    pub walking_speed: Option<f64>,
    pub floor_change_penalty: Option<f64>,
    pub strict_accessibility: Option<bool>,
}

impl PreferencesDto {
    /// Apply the overrides to the default preferences.
    pub fn into_preferences(self) -> NavigationPreferences {
        let d = NavigationPreferences::default();
        NavigationPreferences {
            require_wheelchair_access: self
                .require_wheelchair_access
                .unwrap_or(d.require_wheelchair_access),
            avoid_stairs: self.avoid_stairs.unwrap_or(d.avoid_stairs),
            prefer_elevators: self.prefer_elevators.unwrap_or(d.prefer_elevators),
            walking_speed: self.walking_speed.unwrap_or(d.walking_speed),
            floor_change_penalty: self.floor_change_penalty.unwrap_or(d.floor_change_penalty),
            strict_accessibility: self
                .strict_accessibility
                .unwrap_or(d.strict_accessibility),
        }
    }
}

/// Request to plan a route.
#[derive(Debug, Deserialize)]
pub struct PlanRouteRequest {
    /// Current position of the user
    pub start: PositionDto,

    /// Identifier of the destination POI
    pub destination_id: String,

    /// Optional preference overrides
    pub preferences: Option<PreferencesDto>,
}

/// An instruction in a route.
#[derive(Debug, Serialize)]
pub struct InstructionResult {
    pub id: usize,

    /// Instruction type, e.g. "turn-left"
    #[serde(rename = "type")]
    pub instruction_type: &'static str,

    pub description: String,

    /// Segment distance in meters
    pub distance: f64,

    /// Segment distance for display
    pub distance_text: String,

    pub position: PositionDto,
}

/// A planned route.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    pub destination_id: String,
    pub destination_name: String,

    /// Node identifiers from start to destination
    pub node_ids: Vec<String>,

    /// Total distance in meters
    pub total_distance: f64,
    pub distance_text: String,

    /// Estimated walking time in seconds
    pub estimated_time: f64,
    pub time_text: String,

    pub floor_changes: usize,

    pub instructions: Vec<InstructionResult>,
}

/// Response for route planning.
#[derive(Debug, Serialize)]
pub struct PlanRouteResponse {
    /// Whether a route exists
    pub found: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteResult>,

    /// Nodes expanded by the search
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes_expanded: Option<usize>,
}

/// A destination in the catalog.
#[derive(Debug, Serialize)]
pub struct DestinationResult {
    pub id: String,
    pub name: String,
    pub category: &'static str,
    pub floor: i32,
    pub description: String,
    pub position: PositionDto,
}

/// Response listing destinations.
#[derive(Debug, Serialize)]
pub struct DestinationsResponse {
    pub building: String,
    pub destinations: Vec<DestinationResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl InstructionResult {
    /// Create from a domain instruction.
    pub fn from_instruction(instruction: &NavigationInstruction) -> Self {
        Self {
            id: instruction.id,
            instruction_type: instruction.instruction_type.as_str(),
            description: instruction.description.clone(),
            distance: instruction.distance,
            distance_text: instruction.distance_text(),
            position: instruction.position.into(),
        }
    }
}

impl RouteResult {
    /// Create from a domain route.
    pub fn from_route(route: &NavigationRoute) -> Self {
        Self {
            destination_id: route.destination().id.to_string(),
            destination_name: route.destination().name.clone(),
            node_ids: route.node_ids().iter().map(|id| id.to_string()).collect(),
            total_distance: route.total_distance(),
            distance_text: format_distance(route.total_distance()),
            estimated_time: route.estimated_time(),
            time_text: format_duration(route.estimated_time()),
            floor_changes: route.floor_changes(),
            instructions: route
                .instructions()
                .iter()
                .map(InstructionResult::from_instruction)
                .collect(),
        }
    }
}

impl PlanRouteResponse {
    /// Create from a planning result.
    pub fn from_result(result: &PlanResult) -> Self {
        match &result.route {
            Some(route) => Self {
                found: true,
                route: Some(RouteResult::from_route(route)),
                nodes_expanded: Some(result.nodes_expanded),
            },
            None => Self {
                found: false,
                route: None,
                nodes_expanded: Some(result.nodes_expanded),
            },
        }
    }
}

impl DestinationResult {
    /// Create from a domain POI.
    pub fn from_poi(poi: &PointOfInterest) -> Self {
        Self {
            id: poi.id.to_string(),
            name: poi.name.clone(),
            category: poi.category.as_str(),
            floor: poi.floor,
            description: poi.description.clone(),
            position: poi.position.into(),
        }
    }
}
