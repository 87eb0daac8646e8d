//! Domain types for the indoor route planner.
//!
//! This module contains the value types shared by the graph model, the
//! planner and the instruction synthesizer. Types enforce their invariants
//! at construction time, so code that receives them can trust their
//! validity.

mod error;
mod ids;
mod node;
mod poi;
mod position;
mod route;

pub use error::DomainError;
pub use ids::{InvalidId, NodeId, PoiId};
pub use node::{Accessibility, NavigationNode, NodeType};
pub use poi::{PoiCategory, PointOfInterest};
pub use position::Vector3;
pub use route::{InstructionType, NavigationInstruction, NavigationRoute};
