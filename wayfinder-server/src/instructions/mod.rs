//! Turn-by-turn instruction synthesis.
//!
//! Converts an ordered node path into narrated instructions: a leading
//! `Start`, one instruction per segment, and a trailing `Destination`.
//! The instruction type for a segment depends on the node it arrives at:
//! stairways and elevators describe the vertical move, junctions describe
//! the turn taken there, everything else is walking straight on.

mod format;
mod turn;

pub use format::{format_distance, format_duration};
pub use turn::{TURN_THRESHOLD, TurnDirection, classify_turn};

use crate::domain::{InstructionType, NavigationInstruction, NavigationNode, NodeType};

/// Builds the instruction list for a path.
///
/// `destination_name` is only used to phrase the final instruction.
/// An empty path yields no instructions.
pub fn synthesize(path: &[NavigationNode], destination_name: &str) -> Vec<NavigationInstruction> {
    let (Some(first), Some(last)) = (path.first(), path.last()) else {
        return Vec::new();
    };

    let mut instructions = Vec::with_capacity(path.len() + 1);

    instructions.push(NavigationInstruction {
        id: 0,
        instruction_type: InstructionType::Start,
        description: describe(InstructionType::Start, first, 0.0, destination_name),
        distance: 0.0,
        position: first.position(),
    });

    for i in 1..path.len() {
        let previous = &path[i - 1];
        let current = &path[i];
        let next = path.get(i + 1);
        let distance = previous.distance_to(current);

        let instruction_type = segment_type(previous, current, next);
        instructions.push(NavigationInstruction {
            id: instructions.len(),
            instruction_type,
            description: describe(instruction_type, current, distance, destination_name),
            distance,
            position: current.position(),
        });
    }

    instructions.push(NavigationInstruction {
        id: instructions.len(),
        instruction_type: InstructionType::Destination,
        description: describe(InstructionType::Destination, last, 0.0, destination_name),
        distance: 0.0,
        position: last.position(),
    });

    instructions
}

/// Instruction type for arriving at `current` from `previous`.
fn segment_type(
    previous: &NavigationNode,
    current: &NavigationNode,
    next: Option<&NavigationNode>,
) -> InstructionType {
    match current.node_type() {
        NodeType::Stairway if current.floor() > previous.floor() => InstructionType::Upstairs,
        NodeType::Stairway => InstructionType::Downstairs,
        NodeType::Elevator => InstructionType::Elevator,
        NodeType::Junction => match next {
            Some(next) => {
                match classify_turn(previous.position(), current.position(), next.position()) {
                    TurnDirection::Left => InstructionType::TurnLeft,
                    TurnDirection::Right => InstructionType::TurnRight,
                    TurnDirection::Straight => InstructionType::Straight,
                }
            }
            None => InstructionType::Straight,
        },
        NodeType::Entrance | NodeType::Corridor | NodeType::Destination | NodeType::Emergency => {
            InstructionType::Straight
        }
    }
}

/// Text for an instruction positioned at `node`.
fn describe(
    instruction_type: InstructionType,
    node: &NavigationNode,
    distance: f64,
    destination_name: &str,
) -> String {
    let d = format_distance(distance);
    match instruction_type {
        InstructionType::Straight => format!("Continue straight for {d}"),
        InstructionType::TurnLeft => format!("Walk {d}, then turn left"),
        InstructionType::TurnRight => format!("Walk {d}, then turn right"),
        InstructionType::Upstairs => format!("Take the stairs up for {d}"),
        InstructionType::Downstairs => format!("Take the stairs down for {d}"),
        InstructionType::Elevator => format!("Take the elevator to floor {}", node.floor()),
        InstructionType::Start => format!("Start at the {}", node.node_type().label()),
        InstructionType::Destination => format!("You have arrived at {destination_name}"),
    }
}
