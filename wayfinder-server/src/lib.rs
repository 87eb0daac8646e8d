//! Indoor route-planning server.
//!
//! A service that answers: "I'm standing here in the building, how do I
//! get to that room?" It plans accessibility-aware routes over a multi-floor
//! navigation graph and narrates them as turn-by-turn instructions.

pub mod building;
pub mod cache;
pub mod config;
pub mod domain;
pub mod graph;
pub mod instructions;
pub mod planner;
pub mod web;
