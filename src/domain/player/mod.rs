// Player domain module
// Contains the player entity, its snapshot view, and skill/card value objects

#![allow(clippy::module_inception)]

pub mod player;
pub mod value_objects;

// Re-export main types for convenience
pub use player::{Player, PlayerSnapshot};
pub use value_objects::{CardKind, Position, Skill, SkillSet};
