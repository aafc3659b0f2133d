// Team domain module
// Contains the team aggregate, its stats value object, and roster events

#![allow(clippy::module_inception)]

pub mod events;
pub mod team;
pub mod value_objects;

// Re-export main types for convenience
pub use events::TeamEvent;
pub use team::{Team, TeamSnapshot};
pub use value_objects::TeamStats;
