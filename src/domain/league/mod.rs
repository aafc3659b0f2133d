// League domain module
// Contains the league aggregate root, match log, standings, and the shared handle

#![allow(clippy::module_inception)]

pub mod events;
pub mod league;
pub mod match_record;
pub mod shared;
pub mod standings;

// Re-export main types for convenience
pub use events::LeagueEvent;
pub use league::{League, LeagueSnapshot};
pub use match_record::{MatchOutcome, MatchRecord};
pub use shared::SharedLeague;
