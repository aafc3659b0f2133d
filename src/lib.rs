//! League Roster Library
//!
//! This library provides the in-memory model for tracking a football
//! league: teams, their player rosters, match results and the league
//! table, plus the session store and call surface a view layer uses.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
