// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of presentation concerns

pub mod errors;
pub mod league;
pub mod player;
pub mod repositories;
pub mod team;
