// API layer module (the call surface consumed by a view)
// Follows Hexagonal Architecture - API is an adapter

pub mod commands;
pub mod errors;
pub mod handlers;
