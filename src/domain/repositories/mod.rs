// Repository interfaces (ports)
// Implemented by adapters in the infrastructure layer

pub mod league_repository;

pub use league_repository::LeagueRepository;
