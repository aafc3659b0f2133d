// Repository implementations (session storage layer)
// Adapters that implement domain repository interfaces

pub mod in_memory_league_repository;

pub use in_memory_league_repository::InMemoryLeagueRepository;
