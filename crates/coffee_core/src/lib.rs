//! Core domain logic for the coffee catalog.
//! This crate is the single source of truth for record invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::coffee::{Coffee, CoffeeId, CoffeeValidationError, CreateCoffee, UpdateCoffee};
pub use repo::coffee_repo::{CoffeeRepository, InMemoryCoffeeRepository, RepoError, RepoResult};
pub use service::coffee_service::{CoffeeService, CoffeeServiceError, ServiceResult};

/// Minimal health-check API for linkage checks.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
