//! Core of the people demo: one `Person` table, a create/find service pair
//! and the startup exercise that prints the created row.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod runner;
pub mod service;

pub use logging::{default_log_level, flush_logging, init_logging, logging_status};
pub use model::person::{EmotionalState, Person, PersonId};
pub use repo::person_repo::{PersonRepository, RepoError, RepoResult, SqlitePersonRepository};
pub use runner::{RunError, RunResult, Runner};
pub use service::people_service::PeopleService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
