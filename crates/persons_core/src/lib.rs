//! Core domain logic for the persons list app.
//! This crate is the single source of truth for list and persistence
//! invariants; UI layers render `active_view()` and forward gestures here.

pub mod coordinator;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use coordinator::list_coordinator::{CoordinatorError, ListCoordinator};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::person::{Person, PersonId};
pub use repo::person_repo::{PersonRepository, SqlitePersonStore, StoreError, StoreResult};

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
