//! Record store abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract the coordinator depends on.
//! - Isolate SQLite query details from list orchestration.
//!
//! # Invariants
//! - The store is the only code allowed to touch persistent person state.
//! - Store APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod person_repo;
