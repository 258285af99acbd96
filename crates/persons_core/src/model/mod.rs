//! Domain model for the persons list.
//!
//! # Responsibility
//! - Define the canonical record shape shared by storage and coordination.
//!
//! # Invariants
//! - Every person is identified by a stable `PersonId`.
//! - An absent name is equivalent to the empty string for ordering and
//!   search; it must never make comparison logic panic.

pub mod person;
