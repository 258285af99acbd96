//! List coordination between caller intent and the record store.
//!
//! # Responsibility
//! - Own the in-memory full and filtered person views.
//! - Mediate every mutation through the injected record store.
//!
//! # Invariants
//! - The store is the source of truth; the cached views are display copies.
//! - View state only changes after the store reports success.

pub mod list_coordinator;
