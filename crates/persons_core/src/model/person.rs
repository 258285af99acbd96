//! Person domain model.
//!
//! # Responsibility
//! - Define the single record kind held by the store.
//! - Provide the name-normalization helpers used by sorting and search.
//!
//! # Invariants
//! - `id` is stable and never reused for another person.
//! - `name` is nullable in storage; all ordering and matching treats an
//!   absent name as the empty string.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

/// Stable identifier for a person record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PersonId = Uuid;

/// Canonical person record.
///
/// The name stays optional to match the persisted schema; display code and
/// matching logic go through [`Person::display_name`] instead of unwrapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Stable identity used for rename/delete matching across views.
    pub id: PersonId,
    /// Mutable display name. `None` round-trips as JSON null.
    pub name: Option<String>,
}

impl Person {
    /// Creates a person with a generated stable ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), Some(name.into()))
    }

    /// Creates a person with a caller-provided stable ID.
    ///
    /// Used by the store when rehydrating rows where identity already exists.
    pub fn with_id(id: PersonId, name: Option<String>) -> Self {
        Self { id, name }
    }

    /// Returns the name, or the empty string when absent.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Case-insensitive substring match against a search text.
    ///
    /// # Contract
    /// - An empty `text` matches every person.
    /// - An absent or empty name never matches a non-empty `text`.
    pub fn name_matches(&self, text: &str) -> bool {
        if text.is_empty() {
            return true;
        }
        self.display_name()
            .to_lowercase()
            .contains(&text.to_lowercase())
    }

    /// Total ordering used by the cached list: name ascending (absent name
    /// sorts as empty), ties broken by ID so the order is deterministic for
    /// duplicate names.
    pub fn list_order(&self, other: &Self) -> Ordering {
        self.display_name()
            .cmp(other.display_name())
            .then_with(|| self.id.cmp(&other.id))
    }
}
