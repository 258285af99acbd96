//! List coordinator over an injected person store.
//!
//! # Responsibility
//! - Keep a cached sorted copy of the collection plus a derived filtered
//!   view, and decide which of the two the UI should render.
//! - Translate user intent (load/add/rename/remove/search) into store calls.
//!
//! # Invariants
//! - `filtered_persons` is always a subset of `all_persons`.
//! - Cached views are mutated only after the store confirms durability.
//! - A failed store call leaves both views exactly as they were.
//! - Rename keeps the record at its current position; the sort order may be
//!   stale until the next `load()`. The store does not re-sort on rename
//!   either, so this is an accepted staleness window.

use crate::model::person::{Person, PersonId};
use crate::repo::person_repo::{PersonRepository, StoreError};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Coordinator error carrying which user action failed.
///
/// The rendered message distinguishes fetch/add/rename/remove so the UI can
/// show it as-is without inspecting the underlying store failure.
#[derive(Debug)]
pub enum CoordinatorError {
    Fetch(StoreError),
    Add(StoreError),
    Rename(StoreError),
    Remove(StoreError),
}

impl CoordinatorError {
    fn action(&self) -> &'static str {
        match self {
            Self::Fetch(_) => "fetch",
            Self::Add(_) => "add",
            Self::Rename(_) => "rename",
            Self::Remove(_) => "remove",
        }
    }

    fn store_error(&self) -> &StoreError {
        match self {
            Self::Fetch(err) | Self::Add(err) | Self::Rename(err) | Self::Remove(err) => err,
        }
    }
}

impl Display for CoordinatorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to {}: {}", self.action(), self.store_error())
    }
}

impl Error for CoordinatorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.store_error())
    }
}

/// In-memory mediator between the UI layer and a [`PersonRepository`].
///
/// All operations take `&mut self`, so view mutation is never concurrent
/// with itself and at most one mutating operation runs at a time.
pub struct ListCoordinator<R: PersonRepository> {
    repo: R,
    all_persons: Vec<Person>,
    filtered_persons: Vec<Person>,
    search_text: String,
    search_active: bool,
}

impl<R: PersonRepository> ListCoordinator<R> {
    /// Creates a coordinator with empty views and inactive search.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            all_persons: Vec::new(),
            filtered_persons: Vec::new(),
            search_text: String::new(),
            search_active: false,
        }
    }

    /// Replaces the cached list with the store's sorted contents.
    ///
    /// On failure the previous cache is kept as last-known-good state.
    pub fn load(&mut self) -> Result<(), CoordinatorError> {
        match self.repo.fetch_all() {
            Ok(persons) => {
                info!(
                    "event=list_load module=coordinator status=ok count={}",
                    persons.len()
                );
                self.all_persons = persons;
                self.recompute_filtered();
                Ok(())
            }
            Err(err) => {
                error!("event=list_load module=coordinator status=error error={err}");
                Err(CoordinatorError::Fetch(err))
            }
        }
    }

    /// Creates a person and inserts it into the cache at its sorted position.
    pub fn add(&mut self, name: &str) -> Result<Person, CoordinatorError> {
        let person = match self.repo.create(name) {
            Ok(person) => person,
            Err(err) => {
                error!("event=person_add module=coordinator status=error error={err}");
                return Err(CoordinatorError::Add(err));
            }
        };

        let position = self
            .all_persons
            .binary_search_by(|cached| cached.list_order(&person))
            .unwrap_or_else(|insert_at| insert_at);
        self.all_persons.insert(position, person.clone());
        self.recompute_filtered();

        Ok(person)
    }

    /// Persists a new name for the person with the given identity, then
    /// updates the cached copy.
    ///
    /// The cached copy keeps its current list position until the next
    /// `load()`; see the module invariants.
    pub fn rename(&mut self, id: PersonId, new_name: &str) -> Result<(), CoordinatorError> {
        if let Err(err) = self.repo.update_name(id, new_name) {
            error!("event=person_rename module=coordinator status=error error={err}");
            return Err(CoordinatorError::Rename(err));
        }

        if let Some(cached) = self.all_persons.iter_mut().find(|person| person.id == id) {
            cached.name = Some(new_name.to_string());
        }
        self.recompute_filtered();

        Ok(())
    }

    /// Deletes the person with the given identity and drops it from both
    /// views. Matching is by identity, so a duplicate-named record is never
    /// affected.
    pub fn remove(&mut self, id: PersonId) -> Result<(), CoordinatorError> {
        if let Err(err) = self.repo.delete(id) {
            error!("event=person_remove module=coordinator status=error error={err}");
            return Err(CoordinatorError::Remove(err));
        }

        self.all_persons.retain(|person| person.id != id);
        self.filtered_persons.retain(|person| person.id != id);

        Ok(())
    }

    /// Updates the search text and recomputes the filtered view. No I/O.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.recompute_filtered();
    }

    /// Toggles search mode and recomputes the filtered view. No I/O.
    pub fn set_search_active(&mut self, active: bool) {
        self.search_active = active;
        self.recompute_filtered();
    }

    /// Returns the rows the UI should render right now.
    pub fn active_view(&self) -> &[Person] {
        if self.is_filtering() {
            &self.filtered_persons
        } else {
            &self.all_persons
        }
    }

    /// Full cached list, regardless of search state.
    pub fn all_persons(&self) -> &[Person] {
        &self.all_persons
    }

    /// Whether the filtered view is the active one.
    pub fn is_filtering(&self) -> bool {
        self.search_active && !self.search_text.is_empty()
    }

    fn recompute_filtered(&mut self) {
        self.filtered_persons = self
            .all_persons
            .iter()
            .filter(|person| person.name_matches(&self.search_text))
            .cloned()
            .collect();
    }
}
