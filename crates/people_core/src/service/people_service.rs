//! People use-case service.
//!
//! # Responsibility
//! - Create a person and hand back the row as storage recorded it.
//! - Look people up by identifier.
//!
//! # Invariants
//! - `create` only returns rows re-read through `find_by_id`.
//! - Repository errors pass through untranslated.

use crate::model::person::{EmotionalState, Person, PersonId};
use crate::repo::person_repo::{PersonRepository, RepoError, RepoResult};
use log::{info, warn};
use std::time::Instant;

/// Service wrapper over a `PersonRepository`.
pub struct PeopleService<R: PersonRepository> {
    repo: R,
}

impl<R: PersonRepository> PeopleService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Inserts a person and re-reads it by the generated key.
    ///
    /// # Errors
    /// - `RepoError::MissingGeneratedKey` when the insert yields no key.
    /// - Any lookup error from [`Self::find_by_id`].
    pub fn create(&self, name: &str, state: EmotionalState) -> RepoResult<Person> {
        let started_at = Instant::now();
        let Some(id) = self.repo.insert_person(name, state)? else {
            let err = RepoError::MissingGeneratedKey {
                name: name.to_string(),
            };
            warn!(
                "event=person_create module=service status=error error_code={} duration_ms={}",
                err.error_code(),
                started_at.elapsed().as_millis()
            );
            return Err(err);
        };

        let person = self.find_by_id(id)?;
        info!(
            "event=person_create module=service status=ok id={} emotional_state={} duration_ms={}",
            person.id,
            person.emotional_state,
            started_at.elapsed().as_millis()
        );
        Ok(person)
    }

    /// Loads exactly one person by identifier.
    pub fn find_by_id(&self, id: PersonId) -> RepoResult<Person> {
        self.repo.find_person(id)
    }
}
