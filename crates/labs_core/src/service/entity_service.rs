//! Entity use-case service shared by notes and tasks.
//!
//! # Responsibility
//! - Run field guards before every write.
//! - Delegate persistence to the owned store.
//!
//! # Invariants
//! - Store failures (including `NotFound`) are surfaced unchanged.
//! - The service keeps no entity state between calls.

use crate::guard::fields::{FieldError, Validate};
use crate::model::entity::{Entity, EntityId};
use crate::model::note::Note;
use crate::model::task::Task;
use crate::repo::{EntityStore, RepoError};
use log::{debug, warn};
use std::marker::PhantomData;
use thiserror::Error;

/// Service error for entity use-cases.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input rejected before reaching the store.
    #[error(transparent)]
    Validation(#[from] FieldError),
    /// Store failure, including not-found.
    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Repo(err) if err.is_not_found())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// CRUD facade over one store implementation.
pub struct EntityService<E, S> {
    store: S,
    _kind: PhantomData<fn() -> E>,
}

pub type NoteService<S> = EntityService<Note, S>;
pub type TaskService<S> = EntityService<Task, S>;

impl<E: Entity, S: EntityStore<E>> EntityService<E, S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self {
            store,
            _kind: PhantomData,
        }
    }

    /// Validates and persists a new entity.
    pub fn create(&self, draft: &E::Draft) -> ServiceResult<E> {
        validate_input::<E, _>("create", draft)?;
        let created = self.store.create(draft)?;
        debug!(
            "event=entity_create module=service status=ok kind={} id={}",
            E::KIND.as_str(),
            created.id()
        );
        Ok(created)
    }

    pub fn find_all(&self) -> ServiceResult<Vec<E>> {
        Ok(self.store.find_all()?)
    }

    pub fn find_one(&self, id: EntityId) -> ServiceResult<E> {
        Ok(self.store.find_by_id(id)?)
    }

    /// Title substring search. No match is a `TitleNotFound` failure.
    pub fn find_by_title(&self, title: &str) -> ServiceResult<Vec<E>> {
        Ok(self.store.find_by_title(title)?)
    }

    /// Validates and merges a partial update.
    pub fn update(&self, id: EntityId, patch: &E::Patch) -> ServiceResult<E> {
        validate_input::<E, _>("update", patch)?;
        let updated = self.store.update(id, patch)?;
        debug!(
            "event=entity_update module=service status=ok kind={} id={id}",
            E::KIND.as_str()
        );
        Ok(updated)
    }

    pub fn remove(&self, id: EntityId) -> ServiceResult<()> {
        self.store.remove(id)?;
        debug!(
            "event=entity_remove module=service status=ok kind={} id={id}",
            E::KIND.as_str()
        );
        Ok(())
    }

    /// Borrows the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

fn validate_input<E: Entity, V: Validate>(op: &str, input: &V) -> Result<(), FieldError> {
    input.validate().inspect_err(|err| {
        warn!(
            "event=entity_{op} module=service status=rejected kind={} field={}",
            E::KIND.as_str(),
            err.field()
        );
    })
}

#[cfg(test)]
mod tests {
    use super::{NoteService, ServiceError, TaskService};
    use crate::guard::fields::FieldError;
    use crate::model::note::{Note, NoteDraft, NotePatch};
    use crate::model::task::{Task, TaskDraft};
    use crate::repo::memory::MemoryStore;

    #[test]
    fn blank_draft_never_reaches_store() {
        let service = NoteService::new(MemoryStore::<Note>::new());
        let err = service.create(&NoteDraft::new("", "body")).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(FieldError::Required("title"))));
        assert!(service.store().is_empty());
    }

    #[test]
    fn blank_patch_is_rejected_before_lookup() {
        let service = NoteService::new(MemoryStore::<Note>::new());
        let patch = NotePatch {
            content: Some(" ".to_string()),
            ..NotePatch::default()
        };
        let err = service.update(99, &patch).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(FieldError::Empty("content"))));
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_is_surfaced_with_resource_message() {
        let service = TaskService::new(MemoryStore::<Task>::new());
        service.create(&TaskDraft::new("Tarea", "c")).unwrap();
        let err = service.find_one(42).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Tarea con ID 42 no encontrada");
    }
}
