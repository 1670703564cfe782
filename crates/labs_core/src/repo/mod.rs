//! Entity store contracts and implementations.
//!
//! # Responsibility
//! - Define the per-kind store contract ([`EntityStore`]).
//! - Provide an in-memory reference store and SQLite-backed stores.
//! - Translate missing rows and empty title searches into `NotFound`.
//!
//! # Invariants
//! - `find_all` and `find_by_title` return rows in creation order.
//! - `find_by_title` never returns an empty sequence; it fails instead.
//! - Stores do not validate fields; callers run guards before writing.

use crate::db::DbError;
use crate::model::entity::{Entity, EntityId, EntityKind};
use thiserror::Error;

pub mod memory;
pub mod note_repo;
mod schema;
pub mod task_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Store-level error for entity persistence and queries.
#[derive(Debug, Error)]
pub enum RepoError {
    /// No entity with this id.
    #[error("{kind} con ID {id} no encontrada")]
    NotFound { kind: EntityKind, id: EntityId },
    /// Title search matched nothing.
    #[error("{kind} con el título {title} no encontrada")]
    TitleNotFound { kind: EntityKind, title: String },
    #[error(transparent)]
    Db(#[from] DbError),
    #[error("invalid persisted row data: {0}")]
    InvalidData(String),
    #[error("required table `{0}` is missing")]
    MissingRequiredTable(&'static str),
    #[error("required column `{table}.{column}` is missing")]
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl RepoError {
    /// True for both id and title not-found failures.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::TitleNotFound { .. })
    }

    pub(crate) fn not_found<E: Entity>(id: EntityId) -> Self {
        Self::NotFound { kind: E::KIND, id }
    }

    pub(crate) fn title_not_found<E: Entity>(title: &str) -> Self {
        Self::TitleNotFound {
            kind: E::KIND,
            title: title.to_string(),
        }
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence contract for one entity kind.
pub trait EntityStore<E: Entity> {
    /// Persists a new entity with a fresh id and kind defaults.
    fn create(&self, draft: &E::Draft) -> RepoResult<E>;
    /// Fails with `NotFound` when `id` is absent.
    fn find_by_id(&self, id: EntityId) -> RepoResult<E>;
    /// Every entity, oldest first. Empty stores yield an empty vector.
    fn find_all(&self) -> RepoResult<Vec<E>>;
    /// Case-sensitive substring match on `title`; fails with `TitleNotFound`
    /// when nothing matches.
    fn find_by_title(&self, query: &str) -> RepoResult<Vec<E>>;
    /// Merges `patch` into the stored entity and returns the result.
    fn update(&self, id: EntityId, patch: &E::Patch) -> RepoResult<E>;
    /// Permanently deletes the entity.
    fn remove(&self, id: EntityId) -> RepoResult<()>;
}

impl<E: Entity, S: EntityStore<E> + ?Sized> EntityStore<E> for &S {
    fn create(&self, draft: &E::Draft) -> RepoResult<E> {
        (**self).create(draft)
    }

    fn find_by_id(&self, id: EntityId) -> RepoResult<E> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> RepoResult<Vec<E>> {
        (**self).find_all()
    }

    fn find_by_title(&self, query: &str) -> RepoResult<Vec<E>> {
        (**self).find_by_title(query)
    }

    fn update(&self, id: EntityId, patch: &E::Patch) -> RepoResult<E> {
        (**self).update(id, patch)
    }

    fn remove(&self, id: EntityId) -> RepoResult<()> {
        (**self).remove(id)
    }
}
