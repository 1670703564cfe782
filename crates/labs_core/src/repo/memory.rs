//! In-memory reference store.
//!
//! # Invariants
//! - Ids start at 1 and only grow; removed ids are never handed out again.
//! - Rows are kept in insertion order, which is also ascending id order.

use super::{EntityStore, RepoError, RepoResult};
use crate::model::entity::{now_epoch_ms, Entity, EntityId};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Mutex-guarded vector store, usable from several threads.
#[derive(Debug)]
pub struct MemoryStore<E> {
    state: Mutex<MemoryState<E>>,
}

#[derive(Debug)]
struct MemoryState<E> {
    next_id: EntityId,
    rows: Vec<E>,
}

impl<E> MemoryStore<E> {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryState {
                next_id: 1,
                rows: Vec::new(),
            }),
        }
    }

    /// Number of live entities.
    pub fn len(&self) -> usize {
        self.state().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A panic while holding the lock cannot leave rows half-written, so a
    // poisoned guard is still consistent.
    fn state(&self) -> MutexGuard<'_, MemoryState<E>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E> Default for MemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> EntityStore<E> for MemoryStore<E> {
    fn create(&self, draft: &E::Draft) -> RepoResult<E> {
        let mut state = self.state();
        let id = state.next_id;
        state.next_id += 1;
        let entity = E::from_draft(id, draft, now_epoch_ms());
        state.rows.push(entity.clone());
        Ok(entity)
    }

    fn find_by_id(&self, id: EntityId) -> RepoResult<E> {
        self.state()
            .rows
            .iter()
            .find(|entity| entity.id() == id)
            .cloned()
            .ok_or_else(|| RepoError::not_found::<E>(id))
    }

    fn find_all(&self) -> RepoResult<Vec<E>> {
        Ok(self.state().rows.clone())
    }

    fn find_by_title(&self, query: &str) -> RepoResult<Vec<E>> {
        let matches: Vec<E> = self
            .state()
            .rows
            .iter()
            .filter(|entity| entity.title().contains(query))
            .cloned()
            .collect();
        if matches.is_empty() {
            return Err(RepoError::title_not_found::<E>(query));
        }
        Ok(matches)
    }

    fn update(&self, id: EntityId, patch: &E::Patch) -> RepoResult<E> {
        let mut state = self.state();
        let entity = state
            .rows
            .iter_mut()
            .find(|entity| entity.id() == id)
            .ok_or_else(|| RepoError::not_found::<E>(id))?;
        entity.apply_patch(patch);
        Ok(entity.clone())
    }

    fn remove(&self, id: EntityId) -> RepoResult<()> {
        let mut state = self.state();
        let position = state
            .rows
            .iter()
            .position(|entity| entity.id() == id)
            .ok_or_else(|| RepoError::not_found::<E>(id))?;
        state.rows.remove(position);
        Ok(())
    }
}
