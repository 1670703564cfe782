//! Shared entity contract.

use crate::guard::fields::Validate;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

/// Store-assigned identifier. Never reused within one store.
pub type EntityId = i64;

/// Resource kind, used for not-found messages and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Note,
    Task,
}

impl EntityKind {
    /// Human-facing resource name (`Nota` / `Tarea`).
    pub fn label(self) -> &'static str {
        match self {
            Self::Note => "Nota",
            Self::Task => "Tarea",
        }
    }

    /// Stable lowercase name used in log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Task => "task",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything a store needs to create, merge and search one entity kind.
///
/// Implemented by [`Note`](super::note::Note) and [`Task`](super::task::Task).
pub trait Entity: Clone {
    /// Creation input.
    type Draft: Validate;
    /// Partial update input; every field optional.
    type Patch: Validate;

    const KIND: EntityKind;

    fn id(&self) -> EntityId;

    fn title(&self) -> &str;

    /// Builds a fresh entity, applying kind-specific defaults.
    ///
    /// `created_at` is epoch milliseconds; kinds without a timestamp ignore it.
    fn from_draft(id: EntityId, draft: &Self::Draft, created_at: i64) -> Self;

    /// Overwrites only the fields present in `patch`.
    fn apply_patch(&mut self, patch: &Self::Patch);
}

/// Current wall-clock time in Unix epoch milliseconds.
///
/// Clocks set before 1970 collapse to `0`.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
