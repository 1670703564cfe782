//! Task ("tarea") model.
//!
//! # Invariants
//! - `completed` starts as `false`.
//! - `created_at` is set once at creation and never patched.

use super::entity::{Entity, EntityId, EntityKind};
use crate::guard::fields::{reject_blank, require_text, FieldError, Validate};
use serde::{Deserialize, Serialize};

/// Persisted task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: EntityId,
    pub title: String,
    pub content: String,
    pub completed: bool,
    /// Unix epoch milliseconds. Serialized as `createdAt`.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

/// Input for creating a task. Carries no status or timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub content: String,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Partial task update. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl Validate for TaskDraft {
    fn validate(&self) -> Result<(), FieldError> {
        require_text("title", &self.title)?;
        require_text("content", &self.content)
    }
}

impl Validate for TaskPatch {
    fn validate(&self) -> Result<(), FieldError> {
        reject_blank("title", self.title.as_deref())?;
        reject_blank("content", self.content.as_deref())
    }
}

impl Entity for Task {
    type Draft = TaskDraft;
    type Patch = TaskPatch;

    const KIND: EntityKind = EntityKind::Task;

    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn from_draft(id: EntityId, draft: &TaskDraft, created_at: i64) -> Self {
        Self {
            id,
            title: draft.title.clone(),
            content: draft.content.clone(),
            completed: false,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: &TaskPatch) {
        if let Some(title) = patch.title.as_ref() {
            self.title.clone_from(title);
        }
        if let Some(content) = patch.content.as_ref() {
            self.content.clone_from(content);
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}
