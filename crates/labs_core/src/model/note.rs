//! Note ("nota") model.

use super::entity::{Entity, EntityId, EntityKind};
use crate::guard::fields::{reject_blank, require_text, FieldError, Validate};
use serde::{Deserialize, Serialize};

/// Persisted note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: EntityId,
    pub title: String,
    pub content: String,
}

/// Input for creating a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Partial note update. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Validate for NoteDraft {
    fn validate(&self) -> Result<(), FieldError> {
        require_text("title", &self.title)?;
        require_text("content", &self.content)
    }
}

impl Validate for NotePatch {
    fn validate(&self) -> Result<(), FieldError> {
        reject_blank("title", self.title.as_deref())?;
        reject_blank("content", self.content.as_deref())
    }
}

impl Entity for Note {
    type Draft = NoteDraft;
    type Patch = NotePatch;

    const KIND: EntityKind = EntityKind::Note;

    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn from_draft(id: EntityId, draft: &NoteDraft, _created_at: i64) -> Self {
        Self {
            id,
            title: draft.title.clone(),
            content: draft.content.clone(),
        }
    }

    fn apply_patch(&mut self, patch: &NotePatch) {
        if let Some(title) = patch.title.as_ref() {
            self.title.clone_from(title);
        }
        if let Some(content) = patch.content.as_ref() {
            self.content.clone_from(content);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Note, NotePatch};
    use crate::model::entity::Entity;

    #[test]
    fn apply_patch_keeps_omitted_fields() {
        let mut note = Note {
            id: 1,
            title: "Nota 1".to_string(),
            content: "Contenido 1".to_string(),
        };
        note.apply_patch(&NotePatch {
            title: Some("X".to_string()),
            content: None,
        });
        assert_eq!(note.title, "X");
        assert_eq!(note.content, "Contenido 1");
    }
}
