//! Field guards for entity drafts and patches.
//!
//! # Responsibility
//! - Reject blank text fields before anything reaches a store.
//!
//! # Invariants
//! - A value consisting only of whitespace counts as blank.
//! - Omitted patch fields are always valid (merge keeps the stored value).

use thiserror::Error;

/// Field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Required field missing or blank on creation.
    #[error("The {0} is required")]
    Required(&'static str),
    /// Supplied update field is blank.
    #[error("{} es requerido", update_label(.0))]
    Empty(&'static str),
}

impl FieldError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Required(field) | Self::Empty(field) => field,
        }
    }
}

/// Input shapes that can be checked before a store write.
pub trait Validate {
    fn validate(&self) -> Result<(), FieldError>;
}

/// Fails with `Required` when `value` is blank.
pub fn require_text(field: &'static str, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Required(field));
    }
    Ok(())
}

/// Fails with `Empty` when `value` is supplied but blank.
pub fn reject_blank(field: &'static str, value: Option<&str>) -> Result<(), FieldError> {
    match value {
        Some(text) if text.trim().is_empty() => Err(FieldError::Empty(field)),
        _ => Ok(()),
    }
}

fn update_label(field: &str) -> String {
    match field {
        "title" => "El título".to_string(),
        "content" => "El contenido".to_string(),
        other => format!("El campo {other}"),
    }
}
