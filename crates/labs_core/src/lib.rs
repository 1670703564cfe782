//! Core logic for the lab apps: a validated calculator and the
//! notes/tasks CRUD resources.

pub mod db;
pub mod guard;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use guard::arithmetic::{difference, sum, ArithmeticError, ArithmeticResult};
pub use guard::fields::{FieldError, Validate};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::entity::{Entity, EntityId, EntityKind};
pub use model::note::{Note, NoteDraft, NotePatch};
pub use model::task::{Task, TaskDraft, TaskPatch};
pub use repo::memory::MemoryStore;
pub use repo::note_repo::SqliteNoteStore;
pub use repo::task_repo::SqliteTaskStore;
pub use repo::{EntityStore, RepoError, RepoResult};
pub use service::calculator_service::CalculatorService;
pub use service::entity_service::{
    EntityService, NoteService, ServiceError, ServiceResult, TaskService,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
