//! Command execution for the `labs` binary.

use crate::{Cli, Command, EntityAction};
use labs_core::db::{open_db, DbError};
use labs_core::{
    default_log_level, init_logging, ArithmeticError, CalculatorService, Entity, EntityService,
    EntityStore, LoggingError, Note, NoteDraft, NotePatch, NoteService, RepoError, ServiceError,
    SqliteNoteStore, SqliteTaskStore, Task, TaskDraft, TaskPatch, TaskService,
};
use log::info;
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Db(#[from] DbError),
    #[error(transparent)]
    Repo(#[from] RepoError),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
    #[error("--{0} is not supported for this resource")]
    UnsupportedFlag(&'static str),
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

impl CliError {
    pub(crate) fn exit_code(&self) -> u8 {
        let not_found = match self {
            Self::Repo(err) => err.is_not_found(),
            Self::Service(err) => err.is_not_found(),
            _ => false,
        };
        if not_found {
            2
        } else {
            1
        }
    }
}

/// Maps CLI text input onto an entity kind's draft and patch shapes.
trait CliEntity: Entity + Serialize {
    fn draft(title: String, content: String) -> Self::Draft;
    fn patch(
        title: Option<String>,
        content: Option<String>,
        completed: Option<bool>,
    ) -> Result<Self::Patch, CliError>;
}

impl CliEntity for Note {
    fn draft(title: String, content: String) -> NoteDraft {
        NoteDraft { title, content }
    }

    fn patch(
        title: Option<String>,
        content: Option<String>,
        completed: Option<bool>,
    ) -> Result<NotePatch, CliError> {
        if completed.is_some() {
            return Err(CliError::UnsupportedFlag("completed"));
        }
        Ok(NotePatch { title, content })
    }
}

impl CliEntity for Task {
    fn draft(title: String, content: String) -> TaskDraft {
        TaskDraft { title, content }
    }

    fn patch(
        title: Option<String>,
        content: Option<String>,
        completed: Option<bool>,
    ) -> Result<TaskPatch, CliError> {
        Ok(TaskPatch {
            title,
            content,
            completed,
        })
    }
}

pub(crate) fn run(cli: Cli) -> Result<String, CliError> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
    }

    let output = match cli.command {
        Command::Sum { a, b } => json!({ "result": CalculatorService::new().sum(a, b)? }),
        Command::Difference {
            minuend,
            subtrahend,
        } => json!({ "result": CalculatorService::new().difference(minuend, subtrahend)? }),
        Command::Notas { action } => {
            let conn = open_db(&cli.db)?;
            let service = NoteService::new(SqliteNoteStore::try_new(&conn)?);
            run_entity(&service, action)?
        }
        Command::Tareas { action } => {
            let conn = open_db(&cli.db)?;
            let service = TaskService::new(SqliteTaskStore::try_new(&conn)?);
            run_entity(&service, action)?
        }
    };

    Ok(serde_json::to_string_pretty(&output)?)
}

fn run_entity<E, S>(service: &EntityService<E, S>, action: EntityAction) -> Result<Value, CliError>
where
    E: CliEntity,
    S: EntityStore<E>,
{
    let value = match action {
        EntityAction::Create { title, content } => {
            serde_json::to_value(service.create(&E::draft(title, content))?)?
        }
        EntityAction::List => serde_json::to_value(service.find_all()?)?,
        EntityAction::Get { id } => serde_json::to_value(service.find_one(id)?)?,
        EntityAction::Update {
            id,
            title,
            content,
            completed,
        } => {
            let patch = E::patch(title, content, completed)?;
            serde_json::to_value(service.update(id, &patch)?)?
        }
        EntityAction::Delete { id } => {
            service.remove(id)?;
            info!(
                "event=cli_delete module=cli status=ok kind={} id={id}",
                E::KIND.as_str()
            );
            json!({ "deleted": id })
        }
        EntityAction::Search { title } => serde_json::to_value(service.find_by_title(&title)?)?,
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::{run, CliError};
    use crate::Cli;
    use clap::Parser;
    use serde_json::Value;

    fn run_args(db: &std::path::Path, args: &[&str]) -> Result<Value, CliError> {
        let db = db.to_str().unwrap();
        let prefix = ["labs", "--db", db];
        let cli = Cli::try_parse_from(prefix.iter().chain(args)).unwrap();
        run(cli).map(|out| serde_json::from_str(&out).unwrap())
    }

    #[test]
    fn arithmetic_commands_accept_negative_operands_and_report_failures() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("labs.sqlite3");

        assert_eq!(run_args(&db, &["sum", "1", "2"]).unwrap()["result"], 3);
        let err = run_args(&db, &["sum", "-1", "2"]).unwrap_err();
        assert!(matches!(err, CliError::Arithmetic(_)));
        assert_eq!(err.exit_code(), 1);
        let err = run_args(&db, &["difference", "3", "5"]).unwrap_err();
        assert_eq!(err.to_string(), "El minuendo debe ser mayor o igual al sustraendo");
    }

    #[test]
    fn task_commands_roundtrip_through_sqlite_file() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("labs.sqlite3");

        let created = run_args(
            &db,
            &["tareas", "create", "--title", "Tarea 1", "--content", "c"],
        )
        .unwrap();
        assert_eq!(created["completed"], false);
        let id = created["id"].as_i64().unwrap().to_string();

        let updated = run_args(&db, &["tareas", "update", id.as_str(), "--completed", "true"]).unwrap();
        assert_eq!(updated["completed"], true);
        assert_eq!(updated["title"], "Tarea 1");

        run_args(&db, &["tareas", "delete", id.as_str()]).unwrap();
        let err = run_args(&db, &["tareas", "get", id.as_str()]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), format!("Tarea con ID {id} no encontrada"));
    }

    #[test]
    fn notas_reject_completed_flag() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("labs.sqlite3");

        run_args(&db, &["notas", "create", "--title", "n", "--content", "c"]).unwrap();
        let err = run_args(&db, &["notas", "update", "1", "--completed", "true"]).unwrap_err();
        assert!(matches!(err, CliError::UnsupportedFlag("completed")));

        let err = run_args(&db, &["notas", "search", "zzz"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
