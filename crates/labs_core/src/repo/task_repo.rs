//! SQLite-backed task store over the `tareas` table.
//!
//! # Invariants
//! - `completed` is stored as `0/1`; any other value is reported as invalid data.
//! - `created_at` is written once on insert and never updated.

use super::schema::ensure_table_ready;
use super::{EntityStore, RepoError, RepoResult};
use crate::model::entity::{now_epoch_ms, Entity, EntityId};
use crate::model::task::{Task, TaskDraft, TaskPatch};
use rusqlite::{params, Connection, Row};

const TASK_SELECT_SQL: &str = "SELECT
    id,
    title,
    content,
    completed,
    created_at
FROM tareas";

/// Task store bound to a migrated connection.
pub struct SqliteTaskStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskStore<'conn> {
    /// Constructs a store, rejecting connections without the `tareas` schema.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(
            conn,
            "tareas",
            &["id", "title", "content", "completed", "created_at"],
        )?;
        Ok(Self { conn })
    }

    fn query_tasks(&self, sql: &str, bind: &[&dyn rusqlite::ToSql]) -> RepoResult<Vec<Task>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(bind)?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }
        Ok(tasks)
    }
}

impl EntityStore<Task> for SqliteTaskStore<'_> {
    fn create(&self, draft: &TaskDraft) -> RepoResult<Task> {
        let created_at = now_epoch_ms();
        self.conn.execute(
            "INSERT INTO tareas (title, content, completed, created_at)
             VALUES (?1, ?2, 0, ?3);",
            params![draft.title.as_str(), draft.content.as_str(), created_at],
        )?;
        Ok(Task::from_draft(
            self.conn.last_insert_rowid(),
            draft,
            created_at,
        ))
    }

    fn find_by_id(&self, id: EntityId) -> RepoResult<Task> {
        self.query_tasks(&format!("{TASK_SELECT_SQL} WHERE id = ?1;"), params![id])?
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::not_found::<Task>(id))
    }

    fn find_all(&self) -> RepoResult<Vec<Task>> {
        self.query_tasks(&format!("{TASK_SELECT_SQL} ORDER BY id ASC;"), params![])
    }

    fn find_by_title(&self, query: &str) -> RepoResult<Vec<Task>> {
        let tasks = self.query_tasks(
            &format!("{TASK_SELECT_SQL} WHERE instr(title, ?1) > 0 ORDER BY id ASC;"),
            params![query],
        )?;
        if tasks.is_empty() {
            return Err(RepoError::title_not_found::<Task>(query));
        }
        Ok(tasks)
    }

    fn update(&self, id: EntityId, patch: &TaskPatch) -> RepoResult<Task> {
        let changed = self.conn.execute(
            "UPDATE tareas
             SET
                title = COALESCE(?2, title),
                content = COALESCE(?3, content),
                completed = COALESCE(?4, completed)
             WHERE id = ?1;",
            params![
                id,
                patch.title.as_deref(),
                patch.content.as_deref(),
                patch.completed.map(bool_to_int),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::not_found::<Task>(id));
        }

        self.find_by_id(id)
    }

    fn remove(&self, id: EntityId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM tareas WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::not_found::<Task>(id));
        }

        Ok(())
    }
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let completed = match row.get::<_, i64>("completed")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid completed value `{other}` in tareas.completed"
            )));
        }
    };

    Ok(Task {
        id: row.get("id")?,
        title: row.get("title")?,
        content: row.get("content")?,
        completed,
        created_at: row.get("created_at")?,
    })
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
