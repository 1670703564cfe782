//! SQLite-backed note store over the `notas` table.
//!
//! # Invariants
//! - Title search uses `instr()`, which is case-sensitive.
//! - Results are ordered by `id ASC` (creation order).

use super::schema::ensure_table_ready;
use super::{EntityStore, RepoError, RepoResult};
use crate::model::entity::{Entity, EntityId};
use crate::model::note::{Note, NoteDraft, NotePatch};
use rusqlite::{params, Connection, Row};

const NOTE_SELECT_SQL: &str = "SELECT id, title, content FROM notas";

/// Note store bound to a migrated connection.
pub struct SqliteNoteStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteStore<'conn> {
    /// Constructs a store, rejecting connections without the `notas` schema.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, "notas", &["id", "title", "content"])?;
        Ok(Self { conn })
    }

    fn query_notes(&self, sql: &str, bind: &[&dyn rusqlite::ToSql]) -> RepoResult<Vec<Note>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(bind)?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(row)?);
        }
        Ok(notes)
    }
}

impl EntityStore<Note> for SqliteNoteStore<'_> {
    fn create(&self, draft: &NoteDraft) -> RepoResult<Note> {
        self.conn.execute(
            "INSERT INTO notas (title, content) VALUES (?1, ?2);",
            params![draft.title.as_str(), draft.content.as_str()],
        )?;
        Ok(Note::from_draft(self.conn.last_insert_rowid(), draft, 0))
    }

    fn find_by_id(&self, id: EntityId) -> RepoResult<Note> {
        self.query_notes(&format!("{NOTE_SELECT_SQL} WHERE id = ?1;"), params![id])?
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::not_found::<Note>(id))
    }

    fn find_all(&self) -> RepoResult<Vec<Note>> {
        self.query_notes(&format!("{NOTE_SELECT_SQL} ORDER BY id ASC;"), params![])
    }

    fn find_by_title(&self, query: &str) -> RepoResult<Vec<Note>> {
        let notes = self.query_notes(
            &format!("{NOTE_SELECT_SQL} WHERE instr(title, ?1) > 0 ORDER BY id ASC;"),
            params![query],
        )?;
        if notes.is_empty() {
            return Err(RepoError::title_not_found::<Note>(query));
        }
        Ok(notes)
    }

    fn update(&self, id: EntityId, patch: &NotePatch) -> RepoResult<Note> {
        let changed = self.conn.execute(
            "UPDATE notas
             SET
                title = COALESCE(?2, title),
                content = COALESCE(?3, content)
             WHERE id = ?1;",
            params![id, patch.title.as_deref(), patch.content.as_deref()],
        )?;

        if changed == 0 {
            return Err(RepoError::not_found::<Note>(id));
        }

        self.find_by_id(id)
    }

    fn remove(&self, id: EntityId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM notas WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::not_found::<Note>(id));
        }

        Ok(())
    }
}

fn parse_note_row(row: &Row<'_>) -> RepoResult<Note> {
    Ok(Note {
        id: row.get("id")?,
        title: row.get("title")?,
        content: row.get("content")?,
    })
}
