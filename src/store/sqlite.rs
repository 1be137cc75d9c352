use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use rusqlite::{Connection, OptionalExtension, Row, params, params_from_iter};

use super::Store;
use super::query::{Predicate, join_predicate};
use super::schema::SCHEMA;
use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::types::*;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        Self::open_with_timeout(db_path, StoreConfig::default().busy_timeout())
    }

    /// Opens the database under the configured data directory, creating the
    /// directory if needed.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        std::fs::create_dir_all(&config.data_dir)?;
        Self::open_with_timeout(config.db_path(), config.busy_timeout())
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        configure(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn open_with_timeout<P: AsRef<Path>>(db_path: P, busy_timeout: Duration) -> Result<Self> {
        let conn = Connection::open(db_path)?;

        conn.busy_timeout(busy_timeout)?;
        configure(&conn)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Returns a guard to the underlying database connection.
    /// This allows consuming applications to execute custom SQL.
    pub fn connection(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn()
    }
}

/// Per-connection settings. Label names compare case-sensitively, so `LIKE`
/// does too; id sets are bound through `rarray`.
fn configure(conn: &Connection) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", "ON")?;
    conn.pragma_update(None, "case_sensitive_like", "ON")?;
    rusqlite::vtab::array::load_module(conn)?;
    Ok(())
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

fn label_from_row(row: &Row<'_>) -> rusqlite::Result<Label> {
    Ok(Label {
        id: row.get(0)?,
        project_id: row.get(1)?,
        repository_id: row.get(2)?,
        name: row.get(3)?,
        color: row.get(4)?,
        hash: row.get(5)?,
    })
}

fn label_item_from_row(row: &Row<'_>) -> rusqlite::Result<LabelItem> {
    Ok(LabelItem {
        id: row.get(0)?,
        label_id: row.get(1)?,
        project_id: row.get(2)?,
        repository_id: row.get(3)?,
        pull_request_id: row.get(4)?,
    })
}

impl Store for SqliteStore {
    fn initialize(&self) -> Result<()> {
        self.conn().execute_batch(SCHEMA)?;
        tracing::info!("label schema initialized");
        Ok(())
    }

    // Label operations

    fn insert_label(&self, label: &NewLabel) -> Result<Label> {
        let conn = self.conn();
        let result = conn.execute(
            "INSERT INTO labels (project_id, repository_id, name, color, hash)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                label.project_id,
                label.repository_id,
                label.name,
                label.color,
                label.hash,
            ],
        );

        match result {
            Ok(_) => Ok(Label {
                id: conn.last_insert_rowid(),
                project_id: label.project_id,
                repository_id: label.repository_id,
                name: label.name.clone(),
                color: label.color.clone(),
                hash: label.hash.clone(),
            }),
            Err(e) if is_unique_violation(&e) => Err(Error::DuplicateLabel),
            Err(e) => Err(Error::from(e)),
        }
    }

    fn get_label(&self, project_id: i32, repository_id: i32, id: i64) -> Result<Option<Label>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT id, project_id, repository_id, name, color, hash
             FROM labels WHERE project_id = ?1 AND repository_id = ?2 AND id = ?3",
            params![project_id, repository_id, id],
            label_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn get_label_by_name(
        &self,
        project_id: i32,
        repository_id: i32,
        name: &str,
    ) -> Result<Option<Label>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT id, project_id, repository_id, name, color, hash
             FROM labels WHERE project_id = ?1 AND repository_id = ?2 AND name = ?3",
            params![project_id, repository_id, name],
            label_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn list_labels_by_ids(&self, ids: &[i64]) -> Result<Vec<Label>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let predicate = Predicate::default().in_set("id", ids);
        let conn = self.conn();
        let mut stmt = conn.prepare(&format!(
            "SELECT id, project_id, repository_id, name, color, hash
             FROM labels WHERE {}",
            predicate.sql()
        ))?;

        let rows = stmt.query_map(params_from_iter(predicate.params()), label_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn save_label(&self, label: &Label) -> Result<()> {
        let result = self.conn().execute(
            "UPDATE labels SET name = ?1, color = ?2, hash = ?3 WHERE id = ?4",
            params![label.name, label.color, label.hash, label.id],
        );

        match result {
            Ok(0) => Err(Error::NotFound),
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(Error::DuplicateLabel),
            Err(e) => Err(Error::from(e)),
        }
    }

    // Label item operations

    fn insert_label_item(&self, item: &NewLabelItem) -> Result<LabelItem> {
        let conn = self.conn();
        conn.execute(
            "INSERT INTO label_items (label_id, project_id, repository_id, pull_request_id)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                item.label_id,
                item.project_id,
                item.repository_id,
                item.pull_request_id,
            ],
        )?;

        Ok(LabelItem {
            id: conn.last_insert_rowid(),
            label_id: item.label_id,
            project_id: item.project_id,
            repository_id: item.repository_id,
            pull_request_id: item.pull_request_id,
        })
    }

    fn find_label_items(&self, filter: &LabelFilter) -> Result<Vec<LabelItem>> {
        if filter.matches_nothing() {
            return Ok(Vec::new());
        }

        let predicate = join_predicate(filter);
        let conn = self.conn();
        let mut stmt = conn.prepare(&format!(
            "SELECT item.id, item.label_id, item.project_id, item.repository_id, item.pull_request_id
             FROM label_items AS item
             JOIN labels AS label ON label.id = item.label_id
             WHERE {}",
            predicate.sql()
        ))?;

        let rows = stmt.query_map(params_from_iter(predicate.params()), label_item_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn delete_label_items(&self, ids: &[i64]) -> Result<usize> {
        if ids.is_empty() {
            return Ok(0);
        }

        let predicate = Predicate::default().in_set("id", ids);
        let rows = self.conn().execute(
            &format!("DELETE FROM label_items WHERE {}", predicate.sql()),
            params_from_iter(predicate.params()),
        )?;
        Ok(rows)
    }

    fn flush(&self) -> Result<()> {
        // Returns a (busy, log, checkpointed) row even for in-memory databases.
        self.conn()
            .query_row("PRAGMA wal_checkpoint(PASSIVE)", [], |_| Ok(()))?;
        Ok(())
    }
}
