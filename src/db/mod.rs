mod schema;

use rusqlite::{params, Connection, OpenFlags};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ExpenseError, Result};
use crate::models::{utc_timestamp, Expense, NewExpense};

/// Handle on the expense store. The connection is closed when the value is
/// dropped, or explicitly through [`Database::close`].
pub(crate) struct Database {
    conn: Connection,
    path: PathBuf,
}

impl Database {
    /// Create the store and its schema if absent. Safe to repeat: existing
    /// rows are left untouched and only pending migrations run.
    pub(crate) fn init(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "initializing database");
        let conn = Connection::open(path)?;
        let mut db = Self {
            conn,
            path: path.to_path_buf(),
        };
        db.migrate()?;
        Ok(db)
    }

    /// Open an existing store, failing with `NotInitialized` when the file
    /// is missing or was never given a schema.
    pub(crate) fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ExpenseError::NotInitialized(path.to_path_buf()));
        }
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        let db = Self {
            conn,
            path: path.to_path_buf(),
        };
        if !db.has_schema()? {
            return Err(ExpenseError::NotInitialized(db.path));
        }
        debug!(path = %path.display(), "opened database");
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self {
            conn,
            path: PathBuf::from(":memory:"),
        };
        db.migrate()?;
        Ok(db)
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| e.into())
    }

    fn has_schema(&self) -> Result<bool> {
        Ok(self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='expenses')",
            [],
            |row| row.get(0),
        )?)
    }

    fn schema_version(&self) -> Result<i32> {
        Ok(self
            .conn
            .pragma_query_value(None, "user_version", |row| row.get(0))?)
    }

    fn migrate(&mut self) -> Result<()> {
        let current = self.schema_version()?;
        let tx = self.conn.transaction()?;

        // All IF NOT EXISTS: creates the table whatever the version says,
        // and leaves existing rows alone.
        tx.execute_batch(schema::SCHEMA_V1)?;
        let base = current.max(1);
        for &(from_version, sql) in schema::MIGRATIONS {
            if base <= from_version {
                debug!(from_version, "applying migration");
                tx.execute_batch(sql)?;
            }
        }

        if current < schema::CURRENT_VERSION {
            tx.pragma_update(None, "user_version", schema::CURRENT_VERSION)?;
        }
        tx.commit()?;
        debug!(
            from = current,
            to = schema::CURRENT_VERSION.max(current),
            "schema ready"
        );
        Ok(())
    }

    // ── Expenses ──────────────────────────────────────────────

    /// Append one expense inside its own transaction and return the new id.
    pub(crate) fn insert_expense(&mut self, expense: &NewExpense) -> Result<i64> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO expenses (amount_cents, currency, category, date, note, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                expense.amount_cents,
                expense.currency(),
                expense.category,
                expense.date,
                expense.note,
                utc_timestamp(),
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        debug!(id, "inserted expense");
        Ok(id)
    }

    /// Up to `limit` most recently inserted expenses, newest first.
    /// A limit of zero or below yields nothing.
    pub(crate) fn list_recent(&self, limit: i64) -> Result<Vec<Expense>> {
        if limit <= 0 {
            return Ok(Vec::new());
        }
        let mut stmt = self.conn.prepare(
            "SELECT id, amount_cents, currency, category, date, note, created_at
             FROM expenses
             ORDER BY id DESC
             LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit], |row| {
            Ok(Expense {
                id: row.get(0)?,
                amount_cents: row.get(1)?,
                currency: row.get(2)?,
                category: row.get(3)?,
                date: row.get(4)?,
                // Files created by older tools may hold NULL notes.
                note: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
                created_at: row.get(6)?,
            })
        })?;
        let expenses = rows.collect::<std::result::Result<Vec<_>, _>>()?;
        debug!(limit, count = expenses.len(), "listed expenses");
        Ok(expenses)
    }

    /// Total cents per category for expenses whose date starts with
    /// `month` (`YYYY-MM`), ordered by category.
    pub(crate) fn sum_by_category_for_month(&self, month: &str) -> Result<Vec<(String, i64)>> {
        let mut stmt = self.conn.prepare(
            "SELECT category, SUM(amount_cents)
             FROM expenses
             WHERE substr(date, 1, length(?1)) = ?1
             GROUP BY category
             ORDER BY category",
        )?;
        let rows = stmt.query_map(params![month], |row| Ok((row.get(0)?, row.get(1)?)))?;
        let totals: Vec<(String, i64)> = rows.collect::<std::result::Result<_, _>>()?;
        debug!(month, categories = totals.len(), "summed expenses by category");
        Ok(totals)
    }
}
