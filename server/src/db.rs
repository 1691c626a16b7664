//! SQLite persistence for todos.
//!
//! `Database` owns the connection pool and creates the `todo` table on
//! connect. All queries go through `TodoRepository`, borrowed from the
//! database with [`Database::todos`].

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{debug, info};

use crate::model::Todo;

/// Path that selects a private in-memory database.
pub const IN_MEMORY: &str = ":memory:";

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS todo (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    task      VARCHAR(200) NOT NULL,
    completed BOOLEAN NOT NULL DEFAULT 0
)
"#;

/// Database errors.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Database handle with connection pool. Cloning shares the pool.
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

    /// Open (creating if missing) the database at `path` and ensure the schema
    /// exists. Pass [`IN_MEMORY`] for a throwaway database.
    pub async fn connect(path: &str) -> Result<Self, DbError> {
        let pool = if path == IN_MEMORY {
            // Every pooled connection to `:memory:` is a separate database, so
            // pin the pool to one connection that is never recycled.
            let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .acquire_timeout(Self::ACQUIRE_TIMEOUT)
                .connect_with(options)
                .await?
        } else {
            let options = SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal);
            SqlitePoolOptions::new()
                .max_connections(5)
                .acquire_timeout(Self::ACQUIRE_TIMEOUT)
                .connect_with(options)
                .await?
        };

        info!(path = %path, "Database connected");

        ensure_schema(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get the todo repository.
    pub fn todos(&self) -> TodoRepository<'_> {
        TodoRepository::new(&self.pool)
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Create the `todo` table if it does not exist. Existing rows are untouched.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), DbError> {
    sqlx::query(SCHEMA).execute(pool).await?;
    debug!("Schema checked");
    Ok(())
}

/// Repository for todo rows.
pub struct TodoRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TodoRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// All todos in insertion order.
    pub async fn find_all(&self) -> Result<Vec<Todo>, DbError> {
        let todos = sqlx::query_as::<_, Todo>("SELECT id, task, completed FROM todo ORDER BY id")
            .fetch_all(self.pool)
            .await?;
        Ok(todos)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Todo>, DbError> {
        let todo = sqlx::query_as::<_, Todo>("SELECT id, task, completed FROM todo WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;
        Ok(todo)
    }

    /// Insert a new, not yet completed todo and return it with its assigned id.
    pub async fn insert(&self, task: &str) -> Result<Todo, DbError> {
        let result = sqlx::query("INSERT INTO todo (task, completed) VALUES (?, 0)")
            .bind(task)
            .execute(self.pool)
            .await?;

        Ok(Todo {
            id: result.last_insert_rowid(),
            task: task.to_string(),
            completed: false,
        })
    }

    /// Write every field of `todo` back to its row. Returns `false` if the row
    /// no longer exists.
    pub async fn save(&self, todo: &Todo) -> Result<bool, DbError> {
        let result = sqlx::query("UPDATE todo SET task = ?, completed = ? WHERE id = ?")
            .bind(&todo.task)
            .bind(todo.completed)
            .bind(todo.id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Returns `false` if no row had this id.
    pub async fn delete_by_id(&self, id: i64) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM todo WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
