use crate::db::models::{DirectoryUser, NewWorkUpdate, User, WorkUpdate};
use crate::db::schema::SQLITE_INIT;
use crate::error::WorklogError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

/// Open the store at `database_url` and initialize the schema.
///
/// The pool is pinned to a single connection: an in-memory SQLite database
/// lives and dies with its connection, so handing out more than one would
/// split the store. A single connection also serializes all statements,
/// which is the consistency model the handlers assume.
pub async fn connect(database_url: &str) -> Result<WorklogStorage, WorklogError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)
        .map_err(WorklogError::Database)?
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .connect_with(connect_opts)
        .await?;
    let storage = WorklogStorage::new(pool);
    storage.init_schema().await?;
    Ok(storage)
}

#[derive(Clone)]
pub struct WorklogStorage {
    pool: SqlitePool,
}

impl WorklogStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), WorklogError> {
        // execute statements one by one (sqlx::query rejects multi-commands)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert-or-replace an account; used for the fixed seed accounts.
    pub async fn upsert_user(
        &self,
        username: &str,
        password_hash: &str,
        role: &str,
        name: &str,
        work_type: &str,
    ) -> Result<(), WorklogError> {
        sqlx::query(
            "INSERT OR REPLACE INTO users (username, password, role, name, type) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(username)
        .bind(password_hash)
        .bind(role)
        .bind(name)
        .bind(work_type)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Insert a fresh auto-registered account (`type` left NULL). Returns the
    /// generated row id.
    pub async fn insert_user(
        &self,
        username: &str,
        password_hash: &str,
        role: &str,
        name: &str,
    ) -> Result<i64, WorklogError> {
        let res = sqlx::query(
            "INSERT INTO users (username, password, role, name, type) VALUES (?, ?, ?, ?, NULL)",
        )
        .bind(username)
        .bind(password_hash)
        .bind(role)
        .bind(name)
        .execute(&self.pool)
        .await?;
        Ok(res.last_insert_rowid())
    }

    pub async fn find_user(&self, username: &str) -> Result<Option<User>, WorklogError> {
        let row = sqlx::query(
            "SELECT id, username, password, role, name, type FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Self::row_to_user).transpose()
    }

    /// The stored `type` of a user: `None` if the user is absent, `Some(None)`
    /// if present but no category was selected yet.
    pub async fn user_type(&self, username: &str) -> Result<Option<Option<String>>, WorklogError> {
        let row = sqlx::query("SELECT type FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| r.try_get("type").map_err(WorklogError::from))
            .transpose()
    }

    pub async fn list_users(&self) -> Result<Vec<DirectoryUser>, WorklogError> {
        let rows = sqlx::query("SELECT username, name, role, type FROM users ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(Self::row_to_directory_user).collect()
    }

    /// Append a work update with the frozen author snapshot. Returns the
    /// generated row id.
    pub async fn insert_update(
        &self,
        update: &NewWorkUpdate,
        user_type: &str,
        timestamp: &str,
    ) -> Result<i64, WorklogError> {
        let res = sqlx::query(
            r#"INSERT INTO work_updates
               (username, name, userType, date, projectType, projectName, workDone, task, helpTaken, status, timestamp)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&update.username)
        .bind(&update.name)
        .bind(user_type)
        .bind(&update.date)
        .bind(&update.project_type)
        .bind(&update.project_name)
        .bind(&update.work_done)
        .bind(&update.task)
        .bind(&update.help_taken)
        .bind(&update.status)
        .bind(timestamp)
        .execute(&self.pool)
        .await?;
        Ok(res.last_insert_rowid())
    }

    pub async fn updates_for_user(&self, username: &str) -> Result<Vec<WorkUpdate>, WorklogError> {
        let rows = sqlx::query(
            r#"SELECT id, username, name, userType, date, projectType, projectName,
               workDone, task, helpTaken, status, timestamp
               FROM work_updates WHERE username = ? ORDER BY timestamp DESC"#,
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_update).collect()
    }

    pub async fn all_updates(&self) -> Result<Vec<WorkUpdate>, WorklogError> {
        let rows = sqlx::query(
            r#"SELECT id, username, name, userType, date, projectType, projectName,
               workDone, task, helpTaken, status, timestamp
               FROM work_updates ORDER BY timestamp DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_update).collect()
    }

    /// Delete one update by id; returns the number of rows affected.
    pub async fn delete_update(&self, id: i64) -> Result<u64, WorklogError> {
        let res = sqlx::query("DELETE FROM work_updates WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected())
    }

    fn row_to_user(row: SqliteRow) -> Result<User, WorklogError> {
        Ok(User {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
            password: row.try_get("password")?,
            role: row.try_get("role")?,
            name: row.try_get("name")?,
            work_type: row.try_get("type")?,
        })
    }

    fn row_to_directory_user(row: SqliteRow) -> Result<DirectoryUser, WorklogError> {
        Ok(DirectoryUser {
            username: row.try_get("username")?,
            name: row.try_get("name")?,
            role: row.try_get("role")?,
            work_type: row.try_get("type")?,
        })
    }

    fn row_to_update(row: SqliteRow) -> Result<WorkUpdate, WorklogError> {
        Ok(WorkUpdate {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
            name: row.try_get("name")?,
            user_type: row.try_get("userType")?,
            date: row.try_get("date")?,
            project_type: row.try_get("projectType")?,
            project_name: row.try_get("projectName")?,
            work_done: row.try_get("workDone")?,
            task: row.try_get("task")?,
            help_taken: row.try_get("helpTaken")?,
            status: row.try_get("status")?,
            timestamp: row.try_get("timestamp")?,
        })
    }
}
