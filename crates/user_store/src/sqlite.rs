//! SQLite user store implementation.

use async_trait::async_trait;
use entities::User;
use sqlx::{sqlite::SqlitePoolOptions, FromRow, Pool, Sqlite};

use crate::{UserStore, UserStoreResult};

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL
)
"#;

/// Database row for User
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(row.id, row.name, row.email)
    }
}

/// SQLite user store.
///
/// Ids come from `AUTOINCREMENT`, so a deleted id is never handed out again.
#[derive(Debug, Clone)]
pub struct SqliteUserStore {
    pool: Pool<Sqlite>,
}

impl SqliteUserStore {
    /// Opens a connection pool for `database_url` and creates the `users`
    /// table if it does not exist yet.
    pub async fn connect(database_url: &str, max_connections: u32) -> UserStoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        let store = Self::new(pool);
        store.init().await?;

        tracing::info!(database_url = %database_url, "Connected to SQLite user store");

        Ok(store)
    }

    /// Wraps an existing pool. Call [`SqliteUserStore::init`] before use.
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Creates the `users` table.
    pub async fn init(&self) -> UserStoreResult<()> {
        sqlx::query(SCHEMA_SQL).execute(&self.pool).await?;
        Ok(())
    }

    async fn insert(&self, user: User) -> UserStoreResult<User> {
        let id: i64 =
            sqlx::query_scalar("INSERT INTO users (name, email) VALUES (?, ?) RETURNING id")
                .bind(&user.name)
                .bind(&user.email)
                .fetch_one(&self.pool)
                .await?;

        Ok(user.with_id(id))
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn find_all(&self) -> UserStoreResult<Vec<User>> {
        let rows: Vec<UserRow> = sqlx::query_as(
            "SELECT id, name, email
             FROM users
             ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> UserStoreResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            "SELECT id, name, email
             FROM users
             WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    async fn exists_by_id(&self, id: i64) -> UserStoreResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = ?)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn save(&self, user: User) -> UserStoreResult<User> {
        if !user.has_assigned_id() {
            return self.insert(user).await;
        }

        let result = sqlx::query("UPDATE users SET name = ?, email = ? WHERE id = ?")
            .bind(&user.name)
            .bind(&user.email)
            .bind(user.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return self.insert(user).await;
        }

        Ok(user)
    }

    async fn delete_by_id(&self, id: i64) -> UserStoreResult<()> {
        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
