use crate::db::models::{DbListing, DbSession, DbUser, NewListing};
use crate::db::schema::SQLITE_INIT;
use crate::error::JourneyError;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Pool, Row, Sqlite};

pub type SqlitePool = Pool<Sqlite>;

/// CRUD surface over users, listings and sessions. No domain transitions
/// beyond generic create/read/update/delete live here.
#[derive(Clone)]
pub struct JourneyStore {
    pool: SqlitePool,
}

impl JourneyStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), JourneyError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    // --- users ---

    pub async fn create_user(&self, email: &str, password_hash: &str) -> Result<i64, JourneyError> {
        let res = sqlx::query(
            "INSERT INTO users (email, password_hash, created_at) VALUES (?, ?, ?)",
        )
        .bind(email)
        .bind(password_hash)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(res.last_insert_rowid())
    }

    /// Upsert by unique email. Returns the row id.
    /// Uses SQLite `INSERT ... ON CONFLICT(email) DO UPDATE`.
    pub async fn upsert_user(&self, email: &str, password_hash: &str) -> Result<i64, JourneyError> {
        sqlx::query(
            r#"
            INSERT INTO users (email, password_hash, created_at)
            VALUES (?, ?, ?)
            ON CONFLICT(email) DO UPDATE SET
                password_hash=excluded.password_hash
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        let rec: (i64,) = sqlx::query_as("SELECT id FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0)
    }

    pub async fn user_by_email(&self, email: &str) -> Result<Option<DbUser>, JourneyError> {
        let row = sqlx::query(
            "SELECT id, email, password_hash, created_at FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Self::row_to_user).transpose()
    }

    pub async fn user_by_id(&self, id: i64) -> Result<Option<DbUser>, JourneyError> {
        let row =
            sqlx::query("SELECT id, email, password_hash, created_at FROM users WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        row.map(Self::row_to_user).transpose()
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), JourneyError> {
        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // --- listings ---

    pub async fn create_listing(&self, listing: NewListing) -> Result<i64, JourneyError> {
        let res = sqlx::query(
            r#"
            INSERT INTO listings (
                title, description, url, notes,
                company_name, company_url, user_id, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(listing.title)
        .bind(listing.description)
        .bind(listing.url)
        .bind(listing.notes)
        .bind(listing.company_name)
        .bind(listing.company_url)
        .bind(listing.user_id)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(res.last_insert_rowid())
    }

    pub async fn get_listing(&self, id: i64) -> Result<Option<DbListing>, JourneyError> {
        let row = sqlx::query(
            r#"SELECT id, title, description, url, notes,
               company_name, company_url, user_id, created_at
               FROM listings WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Self::row_to_listing).transpose()
    }

    pub async fn list_listings(&self) -> Result<Vec<DbListing>, JourneyError> {
        let rows = sqlx::query(
            r#"SELECT id, title, description, url, notes,
               company_name, company_url, user_id, created_at
               FROM listings ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_listing).collect()
    }

    pub async fn listings_for_user(&self, user_id: i64) -> Result<Vec<DbListing>, JourneyError> {
        let rows = sqlx::query(
            r#"SELECT id, title, description, url, notes,
               company_name, company_url, user_id, created_at
               FROM listings WHERE user_id = ? ORDER BY id"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_listing).collect()
    }

    /// Update all listing fields by id (except id and created_at).
    pub async fn update_listing(&self, id: i64, listing: NewListing) -> Result<(), JourneyError> {
        sqlx::query(
            r#"UPDATE listings SET
                title = ?,
                description = ?,
                url = ?,
                notes = ?,
                company_name = ?,
                company_url = ?,
                user_id = ?
              WHERE id = ?"#,
        )
        .bind(listing.title)
        .bind(listing.description)
        .bind(listing.url)
        .bind(listing.notes)
        .bind(listing.company_name)
        .bind(listing.company_url)
        .bind(listing.user_id)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn delete_listing(&self, id: i64) -> Result<(), JourneyError> {
        sqlx::query("DELETE FROM listings WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // --- sessions ---

    pub async fn insert_session(&self, token: &str, user_id: i64) -> Result<(), JourneyError> {
        sqlx::query("INSERT INTO sessions (token, user_id, created_at) VALUES (?, ?, ?)")
            .bind(token)
            .bind(user_id)
            .bind(Utc::now().to_rfc3339())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Look up a session token together with the user it belongs to.
    pub async fn session_with_user(
        &self,
        token: &str,
    ) -> Result<Option<(DbSession, DbUser)>, JourneyError> {
        let row = sqlx::query(
            r#"SELECT s.token, s.user_id, s.created_at AS session_created_at,
               u.id, u.email, u.password_hash, u.created_at
               FROM sessions s JOIN users u ON u.id = s.user_id
               WHERE s.token = ?"#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        let session = DbSession {
            token: row.try_get("token")?,
            user_id: row.try_get("user_id")?,
            created_at: parse_rfc3339(row.try_get("session_created_at")?)?,
        };
        let user = Self::row_to_user(row)?;
        Ok(Some((session, user)))
    }

    pub async fn delete_session(&self, token: &str) -> Result<(), JourneyError> {
        sqlx::query("DELETE FROM sessions WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn delete_sessions_for_user(&self, user_id: i64) -> Result<(), JourneyError> {
        sqlx::query("DELETE FROM sessions WHERE user_id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    fn row_to_user(row: SqliteRow) -> Result<DbUser, JourneyError> {
        Ok(DbUser {
            id: row.try_get("id")?,
            email: row.try_get("email")?,
            password_hash: row.try_get("password_hash")?,
            created_at: parse_rfc3339(row.try_get("created_at")?)?,
        })
    }

    fn row_to_listing(row: SqliteRow) -> Result<DbListing, JourneyError> {
        Ok(DbListing {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            url: row.try_get("url")?,
            notes: row.try_get("notes")?,
            company_name: row.try_get("company_name")?,
            company_url: row.try_get("company_url")?,
            user_id: row.try_get("user_id")?,
            created_at: parse_rfc3339(row.try_get("created_at")?)?,
        })
    }
}

fn parse_rfc3339(value: String) -> Result<DateTime<Utc>, JourneyError> {
    let parsed = chrono::DateTime::parse_from_rfc3339(&value)
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
    Ok(parsed.with_timezone(&Utc))
}
