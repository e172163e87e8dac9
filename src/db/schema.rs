//! SQL DDL for initializing the listings database.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `users.email` UNIQUE so credential lookup is unambiguous
/// - `listings.user_id` NULLable: listings may exist without an owner
/// - `sessions.token` as the primary key; tokens never expire and are
///   removed on logout
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    email TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    created_at TEXT NOT NULL -- RFC3339
);

CREATE TABLE IF NOT EXISTS listings (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    url TEXT NOT NULL,
    notes TEXT NULL,
    company_name TEXT NULL,
    company_url TEXT NULL,
    user_id INTEGER NULL REFERENCES users(id),
    created_at TEXT NOT NULL -- RFC3339
);

CREATE INDEX IF NOT EXISTS idx_listings_user_id ON listings(user_id);

CREATE TABLE IF NOT EXISTS sessions (
    token TEXT PRIMARY KEY,
    user_id INTEGER NOT NULL REFERENCES users(id),
    created_at TEXT NOT NULL -- RFC3339
);
"#;
