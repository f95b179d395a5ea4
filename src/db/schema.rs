//! SQL DDL for initializing the work-log storage.

/// SQLite schema:
/// - `users`: one row per account, `username` UNIQUE, bcrypt hash in
///   `password`, nullable `type` (work category)
/// - `work_updates`: append-only log rows with a denormalized author
///   snapshot (`username`, `name`, `userType`) and an RFC 3339 `timestamp`
///   used as the sort key
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT UNIQUE,
    password TEXT,
    role TEXT,
    name TEXT,
    type TEXT DEFAULT 'software'
);

CREATE TABLE IF NOT EXISTS work_updates (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT,
    name TEXT,
    userType TEXT,
    date TEXT,
    projectType TEXT,
    projectName TEXT,
    workDone TEXT,
    task TEXT,
    helpTaken TEXT,
    status TEXT,
    timestamp TEXT
);
"#;
