//! SQL for the owners table, one flavour per supported dialect.

use super::SqlDialect;

/// MySQL DDL, non-destructive.
pub const MYSQL_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS owners (
    id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
    first_name VARCHAR(30),
    last_name VARCHAR(30),
    address VARCHAR(255),
    city VARCHAR(80),
    telephone VARCHAR(20),
    INDEX (last_name)
) engine=InnoDB;
"#;

/// SQLite DDL, non-destructive.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS owners (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT,
    last_name TEXT,
    address TEXT,
    city TEXT,
    telephone TEXT
);

CREATE INDEX IF NOT EXISTS idx_owners_last_name ON owners(last_name);
"#;

/// Bundled seed scripts. These drop and recreate the table.
pub const MYSQL_SEED: &str = include_str!("../../resources/seed_mysql.sql");
pub const SQLITE_SEED: &str = include_str!("../../resources/seed_sqlite.sql");

impl SqlDialect {
    pub fn init_script(self) -> &'static str {
        match self {
            SqlDialect::MySql => MYSQL_INIT,
            SqlDialect::Sqlite => SQLITE_INIT,
        }
    }

    pub fn seed_script(self) -> &'static str {
        match self {
            SqlDialect::MySql => MYSQL_SEED,
            SqlDialect::Sqlite => SQLITE_SEED,
        }
    }
}

/// Split a script into executable statements on `;`, skipping comment-only chunks.
pub fn statements(script: &str) -> impl Iterator<Item = &str> {
    script.split(';').map(str::trim).filter(|chunk| {
        chunk.lines().any(|line| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with("--")
        })
    })
}
