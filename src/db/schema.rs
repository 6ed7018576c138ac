//! SQL DDL for initializing the inventory store.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT on both tables
/// - `inventory`: required name/quantity, nullable assignment fields
/// - `users`: `username` UNIQUE (creates an index implicitly)
/// - `return_date` kept as uninterpreted text, `password` stored as given
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS inventory (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    item_name TEXT NOT NULL,
    quantity INTEGER NOT NULL,
    assigned_to TEXT NULL,
    return_date TEXT NULL -- expected return date, free-form text
);

CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL -- plaintext, hashing pending a product decision
);
"#;
