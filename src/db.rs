use std::path::Path;

use rusqlite::Connection;

use crate::error::Result;

pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS settings (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    key TEXT UNIQUE,
    value TEXT
);

CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT UNIQUE,
    icon TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS transactions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    amount REAL NOT NULL,
    description TEXT NOT NULL,
    category_id INTEGER NOT NULL,
    type TEXT NOT NULL CHECK (type IN ('expense', 'income')),
    payment_method TEXT NOT NULL CHECK (payment_method IN ('credit_card', 'bank_transfer', 'atm_withdrawal', 'cash')),
    date TEXT NOT NULL,
    time TEXT NOT NULL,
    created_at TEXT NOT NULL,
    FOREIGN KEY (category_id) REFERENCES categories (id)
);
";

// (name, icon)
const DEFAULT_CATEGORIES: &[(&str, &str)] = &[
    ("Food", "\u{1F354}"),
    ("Transportation", "\u{1F697}"),
    ("Fashion", "\u{1F455}"),
    ("Health", "\u{1F3E5}"),
    ("Entertainment", "\u{1F3AC}"),
    ("Bills", "\u{1F4C4}"),
    ("Shopping", "\u{1F6D2}"),
    ("Education", "\u{1F4DA}"),
];

pub fn get_connection(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    // Foreign keys stay unenforced: deleting a category must leave its
    // transactions behind (shown as "Unknown"), not fail the delete.
    // The bundled SQLite is compiled with foreign keys ON by default, so the
    // pragma must be set explicitly.
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=OFF;")?;
    Ok(conn)
}

pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;

    let count: i64 = conn.query_row("SELECT count(*) FROM categories", [], |row| row.get(0))?;
    if count == 0 {
        for (name, icon) in DEFAULT_CATEGORIES {
            conn.execute(
                "INSERT INTO categories (name, icon) VALUES (?1, ?2)",
                rusqlite::params![name, icon],
            )?;
        }
    }
    Ok(())
}
