use chrono::NaiveDate;
use rusqlite::{Connection, Row};

use crate::error::Result;
use crate::models::{Category, NewTransaction, PaymentMethod, Transaction, TransactionType};

// ---------------------------------------------------------------------------
// Row mapping
// ---------------------------------------------------------------------------

fn conversion_error(idx: usize, value: &str) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        idx,
        rusqlite::types::Type::Text,
        format!("unexpected value: {value}").into(),
    )
}

fn txn_from_row(row: &Row) -> rusqlite::Result<Transaction> {
    let type_str: String = row.get(4)?;
    let method_str: String = row.get(5)?;
    let date_str: String = row.get(6)?;
    Ok(Transaction {
        id: row.get(0)?,
        amount: row.get(1)?,
        description: row.get(2)?,
        category_id: row.get(3)?,
        transaction_type: TransactionType::parse(&type_str)
            .ok_or_else(|| conversion_error(4, &type_str))?,
        payment_method: PaymentMethod::parse(&method_str)
            .ok_or_else(|| conversion_error(5, &method_str))?,
        date: NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .map_err(|_| conversion_error(6, &date_str))?,
        time: row.get(7)?,
        created_at: row.get(8)?,
    })
}

const TXN_COLUMNS: &str =
    "id, amount, description, category_id, type, payment_method, date, time, created_at";

// ---------------------------------------------------------------------------
// Transactions
// ---------------------------------------------------------------------------

/// All transactions, newest first. This is the order the filter engine
/// receives and must preserve.
pub fn list_transactions(conn: &Connection) -> Result<Vec<Transaction>> {
    let sql = format!("SELECT {TXN_COLUMNS} FROM transactions ORDER BY date DESC, time DESC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], txn_from_row)?;
    Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
}

pub fn get_transaction(conn: &Connection, id: i64) -> Result<Option<Transaction>> {
    let sql = format!("SELECT {TXN_COLUMNS} FROM transactions WHERE id = ?1");
    let mut stmt = conn.prepare(&sql)?;
    match stmt.query_row([id], txn_from_row) {
        Ok(txn) => Ok(Some(txn)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn add_transaction(conn: &Connection, txn: &NewTransaction) -> Result<i64> {
    let created_at = chrono::Local::now().to_rfc3339();
    conn.execute(
        "INSERT INTO transactions (amount, description, category_id, type, payment_method, date, time, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        rusqlite::params![
            txn.amount,
            txn.description,
            txn.category_id,
            txn.transaction_type.as_str(),
            txn.payment_method.as_str(),
            txn.date.format("%Y-%m-%d").to_string(),
            txn.time,
            created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Full-record update. `created_at` is immutable and left untouched.
pub fn update_transaction(conn: &Connection, id: i64, txn: &NewTransaction) -> Result<()> {
    conn.execute(
        "UPDATE transactions SET amount = ?1, description = ?2, category_id = ?3, type = ?4, \
         payment_method = ?5, date = ?6, time = ?7 WHERE id = ?8",
        rusqlite::params![
            txn.amount,
            txn.description,
            txn.category_id,
            txn.transaction_type.as_str(),
            txn.payment_method.as_str(),
            txn.date.format("%Y-%m-%d").to_string(),
            txn.time,
            id,
        ],
    )?;
    Ok(())
}

pub fn delete_transaction(conn: &Connection, id: i64) -> Result<()> {
    conn.execute("DELETE FROM transactions WHERE id = ?1", [id])?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

pub fn list_categories(conn: &Connection) -> Result<Vec<Category>> {
    let mut stmt = conn.prepare("SELECT id, name, icon FROM categories ORDER BY name")?;
    let rows = stmt.query_map([], |row| {
        Ok(Category {
            id: row.get(0)?,
            name: row.get(1)?,
            icon: row.get(2)?,
        })
    })?;
    Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
}

pub fn get_category(conn: &Connection, id: i64) -> Result<Option<Category>> {
    let mut stmt = conn.prepare("SELECT id, name, icon FROM categories WHERE id = ?1")?;
    match stmt.query_row([id], |row| {
        Ok(Category {
            id: row.get(0)?,
            name: row.get(1)?,
            icon: row.get(2)?,
        })
    }) {
        Ok(cat) => Ok(Some(cat)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn find_category_by_name(conn: &Connection, name: &str) -> Result<Option<Category>> {
    let mut stmt =
        conn.prepare("SELECT id, name, icon FROM categories WHERE name = ?1 COLLATE NOCASE")?;
    match stmt.query_row([name], |row| {
        Ok(Category {
            id: row.get(0)?,
            name: row.get(1)?,
            icon: row.get(2)?,
        })
    }) {
        Ok(cat) => Ok(Some(cat)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn add_category(conn: &Connection, name: &str, icon: &str) -> Result<i64> {
    conn.execute(
        "INSERT INTO categories (name, icon) VALUES (?1, ?2)",
        rusqlite::params![name.trim(), icon],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Deleting a category leaves referencing transactions orphaned; their
/// category is displayed as "Unknown".
pub fn delete_category(conn: &Connection, id: i64) -> Result<()> {
    conn.execute("DELETE FROM categories WHERE id = ?1", [id])?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Settings (key/value)
// ---------------------------------------------------------------------------

pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let mut stmt = conn.prepare("SELECT value FROM settings WHERE key = ?1")?;
    match stmt.query_row([key], |row| row.get(0)) {
        Ok(value) => Ok(Some(value)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)",
        rusqlite::params![key, value],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{get_connection, init_db};

    fn test_db() -> (tempfile::TempDir, Connection) {
        let dir = tempfile::tempdir().unwrap();
        let conn = get_connection(&dir.path().join("test.db")).unwrap();
        init_db(&conn).unwrap();
        (dir, conn)
    }

    fn sample_txn(category_id: i64, date: &str, time: &str) -> NewTransaction {
        NewTransaction {
            amount: 12.50,
            description: "COFFEE SHOP".to_string(),
            category_id,
            transaction_type: TransactionType::Expense,
            payment_method: PaymentMethod::CreditCard,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            time: time.to_string(),
        }
    }

    fn first_category(conn: &Connection) -> i64 {
        list_categories(conn).unwrap()[0].id
    }

    #[test]
    fn test_add_and_get_transaction() {
        let (_dir, conn) = test_db();
        let cat = first_category(&conn);
        let id = add_transaction(&conn, &sample_txn(cat, "2025-06-01", "09:30")).unwrap();
        let txn = get_transaction(&conn, id).unwrap().unwrap();
        assert_eq!(txn.amount, 12.50);
        assert_eq!(txn.description, "COFFEE SHOP");
        assert_eq!(txn.transaction_type, TransactionType::Expense);
        assert_eq!(txn.payment_method, PaymentMethod::CreditCard);
        assert_eq!(txn.time, "09:30");
        assert!(!txn.created_at.is_empty());
    }

    #[test]
    fn test_get_transaction_missing() {
        let (_dir, conn) = test_db();
        assert!(get_transaction(&conn, 999).unwrap().is_none());
    }

    #[test]
    fn test_list_transactions_newest_first() {
        let (_dir, conn) = test_db();
        let cat = first_category(&conn);
        add_transaction(&conn, &sample_txn(cat, "2025-06-01", "09:30")).unwrap();
        add_transaction(&conn, &sample_txn(cat, "2025-06-03", "08:00")).unwrap();
        add_transaction(&conn, &sample_txn(cat, "2025-06-03", "17:45")).unwrap();
        let txns = list_transactions(&conn).unwrap();
        let order: Vec<(String, String)> = txns
            .iter()
            .map(|t| (t.date.to_string(), t.time.clone()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("2025-06-03".to_string(), "17:45".to_string()),
                ("2025-06-03".to_string(), "08:00".to_string()),
                ("2025-06-01".to_string(), "09:30".to_string()),
            ]
        );
    }

    #[test]
    fn test_update_transaction_preserves_created_at() {
        let (_dir, conn) = test_db();
        let cat = first_category(&conn);
        let id = add_transaction(&conn, &sample_txn(cat, "2025-06-01", "09:30")).unwrap();
        let before = get_transaction(&conn, id).unwrap().unwrap();

        let mut updated = sample_txn(cat, "2025-06-02", "10:00");
        updated.amount = 99.99;
        updated.transaction_type = TransactionType::Income;
        update_transaction(&conn, id, &updated).unwrap();

        let after = get_transaction(&conn, id).unwrap().unwrap();
        assert_eq!(after.amount, 99.99);
        assert_eq!(after.transaction_type, TransactionType::Income);
        assert_eq!(after.date.to_string(), "2025-06-02");
        assert_eq!(after.created_at, before.created_at);
    }

    #[test]
    fn test_delete_transaction() {
        let (_dir, conn) = test_db();
        let cat = first_category(&conn);
        let id = add_transaction(&conn, &sample_txn(cat, "2025-06-01", "09:30")).unwrap();
        delete_transaction(&conn, id).unwrap();
        assert!(get_transaction(&conn, id).unwrap().is_none());
        assert!(list_transactions(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_categories_listed_by_name() {
        let (_dir, conn) = test_db();
        let cats = list_categories(&conn).unwrap();
        let names: Vec<&str> = cats.iter().map(|c| c.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_find_category_by_name_is_case_insensitive() {
        let (_dir, conn) = test_db();
        let cat = find_category_by_name(&conn, "food").unwrap().unwrap();
        assert_eq!(cat.name, "Food");
        assert!(find_category_by_name(&conn, "Nope").unwrap().is_none());
    }

    #[test]
    fn test_delete_category_orphans_transactions() {
        let (_dir, conn) = test_db();
        let cat = first_category(&conn);
        let id = add_transaction(&conn, &sample_txn(cat, "2025-06-01", "09:30")).unwrap();
        delete_category(&conn, cat).unwrap();
        // Transaction survives with a dangling category reference.
        let txn = get_transaction(&conn, id).unwrap().unwrap();
        assert_eq!(txn.category_id, cat);
        assert!(get_category(&conn, cat).unwrap().is_none());
    }

    #[test]
    fn test_settings_roundtrip() {
        let (_dir, conn) = test_db();
        assert!(get_setting(&conn, "currency").unwrap().is_none());
        set_setting(&conn, "currency", "USD").unwrap();
        assert_eq!(get_setting(&conn, "currency").unwrap().as_deref(), Some("USD"));
        set_setting(&conn, "currency", "GBP").unwrap();
        assert_eq!(get_setting(&conn, "currency").unwrap().as_deref(), Some("GBP"));
    }
}
