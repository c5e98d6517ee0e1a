use colored::Colorize;
use rusqlite::Connection;

use crate::cli::{parse_date, parse_time};
use crate::db::get_connection;
use crate::error::{PennyError, Result};
use crate::models::{NewTransaction, PaymentMethod, TransactionType};
use crate::settings::db_path;
use crate::store;

/// Validate user input and assemble a `NewTransaction`. This is the form
/// layer: the store trusts what it is given, so everything is checked here.
pub(crate) fn build_new_transaction(
    conn: &Connection,
    amount: f64,
    description: &str,
    category: &str,
    transaction_type: &str,
    method: &str,
    date: Option<&str>,
    time: Option<&str>,
) -> Result<NewTransaction> {
    if !(amount > 0.0) {
        return Err(PennyError::Validation(format!(
            "Amount must be positive, got {amount}"
        )));
    }
    let description = description.trim();
    if description.is_empty() {
        return Err(PennyError::Validation(
            "Description must not be empty".to_string(),
        ));
    }
    let transaction_type = TransactionType::parse(transaction_type).ok_or_else(|| {
        PennyError::Validation(format!(
            "Unknown type '{transaction_type}' (expected: expense, income)"
        ))
    })?;
    let payment_method = PaymentMethod::parse(method).ok_or_else(|| {
        PennyError::Validation(format!(
            "Unknown method '{method}' (expected: credit_card, bank_transfer, atm_withdrawal, cash)"
        ))
    })?;
    let category = store::find_category_by_name(conn, category)?
        .ok_or_else(|| PennyError::UnknownCategory(category.to_string()))?;

    let now = chrono::Local::now();
    let date = match date {
        Some(raw) => parse_date(raw)?,
        None => now.date_naive(),
    };
    let time = match time {
        Some(raw) => parse_time(raw)?,
        None => now.format("%H:%M").to_string(),
    };

    Ok(NewTransaction {
        amount,
        description: description.to_string(),
        category_id: category.id,
        transaction_type,
        payment_method,
        date,
        time,
    })
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    amount: f64,
    description: &str,
    category: &str,
    transaction_type: &str,
    method: &str,
    date: Option<&str>,
    time: Option<&str>,
) -> Result<()> {
    let conn = get_connection(&db_path())?;
    let txn = build_new_transaction(
        &conn,
        amount,
        description,
        category,
        transaction_type,
        method,
        date,
        time,
    )?;
    let id = store::add_transaction(&conn, &txn)?;

    let label = match txn.transaction_type {
        TransactionType::Expense => "expense".red(),
        TransactionType::Income => "income".green(),
    };
    println!(
        "Added {label} #{id}: {} on {} at {}",
        txn.description, txn.date, txn.time
    );
    Ok(())
}
