use colored::Colorize;

use crate::cli::{parse_date, parse_time};
use crate::db::get_connection;
use crate::error::{PennyError, Result};
use crate::models::{NewTransaction, PaymentMethod, TransactionType};
use crate::settings::db_path;
use crate::store;

/// Full-record update: load the stored transaction, overlay the provided
/// fields, validate, and write everything back.
#[allow(clippy::too_many_arguments)]
pub fn run(
    id: i64,
    amount: Option<f64>,
    description: Option<&str>,
    category: Option<&str>,
    transaction_type: Option<&str>,
    method: Option<&str>,
    date: Option<&str>,
    time: Option<&str>,
) -> Result<()> {
    let conn = get_connection(&db_path())?;
    let existing = store::get_transaction(&conn, id)?
        .ok_or(PennyError::UnknownTransaction(id))?;

    let amount = amount.unwrap_or(existing.amount);
    if !(amount > 0.0) {
        return Err(PennyError::Validation(format!(
            "Amount must be positive, got {amount}"
        )));
    }
    let description = description
        .map(|d| d.trim().to_string())
        .unwrap_or(existing.description);
    if description.is_empty() {
        return Err(PennyError::Validation(
            "Description must not be empty".to_string(),
        ));
    }
    let category_id = match category {
        Some(name) => {
            store::find_category_by_name(&conn, name)?
                .ok_or_else(|| PennyError::UnknownCategory(name.to_string()))?
                .id
        }
        None => existing.category_id,
    };
    let transaction_type = match transaction_type {
        Some(raw) => TransactionType::parse(raw).ok_or_else(|| {
            PennyError::Validation(format!("Unknown type '{raw}' (expected: expense, income)"))
        })?,
        None => existing.transaction_type,
    };
    let payment_method = match method {
        Some(raw) => PaymentMethod::parse(raw).ok_or_else(|| {
            PennyError::Validation(format!(
                "Unknown method '{raw}' (expected: credit_card, bank_transfer, atm_withdrawal, cash)"
            ))
        })?,
        None => existing.payment_method,
    };
    let date = match date {
        Some(raw) => parse_date(raw)?,
        None => existing.date,
    };
    let time = match time {
        Some(raw) => parse_time(raw)?,
        None => existing.time,
    };

    let updated = NewTransaction {
        amount,
        description,
        category_id,
        transaction_type,
        payment_method,
        date,
        time,
    };
    store::update_transaction(&conn, id, &updated)?;
    println!("{} transaction #{id}: {}", "Updated".green(), updated.description);
    Ok(())
}
