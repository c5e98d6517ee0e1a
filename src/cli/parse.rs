use colored::Colorize;
use comfy_table::Table;

use crate::cli::add::build_new_transaction;
use crate::db::get_connection;
use crate::error::{PennyError, Result};
use crate::models::ParsedTransaction;
use crate::parser;
use crate::settings::db_path;
use crate::store;

fn print_parsed(parsed: &ParsedTransaction) {
    let mut table = Table::new();
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec![
        "Amount".to_string(),
        parsed
            .amount
            .map(|a| format!("{a:.2}"))
            .unwrap_or_else(|| "\u{2014}".to_string()),
    ]);
    table.add_row(vec![
        "Description".to_string(),
        parsed.description.clone().unwrap_or_else(|| "\u{2014}".to_string()),
    ]);
    table.add_row(vec![
        "Time".to_string(),
        parsed.time.clone().unwrap_or_else(|| "\u{2014}".to_string()),
    ]);
    println!("{table}");
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    text: &str,
    save: bool,
    category: Option<&str>,
    amount: Option<f64>,
    description: Option<&str>,
    transaction_type: &str,
    method: &str,
    date: Option<&str>,
) -> Result<()> {
    let parsed = parser::parse(text);
    print_parsed(&parsed);

    if !save {
        return Ok(());
    }

    // Flags win over parsed candidates; whatever is still missing after
    // both is a validation failure, same as an incomplete form.
    let amount = amount.or(parsed.amount).ok_or_else(|| {
        PennyError::Validation("No amount found in text; pass --amount".to_string())
    })?;
    let description = description
        .map(str::to_string)
        .or(parsed.description)
        .ok_or_else(|| {
            PennyError::Validation("No description found in text; pass --description".to_string())
        })?;
    let category = category.ok_or_else(|| {
        PennyError::Validation("--category is required with --save".to_string())
    })?;

    let conn = get_connection(&db_path())?;
    let txn = build_new_transaction(
        &conn,
        amount,
        &description,
        category,
        transaction_type,
        method,
        date,
        parsed.time.as_deref(),
    )?;
    let id = store::add_transaction(&conn, &txn)?;
    println!("{} transaction #{id}: {}", "Saved".green(), txn.description);
    Ok(())
}
