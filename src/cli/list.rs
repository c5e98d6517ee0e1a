use std::collections::HashMap;

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::{build_filters, currency_symbol};
use crate::db::get_connection;
use crate::error::Result;
use crate::filter;
use crate::fmt::money;
use crate::models::{Stats, TransactionType};
use crate::settings::db_path;
use crate::stats;
use crate::store;

pub(crate) fn print_summary(stats: &Stats, period: &str, symbol: &str) {
    println!("\n{}", period.bold());
    println!("  Income:   {}", money(stats.income, symbol).green());
    println!("  Expenses: {}", money(stats.expenses, symbol).red());
    let net = money(stats.net_total, symbol);
    if stats.net_total < 0.0 {
        println!("  Net:      {}", net.red());
    } else {
        println!("  Net:      {}", net.green());
    }
    println!(
        "  Showing {} of {} transactions",
        stats.filtered_count, stats.total_count
    );
}

pub fn run(
    search: Option<&str>,
    category: Option<&str>,
    from_date: Option<&str>,
    to_date: Option<&str>,
) -> Result<()> {
    let conn = get_connection(&db_path())?;
    let filters = build_filters(&conn, search, category, from_date, to_date)?;
    let symbol = currency_symbol(&conn)?;

    let all = store::list_transactions(&conn)?;
    let category_names: HashMap<i64, String> = store::list_categories(&conn)?
        .into_iter()
        .map(|c| (c.id, format!("{} {}", c.icon, c.name)))
        .collect();

    let filtered = filter::apply(&all, &filters);
    let summary = stats::aggregate(&all, &filtered);
    let period = stats::display_period(&filters);

    let mut table = Table::new();
    table.set_header(vec!["ID", "Date", "Time", "Description", "Category", "Method", "Amount"]);
    for txn in &filtered {
        let signed = match txn.transaction_type {
            TransactionType::Income => format!("+{}", money(txn.amount, &symbol)),
            TransactionType::Expense => format!("-{}", money(txn.amount, &symbol)),
        };
        let category = category_names
            .get(&txn.category_id)
            .cloned()
            // Dangling reference after a category delete.
            .unwrap_or_else(|| "Unknown".to_string());
        table.add_row(vec![
            Cell::new(txn.id),
            Cell::new(txn.date),
            Cell::new(&txn.time),
            Cell::new(&txn.description),
            Cell::new(category),
            Cell::new(txn.payment_method.as_str()),
            Cell::new(signed),
        ]);
    }
    println!("{table}");

    print_summary(&summary, &period, &symbol);
    Ok(())
}
