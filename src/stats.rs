use chrono::NaiveDate;

use crate::models::{Filters, Stats, Transaction, TransactionType};

/// Income/expense/net totals over the filtered set, with counts from both
/// collections. Always recomputed; nothing here is cached or stored.
pub fn aggregate(all: &[Transaction], filtered: &[Transaction]) -> Stats {
    let income: f64 = filtered
        .iter()
        .filter(|t| t.transaction_type == TransactionType::Income)
        .map(|t| t.amount)
        .sum();
    let expenses: f64 = filtered
        .iter()
        .filter(|t| t.transaction_type == TransactionType::Expense)
        .map(|t| t.amount)
        .sum();

    Stats {
        income,
        expenses,
        net_total: income - expenses,
        total_count: all.len(),
        filtered_count: filtered.len(),
    }
}

/// Human-readable label for the time span a filter set implies.
pub fn display_period(filters: &Filters) -> String {
    period_label(filters, chrono::Local::now().date_naive())
}

pub fn period_label(filters: &Filters, today: NaiveDate) -> String {
    if filters.is_empty() {
        return today.format("%B %Y").to_string();
    }

    match (filters.start_date, filters.end_date) {
        (Some(start), Some(end)) => format!(
            "{} - {}",
            start.format("%b %-d"),
            end.format("%b %-d, %Y")
        ),
        (Some(start), None) => format!("From {}", start.format("%B %-d, %Y")),
        (None, Some(end)) => format!("Until {}", end.format("%B %-d, %Y")),
        // Only search/category filters active.
        (None, None) => "Filtered Results".to_string(),
    }
}
