use crate::models::{Filters, Transaction};

/// Whether one transaction passes the active filter set. Every set field
/// must hold; unset fields are wildcards.
pub fn matches(txn: &Transaction, filters: &Filters) -> bool {
    if !filters.search_query.is_empty() {
        let query = filters.search_query.to_lowercase();
        if !txn.description.to_lowercase().contains(&query) {
            return false;
        }
    }

    if let Some(category_id) = filters.category_id {
        if txn.category_id != category_id {
            return false;
        }
    }

    // Transactions carry calendar dates only, so plain date comparison gives
    // start-of-day / end-of-day semantics: a transaction dated exactly on a
    // boundary is included.
    if let Some(start) = filters.start_date {
        if txn.date < start {
            return false;
        }
    }
    if let Some(end) = filters.end_date {
        if txn.date > end {
            return false;
        }
    }

    true
}

/// Filtered copy of `transactions`, preserving input order.
pub fn apply(transactions: &[Transaction], filters: &Filters) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|txn| matches(txn, filters))
        .cloned()
        .collect()
}
