pub mod add;
pub mod categories;
pub mod currency;
pub mod delete;
pub mod demo;
pub mod edit;
pub mod init;
pub mod list;
pub mod parse;
pub mod stats;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rusqlite::Connection;

use crate::error::{PennyError, Result};
use crate::fmt::{symbol_for, DEFAULT_CURRENCY};
use crate::models::Filters;
use crate::store;

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| PennyError::InvalidDate(raw.to_string()))
}

/// Validate an HH:MM string, returning it zero-padded.
pub(crate) fn parse_time(raw: &str) -> Result<String> {
    let time = chrono::NaiveTime::parse_from_str(raw, "%H:%M")
        .map_err(|_| PennyError::InvalidTime(raw.to_string()))?;
    Ok(time.format("%H:%M").to_string())
}

/// Build a filter set from list/stats flags, resolving a category name to
/// its id. A named category that does not exist is an error rather than an
/// empty result.
pub(crate) fn build_filters(
    conn: &Connection,
    search: Option<&str>,
    category: Option<&str>,
    from_date: Option<&str>,
    to_date: Option<&str>,
) -> Result<Filters> {
    let category_id = match category {
        Some(name) => Some(
            store::find_category_by_name(conn, name)?
                .ok_or_else(|| PennyError::UnknownCategory(name.to_string()))?
                .id,
        ),
        None => None,
    };
    Ok(Filters {
        search_query: search.unwrap_or_default().to_string(),
        category_id,
        start_date: from_date.map(parse_date).transpose()?,
        end_date: to_date.map(parse_date).transpose()?,
    })
}

pub(crate) fn currency_symbol(conn: &Connection) -> Result<String> {
    let code = store::get_setting(conn, "currency")?.unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
    // An unrecognized stored code falls back to showing the code itself.
    Ok(symbol_for(&code).map(str::to_string).unwrap_or(code))
}

#[derive(Parser)]
#[command(name = "penny", about = "Personal income/expense tracker with bank-notification parsing.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up penny: choose a data directory and initialize the database.
    Init {
        /// Path for penny data (default: ~/Documents/penny)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Record a transaction from structured fields.
    Add {
        /// Amount in the operating currency (positive)
        amount: f64,
        /// What the money was for
        description: String,
        /// Category name
        #[arg(long)]
        category: String,
        /// Transaction type: expense, income
        #[arg(long = "type", default_value = "expense")]
        transaction_type: String,
        /// Payment method: credit_card, bank_transfer, atm_withdrawal, cash
        #[arg(long, default_value = "cash")]
        method: String,
        /// Date: YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        /// Time: HH:MM (default: now)
        #[arg(long)]
        time: Option<String>,
    },
    /// Extract amount/description/time from pasted bank-notification text.
    Parse {
        /// The notification text, quoted
        text: String,
        /// Save the parsed transaction instead of just showing it
        #[arg(long)]
        save: bool,
        /// Category name (required with --save)
        #[arg(long)]
        category: Option<String>,
        /// Override or supply the amount
        #[arg(long)]
        amount: Option<f64>,
        /// Override or supply the description
        #[arg(long)]
        description: Option<String>,
        /// Transaction type: expense, income
        #[arg(long = "type", default_value = "expense")]
        transaction_type: String,
        /// Payment method: credit_card, bank_transfer, atm_withdrawal, cash
        #[arg(long, default_value = "credit_card")]
        method: String,
        /// Date: YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// List transactions with optional filters and a stats footer.
    List {
        /// Case-insensitive description search
        #[arg(long)]
        search: Option<String>,
        /// Category name
        #[arg(long)]
        category: Option<String>,
        /// Start date: YYYY-MM-DD (inclusive)
        #[arg(long = "from")]
        from_date: Option<String>,
        /// End date: YYYY-MM-DD (inclusive)
        #[arg(long = "to")]
        to_date: Option<String>,
    },
    /// Show income/expense/net statistics for the current filters.
    Stats {
        /// Case-insensitive description search
        #[arg(long)]
        search: Option<String>,
        /// Category name
        #[arg(long)]
        category: Option<String>,
        /// Start date: YYYY-MM-DD (inclusive)
        #[arg(long = "from")]
        from_date: Option<String>,
        /// End date: YYYY-MM-DD (inclusive)
        #[arg(long = "to")]
        to_date: Option<String>,
    },
    /// Edit a transaction (unset flags keep the stored value).
    Edit {
        /// Transaction ID (shown in `penny list`)
        id: i64,
        /// New amount
        #[arg(long)]
        amount: Option<f64>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New category name
        #[arg(long)]
        category: Option<String>,
        /// New type: expense, income
        #[arg(long = "type")]
        transaction_type: Option<String>,
        /// New payment method
        #[arg(long)]
        method: Option<String>,
        /// New date: YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
        /// New time: HH:MM
        #[arg(long)]
        time: Option<String>,
    },
    /// Delete a transaction. There is no undo.
    Delete {
        /// Transaction ID (shown in `penny list`)
        id: i64,
    },
    /// Manage categories.
    Categories {
        #[command(subcommand)]
        command: CategoriesCommands,
    },
    /// Show or set the display currency.
    Currency {
        /// Currency code, e.g. EUR, USD, GBP
        code: Option<String>,
    },
    /// Load sample transactions to explore penny.
    Demo,
}

#[derive(Subcommand)]
pub enum CategoriesCommands {
    /// Add a category.
    Add {
        /// Category name (unique)
        name: String,
        /// Icon shown in listings
        #[arg(default_value = "\u{1F4C1}")]
        icon: String,
    },
    /// List all categories.
    List,
    /// Delete a category. Its transactions keep a dangling reference and
    /// show up as "Unknown".
    Delete {
        /// Category ID (shown in `penny categories list`)
        id: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{get_connection, init_db};

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-06-01").unwrap().to_string(), "2025-06-01");
        assert!(parse_date("06/01/2025").is_err());
        assert!(parse_date("2025-13-01").is_err());
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("09:30").unwrap(), "09:30");
        assert_eq!(parse_time("9:30").unwrap(), "09:30");
        assert!(parse_time("25:00").is_err());
        assert!(parse_time("noonish").is_err());
    }

    #[test]
    fn test_build_filters_resolves_category() {
        let dir = tempfile::tempdir().unwrap();
        let conn = get_connection(&dir.path().join("test.db")).unwrap();
        init_db(&conn).unwrap();

        let filters =
            build_filters(&conn, Some("coffee"), Some("Food"), Some("2025-06-01"), None).unwrap();
        assert_eq!(filters.search_query, "coffee");
        assert!(filters.category_id.is_some());
        assert!(filters.start_date.is_some());
        assert!(filters.end_date.is_none());

        let missing = build_filters(&conn, None, Some("Nope"), None, None);
        assert!(matches!(missing, Err(PennyError::UnknownCategory(_))));
    }
}
