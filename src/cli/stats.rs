use crate::cli::list::print_summary;
use crate::cli::{build_filters, currency_symbol};
use crate::db::get_connection;
use crate::error::Result;
use crate::filter;
use crate::settings::db_path;
use crate::stats;
use crate::store;

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
    let filtered = filter::apply(&all, &filters);
    let summary = stats::aggregate(&all, &filtered);
    let period = stats::display_period(&filters);

    print_summary(&summary, &period, &symbol);
    Ok(())
}
