use comfy_table::{Cell, Table};

use crate::db::get_connection;
use crate::error::{PennyError, Result};
use crate::fmt::{symbol_for, CURRENCIES, DEFAULT_CURRENCY};
use crate::settings::db_path;
use crate::store;

pub fn run(code: Option<&str>) -> Result<()> {
    let conn = get_connection(&db_path())?;

    let Some(code) = code else {
        let current = store::get_setting(&conn, "currency")?
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
        println!("Display currency: {current}\n");

        let mut table = Table::new();
        table.set_header(vec!["Code", "Symbol", "Name"]);
        for (code, symbol, name) in CURRENCIES {
            table.add_row(vec![Cell::new(code), Cell::new(symbol), Cell::new(name)]);
        }
        println!("{table}");
        return Ok(());
    };

    let code = code.to_uppercase();
    if symbol_for(&code).is_none() {
        return Err(PennyError::UnknownCurrency(code));
    }
    store::set_setting(&conn, "currency", &code)?;
    println!("Display currency set to {code}");
    Ok(())
}
