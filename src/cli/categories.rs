use comfy_table::{Cell, Table};

use crate::db::get_connection;
use crate::error::{PennyError, Result};
use crate::settings::db_path;
use crate::store;

pub fn add(name: &str, icon: &str) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(PennyError::Validation(
            "Category name must not be empty".to_string(),
        ));
    }
    let conn = get_connection(&db_path())?;
    if store::find_category_by_name(&conn, name)?.is_some() {
        return Err(PennyError::Validation(format!(
            "Category '{name}' already exists"
        )));
    }
    store::add_category(&conn, name, icon)?;
    println!("Added category: {icon} {name}");
    Ok(())
}

pub fn list() -> Result<()> {
    let conn = get_connection(&db_path())?;
    let categories = store::list_categories(&conn)?;

    let mut table = Table::new();
    table.set_header(vec!["ID", "Icon", "Name"]);
    for cat in categories {
        table.add_row(vec![
            Cell::new(cat.id),
            Cell::new(cat.icon),
            Cell::new(cat.name),
        ]);
    }
    println!("Categories\n{table}");
    Ok(())
}

pub fn delete(id: i64) -> Result<()> {
    let conn = get_connection(&db_path())?;
    let cat = store::get_category(&conn, id)?
        .ok_or_else(|| PennyError::UnknownCategory(id.to_string()))?;

    let orphaned: i64 = conn.query_row(
        "SELECT count(*) FROM transactions WHERE category_id = ?1",
        [id],
        |row| row.get(0),
    )?;
    store::delete_category(&conn, id)?;
    println!("Deleted category: {}", cat.name);
    if orphaned > 0 {
        println!("{orphaned} transaction(s) will now show 'Unknown' as their category");
    }
    Ok(())
}
