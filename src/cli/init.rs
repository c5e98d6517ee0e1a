use colored::Colorize;

use crate::db::{get_connection, init_db};
use crate::error::Result;
use crate::fmt::DEFAULT_CURRENCY;
use crate::settings::{db_path, load_settings, save_settings, shellexpand_path};
use crate::store;

pub fn run(data_dir: Option<String>) -> Result<()> {
    let mut settings = load_settings();
    if let Some(dir) = data_dir {
        settings.data_dir = shellexpand_path(&dir);
    }
    std::fs::create_dir_all(&settings.data_dir)?;
    save_settings(&settings)?;

    let conn = get_connection(&db_path())?;
    init_db(&conn)?;
    if store::get_setting(&conn, "currency")?.is_none() {
        store::set_setting(&conn, "currency", DEFAULT_CURRENCY)?;
    }

    println!(
        "{} penny database at {}",
        "Initialized".green(),
        db_path().display()
    );
    println!("Add your first transaction with `penny add` or paste a bank notification into `penny parse`.");
    Ok(())
}
