use crate::db::get_connection;
use crate::error::{PennyError, Result};
use crate::settings::db_path;
use crate::store;

pub fn run(id: i64) -> Result<()> {
    let conn = get_connection(&db_path())?;
    let txn = store::get_transaction(&conn, id)?
        .ok_or(PennyError::UnknownTransaction(id))?;
    store::delete_transaction(&conn, id)?;
    println!("Deleted transaction #{id}: {}", txn.description);
    Ok(())
}
