pub mod schema;

use crate::error::AppError;
use rusqlite::Connection;
use std::path::Path;

/// Opens the database file and initializes the schema
pub fn init_database(path: &Path) -> Result<Connection, AppError> {
    // Sicherstellen dass das Verzeichnis existiert
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let conn = Connection::open(path)?;
    schema::init_schema(&conn)?;

    Ok(conn)
}
