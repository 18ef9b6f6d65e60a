//! Local persistence of the captured camera photo.
//!
//! The table holds at most one row (fixed id 1); saving replaces the
//! previous capture.

use crate::error::AppError;
use crate::models::CapturedPhoto;
use rusqlite::{params, Connection};

/// Stores the captured photo, replacing any previous one
pub fn save_captured_photo(conn: &Connection, photo: &CapturedPhoto) -> Result<(), AppError> {
    conn.execute(
        "INSERT OR REPLACE INTO images (id, uri, timestamp) VALUES (1, ?1, ?2)",
        params![&photo.uri, photo.timestamp],
    )?;

    log::debug!("Captured photo stored: {}", photo.uri);
    Ok(())
}

/// Loads the most recent captured photo, if one was ever stored
pub fn load_captured_photo(conn: &Connection) -> Result<Option<CapturedPhoto>, AppError> {
    let mut stmt = conn.prepare("SELECT uri, timestamp FROM images WHERE id = 1")?;

    let mut rows = stmt.query_map([], |row| CapturedPhoto::try_from(row))?;
    match rows.next() {
        Some(row) => Ok(Some(row?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        database::schema::init_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn test_save_and_load_captured_photo() {
        let conn = test_conn();

        let photo = CapturedPhoto::new("content://media/external/images/42".to_string());
        save_captured_photo(&conn, &photo).unwrap();

        let loaded = load_captured_photo(&conn).unwrap().unwrap();
        assert_eq!(loaded, photo);
    }

    #[test]
    fn test_load_without_capture_is_none() {
        let conn = test_conn();
        assert!(load_captured_photo(&conn).unwrap().is_none());
    }

    #[test]
    fn test_latest_capture_replaces_previous() {
        let conn = test_conn();

        save_captured_photo(&conn, &CapturedPhoto::new("file:///old.jpg".to_string())).unwrap();
        save_captured_photo(&conn, &CapturedPhoto::new("file:///new.jpg".to_string())).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM images", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);

        let loaded = load_captured_photo(&conn).unwrap().unwrap();
        assert_eq!(loaded.uri, "file:///new.jpg");
    }
}
