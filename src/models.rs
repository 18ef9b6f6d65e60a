use rusqlite::Row;

/// The most recent captured camera photo, kept as a single database row
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedPhoto {
    pub uri: String,
    /// Capture time in milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl CapturedPhoto {
    /// Creates a record for a photo captured right now
    pub fn new(uri: String) -> Self {
        Self {
            uri,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}

impl<'r> TryFrom<&Row<'r>> for CapturedPhoto {
    type Error = rusqlite::Error;

    fn try_from(row: &Row<'r>) -> Result<Self, Self::Error> {
        let uri: String = row.get(0)?;
        let timestamp: i64 = row.get(1)?;
        Ok(Self { uri, timestamp })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_captured_photo_stamps_current_time() {
        let before = chrono::Utc::now().timestamp_millis();
        let photo = CapturedPhoto::new("content://media/external/images/42".to_string());
        let after = chrono::Utc::now().timestamp_millis();

        assert!(photo.timestamp >= before && photo.timestamp <= after);
    }
}
