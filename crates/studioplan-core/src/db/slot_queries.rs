//! Slot read, write, and clear queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, Result};

const SELECT_SLOT_SQL: &str = "SELECT value FROM slots WHERE key = ?1";
const UPSERT_SLOT_SQL: &str = "INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_SLOT_SQL: &str = "DELETE FROM slots WHERE key = ?1";

impl super::Database {
    /// Reads the value stored under `key`, if any.
    pub fn read_slot(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_SLOT_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read storage slot")
    }

    /// Replaces the whole value stored under `key`.
    pub fn write_slot(&mut self, key: &str, value: &str) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(UPSERT_SLOT_SQL, params![key, value, now])
            .db_context("Failed to write storage slot")?;
        Ok(())
    }

    /// Removes the value stored under `key`. Clearing an empty slot is a no-op.
    pub fn clear_slot(&mut self, key: &str) -> Result<()> {
        self.connection
            .execute(DELETE_SLOT_SQL, params![key])
            .db_context("Failed to clear storage slot")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::NamedTempFile;

    use super::super::Database;

    fn create_test_db() -> (NamedTempFile, Database) {
        let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
        let db = Database::new(temp_file.path()).expect("Failed to create test database");
        (temp_file, db)
    }

    #[test]
    fn test_read_missing_slot() {
        let (_temp_file, db) = create_test_db();
        assert_eq!(db.read_slot("nothing").unwrap(), None);
    }

    #[test]
    fn test_write_then_overwrite_slot() {
        let (_temp_file, mut db) = create_test_db();

        db.write_slot("plans", "[]").unwrap();
        assert_eq!(db.read_slot("plans").unwrap().as_deref(), Some("[]"));

        db.write_slot("plans", "[1]").unwrap();
        assert_eq!(db.read_slot("plans").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_clear_slot() {
        let (_temp_file, mut db) = create_test_db();

        db.write_slot("plans", "[]").unwrap();
        db.clear_slot("plans").unwrap();
        db.clear_slot("plans").unwrap();
        assert_eq!(db.read_slot("plans").unwrap(), None);
    }

    #[test]
    fn test_slots_are_independent() {
        let (_temp_file, mut db) = create_test_db();

        db.write_slot("a", "1").unwrap();
        db.write_slot("b", "2").unwrap();
        db.clear_slot("a").unwrap();
        assert_eq!(db.read_slot("b").unwrap().as_deref(), Some("2"));
    }
}
