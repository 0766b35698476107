//! Named-slot access contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the whole-blob read/write API the store persists through.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - A write replaces the slot's previous blob wholesale.
//! - A read of an absent slot is `Ok(None)`, not an error.

use crate::db::DbResult;
use rusqlite::{params, Connection, OptionalExtension};

/// Whole-blob key-value contract for a local named slot.
///
/// Implementations back a single fixed key with one opaque payload; there is
/// no partial update, append, or versioning.
pub trait SlotStore {
    /// Reads the blob stored under `key`, or `None` when the slot is absent.
    fn read_slot(&self, key: &str) -> DbResult<Option<Vec<u8>>>;

    /// Writes `value` under `key`, replacing any previous blob.
    fn write_slot(&mut self, key: &str, value: &[u8]) -> DbResult<()>;
}

/// SQLite-backed named-slot store over the `slots` table.
pub struct SqliteSlotStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSlotStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SlotStore for SqliteSlotStore<'_> {
    fn read_slot(&self, key: &str) -> DbResult<Option<Vec<u8>>> {
        let value = self
            .conn
            .query_row("SELECT value FROM slots WHERE key = ?1;", [key], |row| {
                row.get::<_, Vec<u8>>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn write_slot(&mut self, key: &str, value: &[u8]) -> DbResult<()> {
        self.conn.execute(
            "INSERT INTO slots (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}
