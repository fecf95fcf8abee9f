//! Durable, size-bounded operation log for a link store.

use crate::{Operation, Result};
use rusqlite::{Connection, Transaction};
use serde::{Deserialize, Serialize};

/// Lower bound on retained operations, so a purge never drops the entry just written.
pub const MIN_KEEP_LAST: usize = 1;

/// One row of the operation log, without the full payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationSummary {
    pub operation_id: String,
    pub timestamp: i64,
    pub device_id: String,
    pub operation_type: String,
    pub link_id: String,
}

/// Records link mutations to the `operations` table and purges stale entries.
///
/// Only the most recent `keep_last` operations are retained.
pub struct OperationLog {
    keep_last: usize,
}

impl OperationLog {
    /// Creates a new `OperationLog` retaining `keep_last` operations, clamped
    /// to at least [`MIN_KEEP_LAST`].
    pub fn new(keep_last: usize) -> Self {
        if keep_last < MIN_KEEP_LAST {
            log::warn!("operation log keep_last {keep_last} raised to {MIN_KEEP_LAST}");
        }
        Self {
            keep_last: keep_last.max(MIN_KEEP_LAST),
        }
    }

    pub fn keep_last(&self) -> usize {
        self.keep_last
    }

    /// Serialises `op` and appends it to the `operations` table within `tx`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LinknotesError::Database`] if the INSERT fails, or
    /// [`crate::LinknotesError::Json`] if `op` cannot be serialised.
    pub fn log(&self, tx: &Transaction, op: &Operation) -> Result<()> {
        let op_json = serde_json::to_string(op)?;

        tx.execute(
            "INSERT INTO operations (operation_id, timestamp, device_id, operation_type, link_id, operation_data)
             VALUES (?, ?, ?, ?, ?, ?)",
            rusqlite::params![
                op.operation_id(),
                op.timestamp(),
                op.device_id(),
                op.type_name(),
                op.link_id(),
                op_json,
            ],
        )?;

        Ok(())
    }

    /// Deletes all but the newest `keep_last` operations.
    ///
    /// Call this after every [`log`](Self::log) call to keep the table bounded in size.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LinknotesError::Database`] if the DELETE fails.
    pub fn purge_if_needed(&self, tx: &Transaction) -> Result<()> {
        tx.execute(
            "DELETE FROM operations WHERE id NOT IN (
                SELECT id FROM operations ORDER BY id DESC LIMIT ?
            )",
            [self.keep_last as i64],
        )?;
        Ok(())
    }

    /// Returns summaries matching the filters, newest first.
    ///
    /// `since` and `until` are inclusive Unix timestamps.
    pub fn list(
        &self,
        conn: &Connection,
        type_filter: Option<&str>,
        since: Option<i64>,
        until: Option<i64>,
    ) -> Result<Vec<OperationSummary>> {
        let mut stmt = conn.prepare(
            "SELECT operation_id, timestamp, device_id, operation_type, link_id
             FROM operations
             WHERE (?1 IS NULL OR operation_type = ?1)
               AND (?2 IS NULL OR timestamp >= ?2)
               AND (?3 IS NULL OR timestamp <= ?3)
             ORDER BY id DESC",
        )?;
        let rows = stmt
            .query_map(rusqlite::params![type_filter, since, until], |row| {
                Ok(OperationSummary {
                    operation_id: row.get(0)?,
                    timestamp: row.get(1)?,
                    device_id: row.get(2)?,
                    operation_type: row.get(3)?,
                    link_id: row.get(4)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    /// Deletes every logged operation. Returns the number removed.
    pub fn purge_all(&self, conn: &Connection) -> Result<usize> {
        Ok(conn.execute("DELETE FROM operations", [])?)
    }
}
