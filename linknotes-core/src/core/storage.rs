use crate::Result;
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

/// Owns the SQLite connection behind a [`LinkStore`](crate::LinkStore).
pub struct Storage {
    conn: Connection,
}

impl Storage {
    pub fn create<P: AsRef<Path>>(path: P, busy_timeout: Duration) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.busy_timeout(busy_timeout)?;
        conn.execute_batch(include_str!("schema.sql"))?;
        Ok(Self { conn })
    }

    /// In-memory database with the full schema. Contents vanish on drop.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(include_str!("schema.sql"))?;
        Ok(Self { conn })
    }

    pub fn open<P: AsRef<Path>>(path: P, busy_timeout: Duration) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.busy_timeout(busy_timeout)?;

        // Validate database structure
        let table_count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master
             WHERE type='table'
             AND name IN ('links', 'operations', 'store_meta')",
            [],
            |row| row.get(0),
        )?;

        if table_count != 3 {
            return Err(crate::LinknotesError::InvalidDatabase(
                "Not a valid Linknotes database".to_string(),
            ));
        }

        // Migrate: databases written before notes existed lack the column
        let column_exists: bool = conn.query_row(
            "SELECT COUNT(*) FROM pragma_table_info('links') WHERE name='note'",
            [],
            |row| row.get::<_, i64>(0).map(|count| count > 0),
        )?;

        if !column_exists {
            log::info!("migrating links table: adding note column");
            conn.execute("ALTER TABLE links ADD COLUMN note TEXT", [])?;
        }

        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn connection_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }
}
