//! SQLite-backed link store.

use crate::{
    device_id_or_random, Link, LinkPatch, LinknotesConfig, LinknotesError, NewLink, Operation,
    OperationLog, OperationSummary, PersistenceGateway, Result, Storage,
};
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;
use uuid::Uuid;

const LINK_COLUMNS: &str = "id, url, collection_id, note, created_at, modified_at";

/// An open link database.
///
/// Every create and update runs in one transaction together with its
/// operation-log entry, so a failed commit leaves both untouched.
pub struct LinkStore {
    storage: Storage,
    operation_log: OperationLog,
    device_id: String,
    default_collection: String,
}

impl LinkStore {
    /// Creates a new database at `path` and records this device in its metadata.
    ///
    /// # Errors
    ///
    /// Returns [`LinknotesError::Database`] for any SQLite failure.
    pub fn create<P: AsRef<Path>>(path: P, config: &LinknotesConfig) -> Result<Self> {
        let storage = Storage::create(&path, config.busy_timeout())?;
        log::info!("created link database at {}", path.as_ref().display());
        Self::init(storage, config)
    }

    /// Opens an existing database at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LinknotesError::InvalidDatabase`] if the file is not a Linknotes
    /// database, or [`LinknotesError::Database`] for any SQLite failure.
    pub fn open<P: AsRef<Path>>(path: P, config: &LinknotesConfig) -> Result<Self> {
        let storage = Storage::open(&path, config.busy_timeout())?;
        log::debug!("opened link database at {}", path.as_ref().display());
        Self::init(storage, config)
    }

    /// Opens `config.database_path`, creating it (and its directory) if missing.
    pub fn open_or_create(config: &LinknotesConfig) -> Result<Self> {
        let path = &config.database_path;
        if path.exists() {
            return Self::open(path, config);
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Self::create(path, config)
    }

    /// A store that lives only as long as the value.
    pub fn in_memory(config: &LinknotesConfig) -> Result<Self> {
        Self::init(Storage::in_memory()?, config)
    }

    fn init(storage: Storage, config: &LinknotesConfig) -> Result<Self> {
        let stored: Option<String> = storage
            .connection()
            .query_row(
                "SELECT value FROM store_meta WHERE key = 'device_id'",
                [],
                |row| row.get(0),
            )
            .optional()?;

        let device_id = match stored {
            Some(id) => id,
            None => {
                let id = device_id_or_random();
                storage.connection().execute(
                    "INSERT INTO store_meta (key, value) VALUES ('device_id', ?)",
                    [&id],
                )?;
                id
            }
        };

        Ok(Self {
            storage,
            operation_log: OperationLog::new(config.operation_log_keep_last),
            device_id,
            default_collection: config.default_collection.clone(),
        })
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &Connection {
        self.storage.connection()
    }

    /// Returns operation summaries matching the given filters, newest first.
    pub fn list_operations(
        &self,
        type_filter: Option<&str>,
        since: Option<i64>,
        until: Option<i64>,
    ) -> Result<Vec<OperationSummary>> {
        self.operation_log
            .list(self.storage.connection(), type_filter, since, until)
    }

    /// Deletes all operations from the log. Returns the number deleted.
    pub fn purge_all_operations(&self) -> Result<usize> {
        self.operation_log.purge_all(self.storage.connection())
    }
}

impl PersistenceGateway for LinkStore {
    fn create_link(&mut self, new_link: NewLink) -> Result<Link> {
        new_link.validate()?;

        let now = chrono::Utc::now().timestamp();
        let link = Link {
            id: Uuid::new_v4().to_string(),
            collection_id: new_link.collection_or(&self.default_collection).to_string(),
            url: new_link.url,
            note: new_link.note,
            created_at: now,
            modified_at: now,
        };

        let tx = self.storage.connection_mut().transaction()?;
        tx.execute(
            "INSERT INTO links (id, url, collection_id, note, created_at, modified_at)
             VALUES (?, ?, ?, ?, ?, ?)",
            rusqlite::params![
                link.id,
                link.url,
                link.collection_id,
                link.note,
                link.created_at,
                link.modified_at,
            ],
        )?;

        let op = Operation::CreateLink {
            operation_id: Uuid::new_v4().to_string(),
            timestamp: now,
            device_id: self.device_id.clone(),
            link_id: link.id.clone(),
            url: link.url.clone(),
            collection_id: link.collection_id.clone(),
            note: link.note.clone(),
        };
        self.operation_log.log(&tx, &op)?;
        self.operation_log.purge_if_needed(&tx)?;

        tx.commit()?;

        log::debug!("created link {} (note: {})", link.id, link.has_note());
        Ok(link)
    }

    fn update_link(&mut self, id: &str, patch: LinkPatch) -> Result<Link> {
        let mut link = self.get_link(id)?;
        if !link.apply(&patch) {
            // Nothing to write; report the stored state.
            return Ok(link);
        }

        let now = chrono::Utc::now().timestamp();
        let tx = self.storage.connection_mut().transaction()?;

        tx.execute(
            "UPDATE links SET note = ?1, modified_at = ?2 WHERE id = ?3",
            rusqlite::params![link.note, now, id],
        )?;

        // The row may have gone between the read above and this write.
        if tx.changes() == 0 {
            return Err(LinknotesError::LinkNotFound(id.to_string()));
        }

        let op = Operation::UpdateNote {
            operation_id: Uuid::new_v4().to_string(),
            timestamp: now,
            device_id: self.device_id.clone(),
            link_id: id.to_string(),
            note: link.note.clone(),
        };
        self.operation_log.log(&tx, &op)?;
        self.operation_log.purge_if_needed(&tx)?;

        tx.commit()?;

        link.modified_at = now;
        log::debug!("updated note of link {id}");
        Ok(link)
    }

    fn get_link(&self, id: &str) -> Result<Link> {
        query_link(self.storage.connection(), id)?
            .ok_or_else(|| LinknotesError::LinkNotFound(id.to_string()))
    }

    fn list_links(&self) -> Result<Vec<Link>> {
        let mut stmt = self.storage.connection().prepare(&format!(
            "SELECT {LINK_COLUMNS} FROM links ORDER BY created_at DESC, rowid DESC"
        ))?;
        let links = stmt
            .query_map([], map_link_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(links)
    }
}

fn query_link(conn: &Connection, id: &str) -> Result<Option<Link>> {
    Ok(conn
        .query_row(
            &format!("SELECT {LINK_COLUMNS} FROM links WHERE id = ?"),
            [id],
            map_link_row,
        )
        .optional()?)
}

/// Row-mapping closure for `rusqlite::Row` → [`Link`], in `LINK_COLUMNS` order.
fn map_link_row(row: &rusqlite::Row) -> rusqlite::Result<Link> {
    Ok(Link {
        id: row.get(0)?,
        url: row.get(1)?,
        collection_id: row.get(2)?,
        note: row.get(3)?,
        created_at: row.get(4)?,
        modified_at: row.get(5)?,
    })
}
