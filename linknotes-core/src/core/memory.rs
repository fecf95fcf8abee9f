//! In-process gateway for tests and sessions that do not need to survive a restart.

use crate::{
    Link, LinkPatch, LinknotesError, NewLink, PersistenceGateway, Result, UNORGANIZED_COLLECTION,
};
use std::collections::HashMap;
use uuid::Uuid;

/// Keeps links in a map keyed by id.
#[derive(Debug, Clone)]
pub struct MemoryGateway {
    links: HashMap<String, Link>,
    default_collection: String,
}

impl Default for MemoryGateway {
    fn default() -> Self {
        Self::new(UNORGANIZED_COLLECTION)
    }
}

impl MemoryGateway {
    pub fn new(default_collection: impl Into<String>) -> Self {
        Self {
            links: HashMap::new(),
            default_collection: default_collection.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl PersistenceGateway for MemoryGateway {
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
        self.links.insert(link.id.clone(), link.clone());
        Ok(link)
    }

    fn update_link(&mut self, id: &str, patch: LinkPatch) -> Result<Link> {
        let link = self
            .links
            .get_mut(id)
            .ok_or_else(|| LinknotesError::LinkNotFound(id.to_string()))?;
        if link.apply(&patch) {
            link.modified_at = chrono::Utc::now().timestamp();
        }
        Ok(link.clone())
    }

    fn get_link(&self, id: &str) -> Result<Link> {
        self.links
            .get(id)
            .cloned()
            .ok_or_else(|| LinknotesError::LinkNotFound(id.to_string()))
    }

    fn list_links(&self) -> Result<Vec<Link>> {
        let mut links: Vec<Link> = self.links.values().cloned().collect();
        links.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(links)
    }
}
