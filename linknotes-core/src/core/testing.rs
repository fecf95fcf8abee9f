//! Test doubles shared by the editor and creation-flow tests.

use crate::{Link, LinkPatch, LinknotesError, MemoryGateway, NewLink, PersistenceGateway, Result};
use std::cell::Cell;

/// Wraps a [`MemoryGateway`] and fails the next write when armed.
pub struct FailingGateway {
    inner: MemoryGateway,
    fail_next: Cell<bool>,
    pub writes_attempted: usize,
}

impl FailingGateway {
    pub fn new(inner: MemoryGateway) -> Self {
        Self {
            inner,
            fail_next: Cell::new(false),
            writes_attempted: 0,
        }
    }

    pub fn fail_next(&self) {
        self.fail_next.set(true);
    }

    fn check(&mut self) -> Result<()> {
        self.writes_attempted += 1;
        if self.fail_next.replace(false) {
            return Err(LinknotesError::Persistence("simulated outage".to_string()));
        }
        Ok(())
    }
}

impl PersistenceGateway for FailingGateway {
    fn create_link(&mut self, new_link: NewLink) -> Result<Link> {
        self.check()?;
        self.inner.create_link(new_link)
    }

    fn update_link(&mut self, id: &str, patch: LinkPatch) -> Result<Link> {
        self.check()?;
        self.inner.update_link(id, patch)
    }

    fn get_link(&self, id: &str) -> Result<Link> {
        self.inner.get_link(id)
    }

    fn list_links(&self) -> Result<Vec<Link>> {
        self.inner.list_links()
    }
}
