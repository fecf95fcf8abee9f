//! The commit boundary between the note editor, the creation flow and storage.

use crate::{Link, LinkPatch, NewLink, Result};

/// Durable create/update contract for links.
///
/// Implementations assign ids and timestamps and apply the default collection.
/// A call either commits fully or leaves stored state untouched; callers
/// decide whether to resubmit.
pub trait PersistenceGateway {
    /// Stores a new link and returns it as persisted.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LinknotesError::ValidationFailed`] if the URL is empty,
    /// or a persistence error if the commit fails.
    fn create_link(&mut self, new_link: NewLink) -> Result<Link>;

    /// Applies `patch` to the link with `id` and returns the updated link.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LinknotesError::LinkNotFound`] if `id` is unknown, or
    /// a persistence error if the commit fails.
    fn update_link(&mut self, id: &str, patch: LinkPatch) -> Result<Link>;

    /// Fetches a single link.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LinknotesError::LinkNotFound`] if `id` is unknown.
    fn get_link(&self, id: &str) -> Result<Link>;

    /// Returns every link, newest first.
    fn list_links(&self) -> Result<Vec<Link>>;
}

impl<G: PersistenceGateway + ?Sized> PersistenceGateway for Box<G> {
    fn create_link(&mut self, new_link: NewLink) -> Result<Link> {
        (**self).create_link(new_link)
    }

    fn update_link(&mut self, id: &str, patch: LinkPatch) -> Result<Link> {
        (**self).update_link(id, patch)
    }

    fn get_link(&self, id: &str) -> Result<Link> {
        (**self).get_link(id)
    }

    fn list_links(&self) -> Result<Vec<Link>> {
        (**self).list_links()
    }
}
