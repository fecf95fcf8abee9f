//! The persisted link record and the payloads used to create and patch it.

use crate::{LinknotesError, Result};
use serde::{Deserialize, Serialize};

/// Collection used when the caller does not pick one.
pub const UNORGANIZED_COLLECTION: &str = "unorganized";

/// A saved link and its optional note.
///
/// `note` distinguishes "no note provided" (`None`) from a present but empty
/// note (`Some("")`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: String,
    pub url: String,
    pub collection_id: String,
    pub note: Option<String>,
    pub created_at: i64,
    pub modified_at: i64,
}

impl Link {
    /// Validates creation input and builds the payload handed to a gateway.
    ///
    /// The note is kept verbatim; no trimming or normalisation is applied.
    ///
    /// # Errors
    ///
    /// Returns [`LinknotesError::ValidationFailed`] if `url` is empty.
    pub fn create(
        url: impl Into<String>,
        collection_id: Option<String>,
        note: Option<String>,
    ) -> Result<NewLink> {
        let link = NewLink {
            url: url.into(),
            collection_id,
            note,
        };
        link.validate()?;
        Ok(link)
    }

    #[must_use]
    pub fn has_note(&self) -> bool {
        self.note.is_some()
    }

    /// Applies `patch` in place. Returns `true` if the note changed.
    pub fn apply(&mut self, patch: &LinkPatch) -> bool {
        let next = match &patch.note {
            NoteChange::Unchanged => return false,
            NoteChange::Set(text) => Some(text.clone()),
            NoteChange::Remove => None,
        };
        let changed = self.note != next;
        self.note = next;
        changed
    }
}

/// Input for [`PersistenceGateway::create_link`](crate::PersistenceGateway::create_link).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLink {
    pub url: String,
    /// `None` selects the gateway's default collection.
    pub collection_id: Option<String>,
    pub note: Option<String>,
}

impl NewLink {
    /// # Errors
    ///
    /// Returns [`LinknotesError::ValidationFailed`] if the URL is empty.
    pub fn validate(&self) -> Result<()> {
        if self.url.is_empty() {
            return Err(LinknotesError::ValidationFailed(
                "Link URL is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolves the collection, falling back to `default_collection`.
    #[must_use]
    pub fn collection_or<'a>(&'a self, default_collection: &'a str) -> &'a str {
        self.collection_id
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(default_collection)
    }
}

/// What an update does to the stored note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text")]
pub enum NoteChange {
    /// Leave the note as it is.
    #[default]
    Unchanged,
    /// Store the text verbatim. An empty string keeps the note present but empty.
    Set(String),
    /// Reset the note to absent.
    Remove,
}

/// Partial update of a link. Only the note is mutable through this feature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkPatch {
    pub note: NoteChange,
}

impl LinkPatch {
    #[must_use]
    pub fn set_note(text: impl Into<String>) -> Self {
        Self {
            note: NoteChange::Set(text.into()),
        }
    }

    #[must_use]
    pub fn remove_note() -> Self {
        Self {
            note: NoteChange::Remove,
        }
    }
}
