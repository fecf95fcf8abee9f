//! Operation types recorded in the Linknotes operation log.

use serde::{Deserialize, Serialize};

/// A single link mutation recorded in the operation log.
///
/// Every variant carries a stable `operation_id`, a wall-clock `timestamp`,
/// and the `device_id` of the originating machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Operation {
    /// A new link was saved.
    CreateLink {
        /// Stable UUID for this operation.
        operation_id: String,
        /// Unix timestamp (seconds) when the operation was created.
        timestamp: i64,
        /// ID of the device that performed this operation.
        device_id: String,
        /// ID assigned to the new link.
        link_id: String,
        /// URL of the new link.
        url: String,
        /// Collection the link was filed under.
        collection_id: String,
        /// Note supplied at creation, if any.
        note: Option<String>,
    },
    /// The note of an existing link was set, emptied or removed.
    UpdateNote {
        /// Stable UUID for this operation.
        operation_id: String,
        /// Unix timestamp (seconds) when the operation was created.
        timestamp: i64,
        /// ID of the device that performed this operation.
        device_id: String,
        /// ID of the link whose note changed.
        link_id: String,
        /// The note after the update; `None` when it was removed.
        note: Option<String>,
    },
}

impl Operation {
    /// Returns the stable identifier for this operation.
    #[must_use]
    pub fn operation_id(&self) -> &str {
        match self {
            Self::CreateLink { operation_id, .. } | Self::UpdateNote { operation_id, .. } => {
                operation_id
            }
        }
    }

    /// Returns the wall-clock Unix timestamp (seconds) when this operation was created.
    #[must_use]
    pub fn timestamp(&self) -> i64 {
        match self {
            Self::CreateLink { timestamp, .. } | Self::UpdateNote { timestamp, .. } => *timestamp,
        }
    }

    /// Returns the device identifier of the machine that created this operation.
    #[must_use]
    pub fn device_id(&self) -> &str {
        match self {
            Self::CreateLink { device_id, .. } | Self::UpdateNote { device_id, .. } => device_id,
        }
    }

    /// Returns the ID of the link this operation touched.
    #[must_use]
    pub fn link_id(&self) -> &str {
        match self {
            Self::CreateLink { link_id, .. } | Self::UpdateNote { link_id, .. } => link_id,
        }
    }

    /// Returns the variant name stored in the `operation_type` column.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::CreateLink { .. } => "CreateLink",
            Self::UpdateNote { .. } => "UpdateNote",
        }
    }
}
