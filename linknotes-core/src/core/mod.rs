//! Internal domain modules for the Linknotes core library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod config;
pub mod creation;
pub mod device;
pub mod editor;
pub mod error;
pub mod gateway;
pub mod link;
pub mod memory;
pub mod notification;
pub mod operation;
pub mod operation_log;
pub mod storage;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

#[doc(inline)]
pub use creation::CreationForm;
#[doc(inline)]
pub use device::{device_id_or_random, get_device_id};
#[doc(inline)]
pub use editor::{NoteEditor, NoteView};
#[doc(inline)]
pub use error::{LinknotesError, Result};
#[doc(inline)]
pub use gateway::PersistenceGateway;
#[doc(inline)]
pub use link::{Link, LinkPatch, NewLink, NoteChange};
#[doc(inline)]
pub use memory::MemoryGateway;
#[doc(inline)]
pub use notification::{Notification, Notifier};
#[doc(inline)]
pub use operation::Operation;
#[doc(inline)]
pub use operation_log::{OperationLog, OperationSummary, MIN_KEEP_LAST};
#[doc(inline)]
pub use storage::Storage;
#[doc(inline)]
pub use store::LinkStore;
