//! Core library for Linknotes — saved links that carry an optional free-text note.
//!
//! Links are committed through a [`PersistenceGateway`]; [`LinkStore`] is the
//! SQLite implementation and [`MemoryGateway`] the in-process one. A
//! [`CreationForm`] drives link creation and a [`NoteEditor`] drives viewing
//! and editing the note of an open link.
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use core::{
    config::{
        config_file_path, default_data_directory, load_config, save_config, LinknotesConfig,
    },
    creation::CreationForm,
    device::{device_id_or_random, get_device_id},
    editor::{EditorMode, NoteEditor, NoteView, NO_NOTES_MESSAGE},
    error::{LinknotesError, Result},
    gateway::PersistenceGateway,
    link::{Link, LinkPatch, NewLink, NoteChange, UNORGANIZED_COLLECTION},
    memory::MemoryGateway,
    notification::{LogNotifier, Notification, NotificationQueue, Notifier},
    operation::Operation,
    operation_log::{OperationLog, OperationSummary, MIN_KEEP_LAST},
    storage::Storage,
    store::LinkStore,
};
