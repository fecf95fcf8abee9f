//! View/edit state for the note shown in an open link-details view.
//!
//! A [`NoteEditor`] is created when the details view opens and dropped when it
//! closes. The draft lives only in [`EditorMode::Editing`]; nothing reaches the
//! gateway until [`NoteEditor::save`] succeeds.

use crate::{
    Link, LinkPatch, LinknotesError, Notification, Notifier, PersistenceGateway, Result,
};

/// Shown in view mode when the link has no note at all.
pub const NO_NOTES_MESSAGE: &str = "No notes provided";

/// Presentation mode of the note field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Viewing,
    Editing { draft: String },
}

/// What the details view should display for the note.
///
/// Exactly one variant exists at a time, so the read-only block and the
/// editable field can never be shown together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteView<'a> {
    /// Viewing a link without a note; display [`NO_NOTES_MESSAGE`].
    NoNotes,
    /// Viewing a present note (possibly empty) as read-only text.
    ReadOnly(&'a str),
    /// Editing; the multi-line field is pre-filled with the draft.
    Editable(&'a str),
}

#[derive(Debug, Clone)]
pub struct NoteEditor {
    link_id: String,
    saved_note: Option<String>,
    mode: EditorMode,
}

impl NoteEditor {
    /// Opens the editor for the link with `link_id`, starting in view mode.
    ///
    /// # Errors
    ///
    /// Returns [`LinknotesError::LinkNotFound`] if the link does not exist.
    pub fn open<G: PersistenceGateway + ?Sized>(gateway: &G, link_id: &str) -> Result<Self> {
        Ok(Self::for_link(&gateway.get_link(link_id)?))
    }

    /// Builds a view-mode editor from an already loaded link.
    #[must_use]
    pub fn for_link(link: &Link) -> Self {
        Self {
            link_id: link.id.clone(),
            saved_note: link.note.clone(),
            mode: EditorMode::Viewing,
        }
    }

    pub fn link_id(&self) -> &str {
        &self.link_id
    }

    /// The note as last confirmed by the gateway.
    pub fn saved_note(&self) -> Option<&str> {
        self.saved_note.as_deref()
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditorMode::Editing { .. })
    }

    pub fn draft(&self) -> Option<&str> {
        match &self.mode {
            EditorMode::Editing { draft } => Some(draft),
            EditorMode::Viewing => None,
        }
    }

    /// Switches to edit mode with the draft pre-filled from the saved note.
    ///
    /// # Errors
    ///
    /// Returns [`LinknotesError::InvalidState`] if already editing; the
    /// current draft is left alone.
    pub fn start_edit(&mut self) -> Result<()> {
        if self.is_editing() {
            return Err(LinknotesError::InvalidState(
                "Note is already being edited".to_string(),
            ));
        }
        self.mode = EditorMode::Editing {
            draft: self.saved_note.clone().unwrap_or_default(),
        };
        Ok(())
    }

    /// Replaces the draft text.
    ///
    /// # Errors
    ///
    /// Returns [`LinknotesError::InvalidState`] outside edit mode.
    pub fn set_draft(&mut self, text: impl Into<String>) -> Result<()> {
        match &mut self.mode {
            EditorMode::Editing { draft } => {
                *draft = text.into();
                Ok(())
            }
            EditorMode::Viewing => Err(not_editing()),
        }
    }

    /// Commits the draft through `gateway` and returns to view mode.
    ///
    /// On failure the editor stays in edit mode with the draft intact so the
    /// user can retry, and `notifier` receives [`Notification::Failed`].
    ///
    /// # Errors
    ///
    /// Returns [`LinknotesError::InvalidState`] outside edit mode, or whatever
    /// the gateway reported.
    pub fn save<G: PersistenceGateway + ?Sized>(
        &mut self,
        gateway: &mut G,
        notifier: &dyn Notifier,
    ) -> Result<()> {
        let draft = self.draft().ok_or_else(not_editing)?.to_string();

        match gateway.update_link(&self.link_id, LinkPatch::set_note(draft)) {
            Ok(link) => {
                self.saved_note = link.note;
                self.mode = EditorMode::Viewing;
                notifier.notify(Notification::Updated {
                    link_id: self.link_id.clone(),
                });
                Ok(())
            }
            Err(e) => {
                log::warn!("saving note of link {} failed: {e}", self.link_id);
                notifier.notify(Notification::Failed {
                    message: e.user_message(),
                });
                Err(e)
            }
        }
    }

    /// Leaves edit mode without persisting. Does nothing in view mode.
    pub fn cancel(&mut self) {
        self.mode = EditorMode::Viewing;
    }

    pub fn render(&self) -> NoteView<'_> {
        match (&self.mode, &self.saved_note) {
            (EditorMode::Editing { draft }, _) => NoteView::Editable(draft),
            (EditorMode::Viewing, Some(note)) => NoteView::ReadOnly(note),
            (EditorMode::Viewing, None) => NoteView::NoNotes,
        }
    }
}

fn not_editing() -> LinknotesError {
    LinknotesError::InvalidState("Note is not being edited".to_string())
}
