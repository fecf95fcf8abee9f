//! The "create new link" form and its submission.

use crate::{
    Link, LinknotesError, Notification, Notifier, PersistenceGateway, Result,
};

/// State of an open creation form.
///
/// The note field sits behind the "more options" disclosure. The disclosure is
/// a presentation toggle only: collapsing it keeps whatever was typed.
#[derive(Debug, Clone, Default)]
pub struct CreationForm {
    url: String,
    collection_id: Option<String>,
    note: Option<String>,
    more_options_expanded: bool,
    closed: bool,
}

impl CreationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    pub fn collection_id(&self) -> Option<&str> {
        self.collection_id.as_deref()
    }

    /// `None` leaves the choice to the gateway's default collection.
    pub fn set_collection(&mut self, collection_id: Option<String>) {
        self.collection_id = collection_id;
    }

    pub fn more_options_expanded(&self) -> bool {
        self.more_options_expanded
    }

    pub fn toggle_more_options(&mut self) {
        self.more_options_expanded = !self.more_options_expanded;
    }

    /// Whether the note field is currently on screen.
    pub fn note_field_visible(&self) -> bool {
        self.more_options_expanded && !self.closed
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Fills the note field.
    ///
    /// # Errors
    ///
    /// Returns [`LinknotesError::InvalidState`] while "more options" is collapsed.
    pub fn set_note(&mut self, text: impl Into<String>) -> Result<()> {
        if !self.note_field_visible() {
            return Err(LinknotesError::InvalidState(
                "Expand more options to add a note".to_string(),
            ));
        }
        self.note = Some(text.into());
        Ok(())
    }

    /// `true` once a submission succeeded.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Creates the link through `gateway`.
    ///
    /// On success the form closes and `notifier` receives
    /// [`Notification::LinkCreated`]. On any error the form stays open with its
    /// input intact; gateway failures are also reported to `notifier`.
    ///
    /// # Errors
    ///
    /// Returns [`LinknotesError::InvalidState`] if the form already closed,
    /// [`LinknotesError::ValidationFailed`] if the URL is empty, or whatever
    /// the gateway reported.
    pub fn submit<G: PersistenceGateway + ?Sized>(
        &mut self,
        gateway: &mut G,
        notifier: &dyn Notifier,
    ) -> Result<Link> {
        if self.closed {
            return Err(LinknotesError::InvalidState(
                "Link was already created".to_string(),
            ));
        }

        let new_link = Link::create(
            self.url.clone(),
            self.collection_id.clone(),
            self.note.clone(),
        )?;

        match gateway.create_link(new_link) {
            Ok(link) => {
                self.closed = true;
                notifier.notify(Notification::LinkCreated {
                    link_id: link.id.clone(),
                });
                log::info!("created link {} in {}", link.id, link.collection_id);
                Ok(link)
            }
            Err(e) => {
                log::warn!("creating link for {} failed: {e}", self.url);
                if e.is_persistence_failure() {
                    notifier.notify(Notification::Failed {
                        message: e.user_message(),
                    });
                }
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::FailingGateway;
    use crate::{
        LinkStore, LinknotesConfig, MemoryGateway, NoteEditor, NoteView, NotificationQueue,
        NO_NOTES_MESSAGE,
    };

    fn store() -> LinkStore {
        LinkStore::in_memory(&LinknotesConfig::default()).unwrap()
    }

    fn create(store: &mut LinkStore, url: &str, note: Option<&str>) -> Link {
        let notifier = NotificationQueue::new();
        let mut form = CreationForm::new();
        form.set_url(url);
        if let Some(note) = note {
            form.toggle_more_options();
            form.set_note(note).unwrap();
        }
        let link = form.submit(store, &notifier).unwrap();
        assert_eq!(notifier.drain()[0].message(), "Link created");
        link
    }

    #[test]
    fn test_note_field_hidden_until_more_options() {
        let mut form = CreationForm::new();
        assert!(!form.note_field_visible());
        assert!(matches!(form.set_note("x"), Err(LinknotesError::InvalidState(_))));

        form.toggle_more_options();
        assert!(form.note_field_visible());
        form.set_note("x").unwrap();

        form.toggle_more_options();
        assert!(!form.note_field_visible());
        assert_eq!(form.note(), Some("x"));
    }

    #[test]
    fn test_empty_url_keeps_form_open() {
        let mut gateway = MemoryGateway::default();
        let notifier = NotificationQueue::new();
        let mut form = CreationForm::new();
        form.toggle_more_options();
        form.set_note("draft note").unwrap();

        let result = form.submit(&mut gateway, &notifier);
        assert!(matches!(result, Err(LinknotesError::ValidationFailed(_))));
        assert!(!form.is_closed());
        assert_eq!(form.note(), Some("draft note"));
        assert!(gateway.is_empty());
        assert!(notifier.is_empty());
    }

    #[test]
    fn test_collection_defaults_to_unorganized() {
        let mut gateway = MemoryGateway::default();
        let mut form = CreationForm::new();
        form.set_url("https://example.com/default-collection");

        let link = form.submit(&mut gateway, &NotificationQueue::new()).unwrap();
        assert_eq!(link.collection_id, "unorganized");

        let mut form = CreationForm::new();
        form.set_url("https://example.com/picked");
        form.set_collection(Some("reading".to_string()));
        let link = form.submit(&mut gateway, &NotificationQueue::new()).unwrap();
        assert_eq!(link.collection_id, "reading");
    }

    #[test]
    fn test_expanded_but_unfilled_note_stays_absent() {
        let mut gateway = MemoryGateway::default();
        let mut form = CreationForm::new();
        form.set_url("https://example.com/unfilled");
        form.toggle_more_options();

        let link = form.submit(&mut gateway, &NotificationQueue::new()).unwrap();
        assert_eq!(link.note, None);
    }

    #[test]
    fn test_gateway_failure_keeps_form_for_retry() {
        let mut gateway = FailingGateway::new(MemoryGateway::default());
        let notifier = NotificationQueue::new();
        let mut form = CreationForm::new();
        form.set_url("https://example.com/retry");
        form.toggle_more_options();
        form.set_note("keep me").unwrap();

        gateway.fail_next();
        let err = form.submit(&mut gateway, &notifier).unwrap_err();
        assert!(err.is_persistence_failure());
        assert!(!form.is_closed());
        assert_eq!(form.url(), "https://example.com/retry");
        assert!(!notifier.drain()[0].is_success());

        let link = form.submit(&mut gateway, &notifier).unwrap();
        assert_eq!(link.note.as_deref(), Some("keep me"));
        assert_eq!(gateway.list_links().unwrap().len(), 1);
    }

    #[test]
    fn test_closed_form_rejects_duplicate_submission() {
        let mut gateway = FailingGateway::new(MemoryGateway::default());
        let notifier = NotificationQueue::new();
        let mut form = CreationForm::new();
        form.set_url("https://example.com/once");

        form.submit(&mut gateway, &notifier).unwrap();
        assert!(form.is_closed());
        assert!(!form.note_field_visible());

        let again = form.submit(&mut gateway, &notifier);
        assert!(matches!(again, Err(LinknotesError::InvalidState(_))));
        assert_eq!(gateway.writes_attempted, 1);
        assert_eq!(gateway.list_links().unwrap().len(), 1);
    }

    #[test]
    fn test_note_added_during_creation_is_displayed() {
        let mut store = store();
        let note = "This is a test note added during creation.";
        let link = create(&mut store, "https://example.com/test-link-1", Some(note));

        let editor = NoteEditor::open(&store, &link.id).unwrap();
        assert_eq!(editor.render(), NoteView::ReadOnly(note));
    }

    #[test]
    fn test_note_can_be_edited_after_creation() {
        let mut store = store();
        let link = create(
            &mut store,
            "https://example.com/editable-link",
            Some("Initial note for editing."),
        );
        let notifier = NotificationQueue::new();

        let mut editor = NoteEditor::open(&store, &link.id).unwrap();
        editor.start_edit().unwrap();
        assert_eq!(editor.render(), NoteView::Editable("Initial note for editing."));
        editor.set_draft("This note has been updated.").unwrap();
        editor.save(&mut store, &notifier).unwrap();

        assert_eq!(notifier.drain()[0].message(), "Updated");
        assert!(!editor.is_editing());
        assert_eq!(editor.render(), NoteView::ReadOnly("This note has been updated."));

        let reopened = NoteEditor::open(&store, &link.id).unwrap();
        assert_eq!(reopened.render(), NoteView::ReadOnly("This note has been updated."));
    }

    #[test]
    fn test_note_can_be_added_later() {
        let mut store = store();
        let link = create(&mut store, "https://example.com/optional-notes", None);
        assert_eq!(link.note, None);

        let mut editor = NoteEditor::open(&store, &link.id).unwrap();
        assert_eq!(editor.render(), NoteView::NoNotes);
        assert_eq!(NO_NOTES_MESSAGE, "No notes provided");

        editor.start_edit().unwrap();
        editor.set_draft("Notes added after link creation.").unwrap();
        editor.save(&mut store, &NotificationQueue::new()).unwrap();

        assert_eq!(
            editor.render(),
            NoteView::ReadOnly("Notes added after link creation.")
        );
        assert_eq!(
            store.get_link(&link.id).unwrap().note.as_deref(),
            Some("Notes added after link creation.")
        );
    }
}
