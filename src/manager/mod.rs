//! Record manager
//!
//! Owns the authoritative list of student records, the filter state and the
//! single create/edit form. Every mutation is one request to the store
//! followed by a full [`RecordManager::list_all`]; the list is only ever
//! replaced wholesale, never patched.
//!
//! All operations take `&mut self`, so two of them can never interleave.

pub mod confirm;
pub mod form;

pub use confirm::{Confirm, ConfirmPrompt, DeleteOutcome};
pub use form::{FormState, StudentForm};

use crate::core::auth::Session;
use crate::core::error::{AdminError, Result};
use crate::core::notification::{Notification, Notifications};
use crate::core::query::{DEFAULT_PAGE_SIZE, DerivedView, FilterState, GroupFilter};
use crate::core::service::StudentStore;
use crate::core::student::{StudentFields, StudentId, StudentRecord};
use crate::core::validation::{DraftField, StudentDraft};

pub const ADDED_MESSAGE: &str = "Student added successfully!";
pub const UPDATED_MESSAGE: &str = "Student updated successfully!";
pub const DELETED_MESSAGE: &str = "Student deleted successfully!";

pub struct RecordManager<S> {
    store: S,
    session: Session,
    records: Vec<StudentRecord>,
    filter: FilterState,
    page_size: usize,
    form: FormState,
    notifications: Notifications,
}

impl<S: StudentStore> RecordManager<S> {
    /// Manager with an empty list; call [`RecordManager::mount`] to load it
    pub fn new(store: S, session: Session) -> Self {
        Self {
            store,
            session,
            records: Vec::new(),
            filter: FilterState::default(),
            page_size: DEFAULT_PAGE_SIZE,
            form: FormState::default(),
            notifications: Notifications::new(),
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Initial fetch of the record set
    pub async fn mount(&mut self) -> Result<()> {
        tracing::debug!(user = %self.session.username(), "mounting record manager");
        self.list_all().await.map(|_| ())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The authoritative list as last fetched
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Pending notifications, oldest first
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain()
    }

    // =========================================================================
    // Synchronization
    // =========================================================================

    /// Replace the authoritative list with the store's full list
    ///
    /// On failure the list keeps its last known-good value. The response is
    /// all or nothing: a single record the store cannot describe with a known
    /// group fails the fetch with [`RemoteError::Decode`](crate::core::RemoteError)
    /// rather than dropping that record.
    pub async fn list_all(&mut self) -> Result<&[StudentRecord]> {
        match self.store.list().await {
            Ok(records) => {
                tracing::debug!(count = records.len(), "record list refreshed");
                self.records = records;
                Ok(&self.records)
            }
            Err(e) => Err(self.fail("fetch students", e)),
        }
    }

    /// Create a record from a draft
    ///
    /// Nothing is sent when the draft is invalid. There is no optimistic
    /// insert: the record shows up through the refresh.
    pub async fn create(&mut self, draft: &StudentDraft) -> Result<StudentRecord> {
        let fields = self.validate(draft)?;
        self.create_validated(&fields).await
    }

    /// Replace the fields of an existing record
    pub async fn update(&mut self, id: &StudentId, draft: &StudentDraft) -> Result<StudentRecord> {
        let fields = self.validate(draft)?;
        self.update_validated(id, &fields).await
    }

    /// Delete a record once the user has confirmed
    ///
    /// A declined prompt returns [`DeleteOutcome::Cancelled`] without any
    /// request to the store.
    pub async fn delete(&mut self, id: &StudentId, confirm: &impl Confirm) -> Result<DeleteOutcome> {
        let prompt = ConfirmPrompt::delete_student(id);
        if !confirm.confirm(&prompt) {
            tracing::debug!(id = %id, "deletion declined");
            return Ok(DeleteOutcome::Cancelled);
        }

        if let Err(e) = self.store.delete(id).await {
            return Err(self.fail("delete student", e));
        }

        tracing::info!(id = %id, "student deleted");
        self.notifications.success(DELETED_MESSAGE);
        self.refresh_after_mutation().await;
        Ok(DeleteOutcome::Deleted)
    }

    async fn create_validated(&mut self, fields: &StudentFields) -> Result<StudentRecord> {
        let created = match self.store.create(fields).await {
            Ok(record) => record,
            Err(e) => return Err(self.fail("save student", e)),
        };

        tracing::info!(id = %created.id, "student created");
        self.notifications.success(ADDED_MESSAGE);
        self.refresh_after_mutation().await;
        Ok(created)
    }

    async fn update_validated(
        &mut self,
        id: &StudentId,
        fields: &StudentFields,
    ) -> Result<StudentRecord> {
        let updated = match self.store.update(id, fields).await {
            Ok(record) => record,
            Err(e) => return Err(self.fail("save student", e)),
        };

        tracing::info!(id = %updated.id, "student updated");
        self.notifications.success(UPDATED_MESSAGE);
        self.refresh_after_mutation().await;
        Ok(updated)
    }

    /// Terminal refresh of every mutation
    ///
    /// The mutation already succeeded remotely, so a failed refresh is only
    /// reported; the list stays at its last known-good value.
    async fn refresh_after_mutation(&mut self) {
        let _ = self.list_all().await;
    }

    fn validate(&mut self, draft: &StudentDraft) -> Result<StudentFields> {
        draft.validate().map_err(|e| {
            let err = AdminError::from(e);
            tracing::warn!(error = %err, "student draft rejected");
            self.notifications.report(&err);
            err
        })
    }

    fn fail(&mut self, action: &str, err: AdminError) -> AdminError {
        tracing::error!(error = %err, "failed to {}", action);
        self.notifications.report(&err);
        err
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Update the filter and recompute the derived view
    ///
    /// `None` leaves that part of the filter as it is. Never touches the
    /// store.
    pub fn set_filter(
        &mut self,
        search_query: Option<&str>,
        selected_group: Option<GroupFilter>,
    ) -> DerivedView {
        if let Some(query) = search_query {
            self.filter.search_query = query.to_string();
        }
        if let Some(group) = selected_group {
            self.filter.selected_group = group;
        }
        self.view()
    }

    pub fn set_search_query(&mut self, query: &str) -> DerivedView {
        self.set_filter(Some(query), None)
    }

    pub fn set_selected_group(&mut self, group: impl Into<GroupFilter>) -> DerivedView {
        self.set_filter(None, Some(group.into()))
    }

    /// The derived view for the current list and filter
    pub fn view(&self) -> DerivedView {
        DerivedView::compute(&self.records, &self.filter, self.page_size)
    }

    // =========================================================================
    // Form
    // =========================================================================

    /// Open an empty form in create mode
    pub fn open_create(&mut self) -> Result<()> {
        self.form.open(StudentForm::create())
    }

    /// Open a form pre-filled with a record of the current list
    pub fn open_edit(&mut self, id: &StudentId) -> Result<()> {
        let record = self
            .records
            .iter()
            .find(|r| &r.id == id)
            .ok_or_else(|| AdminError::UnknownRecord { id: id.clone() })?;
        let form = StudentForm::edit(record);
        self.form.open(form)
    }

    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) -> Result<()> {
        self.form.set_field(field, value.into())
    }

    pub fn cancel_form(&mut self) -> Result<()> {
        self.form.cancel()
    }

    /// Validate and send the open form
    ///
    /// Validation failure keeps the form open with field errors. Any remote
    /// outcome closes it.
    pub async fn submit_form(&mut self) -> Result<StudentRecord> {
        let (target, fields) = match self.form.begin_submit() {
            Ok(submission) => submission,
            Err(e) => {
                if e.is_validation() {
                    tracing::warn!(error = %e, "student form rejected");
                    self.notifications.report(&e);
                }
                return Err(e);
            }
        };

        let result = match &target {
            None => self.create_validated(&fields).await,
            Some(id) => self.update_validated(id, &fields).await,
        };
        self.form.finish();
        result
    }
}
