//! Single-modal form state machine
//!
//! ```text
//! Idle -> Editing(draft, target) -> Submitting -> Idle      (success or remote failure)
//!                                 -> Editing                (validation failure)
//!                                 -> Idle                   (cancel)
//! ```
//!
//! `target == None` is create mode, `Some(id)` edit mode.

use crate::core::error::{AdminError, FieldValidationError, Result};
use crate::core::student::{StudentFields, StudentId, StudentRecord};
use crate::core::validation::{DraftField, StudentDraft};

/// An open create or edit form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentForm {
    draft: StudentDraft,
    target: Option<StudentId>,
    errors: Vec<FieldValidationError>,
}

impl StudentForm {
    pub fn create() -> Self {
        Self {
            draft: StudentDraft::default(),
            target: None,
            errors: Vec::new(),
        }
    }

    pub fn edit(record: &StudentRecord) -> Self {
        Self {
            draft: StudentDraft::from_record(record),
            target: Some(record.id.clone()),
            errors: Vec::new(),
        }
    }

    pub fn draft(&self) -> &StudentDraft {
        &self.draft
    }

    pub fn target(&self) -> Option<&StudentId> {
        self.target.as_ref()
    }

    pub fn is_create(&self) -> bool {
        self.target.is_none()
    }

    pub fn title(&self) -> &'static str {
        if self.is_create() {
            "Add Student"
        } else {
            "Edit Student"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_create() {
            "Add Student"
        } else {
            "Save Changes"
        }
    }

    /// Errors from the last failed submit
    pub fn errors(&self) -> &[FieldValidationError] {
        &self.errors
    }

    pub fn error_for(&self, field: DraftField) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field.name())
            .map(|e| e.message.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Editing(StudentForm),
    Submitting(StudentForm),
}

impl FormState {
    pub fn is_idle(&self) -> bool {
        matches!(self, FormState::Idle)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, FormState::Editing(_))
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, FormState::Submitting(_))
    }

    /// The open form, if any
    pub fn current(&self) -> Option<&StudentForm> {
        match self {
            FormState::Idle => None,
            FormState::Editing(form) | FormState::Submitting(form) => Some(form),
        }
    }

    /// Idle -> Editing
    pub(crate) fn open(&mut self, form: StudentForm) -> Result<()> {
        if !self.is_idle() {
            return Err(AdminError::FormBusy);
        }
        *self = FormState::Editing(form);
        Ok(())
    }

    /// Edit one field of the open form
    ///
    /// Clears a previous error on that field once the new value is valid.
    pub(crate) fn set_field(&mut self, field: DraftField, value: String) -> Result<()> {
        let FormState::Editing(form) = self else {
            return Err(AdminError::NoActiveForm);
        };
        form.draft.set(field, value);
        if form.draft.validate_field(field).is_ok() {
            form.errors.retain(|e| e.field != field.name());
        }
        Ok(())
    }

    /// Editing -> Submitting, or stay in Editing with field errors
    pub(crate) fn begin_submit(&mut self) -> Result<(Option<StudentId>, StudentFields)> {
        let FormState::Editing(form) = self else {
            return Err(AdminError::NoActiveForm);
        };

        match form.draft.validate() {
            Ok(fields) => {
                form.errors.clear();
                let target = form.target.clone();
                let form = std::mem::replace(form, StudentForm::create());
                *self = FormState::Submitting(form);
                Ok((target, fields))
            }
            Err(e) => {
                form.errors = e.field_errors().to_vec();
                Err(AdminError::Validation(e))
            }
        }
    }

    /// Submitting -> Idle
    pub(crate) fn finish(&mut self) {
        *self = FormState::Idle;
    }

    /// Editing -> Idle
    pub(crate) fn cancel(&mut self) -> Result<()> {
        match self {
            FormState::Editing(_) => {
                *self = FormState::Idle;
                Ok(())
            }
            FormState::Submitting(_) => Err(AdminError::FormBusy),
            FormState::Idle => Err(AdminError::NoActiveForm),
        }
    }
}
