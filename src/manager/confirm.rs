//! Blocking confirmation step in front of deletions

use crate::core::student::StudentId;

/// What the user is asked before a record is deleted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub id: StudentId,
    pub title: &'static str,
    pub ok_text: &'static str,
    pub cancel_text: &'static str,
}

impl ConfirmPrompt {
    pub fn delete_student(id: &StudentId) -> Self {
        Self {
            id: id.clone(),
            title: "Are you sure you want to delete this student?",
            ok_text: "Yes",
            cancel_text: "No",
        }
    }
}

/// Answers a confirmation prompt
///
/// The call blocks until the user has decided. Only `true` lets the deletion
/// reach the store.
pub trait Confirm {
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&ConfirmPrompt) -> bool,
{
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        self(prompt)
    }
}

/// Result of a delete request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Confirmed and removed from the store
    Deleted,
    /// The user declined; nothing was sent
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_confirm() {
        let prompt = ConfirmPrompt::delete_student(&StudentId::from("1"));
        assert!((|_: &ConfirmPrompt| true).confirm(&prompt));
        assert!(!(|p: &ConfirmPrompt| p.id.as_str() == "2").confirm(&prompt));
        assert_eq!(prompt.ok_text, "Yes");
    }
}
