//! Validation and filtering of user input
//!
//! Raw form input ([`StudentDraft`], [`LoginForm`]) is filtered, then each
//! field is checked by a validator from [`validators`]. The result is either
//! a typed payload or a [`ValidationError::FieldErrors`] naming every field
//! that failed.

pub mod filters;
pub mod validators;

use crate::core::error::{FieldValidationError, ValidationError};
use crate::core::student::{StudentFields, StudentRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const FIRSTNAME_REQUIRED: &str = "First name is required";
pub const LASTNAME_REQUIRED: &str = "Last name is required";
pub const GROUP_REQUIRED: &str = "Group is required";
pub const USERNAME_REQUIRED: &str = "Username is required";
pub const PASSWORD_REQUIRED: &str = "Password is required";

/// Editable fields of a student draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Firstname,
    Lastname,
    Group,
}

impl DraftField {
    pub fn name(&self) -> &'static str {
        match self {
            DraftField::Firstname => "firstname",
            DraftField::Lastname => "lastname",
            DraftField::Group => "group",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// User-entered, not yet persisted student values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDraft {
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub group: String,
}

impl StudentDraft {
    pub fn new(
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
            group: group.into(),
        }
    }

    /// Draft pre-populated from an existing record (edit mode)
    pub fn from_record(record: &StudentRecord) -> Self {
        Self::new(
            record.firstname.clone(),
            record.lastname.clone(),
            record.group.as_str(),
        )
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Firstname => &self.firstname,
            DraftField::Lastname => &self.lastname,
            DraftField::Group => &self.group,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Firstname => self.firstname = value,
            DraftField::Lastname => self.lastname = value,
            DraftField::Group => self.group = value,
        }
    }

    /// Validate a single field
    pub fn validate_field(&self, field: DraftField) -> Result<(), FieldValidationError> {
        match field {
            DraftField::Firstname => validators::required(
                field.name(),
                &filters::trim(&self.firstname),
                FIRSTNAME_REQUIRED,
            )
            .map(|_| ()),
            DraftField::Lastname => validators::required(
                field.name(),
                &filters::trim(&self.lastname),
                LASTNAME_REQUIRED,
            )
            .map(|_| ()),
            DraftField::Group => validators::group(
                field.name(),
                &filters::group_code(&self.group),
                GROUP_REQUIRED,
            )
            .map(|_| ()),
        }
    }

    /// Validate the whole draft into the payload sent to the store
    pub fn validate(&self) -> Result<StudentFields, ValidationError> {
        let firstname = filters::trim(&self.firstname);
        let lastname = filters::trim(&self.lastname);
        let group_code = filters::group_code(&self.group);

        let firstname_check = validators::required("firstname", &firstname, FIRSTNAME_REQUIRED);
        let lastname_check = validators::required("lastname", &lastname, LASTNAME_REQUIRED);
        let group_check = validators::group("group", &group_code, GROUP_REQUIRED);

        match (firstname_check, lastname_check, group_check) {
            (Ok(firstname), Ok(lastname), Ok(group)) => Ok(StudentFields {
                firstname: firstname.to_string(),
                lastname: lastname.to_string(),
                group,
            }),
            (firstname, lastname, group) => {
                Err(ValidationError::FieldErrors(validators::collect_errors([
                    firstname.err(),
                    lastname.err(),
                    group.err(),
                ])))
            }
        }
    }
}

/// Login form input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Check both fields are present
    ///
    /// Values are not trimmed: the credential check compares them verbatim.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let errors = validators::collect_errors([
            validators::required("username", &self.username, USERNAME_REQUIRED).err(),
            validators::required("password", &self.password, PASSWORD_REQUIRED).err(),
        ]);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::FieldErrors(errors))
        }
    }
}
