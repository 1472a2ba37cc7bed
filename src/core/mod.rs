//! Core module containing the record model, validation, filtering and the
//! session gate

pub mod auth;
pub mod error;
pub mod notification;
pub mod query;
pub mod service;
pub mod student;
pub mod validation;

pub use auth::{CredentialVerifier, Session, SessionGate, StaticCredentials};
pub use error::{AdminError, FieldValidationError, RemoteError, ValidationError};
pub use notification::{Notification, NotificationLevel, Notifications};
pub use query::{DerivedView, FilterState, GroupFilter, PaginationMeta};
pub use service::StudentStore;
pub use student::{Group, StudentFields, StudentId, StudentRecord};
pub use validation::{DraftField, LoginForm, StudentDraft};
