//! # Student Admin
//!
//! Administrative client for a list of student records kept in a REST store,
//! behind a login gate.
//!
//! ## Features
//!
//! - **Session Gate**: static credential check producing an explicit `Session`
//! - **Record Manager**: authoritative list, full refresh after every mutation
//! - **Derived View**: case-insensitive search plus group filter, paginated
//! - **Single Form**: create/edit state machine with per-field validation
//! - **Confirmed Deletes**: nothing is deleted without a granted prompt
//! - **REST Transport**: `reqwest` client for `/students`
//! - **Record Store Server**: `axum` exposure of any store, in-memory included
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use student_admin::prelude::*;
//!
//! let store = HttpStudentStore::new("http://localhost:3000")?;
//! let mut app = App::new(store);
//!
//! app.login("admin", "password").await?;
//! let manager = app.manager_mut().unwrap();
//!
//! manager.create(&StudentDraft::new("Sam", "K", "B2")).await?;
//! let view = manager.set_search_query("sam");
//! for student in view.page(1).records {
//!     println!("{} {} ({})", student.firstname, student.lastname, student.group);
//! }
//! ```

pub mod app;
pub mod client;
pub mod config;
pub mod core;
pub mod logging;
pub mod manager;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        AdminError, CredentialVerifier, DerivedView, DraftField, FieldValidationError,
        FilterState, Group, GroupFilter, LoginForm, Notification, NotificationLevel,
        PaginationMeta, RemoteError, Session, SessionGate, StaticCredentials, StudentDraft,
        StudentFields, StudentId, StudentRecord, StudentStore, ValidationError,
    };
    pub use crate::core::query::filter;

    // === Manager ===
    pub use crate::manager::{
        Confirm, ConfirmPrompt, DeleteOutcome, FormState, RecordManager, StudentForm,
    };

    // === App ===
    pub use crate::app::{App, Route};

    // === Transports and Storage ===
    pub use crate::client::HttpStudentStore;
    pub use crate::storage::InMemoryStudentStore;

    // === Config ===
    pub use crate::config::AdminConfig;

    // === Server ===
    pub use crate::server::ServerBuilder;

    // === External dependencies ===
    pub use async_trait::async_trait;
}
