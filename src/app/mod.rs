//! Top-level composition of the client
//!
//! `App` owns the session, the current route and, once logged in, the record
//! manager. Logging out drops both and returns to the login view.

pub mod router;

pub use router::Route;

use crate::core::auth::{Session, SessionGate};
use crate::core::error::Result;
use crate::core::notification::{Notification, Notifications};
use crate::core::service::StudentStore;
use crate::core::validation::LoginForm;
use crate::manager::RecordManager;

pub const LOGIN_MESSAGE: &str = "Login successful!";

pub struct App<S> {
    gate: SessionGate,
    store: S,
    page_size: usize,
    route: Route,
    manager: Option<RecordManager<S>>,
    notifications: Notifications,
}

impl<S: StudentStore + Clone> App<S> {
    pub fn new(store: S) -> Self {
        Self::with_gate(store, SessionGate::default())
    }

    pub fn with_gate(store: S, gate: SessionGate) -> Self {
        Self {
            gate,
            store,
            page_size: crate::core::query::DEFAULT_PAGE_SIZE,
            route: Route::default(),
            manager: None,
            notifications: Notifications::new(),
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn session(&self) -> Option<&Session> {
        self.manager.as_ref().map(|m| m.session())
    }

    pub fn is_logged_in(&self) -> bool {
        self.manager.is_some()
    }

    /// The mounted record manager (only after login)
    pub fn manager(&self) -> Option<&RecordManager<S>> {
        self.manager.as_ref()
    }

    pub fn manager_mut(&mut self) -> Option<&mut RecordManager<S>> {
        self.manager.as_mut()
    }

    /// Submit the login form
    ///
    /// On success the record manager is mounted and the app navigates to the
    /// students view. A failed initial fetch leaves the manager mounted with
    /// an empty list.
    ///
    /// Logging in over an existing session logs that session out first, once
    /// the new credentials are accepted; a rejected attempt leaves it intact.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<()> {
        let session = match self.gate.login(&LoginForm::new(username, password)) {
            Ok(session) => session,
            Err(e) => {
                self.notifications.report(&e);
                return Err(e);
            }
        };

        if self.is_logged_in() {
            tracing::info!(user = %session.username(), "new login replaces the current session");
            self.logout();
        }

        self.notifications.success(LOGIN_MESSAGE);

        let mut manager =
            RecordManager::new(self.store.clone(), session).with_page_size(self.page_size);
        if let Err(e) = manager.mount().await {
            tracing::warn!(error = %e, "initial student fetch failed");
        }
        self.manager = Some(manager);
        self.route = Route::Students;
        Ok(())
    }

    /// Follow a client-side link
    ///
    /// Routes needing a session redirect to the login view without one.
    pub fn navigate(&mut self, path: &str) -> Route {
        let target = Route::from_path(path);
        self.route = if target.requires_session() && !self.is_logged_in() {
            tracing::debug!(path, "no session, redirecting to login");
            Route::Login
        } else {
            target
        };
        self.route
    }

    /// Clear the session and return to the login view
    pub fn logout(&mut self) {
        if let Some(manager) = self.manager.take() {
            tracing::info!(user = %manager.session().username(), "logged out");
        }
        self.route = Route::Login;
    }

    /// Pending notifications of the app and the mounted manager
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        let mut all = self.notifications.drain();
        if let Some(manager) = self.manager.as_mut() {
            all.extend(manager.take_notifications());
        }
        all
    }
}
