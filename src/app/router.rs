//! Client-side routes

use std::fmt;

pub const LOGIN_PATH: &str = "/login";
pub const STUDENTS_PATH: &str = "/students";

/// The two views of the client
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    /// Authentication view (default)
    #[default]
    Login,
    /// Record management view, reachable after login
    Students,
}

impl Route {
    /// Resolve a path; anything unknown lands on the login view
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            STUDENTS_PATH => Route::Students,
            _ => Route::Login,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => LOGIN_PATH,
            Route::Students => STUDENTS_PATH,
        }
    }

    pub fn requires_session(&self) -> bool {
        matches!(self, Route::Students)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
