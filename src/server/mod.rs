//! REST server exposing a student record store
//!
//! Serves the `/students` collection the client talks to, backed by any
//! [`StudentStore`](crate::core::StudentStore).

pub mod builder;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::StudentAppState;
pub use router::build_student_routes;
