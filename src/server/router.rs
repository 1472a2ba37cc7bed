//! Router for the student record store

use super::handlers::{
    StudentAppState, create_student, delete_student, get_student, health_check, list_students,
    update_student,
};
use axum::{Router, routing::get};

/// Build the student routes
///
/// - GET /students - List every record
/// - POST /students - Create a record (201)
/// - GET /students/{id} - Get one record
/// - PUT /students/{id} - Replace a record's fields
/// - DELETE /students/{id} - Delete a record
pub fn build_student_routes(state: StudentAppState) -> Router {
    Router::new()
        .route("/students", get(list_students).post(create_student))
        .route(
            "/students/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
        .with_state(state)
}

/// Build health check routes
pub fn build_health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}
