//! HTTP handlers for the student collection

use crate::core::error::{AdminError, ValidationError};
use crate::core::service::StudentStore;
use crate::core::student::{StudentId, StudentRecord};
use crate::core::validation::StudentDraft;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::{Value, json};
use std::sync::Arc;

/// Shared state of the student routes
#[derive(Clone)]
pub struct StudentAppState {
    pub store: Arc<dyn StudentStore>,
}

type HandlerResult<T> = Result<T, AdminError>;

fn parse_body(payload: Result<Json<StudentDraft>, JsonRejection>) -> HandlerResult<StudentDraft> {
    payload.map(|Json(draft)| draft).map_err(|e| {
        ValidationError::InvalidJson {
            message: e.body_text(),
        }
        .into()
    })
}

pub async fn list_students(
    State(state): State<StudentAppState>,
) -> HandlerResult<Json<Vec<StudentRecord>>> {
    state.store.list().await.map(Json)
}

pub async fn get_student(
    State(state): State<StudentAppState>,
    Path(id): Path<String>,
) -> HandlerResult<Json<StudentRecord>> {
    state.store.get(&StudentId::from(id)).await.map(Json)
}

pub async fn create_student(
    State(state): State<StudentAppState>,
    payload: Result<Json<StudentDraft>, JsonRejection>,
) -> HandlerResult<(StatusCode, Json<StudentRecord>)> {
    let fields = parse_body(payload)?.validate()?;
    let created = state.store.create(&fields).await?;
    tracing::info!(id = %created.id, "student stored");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_student(
    State(state): State<StudentAppState>,
    Path(id): Path<String>,
    payload: Result<Json<StudentDraft>, JsonRejection>,
) -> HandlerResult<Json<StudentRecord>> {
    let fields = parse_body(payload)?.validate()?;
    let updated = state.store.update(&StudentId::from(id), &fields).await?;
    tracing::info!(id = %updated.id, "student replaced");
    Ok(Json(updated))
}

pub async fn delete_student(
    State(state): State<StudentAppState>,
    Path(id): Path<String>,
) -> HandlerResult<Json<Value>> {
    let id = StudentId::from(id);
    state.store.delete(&id).await?;
    tracing::info!(id = %id, "student removed");
    Ok(Json(json!({})))
}

/// Health check endpoint handler
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "student-admin"
    }))
}
