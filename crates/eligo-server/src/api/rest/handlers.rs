//! API endpoint handlers
//!
//! HTTP request handlers for all REST API endpoints.

use super::extractors::SubjectsExtractor;
use super::types::{AppState, HealthResponse};
use crate::error::ServerError;
use axum::{
    extract::{Path, State},
    Json,
};
use std::collections::HashMap;
use tracing::info;

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Eligibility endpoint for the configured default workflow
pub(super) async fn evaluate_default(
    State(state): State<AppState>,
    SubjectsExtractor(subjects): SubjectsExtractor,
) -> Result<Json<HashMap<String, bool>>, ServerError> {
    let workflow = state.default_workflow.clone();
    run_evaluation(state, workflow, subjects).await
}

/// Eligibility endpoint for a named workflow
#[axum::debug_handler]
pub(super) async fn evaluate_workflow(
    State(state): State<AppState>,
    Path(workflow): Path<String>,
    SubjectsExtractor(subjects): SubjectsExtractor,
) -> Result<Json<HashMap<String, bool>>, ServerError> {
    run_evaluation(state, workflow, subjects).await
}

async fn run_evaluation(
    state: AppState,
    workflow: String,
    subjects: Vec<String>,
) -> Result<Json<HashMap<String, bool>>, ServerError> {
    info!(
        "Received eligibility request for workflow '{}' with {} subjects",
        workflow,
        subjects.len()
    );

    let eligibilities = state.engine.evaluate(&workflow, &subjects).await?;

    Ok(Json(eligibilities))
}
