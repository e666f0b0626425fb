//! REST API type definitions
//!
//! Request and response types for the REST API endpoints.

use eligo_sdk::EligibilityEngine;
use serde::Serialize;
use std::sync::Arc;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<EligibilityEngine>,

    /// Workflow evaluated by the bare eligibility route
    pub default_workflow: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
