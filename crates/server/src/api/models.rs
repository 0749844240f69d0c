//! Request and response data transfer objects for the REST API.
//!
//! All types derive `Serialize` and/or `Deserialize` for JSON marshalling via Axum.

use crate::chat::ChatTurn;
use serde::{Deserialize, Serialize};

/// Request body for `POST /generate_subquestions`.
#[derive(Debug, Deserialize)]
pub struct JobDescriptionRequest {
    pub description: String,
}

/// Response body for `POST /generate_subquestions`.
#[derive(Debug, Serialize)]
pub struct SubquestionsResponse {
    pub subquestions: Vec<String>,
}

/// Request body for `POST /retrieve_resumes`.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub subquestions: Vec<String>,
}

/// Response body for `POST /retrieve_resumes`.
///
/// Each entry is a labeled block: `Applicant ID {id}` on the first line,
/// then the raw resume text, ordered best fused score first.
#[derive(Debug, Serialize)]
pub struct ResumesResponse {
    pub resumes: Vec<String>,
}

/// Request body for `POST /generate`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub question: String,
    pub subquestions: Vec<String>,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
    #[serde(default)]
    pub docs: Vec<String>,
    pub prompt_cls: String,
}

/// Response body for `POST /generate`.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,
}

/// Response body for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub resume_count: usize,
}
