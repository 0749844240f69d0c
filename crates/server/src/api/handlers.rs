//! HTTP request handlers and shared application state.

use crate::api::errors::ApiError;
use crate::api::metrics;
use crate::api::models::*;
use crate::chat::{ChatModel, PromptMode};
use crate::retrieve::Retriever;
use axum::extract::State;
use axum::Json;
use metrics_exporter_prometheus::PrometheusHandle;
use resumerag_core::{config, select_resumes, ResumeTable};
use std::sync::Arc;
use std::time::Instant;

/// Shared application state passed to every handler via Axum's `State` extractor.
///
/// Everything here is immutable after startup and shared behind `Arc`, so
/// concurrent requests never contend on locks. Per-request results (the fused
/// ranking in particular) live on the handler stack and are never stored here.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<ResumeTable>,
    pub retriever: Arc<Retriever>,
    pub chat: Arc<dyn ChatModel>,
    pub prometheus_handle: PrometheusHandle,
    pub k_per_query: usize,
    pub top_resumes: usize,
    pub start_time: Instant,
}

fn validate_subquestions(subquestions: &[String]) -> Result<(), ApiError> {
    if subquestions.is_empty() {
        return Err(ApiError::BadRequest("Sub-questions are required".into()));
    }
    if subquestions.len() > config::MAX_SUBQUESTIONS {
        return Err(ApiError::BadRequest(format!(
            "At most {} sub-questions are allowed",
            config::MAX_SUBQUESTIONS
        )));
    }
    if subquestions.iter().any(|q| q.trim().is_empty()) {
        return Err(ApiError::BadRequest(
            "Sub-questions must not be blank".into(),
        ));
    }
    if subquestions
        .iter()
        .any(|q| q.len() > config::MAX_SUBQUESTION_LEN)
    {
        return Err(ApiError::BadRequest(format!(
            "Sub-questions must be at most {} bytes",
            config::MAX_SUBQUESTION_LEN
        )));
    }
    Ok(())
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        resume_count: state.table.len(),
    })
}

/// `GET /metrics`
pub async fn metrics_endpoint(State(state): State<AppState>) -> String {
    state.prometheus_handle.render()
}

/// `POST /generate_subquestions`
///
/// Splits a job description into focused sub-queries via the chat model.
pub async fn generate_subquestions(
    State(state): State<AppState>,
    Json(req): Json<JobDescriptionRequest>,
) -> Result<Json<SubquestionsResponse>, ApiError> {
    if req.description.trim().is_empty() {
        return Err(ApiError::BadRequest("Job description is required".into()));
    }
    if req.description.len() > config::MAX_DESCRIPTION_LEN {
        return Err(ApiError::BadRequest(format!(
            "Job description must be at most {} bytes",
            config::MAX_DESCRIPTION_LEN
        )));
    }

    match state.chat.generate_subquestions(req.description.trim()).await {
        Ok(subquestions) => {
            metrics::record_chat_call("generate_subquestions", "ok");
            tracing::info!(count = subquestions.len(), "generated sub-questions");
            Ok(Json(SubquestionsResponse { subquestions }))
        }
        Err(err) => {
            metrics::record_chat_call("generate_subquestions", "error");
            tracing::error!(error = %err, "sub-question generation failed");
            Err(err.into())
        }
    }
}

/// `POST /retrieve_resumes`
///
/// Runs the multi-query retrieval pipeline: one oracle search per
/// sub-question, RRF fusion, then bounded selection against the resume table.
pub async fn retrieve_resumes(
    State(state): State<AppState>,
    Json(req): Json<QueryRequest>,
) -> Result<Json<ResumesResponse>, ApiError> {
    validate_subquestions(&req.subquestions)?;

    let fused = state
        .retriever
        .retrieve(&req.subquestions, state.k_per_query)
        .await?;
    metrics::record_retrieval(req.subquestions.len(), fused.len());
    tracing::info!(
        subquestions = req.subquestions.len(),
        candidates = fused.len(),
        "retrieval complete"
    );

    let resumes = select_resumes(&fused, &state.table, state.top_resumes);
    Ok(Json(ResumesResponse { resumes }))
}

/// `POST /generate`
///
/// Generates an answer grounded in previously retrieved resume blocks.
pub async fn generate_message(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    validate_subquestions(&req.subquestions)?;
    if req.question.trim().is_empty() {
        return Err(ApiError::BadRequest("Question is required".into()));
    }

    let mode = PromptMode::from_class(&req.prompt_cls);
    match state
        .chat
        .generate_answer(
            &req.question,
            &req.docs,
            &req.history,
            mode,
            &req.subquestions,
        )
        .await
    {
        Ok(message) => {
            metrics::record_chat_call("generate_answer", "ok");
            Ok(Json(ChatResponse { message }))
        }
        Err(err) => {
            metrics::record_chat_call("generate_answer", "error");
            tracing::error!(error = %err, mode = ?mode, "answer generation failed");
            Err(err.into())
        }
    }
}
