//! resumerag-server — HTTP server for the resume retrieval service.
//!
//! Provides the REST API, the similarity-oracle and chat-model clients, and
//! the retrieval orchestrator. Core fusion/selection logic lives in
//! `resumerag-core`.

/// REST API layer: Axum router, HTTP handlers, models, metrics.
pub mod api;
/// Chat model collaborator: prompt templates and the Groq completions client.
pub mod chat;
/// Similarity oracle collaborator: trait and remote vector-index client.
pub mod oracle;
/// Retrieval orchestration: per-sub-question fan-out and rank fusion.
pub mod retrieve;
