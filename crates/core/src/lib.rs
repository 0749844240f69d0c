//! # resumerag-core
//!
//! Core engine for the resume retrieval service: the immutable resume table,
//! multi-query Reciprocal Rank Fusion, and bounded result selection.
//!
//! This is the synchronous library crate with zero async dependencies — the
//! similarity oracle and LLM collaborators live in `resumerag-server`, which
//! drives this engine from its HTTP handlers.

/// Global configuration constants: retrieval defaults, limits, and server tunables.
pub mod config;
/// Result selection: bounded top-N lookup and labeled rendering.
pub mod select;
/// Search primitives: ranked lists and rank fusion.
pub mod search;
/// The resume table: immutable applicant id → resume content mapping.
pub mod table;

pub use search::fusion::rrf_fusion;
pub use select::select_resumes;
pub use table::{ApplicantId, ResumeTable, TableError};
