//! Global configuration constants for the resume retrieval service.
//!
//! All tuning parameters, input validation limits, and server defaults are defined here.
//! These are compile-time constants; runtime configuration is handled via CLI arguments
//! and environment variables in `main.rs`.

/// Reciprocal Rank Fusion (RRF) constant `k`.
///
/// Used in the formula `1 / (k + rank)` to combine ranked lists.
/// Standard value is 60.0 (from the original RRF paper). Larger values
/// flatten the reward curve so lower-ranked hits retain more influence.
pub const RRF_K: f32 = 60.0;

/// Default number of candidates requested from the similarity oracle per sub-question.
pub const DEFAULT_K_PER_QUERY: usize = 5;

/// Maximum number of candidates requestable from the oracle per sub-question.
pub const MAX_K_PER_QUERY: usize = 1_000;

/// Default number of resumes returned after fusion and selection.
pub const DEFAULT_TOP_RESUMES: usize = 5;

/// Maximum number of sub-questions accepted per retrieval request.
pub const MAX_SUBQUESTIONS: usize = 32;

/// Maximum length of a single sub-question in bytes.
pub const MAX_SUBQUESTION_LEN: usize = 8_192;

/// Maximum length of a job description in bytes.
pub const MAX_DESCRIPTION_LEN: usize = 65_536;

/// Default column name holding the applicant identifier in the resume CSV.
pub const DEFAULT_ID_COLUMN: &str = "ID";

/// Default column name holding the resume text in the resume CSV.
pub const DEFAULT_CONTENT_COLUMN: &str = "content";

/// Default HTTP server port.
pub const DEFAULT_PORT: u16 = 8000;

/// Per-request timeout in seconds.
///
/// Generous because a single `/generate` request waits on a remote LLM call.
pub const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Global rate limit in requests per second.
pub const RATE_LIMIT_RPS: u64 = 100;

/// Maximum HTTP request body size in bytes (2 MB).
///
/// Large enough for a full set of retrieved resumes echoed back in a
/// `/generate` request, small enough to bound memory per request.
pub const MAX_REQUEST_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Maximum number of concurrent in-flight requests.
pub const MAX_CONCURRENT_REQUESTS: usize = 256;

/// Graceful shutdown timeout in seconds.
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;
