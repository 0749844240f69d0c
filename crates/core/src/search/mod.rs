//! Search primitives: ranked lists and rank fusion.
//!
//! The similarity oracle (an external collaborator) produces one ranked list
//! per sub-question; this module merges those lists into a single consensus
//! ranking over the union of applicant ids.

/// Reciprocal Rank Fusion over any number of ranked lists.
pub mod fusion;

pub use fusion::rrf_fusion;
