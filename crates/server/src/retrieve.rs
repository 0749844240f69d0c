//! Retrieval orchestration: per-sub-question fan-out and rank fusion.
//!
//! One `retrieve` call serves one request. Sub-questions are queried against
//! the similarity oracle in the order supplied, the resulting ranked lists
//! are fused with RRF, and the fused ranking is returned by value — nothing
//! request-scoped is stored on the orchestrator, so concurrent requests
//! cannot observe each other's results.

use crate::oracle::{OracleError, SimilarityOracle};
use resumerag_core::{config, rrf_fusion, ApplicantId};
use std::sync::Arc;

/// Errors from a retrieval call.
#[derive(Debug, thiserror::Error)]
pub enum RetrieveError {
    /// The caller supplied no sub-questions. Rejected before any oracle call.
    #[error("at least one sub-question is required")]
    EmptySubquestions,

    /// A similarity oracle call failed.
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

/// Coordinates retrieval across multiple sub-questions for one request.
pub struct Retriever {
    oracle: Arc<dyn SimilarityOracle>,
}

impl Retriever {
    pub fn new(oracle: Arc<dyn SimilarityOracle>) -> Self {
        Self { oracle }
    }

    /// Queries the oracle once per sub-question and fuses the ranked lists.
    ///
    /// Returns the fused ranking over the union of applicant ids seen,
    /// sorted by descending fused score with ascending-id tie-break.
    pub async fn retrieve(
        &self,
        subquestions: &[String],
        k_per_query: usize,
    ) -> Result<Vec<(ApplicantId, f32)>, RetrieveError> {
        if subquestions.is_empty() {
            return Err(RetrieveError::EmptySubquestions);
        }

        let mut ranked_lists = Vec::with_capacity(subquestions.len());
        for subquestion in subquestions {
            let hits = self.oracle.search(subquestion, k_per_query).await?;
            tracing::debug!(
                subquestion = %subquestion,
                hits = hits.len(),
                "similarity search complete"
            );
            ranked_lists.push(hits);
        }

        Ok(rrf_fusion(&ranked_lists, config::RRF_K))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Oracle returning canned lists and counting how often it is queried.
    struct FixedOracle {
        lists: Vec<Vec<(ApplicantId, f32)>>,
        calls: AtomicUsize,
    }

    impl FixedOracle {
        fn new(lists: Vec<Vec<(ApplicantId, f32)>>) -> Self {
            Self {
                lists,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl SimilarityOracle for FixedOracle {
        async fn search(
            &self,
            _query: &str,
            _k: usize,
        ) -> Result<Vec<(ApplicantId, f32)>, OracleError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.lists.get(call).cloned().unwrap_or_default())
        }
    }

    fn list(entries: &[(&str, f32)]) -> Vec<(ApplicantId, f32)> {
        entries.iter().map(|(id, d)| (id.to_string(), *d)).collect()
    }

    #[tokio::test]
    async fn test_empty_subquestions_rejected_without_oracle_calls() {
        let oracle = Arc::new(FixedOracle::new(vec![]));
        let retriever = Retriever::new(oracle.clone());

        let err = retriever.retrieve(&[], 5).await.unwrap_err();
        assert!(matches!(err, RetrieveError::EmptySubquestions));
        assert_eq!(oracle.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_one_oracle_call_per_subquestion() {
        let oracle = Arc::new(FixedOracle::new(vec![
            list(&[("1", 0.1)]),
            list(&[("2", 0.1)]),
            list(&[("3", 0.1)]),
        ]));
        let retriever = Retriever::new(oracle.clone());

        let subquestions = vec![
            "rust experience".to_string(),
            "team leadership".to_string(),
            "cloud infrastructure".to_string(),
        ];
        let fused = retriever.retrieve(&subquestions, 5).await.unwrap();
        assert_eq!(oracle.calls.load(Ordering::SeqCst), 3);
        assert_eq!(fused.len(), 3);
    }

    #[tokio::test]
    async fn test_fused_ranking_rewards_cross_query_consensus() {
        // "7" ranks second in both lists; the leaders appear only once each.
        let oracle = Arc::new(FixedOracle::new(vec![
            list(&[("2", 0.1), ("7", 0.2)]),
            list(&[("5", 0.1), ("7", 0.2)]),
        ]));
        let retriever = Retriever::new(oracle);

        let subquestions = vec!["backend".to_string(), "databases".to_string()];
        let fused = retriever.retrieve(&subquestions, 5).await.unwrap();
        assert_eq!(fused[0].0, "7");
    }
}
