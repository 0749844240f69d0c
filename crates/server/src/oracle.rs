//! Similarity oracle: the external nearest-neighbor search collaborator.
//!
//! The service does not compute vector similarity itself. It queries a
//! pluggable vector-search service that indexes the resume corpus and
//! returns `(applicant id, score)` pairs, best match first.

use async_trait::async_trait;
use resumerag_core::ApplicantId;
use serde::{Deserialize, Serialize};

/// Errors from a similarity oracle call.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    /// Transport-level failure reaching the oracle.
    #[error("similarity oracle request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The oracle answered with a non-success HTTP status.
    #[error("similarity oracle returned status {status}: {body}")]
    Api { status: u16, body: String },
}

/// Nearest-neighbor search over the resume corpus.
///
/// Returns at most `k` `(applicant id, score)` pairs ordered best match
/// first. A given applicant may be absent from the result of any one query.
#[async_trait]
pub trait SimilarityOracle: Send + Sync {
    async fn search(&self, query: &str, k: usize) -> Result<Vec<(ApplicantId, f32)>, OracleError>;
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    query_text: &'a str,
    k: usize,
}

#[derive(Deserialize)]
struct SearchResponse {
    results: Vec<SearchHit>,
}

#[derive(Deserialize)]
struct SearchHit {
    id: String,
    #[serde(default)]
    score: Option<f32>,
}

/// HTTP client for an external vector-search service.
///
/// Speaks a collection-scoped search API: `POST {base}/collections/{name}/search`
/// with `{"query_text": ..., "k": ...}`, reading `results[].{id, score}`.
/// The indexed document ids are the applicant ids from the resume corpus.
pub struct RemoteVectorIndex {
    client: reqwest::Client,
    base_url: String,
    collection: String,
}

impl RemoteVectorIndex {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            collection: collection.into(),
        }
    }
}

#[async_trait]
impl SimilarityOracle for RemoteVectorIndex {
    async fn search(&self, query: &str, k: usize) -> Result<Vec<(ApplicantId, f32)>, OracleError> {
        let url = format!("{}/collections/{}/search", self.base_url, self.collection);
        let response = self
            .client
            .post(&url)
            .json(&SearchRequest { query_text: query, k })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OracleError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SearchResponse = response.json().await?;
        Ok(parsed
            .results
            .into_iter()
            .map(|hit| (hit.id, hit.score.unwrap_or(0.0)))
            .collect())
    }
}
