//! Search orchestration: owns the lifetime of the current search request.

use std::sync::Arc;

use async_trait::async_trait;

use reposcout_core::{Operation, RepoEntity, SearchError};

use crate::request::SearchRequest;

/// The search producer the presenter is constructed against.
///
/// Realizes single-flight, last-query-wins semantics over [`SearchRequest`]:
/// issuing a new query cancels any outstanding one, so for queries issued in
/// order q1..qn only qn's eventual success can surface; every earlier
/// invocation resolves `Cancelled` and is suppressed downstream.
pub struct SearchInteractor {
    request: Arc<SearchRequest>,
}

impl SearchInteractor {
    /// Wrap a request as an [`Operation`].
    #[must_use]
    pub fn new(request: Arc<SearchRequest>) -> Self {
        Self { request }
    }

    /// Cancel the outstanding request, if any. Idempotent; no-op when idle.
    pub fn cancel(&self) {
        self.request.cancel();
    }
}

#[async_trait]
impl Operation for SearchInteractor {
    type Input = String;
    type Output = Vec<RepoEntity>;

    /// Cancel-then-replace any in-flight request, then issue `query`.
    /// The result is forwarded unchanged.
    ///
    /// # Errors
    ///
    /// Forwards the request's classification; see
    /// [`SearchRequest::perform`].
    async fn execute(&self, query: String) -> Result<Vec<RepoEntity>, SearchError> {
        self.request.perform(&query).await
    }
}
