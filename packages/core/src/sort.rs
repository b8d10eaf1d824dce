//! Deterministic ordering of search results.

use async_trait::async_trait;

use crate::entity::RepoEntity;
use crate::error::SearchError;
use crate::operation::Operation;

/// Orders repositories by star count, descending.
///
/// The sort is stable: entities with equal star counts keep their relative
/// response order. Modelled as an [`Operation`] so it composes with the
/// other producers behind the same abstraction and can be swapped in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortByStars;

#[async_trait]
impl Operation for SortByStars {
    type Input = Vec<RepoEntity>;
    type Output = Vec<RepoEntity>;

    async fn execute(&self, mut items: Vec<RepoEntity>) -> Result<Vec<RepoEntity>, SearchError> {
        // sort_by is stable: equal star counts keep their input order.
        items.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
        Ok(items)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
