//! Static recommendation provider.

use async_trait::async_trait;
use url::Url;

use reposcout_core::{Operation, RepoEntity, SearchError};

/// Always-succeeding producer of the fixed recommendation list.
///
/// No failure path exists; it implements the same [`Operation`] contract as
/// the network-backed search so the presenter treats both uniformly.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendInteractor;

fn repo(id: u64, name: &str, description: &str, stars: u64) -> RepoEntity {
    RepoEntity {
        id,
        name: name.to_string(),
        html_url: Url::parse(&format!("https://github.com/{name}"))
            .expect("static recommendation URL is valid"),
        description: description.to_string(),
        stargazers_count: stars,
    }
}

#[async_trait]
impl Operation for RecommendInteractor {
    type Input = ();
    type Output = Vec<RepoEntity>;

    async fn execute(&self, _input: ()) -> Result<Vec<RepoEntity>, SearchError> {
        Ok(vec![
            repo(
                1,
                "objcio/issue-13-viper",
                "Sample code for the objc.io article on VIPER",
                552,
            ),
            repo(
                2,
                "objcio/issue-13-viper-swift",
                "The Swift rendition of the objc.io VIPER sample",
                331,
            ),
            repo(
                3,
                "pedrohperalta/Articles-iOS-VIPER",
                "iOS VIPER architecture example",
                247,
            ),
        ])
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn yields_three_fixed_entries_in_order() {
        let items = RecommendInteractor.execute(()).await.unwrap();
        let names: Vec<&str> = items.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "objcio/issue-13-viper",
                "objcio/issue-13-viper-swift",
                "pedrohperalta/Articles-iOS-VIPER",
            ]
        );
    }

    #[tokio::test]
    async fn entries_are_stable_across_invocations() {
        let first = RecommendInteractor.execute(()).await.unwrap();
        let second = RecommendInteractor.execute(()).await.unwrap();
        assert_eq!(first, second);
    }
}
