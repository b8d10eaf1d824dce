//! Wire schema for the repository-search endpoint.
//!
//! The endpoint returns a JSON object with an `items` array; only the fields
//! consumed by the client are modelled here. Unknown fields are ignored by
//! the decoder.

use serde::{Deserialize, Deserializer};
use url::Url;

/// A single repository as returned by the search endpoint.
///
/// Immutable value type: created by response decoding, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepoEntity {
    /// Opaque numeric identifier, unique per repository.
    pub id: u64,

    /// Display name, e.g. `"objcio/issue-13-viper"`.
    pub name: String,

    /// Canonical browser URL for the repository.
    pub html_url: Url,

    /// Free-text description. The wire may send `null` or omit the field;
    /// both decode to the empty string.
    #[serde(default, deserialize_with = "null_to_empty")]
    pub description: String,

    /// Popularity score (star count).
    pub stargazers_count: u64,
}

/// Envelope for the search endpoint response body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResponse {
    /// Matched repositories in wire order. Wire order is NOT display order;
    /// results are re-sorted before reaching the view model.
    pub items: Vec<RepoEntity>,
}

fn null_to_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
