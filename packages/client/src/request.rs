//! Single-flight HTTP request against the repository-search endpoint.
//!
//! One instance holds at most one underlying transport call at a time:
//! starting a new call supersedes (cancels) a previous unfinished call from
//! the same instance, and an explicit `cancel()` aborts the current call
//! without producing a completion of its own.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::anyhow;
use parking_lot::Mutex;
use reqwest::StatusCode;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

use reposcout_core::{RepoEntity, SearchError, SearchResponse};

use crate::config::SearchConfig;

/// Path of the repository-search resource on the API host.
const SEARCH_PATH: &str = "/search/repositories";
/// Query parameter carrying the free-text search term.
const QUERY_PARAM: &str = "q";

// ---------------------------------------------------------------------------
// InFlightSlot
// ---------------------------------------------------------------------------

/// The currently outstanding call. The generation number ties a completion
/// to the call that installed it, so a stale completion can never clear a
/// newer occupant.
#[derive(Debug)]
struct InFlight {
    generation: u64,
    token: CancellationToken,
}

/// Owner of the "current call" slot.
///
/// Replacing the occupant cancels the prior call first; all slot mutation
/// goes through the three methods here rather than ad hoc field assignment.
#[derive(Debug, Default)]
struct InFlightSlot {
    current: Mutex<Option<InFlight>>,
    generation: AtomicU64,
}

impl InFlightSlot {
    /// Cancel any outstanding call and install a fresh token for a new one.
    fn begin(&self) -> (u64, CancellationToken) {
        let generation = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
        let token = CancellationToken::new();
        let mut current = self.current.lock();
        if let Some(prev) = current.replace(InFlight {
            generation,
            token: token.clone(),
        }) {
            debug!(superseded = prev.generation, by = generation, "superseding in-flight search");
            prev.token.cancel();
        }
        (generation, token)
    }

    /// Clear the slot, but only if `generation` still owns it.
    fn finish(&self, generation: u64) {
        let mut current = self.current.lock();
        if current.as_ref().is_some_and(|c| c.generation == generation) {
            *current = None;
        }
    }

    /// Cancel the outstanding call, if any. Idempotent; no-op when idle.
    fn cancel(&self) {
        if let Some(prev) = self.current.lock().take() {
            debug!(generation = prev.generation, "cancelling in-flight search");
            prev.token.cancel();
        }
    }
}

// ---------------------------------------------------------------------------
// SearchRequest
// ---------------------------------------------------------------------------

/// Performs one HTTP GET per call, decodes the typed response, and maps
/// transport/status failures onto [`SearchError`].
pub struct SearchRequest {
    http: reqwest::Client,
    base: Url,
    in_flight: InFlightSlot,
}

impl SearchRequest {
    /// Build a request bound to the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint URL does not parse or the HTTP
    /// client cannot be constructed.
    pub fn new(config: &SearchConfig) -> anyhow::Result<Self> {
        let base = Url::parse(&config.endpoint)?;
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self {
            http,
            base,
            in_flight: InFlightSlot::default(),
        })
    }

    /// Issue the search. An empty query is valid and forwarded verbatim;
    /// the server treats it as "no filter".
    ///
    /// Starting a new call supersedes any unfinished one from this
    /// instance: the superseded call resolves `Cancelled` without waiting
    /// for the wire.
    ///
    /// # Errors
    ///
    /// - `SearchError::RateLimited` on HTTP 403, regardless of body.
    /// - `SearchError::Transport` on any other non-2xx status or
    ///   transport-level fault.
    /// - `SearchError::Decode` on a 2xx body that fails decoding.
    /// - `SearchError::Cancelled` when superseded or cancelled client-side.
    pub async fn perform(&self, query: &str) -> Result<Vec<RepoEntity>, SearchError> {
        let (generation, token) = self.in_flight.begin();
        debug!(generation, query, "issuing repository search");

        let result = tokio::select! {
            // Biased so a cancellation that has already landed wins the race.
            biased;
            () = token.cancelled() => Err(SearchError::Cancelled),
            result = self.send(query) => result,
        };

        self.in_flight.finish(generation);
        result
    }

    /// Cancel the outstanding call, if any.
    ///
    /// Idempotent and safe to call with no call outstanding; never produces
    /// a completion of its own.
    pub fn cancel(&self) {
        self.in_flight.cancel();
    }

    async fn send(&self, query: &str) -> Result<Vec<RepoEntity>, SearchError> {
        let mut url = self.base.clone();
        url.set_path(SEARCH_PATH);

        let response = self
            .http
            .get(url)
            .query(&[(QUERY_PARAM, query)])
            .send()
            .await
            .map_err(|e| SearchError::Transport(anyhow::Error::new(e)))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| SearchError::Transport(anyhow::Error::new(e)))?;
        map_response(status, &body)
    }
}

// ---------------------------------------------------------------------------
// Response mapping
// ---------------------------------------------------------------------------

/// Map a completed HTTP exchange onto the failure taxonomy.
///
/// 403 is reserved for rate limiting on this API and wins regardless of
/// body content; every other non-2xx status is a transport-level fault.
fn map_response(status: StatusCode, body: &[u8]) -> Result<Vec<RepoEntity>, SearchError> {
    if status == StatusCode::FORBIDDEN {
        return Err(SearchError::RateLimited);
    }
    if !status.is_success() {
        return Err(SearchError::Transport(anyhow!("unexpected status {status}")));
    }
    let response: SearchResponse =
        serde_json::from_slice(body).map_err(|e| SearchError::Decode(anyhow::Error::new(e)))?;
    Ok(response.items)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_BODY: &[u8] = br#"{
        "items": [
            {
                "id": 1,
                "name": "name0",
                "html_url": "http://example.com/0",
                "description": "",
                "stargazers_count": 0
            }
        ]
    }"#;

    #[test]
    fn forbidden_maps_to_rate_limited_even_with_valid_body() {
        let err = map_response(StatusCode::FORBIDDEN, VALID_BODY).unwrap_err();
        assert!(matches!(err, SearchError::RateLimited));
    }

    #[test]
    fn server_error_maps_to_transport() {
        let err = map_response(StatusCode::INTERNAL_SERVER_ERROR, b"boom").unwrap_err();
        assert!(matches!(err, SearchError::Transport(_)));
    }

    #[test]
    fn not_found_maps_to_transport() {
        let err = map_response(StatusCode::NOT_FOUND, b"").unwrap_err();
        assert!(matches!(err, SearchError::Transport(_)));
    }

    #[test]
    fn malformed_success_body_maps_to_decode() {
        let err = map_response(StatusCode::OK, br#"{"unexpected": true}"#).unwrap_err();
        assert!(matches!(err, SearchError::Decode(_)));
    }

    #[test]
    fn valid_success_body_yields_items_in_wire_order() {
        let items = map_response(StatusCode::OK, VALID_BODY).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "name0");
    }

    #[test]
    fn empty_item_list_is_a_valid_result() {
        let items = map_response(StatusCode::OK, br#"{"items": []}"#).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn slot_begin_supersedes_previous_token() {
        let slot = InFlightSlot::default();
        let (g1, t1) = slot.begin();
        let (g2, t2) = slot.begin();
        assert!(g2 > g1);
        assert!(t1.is_cancelled());
        assert!(!t2.is_cancelled());
    }

    #[test]
    fn slot_finish_only_clears_its_own_generation() {
        let slot = InFlightSlot::default();
        let (g1, _t1) = slot.begin();
        let (_g2, t2) = slot.begin();

        // The stale completion must not evict the newer occupant.
        slot.finish(g1);
        assert!(!t2.is_cancelled());
        slot.cancel();
        assert!(t2.is_cancelled());
    }

    #[test]
    fn slot_cancel_is_idempotent_when_idle() {
        let slot = InFlightSlot::default();
        slot.cancel();
        slot.cancel();
        let (_g, token) = slot.begin();
        assert!(!token.is_cancelled());
    }
}
