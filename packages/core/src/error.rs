//! Failure taxonomy for the search pipeline.
//!
//! `Cancelled` is a dedicated variant so supersession noise is structurally
//! distinguishable from genuine failures; the client's classifier relies on
//! this to keep cancelled completions invisible to the user.

use thiserror::Error;

/// Classified failure produced by search operations.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The server throttled the caller. Always user-visible, with a fixed
    /// human-readable message.
    #[error("API rate limit exceeded.")]
    RateLimited,

    /// Connectivity, timeout, or any other transport-level fault. The
    /// original cause is preserved and introspectable via `source()`.
    #[error("transport failure: {0}")]
    Transport(#[source] anyhow::Error),

    /// The response arrived but its body did not match the expected shape.
    /// Treated as a defect signal.
    #[error("malformed search response: {0}")]
    Decode(#[source] anyhow::Error),

    /// The invocation was superseded or cancelled client-side before it
    /// could complete. Never user-visible.
    #[error("request superseded before completion")]
    Cancelled,
}

impl SearchError {
    /// True when this failure is client-initiated supersession noise rather
    /// than a genuine error.
    #[must_use]
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
