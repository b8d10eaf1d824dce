//! Failure disposition: decides which failed completions reach the user.

use reposcout_core::SearchError;

/// What the presenter must do with a failed completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Genuine failure: forward unchanged to the routing collaborator's
    /// alert entry point.
    Surface,
    /// Client-initiated supersession noise: no alert, no state mutation,
    /// at most a debug log line.
    Suppress,
}

/// Classify a failed completion.
///
/// Cancellation carries a dedicated tag in the taxonomy, so the decision is
/// structural rather than string matching on a transport cause. This runs on
/// every completion, recommendation completions included, even though those
/// cannot fail today.
#[must_use]
pub fn disposition(error: &SearchError) -> Disposition {
    if error.is_cancellation() {
        Disposition::Suppress
    } else {
        Disposition::Surface
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
