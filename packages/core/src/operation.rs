//! The asynchronous operation abstraction and its type-erased box.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::SearchError;

// ---------------------------------------------------------------------------
// Operation trait
// ---------------------------------------------------------------------------

/// An abstract asynchronous producer mapping one input to one eventual
/// success or failure.
///
/// Exactly one resolution per invocation. An invocation pre-empted by a
/// newer one resolves `Err(SearchError::Cancelled)`; callers must not assume
/// success ordering across invocations of the same producer.
#[async_trait]
pub trait Operation: Send + Sync {
    /// Input consumed by one invocation.
    type Input: Send;
    /// Value produced on success.
    type Output: Send;

    /// Run the operation to completion.
    ///
    /// # Errors
    ///
    /// Returns the classified failure; see [`SearchError`].
    async fn execute(&self, input: Self::Input) -> Result<Self::Output, SearchError>;
}

// ---------------------------------------------------------------------------
// BoxedOperation (type-erased adapter)
// ---------------------------------------------------------------------------

/// Type-erased handle to an [`Operation`] with the given input/output types.
///
/// Callers hold heterogeneous producers (network-backed, static, test
/// doubles) behind one substitutable handle exposing only `(I, O)`, without
/// compiling against the concrete producer. Construction is explicit per
/// instance; there is no registry.
pub struct BoxedOperation<I, O> {
    inner: Arc<dyn Operation<Input = I, Output = O>>,
}

impl<I: Send, O: Send> BoxedOperation<I, O> {
    /// Erase a concrete operation.
    pub fn new<T>(operation: T) -> Self
    where
        T: Operation<Input = I, Output = O> + 'static,
    {
        Self {
            inner: Arc::new(operation),
        }
    }

    /// Run the underlying operation.
    ///
    /// # Errors
    ///
    /// Forwards the underlying operation's failure unchanged.
    pub async fn execute(&self, input: I) -> Result<O, SearchError> {
        self.inner.execute(input).await
    }
}

impl<I, O> Clone for BoxedOperation<I, O> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<I, O> std::fmt::Debug for BoxedOperation<I, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxedOperation").finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    struct Doubler;

    #[async_trait]
    impl Operation for Doubler {
        type Input = u32;
        type Output = u32;

        async fn execute(&self, input: u32) -> Result<u32, SearchError> {
            Ok(input * 2)
        }
    }

    struct AlwaysFails;

    #[async_trait]
    impl Operation for AlwaysFails {
        type Input = u32;
        type Output = u32;

        async fn execute(&self, _input: u32) -> Result<u32, SearchError> {
            Err(SearchError::Cancelled)
        }
    }

    #[tokio::test]
    async fn boxed_operation_forwards_success() {
        let op = BoxedOperation::new(Doubler);
        assert_eq!(op.execute(21).await.unwrap(), 42);
    }

    #[tokio::test]
    async fn boxed_operation_forwards_failure_unchanged() {
        let op = BoxedOperation::new(AlwaysFails);
        let err = op.execute(1).await.unwrap_err();
        assert!(err.is_cancellation());
    }

    #[tokio::test]
    async fn heterogeneous_producers_share_one_handle_type() {
        // Two different concrete types, one erased type: substitutable.
        let ops: Vec<BoxedOperation<u32, u32>> =
            vec![BoxedOperation::new(Doubler), BoxedOperation::new(AlwaysFails)];
        assert!(ops[0].execute(1).await.is_ok());
        assert!(ops[1].execute(1).await.is_err());
    }

    #[tokio::test]
    async fn clone_shares_the_underlying_producer() {
        let op = BoxedOperation::new(Doubler);
        let cloned = op.clone();
        assert_eq!(op.execute(2).await.unwrap(), cloned.execute(2).await.unwrap());
    }
}
