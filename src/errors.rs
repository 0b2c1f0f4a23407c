use thiserror::Error;

/// Misuse of the indexed priority queue. These are caller bugs, the queue
/// refuses the operation instead of breaking its heap order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("node is already queued")]
    AlreadyQueued, // insert on a present node
    #[error("node is not queued")]
    NotQueued, // decrease_key on an absent node
    #[error("new key is larger than the current key")]
    KeyIncrease,
    #[error("key is not comparable (NaN)")]
    IncomparableKey,
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("priority queue misuse: {0}")]
    Queue(#[from] QueueError),
    #[error("arc weight must be a non-negative number, got {0}")]
    InvalidWeight(String), // Negative or NaN edge weight
    #[error("node locator: {0}")]
    Locator(String),
}

impl From<kdtree::ErrorKind> for SearchError {
    fn from(error: kdtree::ErrorKind) -> Self {
        SearchError::Locator(error.to_string())
    }
}
