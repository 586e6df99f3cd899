//! Metafetch error types

/// Metafetch error types.
///
/// These classify faults internally; none of them cross the public gateway
/// boundary as an `Err`. Every public operation converts them into
/// [`FetchOutcome::Failure`](crate::FetchOutcome) using the variant's
/// `Display` text as the uniform error message.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    // Transport/network errors
    #[error("{0}")]
    Transport(String),

    #[error("HTTP error: status {status}")]
    Http { status: u16 },

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The provider answered 2xx but embedded its own error convention:
    /// an `error` field whose value is not `"OK"` (case-insensitive).
    #[error("external API error: {0}")]
    Provider(String),

    // Random-item orchestration errors
    #[error("could not determine the total {0} count")]
    MissingCount(&'static str),

    #[error("no valid random {kind} found after {attempts} attempts")]
    RetriesExhausted { kind: &'static str, attempts: u32 },

    // Infrastructure errors
    /// The dispatch queue's worker is gone. Should not happen while the
    /// owning gateway is alive.
    #[error("dispatch queue closed")]
    QueueClosed,

    #[error("configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        // Status errors are mapped explicitly in the transport; anything
        // arriving here is a connect/body-level fault.
        FetchError::Transport(err.to_string())
    }
}

/// Result type alias for Metafetch operations
pub type Result<T> = std::result::Result<T, FetchError>;
