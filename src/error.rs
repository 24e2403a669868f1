use thiserror::Error;

/// Errors returned by Hyperbee vector store operations.
#[derive(Error, Debug)]
pub enum HyperbeeError {
    /// Hyperbee returned a non-success HTTP status.
    #[error("Hyperbee returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Network-level request failure with context.
    #[error("{context}: {source}")]
    Network {
        context: String,
        source: reqwest::Error,
    },

    /// The response from Hyperbee was missing expected fields.
    #[error("{0}")]
    InvalidResponse(String),

    /// The server reported a batch status this crate does not recognize.
    /// Raised instead of treating the batch as settled or polling forever.
    #[error("unexpected batch status {0:?} reported by server")]
    UnexpectedStatus(String),

    /// No file payloads were supplied to upload.
    #[error("no files provided to upload; use create_batch_and_poll() if the files are already uploaded")]
    NoFiles,

    /// One or more concurrent uploads failed. Reported only after every
    /// upload worker has finished; no partial ID list is returned.
    #[error("{failed} of {total} file uploads failed: {detail}")]
    UploadsFailed {
        failed: usize,
        total: usize,
        detail: String,
    },

    /// Local file I/O failure while preparing an upload.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, HyperbeeError>;
