//! Error types for Notion integration.

/// Error from Notion API operations.
#[derive(Debug, thiserror::Error)]
pub enum NotionError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned a non-200 status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// JSON serialization error.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}

/// Error from the batch upload workflow.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// Invalid uploader configuration.
    #[error("upload configuration error: {0}")]
    Config(String),

    /// A batch request failed; remaining batches were not attempted.
    ///
    /// `blocks_sent` blocks from earlier batches are already on the page.
    /// Partial upload is an accepted outcome; there is no rollback.
    #[error("batch {batch} failed ({blocks_sent} blocks uploaded before failure)")]
    Batch {
        /// 1-based index of the failed batch.
        batch: usize,
        /// Number of blocks successfully uploaded before the failure.
        blocks_sent: usize,
        /// The underlying API error.
        #[source]
        source: NotionError,
    },
}
