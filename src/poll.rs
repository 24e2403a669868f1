use std::time::Duration;

use reqwest::Method;

use crate::client::HyperbeeClient;
use crate::error::{HyperbeeError, Result};
use crate::types::{BatchStatus, CreateFileBatchParams, VectorStoreFileBatch};

/// Wait between polls when neither the caller nor the server suggests one.
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(5000);

/// Response header carrying the server's suggested wait before the next poll.
const POLL_AFTER_HEADER: &str = "hyperbee-poll-after-ms";

/// Marks a request as issued by the polling helper rather than a user call.
const POLL_HELPER_HEADER: &str = "x-stainless-poll-helper";

/// Tells the server which fixed cadence the caller configured, if any.
const CUSTOM_INTERVAL_HEADER: &str = "x-stainless-custom-poll-interval";

/// Options for the batch polling helpers.
#[derive(Debug, Clone, Copy, Default)]
pub struct PollOptions {
    /// Fixed wait between polls. Takes precedence over the server's
    /// `hyperbee-poll-after-ms` hint and the 5s default.
    pub interval: Option<Duration>,
}

impl PollOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Poll at a fixed interval instead of following server hints.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = Some(interval);
        self
    }
}

/// Pick the wait before the next poll: caller interval first, then a
/// parseable server hint, then the default.
fn resolve_poll_interval(configured: Option<Duration>, header_hint: Option<&str>) -> Duration {
    if let Some(interval) = configured {
        return interval;
    }
    match header_hint.and_then(|raw| raw.trim().parse::<u64>().ok()) {
        Some(ms) => Duration::from_millis(ms),
        None => {
            if header_hint.is_some() {
                tracing::warn!(hint = ?header_hint, "ignoring unparseable poll-after hint");
            }
            DEFAULT_POLL_INTERVAL
        }
    }
}

impl HyperbeeClient {
    /// Poll a batch until it reaches a terminal status.
    ///
    /// Returns as soon as the batch reports `completed`, `failed`, or
    /// `cancelled`. A `failed` batch is a normal return value here: check
    /// `status` and `file_counts.failed` to tell full success, per-file
    /// failure, and batch-level failure apart.
    ///
    /// Polls are strictly sequential. The loop has no timeout of its own;
    /// wrap the call in `tokio::time::timeout` to bound the wait.
    pub async fn poll_batch(
        &self,
        vector_store_id: &str,
        batch_id: &str,
        options: PollOptions,
    ) -> Result<VectorStoreFileBatch> {
        let path = format!("/vector_stores/{}/file_batches/{}", vector_store_id, batch_id);

        loop {
            let mut request = self
                .request(Method::GET, &path)
                .header(POLL_HELPER_HEADER, "true");
            if let Some(interval) = options.interval {
                request = request.header(CUSTOM_INTERVAL_HEADER, interval.as_millis().to_string());
            }

            let (batch, headers) = self
                .send_json_with_headers::<VectorStoreFileBatch>(request, "poll file batch")
                .await?;

            match &batch.status {
                BatchStatus::InProgress => {
                    let hint = headers.get(POLL_AFTER_HEADER).and_then(|v| v.to_str().ok());
                    let wait = resolve_poll_interval(options.interval, hint);
                    tracing::debug!(batch_id = %batch.id, ?wait, "batch still in progress");
                    tokio::time::sleep(wait).await;
                }
                BatchStatus::Completed | BatchStatus::Failed | BatchStatus::Cancelled => {
                    return Ok(batch);
                }
                BatchStatus::Unrecognized(status) => {
                    return Err(HyperbeeError::UnexpectedStatus(status.clone()));
                }
            }
        }
    }

    /// Create a file batch, then poll it until it settles.
    pub async fn create_batch_and_poll(
        &self,
        vector_store_id: &str,
        params: &CreateFileBatchParams,
        options: PollOptions,
    ) -> Result<VectorStoreFileBatch> {
        let batch = self.create_batch(vector_store_id, params).await?;
        self.poll_batch(vector_store_id, &batch.id, options).await
    }
}
