use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use futures_util::future::join_all;

use crate::client::HyperbeeClient;
use crate::error::{HyperbeeError, Result};
use crate::poll::PollOptions;
use crate::types::{CreateFileBatchParams, VectorStoreFileBatch};

/// Files uploaded for batch ingestion carry this purpose tag.
const BATCH_FILE_PURPOSE: &str = "assistants";

const DEFAULT_MAX_CONCURRENCY: usize = 5;

/// A local file payload queued for upload.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a payload from disk, using the file name portion of the path.
    pub async fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string());
        let bytes = tokio::fs::read(path).await?;
        Ok(Self { filename, bytes })
    }
}

/// Options for [`HyperbeeClient::upload_and_poll`].
#[derive(Debug, Clone, Copy)]
pub struct UploadOptions {
    /// Upper bound on simultaneous uploads. Clamped to the number of
    /// payloads so no idle workers are started.
    pub max_concurrency: usize,
    /// Polling behavior for the batch created after the uploads.
    pub poll: PollOptions,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            poll: PollOptions::default(),
        }
    }
}

impl UploadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_concurrency(mut self, limit: usize) -> Self {
        self.max_concurrency = limit;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll = self.poll.with_interval(interval);
        self
    }
}

fn worker_count(configured: usize, payloads: usize) -> usize {
    configured.max(1).min(payloads)
}

impl HyperbeeClient {
    /// Upload payloads through a bounded worker pool, returning the new
    /// file IDs.
    ///
    /// Workers pull from a shared cursor, so each payload is uploaded
    /// exactly once and at most `max_concurrency` uploads are in flight at
    /// any instant. A failed upload stops its worker from claiming further
    /// payloads; the remaining workers keep draining the queue. Failures
    /// surface only after every worker has finished, as one aggregate
    /// error, and no partial ID list is returned.
    pub async fn upload_files(
        &self,
        files: &[FileUpload],
        options: &UploadOptions,
    ) -> Result<Vec<String>> {
        if files.is_empty() {
            return Err(HyperbeeError::NoFiles);
        }

        let workers = worker_count(options.max_concurrency, files.len());
        let cursor = AtomicUsize::new(0);
        tracing::debug!(files = files.len(), workers, "starting bounded upload");

        let outcomes = join_all((0..workers).map(|_| {
            let cursor = &cursor;
            async move {
                let mut ids = Vec::new();
                loop {
                    let index = cursor.fetch_add(1, Ordering::Relaxed);
                    let Some(file) = files.get(index) else { break };
                    match self.upload_file(file, BATCH_FILE_PURPOSE).await {
                        Ok(object) => ids.push(object.id),
                        Err(e) => return (ids, Some(e)),
                    }
                }
                (ids, None)
            }
        }))
        .await;

        let mut file_ids = Vec::with_capacity(files.len());
        let mut errors = Vec::new();
        for (ids, error) in outcomes {
            file_ids.extend(ids);
            errors.extend(error);
        }

        if errors.is_empty() {
            Ok(file_ids)
        } else {
            // IDs from the successful uploads are dropped with the batch
            // never created; a half-uploaded batch cannot be resumed.
            Err(HyperbeeError::UploadsFailed {
                failed: errors.len(),
                total: files.len(),
                detail: errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            })
        }
    }

    /// Upload files concurrently, create a batch from them, and poll the
    /// batch until it settles.
    ///
    /// `existing_file_ids` come first in the batch, in their original
    /// order, followed by the newly uploaded IDs (whose cross-worker order
    /// is unspecified). An upload failure aborts before any batch is
    /// created.
    pub async fn upload_and_poll(
        &self,
        vector_store_id: &str,
        files: &[FileUpload],
        existing_file_ids: Vec<String>,
        options: UploadOptions,
    ) -> Result<VectorStoreFileBatch> {
        let uploaded = self.upload_files(files, &options).await?;

        let mut file_ids = existing_file_ids;
        file_ids.extend(uploaded);
        self.create_batch_and_poll(
            vector_store_id,
            &CreateFileBatchParams::new(file_ids),
            options.poll,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_count_clamps_to_payloads() {
        assert_eq!(worker_count(5, 3), 3);
        assert_eq!(worker_count(5, 7), 5);
        assert_eq!(worker_count(1, 10), 1);
    }

    #[test]
    fn test_worker_count_is_at_least_one() {
        assert_eq!(worker_count(0, 4), 1);
    }

    #[test]
    fn test_upload_options_defaults() {
        let options = UploadOptions::new();
        assert_eq!(options.max_concurrency, 5);
        assert!(options.poll.interval.is_none());
    }

    #[test]
    fn test_upload_options_chaining() {
        let options = UploadOptions::new()
            .with_max_concurrency(3)
            .with_poll_interval(Duration::from_millis(100));
        assert_eq!(options.max_concurrency, 3);
        assert_eq!(options.poll.interval, Some(Duration::from_millis(100)));
    }

    #[test]
    fn test_file_upload_new() {
        let file = FileUpload::new("notes.md", b"# notes".to_vec());
        assert_eq!(file.filename, "notes.md");
        assert_eq!(file.bytes, b"# notes");
    }
}
