use serde::{Deserialize, Serialize};

/// Processing status of a file batch, or of a single file within one.
///
/// `in_progress` is the only non-terminal value; `completed`, `cancelled`,
/// and `failed` are final for a given batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    InProgress,
    Completed,
    Cancelled,
    Failed,
    /// A status value this crate does not know about. Kept as data so the
    /// poller can reject it explicitly rather than failing to parse.
    #[serde(untagged)]
    Unrecognized(String),
}

impl BatchStatus {
    /// Whether the batch can no longer change state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            BatchStatus::Completed | BatchStatus::Cancelled | BatchStatus::Failed
        )
    }
}

/// Per-status file totals for a batch. `total` covers every file in the batch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FileCounts {
    pub cancelled: u64,
    pub completed: u64,
    pub failed: u64,
    pub in_progress: u64,
    pub total: u64,
}

/// A batch of files attached to a vector store.
///
/// Each retrieval returns a fresh snapshot; once a terminal status is
/// observed the record is final for that batch ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorStoreFileBatch {
    /// Identifier referenced in API endpoints.
    pub id: String,
    /// Unix timestamp (seconds) when the batch was created.
    pub created_at: i64,
    pub file_counts: FileCounts,
    /// Always `vector_store.files_batch`.
    pub object: String,
    pub status: BatchStatus,
    /// The vector store the batch belongs to.
    pub vector_store_id: String,
}

/// The last processing error recorded for a file, if any.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLastError {
    pub code: String,
    pub message: String,
}

/// A single file attached to a vector store, as returned by the batch file
/// listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorStoreFile {
    pub id: String,
    pub created_at: i64,
    #[serde(default)]
    pub last_error: Option<FileLastError>,
    pub status: BatchStatus,
    #[serde(default)]
    pub usage_bytes: Option<u64>,
    pub vector_store_id: String,
}

/// Metadata for a file stored on the server, returned by the upload endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileObject {
    pub id: String,
    pub created_at: i64,
    pub filename: String,
    pub purpose: String,
    #[serde(default)]
    pub bytes: Option<u64>,
}

/// How the server chunks uploaded files before embedding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChunkingStrategy {
    /// Server default: 800-token chunks with 400-token overlap.
    Auto,
    Static {
        #[serde(rename = "static")]
        config: StaticChunkingConfig,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticChunkingConfig {
    /// Maximum tokens per chunk. Server accepts 100 through 4096.
    pub max_chunk_size_tokens: u32,
    /// Token overlap between chunks; must not exceed half the chunk size.
    pub chunk_overlap_tokens: u32,
}

/// Parameters for creating a file batch from already-uploaded files.
#[derive(Debug, Clone, Serialize)]
pub struct CreateFileBatchParams {
    pub file_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunking_strategy: Option<ChunkingStrategy>,
}

impl CreateFileBatchParams {
    pub fn new(file_ids: Vec<String>) -> Self {
        Self {
            file_ids,
            chunking_strategy: None,
        }
    }

    /// Override the server's default chunking strategy.
    pub fn with_chunking_strategy(mut self, strategy: ChunkingStrategy) -> Self {
        self.chunking_strategy = Some(strategy);
        self
    }
}

/// Sort order for listings, by `created_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Query refinements for listing the files in a batch.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListBatchFilesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    /// Cursor: list entries after this object ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    /// Cursor: list entries before this object ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    /// Only return files with this status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<BatchStatus>,
}

impl ListBatchFilesParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    pub fn with_before(mut self, cursor: impl Into<String>) -> Self {
        self.before = Some(cursor.into());
        self
    }

    pub fn with_filter(mut self, status: BatchStatus) -> Self {
        self.filter = Some(status);
        self
    }
}

/// One page of a cursor-paginated listing.
#[derive(Debug, Clone, Deserialize)]
pub struct CursorPage<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub first_id: Option<String>,
    #[serde(default)]
    pub last_id: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

impl<T> CursorPage<T> {
    /// Cursor to pass as `after` for the next page, if the server has more.
    pub fn next_cursor(&self) -> Option<&str> {
        if self.has_more {
            self.last_id.as_deref()
        } else {
            None
        }
    }
}
