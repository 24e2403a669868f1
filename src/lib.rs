//! # hyperbee-rs
//!
//! Async Rust client for the Hyperbee vector store file batch API.
//!
//! Covers the REST surface (create, retrieve, cancel, list files), the file
//! upload endpoint, and the two workflows built on top of them: polling a
//! batch until it settles and uploading many files through a bounded worker
//! pool before creating a batch.
//!
//! ## Quick Start
//!
//! ```no_run
//! use hyperbee_rs::{FileUpload, HyperbeeClient, UploadOptions};
//!
//! # async fn example() -> hyperbee_rs::Result<()> {
//! let client = HyperbeeClient::new(std::env::var("HYPERBEE_API_KEY").unwrap());
//!
//! let files = vec![
//!     FileUpload::read("docs/handbook.md").await?,
//!     FileUpload::read("docs/changelog.md").await?,
//! ];
//!
//! // Upload with at most 3 uploads in flight, create the batch, and wait.
//! let batch = client
//!     .upload_and_poll(
//!         "vs_abc123",
//!         &files,
//!         Vec::new(),
//!         UploadOptions::new().with_max_concurrency(3),
//!     )
//!     .await?;
//!
//! // A settled batch can still contain failed files.
//! println!("batch {} finished as {:?}", batch.id, batch.status);
//! if batch.file_counts.failed > 0 {
//!     eprintln!("{} file(s) failed to process", batch.file_counts.failed);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod poll;
pub mod types;
pub mod upload;

pub use client::HyperbeeClient;
pub use error::{HyperbeeError, Result};
pub use poll::PollOptions;
pub use types::{
    BatchStatus, ChunkingStrategy, CreateFileBatchParams, CursorPage, FileCounts, FileLastError,
    FileObject, ListBatchFilesParams, SortOrder, StaticChunkingConfig, VectorStoreFile,
    VectorStoreFileBatch,
};
pub use upload::{FileUpload, UploadOptions};
