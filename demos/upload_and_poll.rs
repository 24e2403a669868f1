//! Upload every file in a directory, create a vector store file batch, and
//! wait for processing to finish.
//!
//! ```sh
//! HYPERBEE_API_KEY=... cargo run --example upload_and_poll -- vs_abc123 ./docs
//! ```

use hyperbee_rs::{FileUpload, HyperbeeClient, UploadOptions};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("HYPERBEE_API_KEY")?;
    let mut args = std::env::args().skip(1);
    let (Some(vector_store_id), Some(dir)) = (args.next(), args.next()) else {
        eprintln!("usage: upload_and_poll <vector-store-id> <dir>");
        return Ok(());
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(&dir)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(FileUpload::read(&path).await?);
        }
    }
    println!("Uploading {} file(s) from {}", files.len(), dir);

    let client = HyperbeeClient::new(api_key);
    let batch = client
        .upload_and_poll(
            &vector_store_id,
            &files,
            Vec::new(),
            UploadOptions::new()
                .with_max_concurrency(4)
                .with_poll_interval(Duration::from_secs(2)),
        )
        .await?;

    println!("Batch {} finished: {:?}", batch.id, batch.status);
    println!(
        "  completed: {}  failed: {}  cancelled: {}  total: {}",
        batch.file_counts.completed,
        batch.file_counts.failed,
        batch.file_counts.cancelled,
        batch.file_counts.total
    );
    if batch.file_counts.failed > 0 {
        eprintln!("Some files failed to process; see watch_batch for listing them");
    }
    Ok(())
}
