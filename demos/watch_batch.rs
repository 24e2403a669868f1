//! Watch an existing file batch until it settles, then list any failed files.
//!
//! The poller itself never times out, so the wait is bounded externally with
//! `tokio::time::timeout`.
//!
//! ```sh
//! HYPERBEE_API_KEY=... cargo run --example watch_batch -- vs_abc123 vsfb_def456
//! ```

use hyperbee_rs::{BatchStatus, HyperbeeClient, ListBatchFilesParams, PollOptions};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("HYPERBEE_API_KEY")?;
    let mut args = std::env::args().skip(1);
    let (Some(vector_store_id), Some(batch_id)) = (args.next(), args.next()) else {
        eprintln!("usage: watch_batch <vector-store-id> <batch-id>");
        return Ok(());
    };

    let client = HyperbeeClient::new(api_key);

    let batch = tokio::time::timeout(
        Duration::from_secs(600),
        client.poll_batch(&vector_store_id, &batch_id, PollOptions::new()),
    )
    .await??;

    println!("Batch {} settled: {:?}", batch.id, batch.status);
    println!(
        "  completed: {}  failed: {}  cancelled: {}  total: {}",
        batch.file_counts.completed,
        batch.file_counts.failed,
        batch.file_counts.cancelled,
        batch.file_counts.total
    );

    if batch.file_counts.failed > 0 {
        println!("Failed files:");
        let mut params = ListBatchFilesParams::new().with_filter(BatchStatus::Failed);
        loop {
            let page = client
                .list_batch_files(&vector_store_id, &batch_id, &params)
                .await?;
            for file in &page.data {
                let reason = file
                    .last_error
                    .as_ref()
                    .map(|e| e.message.as_str())
                    .unwrap_or("unknown");
                println!("  {} ({})", file.id, reason);
            }
            match page.next_cursor() {
                Some(cursor) => params = params.with_after(cursor),
                None => break,
            }
        }
    }
    Ok(())
}
