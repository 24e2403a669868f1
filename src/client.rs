use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::{HyperbeeError, Result};
use crate::types::*;
use crate::upload::FileUpload;

const DEFAULT_BASE_URL: &str = "https://api.hyperbee.com/v1";

/// Vector store endpoints are gated behind the assistants beta.
const BETA_HEADER: &str = "hyperbee-Beta";
const BETA_VERSION: &str = "assistants=v2";

fn normalize(base_url: String) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Async client for the Hyperbee vector store file batch API.
///
/// Provides the REST operations for file batches (create, retrieve, cancel,
/// list files) and the file upload endpoint they feed on. The polling and
/// concurrent-upload helpers live in [`crate::poll`] and [`crate::upload`].
///
/// # Example
/// ```no_run
/// use hyperbee_rs::{CreateFileBatchParams, HyperbeeClient};
///
/// # async fn example() -> hyperbee_rs::Result<()> {
/// let client = HyperbeeClient::new("hb-api-key");
/// let params = CreateFileBatchParams::new(vec!["file-1".into(), "file-2".into()]);
/// let batch = client.create_batch("vs_abc123", &params).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HyperbeeClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl HyperbeeClient {
    /// Create a new client using the default API endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Point the client at a different endpoint (staging, proxy, mock).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = normalize(base_url.into());
        self
    }

    /// Use a custom `reqwest::Client` (for connection pooling, timeouts, TLS).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    /// Returns the configured endpoint URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, path))
            .bearer_auth(&self.api_key)
            .header(BETA_HEADER, BETA_VERSION)
            .timeout(Duration::from_secs(30))
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        context: &str,
    ) -> Result<T> {
        let (value, _) = self.send_json_with_headers(request, context).await?;
        Ok(value)
    }

    /// Send a request and return the parsed body together with the response
    /// headers, for callers that read server hints.
    pub(crate) async fn send_json_with_headers<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        context: &str,
    ) -> Result<(T, HeaderMap)> {
        let resp = request.send().await.map_err(|e| HyperbeeError::Network {
            context: format!("Failed to {} at {}", context, self.base_url),
            source: e,
        })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(HyperbeeError::Http { status, body });
        }

        let headers = resp.headers().clone();
        let value = resp.json().await.map_err(|e| HyperbeeError::Network {
            context: format!("Failed to parse {} response", context),
            source: e,
        })?;
        Ok((value, headers))
    }

    // ── File batches ────────────────────────────────────────────────

    /// Create a vector store file batch from already-uploaded file IDs.
    pub async fn create_batch(
        &self,
        vector_store_id: &str,
        params: &CreateFileBatchParams,
    ) -> Result<VectorStoreFileBatch> {
        let path = format!("/vector_stores/{}/file_batches", vector_store_id);
        self.send_json(self.request(Method::POST, &path).json(params), "create file batch")
            .await
    }

    /// Fetch the current snapshot of a file batch.
    pub async fn retrieve_batch(
        &self,
        vector_store_id: &str,
        batch_id: &str,
    ) -> Result<VectorStoreFileBatch> {
        let path = format!("/vector_stores/{}/file_batches/{}", vector_store_id, batch_id);
        self.send_json(self.request(Method::GET, &path), "retrieve file batch")
            .await
    }

    /// Ask the server to cancel a batch as soon as possible. Returns the
    /// batch snapshot taken after the cancellation request.
    pub async fn cancel_batch(
        &self,
        vector_store_id: &str,
        batch_id: &str,
    ) -> Result<VectorStoreFileBatch> {
        let path = format!(
            "/vector_stores/{}/file_batches/{}/cancel",
            vector_store_id, batch_id
        );
        self.send_json(self.request(Method::POST, &path), "cancel file batch")
            .await
    }

    /// List the files in a batch, one cursor page at a time.
    ///
    /// Use [`CursorPage::next_cursor`] with
    /// [`ListBatchFilesParams::with_after`] to walk the full listing.
    pub async fn list_batch_files(
        &self,
        vector_store_id: &str,
        batch_id: &str,
        params: &ListBatchFilesParams,
    ) -> Result<CursorPage<VectorStoreFile>> {
        let path = format!(
            "/vector_stores/{}/file_batches/{}/files",
            vector_store_id, batch_id
        );
        self.send_json(
            self.request(Method::GET, &path).query(params),
            "list batch files",
        )
        .await
    }

    // ── Files ───────────────────────────────────────────────────────

    /// Upload a single file payload. Files destined for a batch use the
    /// `assistants` purpose.
    pub async fn upload_file(&self, file: &FileUpload, purpose: &str) -> Result<FileObject> {
        let part = reqwest::multipart::Part::bytes(file.bytes.clone())
            .file_name(file.filename.clone());
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("purpose", purpose.to_string());

        let request = self
            .http
            .post(format!("{}/files", self.base_url))
            .bearer_auth(&self.api_key)
            .timeout(Duration::from_secs(120))
            .multipart(form);
        self.send_json(request, "upload file").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize("https://api.hyperbee.com/v1/".into()),
            "https://api.hyperbee.com/v1"
        );
        assert_eq!(
            normalize("https://api.hyperbee.com/v1".into()),
            "https://api.hyperbee.com/v1"
        );
        assert_eq!(normalize("http://localhost:8080///".into()), "http://localhost:8080");
    }

    #[test]
    fn test_client_builder() {
        let client = HyperbeeClient::new("key").with_base_url("http://localhost:9090/");
        assert_eq!(client.base_url(), "http://localhost:9090");
    }

    #[test]
    fn test_default_base_url() {
        let client = HyperbeeClient::new("key");
        assert_eq!(client.base_url(), "https://api.hyperbee.com/v1");
    }

    #[test]
    fn test_parse_file_object() {
        let file: FileObject = serde_json::from_str(
            r#"{
            "id": "file-abc123",
            "created_at": 1699061776,
            "filename": "report.pdf",
            "purpose": "assistants",
            "bytes": 120000
        }"#,
        )
        .unwrap();
        assert_eq!(file.id, "file-abc123");
        assert_eq!(file.purpose, "assistants");
        assert_eq!(file.bytes, Some(120000));
    }
}
