//! HTTP client for the conversion endpoint

use std::time::Duration;

use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use crate::error::{ConvertClientError, Result};
use crate::types::{ErrorBody, SelectedFile};

/// Path of the conversion endpoint, fixed by the server contract.
const CONVERT_PATH: &str = "/api/convert";

/// Multipart field name the server reads the image from.
const IMAGE_FIELD: &str = "image";

/// Conversion API client
///
/// Submits a selected image to a conversion server and returns the
/// converted blob.
#[derive(Debug, Clone)]
pub struct ConvertClient {
    client: Client,
    base_url: Url,
}

impl ConvertClient {
    /// Create a new conversion client
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the conversion server (e.g., "http://localhost:5000")
    ///
    /// No total request timeout is set; the caller waits as long as the
    /// server takes. Use [`with_config`](Self::with_config) to bound it.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder().build()?;
        let base_url = Url::parse(base_url)?;

        Ok(Self { client, base_url })
    }

    /// Create a new conversion client with request and connect timeouts
    pub fn with_config(
        base_url: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        let base_url = Url::parse(base_url)?;

        Ok(Self { client, base_url })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Submit an image for conversion and return the converted bytes
    ///
    /// Sends a single multipart part named `image` carrying the file's
    /// bytes and declared content type. One request per call; nothing is
    /// retried.
    #[instrument(skip(self, file), fields(file = %file.name))]
    pub async fn convert(&self, file: &SelectedFile) -> Result<Bytes> {
        let url = self.base_url.join(CONVERT_PATH)?;
        debug!("Uploading {} bytes to {}", file.bytes.len(), url);

        let part = Part::bytes(file.bytes.to_vec())
            .file_name(file.name.clone())
            .mime_str(&file.content_type)?;
        let form = Form::new().part(IMAGE_FIELD, part);

        let response = self.client.post(url).multipart(form).send().await?;

        if response.status().is_success() {
            Ok(response.bytes().await?)
        } else {
            Err(self.extract_error(response).await)
        }
    }

    /// Extract error from a failed response
    ///
    /// A parseable `{"error": ...}` body becomes a server error; anything
    /// else is a parse failure the caller treats as a generic breakdown.
    async fn extract_error(&self, response: reqwest::Response) -> ConvertClientError {
        let status = response.status();

        match response.json::<ErrorBody>().await {
            Ok(body) => ConvertClientError::server_error(status.as_u16(), body.error),
            Err(e) => ConvertClientError::Parse(format!(
                "Unreadable error response (HTTP {}): {}",
                status, e
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ConvertClient::new("http://localhost:5000");
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_url() {
        let client = ConvertClient::new("not a url");
        assert!(client.is_err());
    }

    #[test]
    fn test_convert_url() {
        let client = ConvertClient::new("http://localhost:5000").unwrap();
        let url = client.base_url().join(CONVERT_PATH).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/convert");
    }
}
