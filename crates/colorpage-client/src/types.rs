//! Request and response types for the conversion API

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Filename every converted image is offered for download as.
pub const DOWNLOAD_FILE_NAME: &str = "coloring_page.png";

/// A user-selected image file.
///
/// Borrowed by the upload flow for the duration of one request; the
/// multipart part carries its bytes under the declared content type.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    /// File name sent as the multipart part's filename
    pub name: String,
    /// Declared content type (e.g. "image/png")
    pub content_type: String,
    /// Raw image bytes
    pub bytes: Bytes,
}

impl SelectedFile {
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }
}

/// Error body returned by the server on a non-2xx status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// A successfully converted image, ready to render and save
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedImage {
    /// Converted image bytes as returned by the server
    pub bytes: Bytes,
    /// Filename the image is offered for download as
    pub download_name: String,
}

impl ConvertedImage {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self {
            bytes: bytes.into(),
            download_name: DOWNLOAD_FILE_NAME.to_string(),
        }
    }
}

/// Result of one upload invocation.
///
/// Exactly one variant is produced per run, mirroring what the view now
/// shows; every failure is terminal for that invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The server returned a converted image and it was rendered
    Converted,
    /// The server reported an error for this image
    ServerError(String),
    /// The request could not be completed or the response understood
    TransportFailure,
    /// Nothing was selected; no request was issued
    NoFileSelected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converted_image_download_name() {
        let image = ConvertedImage::new(vec![0x89, 0x50, 0x4E, 0x47]);
        assert_eq!(image.download_name, "coloring_page.png");
    }

    #[test]
    fn test_error_body_wire_shape() {
        let body: ErrorBody = serde_json::from_str(r#"{"error":"unsupported format"}"#).unwrap();
        assert_eq!(body.error, "unsupported format");
    }
}
