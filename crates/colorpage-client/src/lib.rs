//! Coloring-page conversion client
//!
//! Typed HTTP client and upload orchestration for a coloring-page
//! conversion server: read a selected image, POST it to `/api/convert`
//! as multipart form data, and render either the converted image or the
//! error the server reported.
//!
//! # Example
//!
//! ```rust,no_run
//! use colorpage_client::{ConvertClient, SelectedFile};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ConvertClient::new("http://localhost:5000")?;
//!
//!     let file = SelectedFile::new("photo.png", "image/png", std::fs::read("photo.png")?);
//!     let coloring_page = client.convert(&file).await?;
//!
//!     std::fs::write("coloring_page.png", &coloring_page)?;
//!     Ok(())
//! }
//! ```
//!
//! # Upload orchestration
//!
//! [`UploadHandler`] runs the full collect → validate → submit → render
//! cycle against injected [`FileSource`] and [`ResultView`] seams, so the
//! same flow drives a terminal front end or a test double:
//!
//! ```rust,ignore
//! let outcome = UploadHandler::new(&client, &source, &mut view).run().await;
//! ```
//!
//! # Testing
//!
//! The `testing` module provides an in-process mock conversion server:
//!
//! ```rust,ignore
//! use colorpage_client::testing::{MockConvert, TestServer};
//!
//! let mock = MockConvert::converted(b"png bytes".to_vec());
//! let server = TestServer::start(mock.router()).await?;
//! let result = server.client.convert(&file).await?;
//! ```

mod client;
mod error;
mod handler;
pub mod testing;
mod types;

pub use client::ConvertClient;
pub use error::{ConvertClientError, Result};
pub use handler::{FileSource, Rendered, ResultView, UploadHandler, NO_FILE_ALERT};
pub use types::{ConvertedImage, ErrorBody, Outcome, SelectedFile, DOWNLOAD_FILE_NAME};
