//! Upload orchestration: collect input, submit, render the result
//!
//! The file picker and the result display are injected seams, so the same
//! flow can be driven from a terminal front end or a test double without a
//! live page behind it.

use tracing::error;

use crate::client::ConvertClient;
use crate::error::ConvertClientError;
use crate::types::{ConvertedImage, Outcome, SelectedFile};

/// Message shown when submit is invoked with nothing selected.
pub const NO_FILE_ALERT: &str = "Please select an image to convert.";

/// Source of the user-selected file (the file-picker seam).
pub trait FileSource {
    /// The currently selected file, or `None` when nothing is selected.
    fn selected_file(&self) -> crate::Result<Option<SelectedFile>>;
}

/// Sink for rendered results (the result-display seam).
///
/// Implementations own a single result area; each `render` replaces
/// whatever that area showed before.
pub trait ResultView {
    /// Drop whatever the previous invocation rendered.
    fn clear(&mut self);

    /// Signal the user synchronously, outside the result area.
    fn alert(&mut self, message: &str);

    /// Render content into the result area.
    fn render(&mut self, content: &Rendered);
}

/// Content the upload flow writes into the result view
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    /// Transient note shown while the request is in flight
    Processing,
    /// Converted image plus its download filename
    Image(ConvertedImage),
    /// Server-reported error message
    Error(String),
    /// Fixed fallback for failures the server never described
    Failure,
}

/// One-shot upload flow against a conversion server.
///
/// Runs clear → read selection → submit → render, producing exactly one
/// visible outcome per invocation. Not re-entrant: two concurrent runs
/// against the same view interleave their writes.
pub struct UploadHandler<'a, S, V> {
    client: &'a ConvertClient,
    source: &'a S,
    view: &'a mut V,
}

impl<'a, S: FileSource, V: ResultView> UploadHandler<'a, S, V> {
    pub fn new(client: &'a ConvertClient, source: &'a S, view: &'a mut V) -> Self {
        Self {
            client,
            source,
            view,
        }
    }

    /// Run one collect → validate → submit → render cycle.
    ///
    /// Every failure path is terminal and fully rendered; the returned
    /// outcome mirrors what the view now shows. With nothing selected the
    /// user is alerted and no request leaves the client.
    pub async fn run(&mut self) -> Outcome {
        self.view.clear();

        let file = match self.source.selected_file() {
            Ok(Some(file)) => file,
            Ok(None) => {
                self.view.alert(NO_FILE_ALERT);
                return Outcome::NoFileSelected;
            }
            Err(e) => return self.fail(e),
        };

        self.view.render(&Rendered::Processing);

        match self.client.convert(&file).await {
            Ok(bytes) => {
                self.view.render(&Rendered::Image(ConvertedImage::new(bytes)));
                Outcome::Converted
            }
            Err(ConvertClientError::Server { message, .. }) => {
                self.view.render(&Rendered::Error(message.clone()));
                Outcome::ServerError(message)
            }
            Err(e) => self.fail(e),
        }
    }

    fn fail(&mut self, err: ConvertClientError) -> Outcome {
        error!("Conversion failed: {}", err);
        self.view.render(&Rendered::Failure);
        Outcome::TransportFailure
    }
}
