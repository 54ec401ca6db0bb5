//! Terminal implementations of the upload flow's seams
//!
//! [`PathSource`] stands in for the file picker and [`TerminalView`] for
//! the result-display area: results land in the terminal and the output
//! directory instead of a page.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use colorpage_client::{FileSource, Rendered, ResultView, SelectedFile, DOWNLOAD_FILE_NAME};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error};

use crate::output::OutputContext;

/// Fallback shown when a failure carries no server-reported message.
const FALLBACK_TEXT: &str = "An unexpected error occurred.";

/// File picker backed by a path from the command line
pub struct PathSource {
    path: PathBuf,
}

impl PathSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FileSource for PathSource {
    /// A path that doesn't exist counts as "nothing selected", so the
    /// flow alerts instead of sending a request.
    fn selected_file(&self) -> colorpage_client::Result<Option<SelectedFile>> {
        if !self.path.is_file() {
            return Ok(None);
        }

        let bytes = fs::read(&self.path)?;
        let name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string();
        let content_type = mime_guess::from_path(&self.path)
            .first_or_octet_stream()
            .to_string();

        Ok(Some(SelectedFile::new(name, content_type, bytes)))
    }
}

/// Result area backed by the terminal and an output directory.
///
/// `clear` removes the previous run's coloring page so every invocation
/// starts from an empty result area; a rendered image is persisted under
/// its download name.
pub struct TerminalView<'a> {
    ctx: &'a OutputContext,
    output_dir: PathBuf,
    spinner: Option<ProgressBar>,
}

impl<'a> TerminalView<'a> {
    pub fn new(ctx: &'a OutputContext, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            ctx,
            output_dir: output_dir.into(),
            spinner: None,
        }
    }

    fn finish_spinner(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }
}

impl ResultView for TerminalView<'_> {
    fn clear(&mut self) {
        self.finish_spinner();

        let stale = self.output_dir.join(DOWNLOAD_FILE_NAME);
        if stale.exists() {
            if let Err(e) = fs::remove_file(&stale) {
                debug!("Could not clear previous result {}: {}", stale.display(), e);
            }
        }
    }

    fn alert(&mut self, message: &str) {
        self.finish_spinner();
        self.ctx.alert(message);
    }

    fn render(&mut self, content: &Rendered) {
        match content {
            Rendered::Processing => {
                if self.ctx.quiet {
                    return;
                }
                let pb = ProgressBar::new_spinner();
                pb.set_style(
                    ProgressStyle::default_spinner()
                        .template("{spinner:.green} {msg}")
                        .unwrap(),
                );
                pb.set_message("Processing your image...");
                pb.enable_steady_tick(Duration::from_millis(100));
                self.spinner = Some(pb);
            }
            Rendered::Image(image) => {
                self.finish_spinner();
                let path = self.output_dir.join(&image.download_name);
                match fs::write(&path, &image.bytes) {
                    Ok(()) => {
                        self.ctx
                            .success(&format!("Saved coloring page to {}", path.display()));
                    }
                    Err(e) => {
                        error!("Failed to save coloring page to {}: {}", path.display(), e);
                        self.ctx.error(FALLBACK_TEXT);
                    }
                }
            }
            Rendered::Error(message) => {
                self.finish_spinner();
                self.ctx.error(&format!("Error: {}", message));
            }
            Rendered::Failure => {
                self.finish_spinner();
                self.ctx.error(FALLBACK_TEXT);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colorpage_client::ConvertedImage;

    fn quiet_ctx() -> OutputContext {
        OutputContext::new(true, true)
    }

    #[test]
    fn test_missing_path_is_no_selection() {
        let dir = tempfile::tempdir().unwrap();
        let source = PathSource::new(dir.path().join("nope.png"));

        assert_eq!(source.selected_file().unwrap(), None);
    }

    #[test]
    fn test_path_source_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        fs::write(&path, b"pixels").unwrap();

        let file = PathSource::new(&path).selected_file().unwrap().unwrap();
        assert_eq!(file.name, "photo.png");
        assert_eq!(file.content_type, "image/png");
        assert_eq!(file.bytes.as_ref(), b"pixels".as_slice());
    }

    #[test]
    fn test_unknown_extension_falls_back_to_octet_stream() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.xyzzy");
        fs::write(&path, b"pixels").unwrap();

        let file = PathSource::new(&path).selected_file().unwrap().unwrap();
        assert_eq!(file.content_type, "application/octet-stream");
    }

    #[test]
    fn test_clear_removes_previous_result() {
        let ctx = quiet_ctx();
        let dir = tempfile::tempdir().unwrap();
        let stale = dir.path().join(DOWNLOAD_FILE_NAME);
        fs::write(&stale, b"old page").unwrap();

        let mut view = TerminalView::new(&ctx, dir.path());
        view.clear();

        assert!(!stale.exists());
    }

    #[test]
    fn test_render_image_persists_download_file() {
        let ctx = quiet_ctx();
        let dir = tempfile::tempdir().unwrap();

        let mut view = TerminalView::new(&ctx, dir.path());
        view.render(&Rendered::Image(ConvertedImage::new(b"new page".to_vec())));

        let saved = dir.path().join(DOWNLOAD_FILE_NAME);
        assert_eq!(fs::read(&saved).unwrap(), b"new page");
    }
}
