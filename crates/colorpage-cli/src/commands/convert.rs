//! Convert command - upload an image and save the coloring page

use std::path::Path;

use colorpage_client::{ConvertClient, Outcome, UploadHandler};

use crate::output::OutputContext;
use crate::view::{PathSource, TerminalView};

/// Upload an image, render the outcome, and report it for exit-code mapping
pub async fn convert(
    client: &ConvertClient,
    image: &Path,
    output_dir: &Path,
    ctx: &OutputContext,
) -> Outcome {
    let source = PathSource::new(image);
    let mut view = TerminalView::new(ctx, output_dir);

    UploadHandler::new(client, &source, &mut view).run().await
}
