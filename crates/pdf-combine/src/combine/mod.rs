//! PDF combining
//!
//! Lays out the pages of several documents onto fresh canvases in order:
//! 1. Load the source documents
//! 2. Align each document to an odd output page and bookmark it
//! 3. Place every page with the active layout mode
//! 4. Render the canvases into a new PDF with an outline

mod io;
mod sink;
mod source;

pub use io::{load_multiple_pdfs, load_pdf, save_pdf};
pub use sink::{CanvasId, PdfSink};
pub use source::{LopdfPage, SourceDocument};

use crate::assemble::assemble;
use crate::document::DocumentSink;
use crate::options::CombineOptions;
use crate::types::*;
use lopdf::Document;

/// Main combine function
pub async fn combine(documents: &[SourceDocument], options: &CombineOptions) -> Result<Document> {
    options.validate_layout()?;

    let documents = documents.to_vec();
    let options = options.clone();

    tokio::task::spawn_blocking(move || combine_sync(&documents, &options)).await?
}

/// Blocking variant of [`combine`]
pub fn combine_sync(documents: &[SourceDocument], options: &CombineOptions) -> Result<Document> {
    let total_pages: usize = documents.iter().map(SourceDocument::page_count).sum();
    if total_pages == 0 {
        return Err(CombineError::NoPages);
    }

    let mut sink = PdfSink::new();
    let stats = assemble(documents, &mut sink, options)?;
    log::info!(
        "Laid out {} pages from {} documents onto {} pages ({} blank)",
        stats.source_pages,
        stats.source_documents,
        stats.output_pages,
        stats.blank_pages_added
    );

    sink.finalize()
}
