//! Document assembly
//!
//! Drives the paginator over every input document in order and hands the
//! resulting placements to the sink.

use crate::document::{DocumentSink, PageSource};
use crate::options::CombineOptions;
use crate::paginate::Paginator;
use crate::types::*;

/// Lay out every page of `documents` onto `sink`.
///
/// Documents and their pages are processed strictly in order. Once all
/// pages are merged, every canvas is compressed when `options.compress`
/// is set. The sink is not finalized.
pub fn assemble<'a, D, S>(
    documents: &'a [D],
    sink: &mut S,
    options: &CombineOptions,
) -> Result<CombineStatistics>
where
    D: PageSource<'a>,
    S: DocumentSink<Page = D::Page>,
{
    let mut paginator: Paginator<S::Canvas> =
        Paginator::new(options.layout_mode, options.paper_size, options.fit_policy);
    let mut source_pages = 0;
    let mut bookmarks = Vec::with_capacity(documents.len());

    for document in documents {
        let title = document.title();
        log::info!("Merging {}", title);

        let bookmark = paginator.begin_document(sink, title)?;
        bookmarks.push((title.to_string(), bookmark));

        let pages = document.pages()?;
        if pages.is_empty() {
            log::warn!("{} has no pages", title);
        }

        for (index, source) in pages.iter().enumerate() {
            let (canvas, transform) = paginator.place(sink, source.size, index)?;
            sink.merge(canvas, &source.page, transform)?;
        }
        source_pages += pages.len();
    }

    if options.compress {
        for (index, canvas) in sink.canvases().into_iter().enumerate() {
            log::debug!("Compressing page {}", index + 1);
            sink.compress(canvas)?;
        }
    }

    Ok(CombineStatistics {
        source_documents: documents.len(),
        source_pages,
        output_pages: paginator.pages_allocated(),
        blank_pages_added: paginator.blank_pages_added(),
        bookmarks,
    })
}
