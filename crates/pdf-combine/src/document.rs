//! Boundaries between the layout engine and PDF storage
//!
//! The engine reads pages through [`PageSource`] and writes canvases
//! through [`DocumentSink`]. The lopdf-backed implementations live in
//! [`crate::combine`]; tests and statistics use lightweight ones.

use crate::layout::{PageSize, Transform};
use crate::types::Result;

/// One page of an input document
#[derive(Debug, Clone, Copy)]
pub struct SourcePage<P> {
    /// Opaque handle the sink uses to merge the page
    pub page: P,
    /// Page size in points
    pub size: PageSize,
}

/// An input document: a title and an ordered list of pages
pub trait PageSource<'a> {
    type Page;

    /// Title used for the document's bookmark
    fn title(&self) -> &str;

    /// All pages in source order
    fn pages(&'a self) -> Result<Vec<SourcePage<Self::Page>>>;
}

/// The output document under construction
pub trait DocumentSink {
    /// Source page handle accepted by [`DocumentSink::merge`]
    type Page;
    /// Handle to an allocated canvas
    type Canvas: Copy;
    /// Result of finalizing the sink
    type Output;

    /// Append a blank canvas of the given size
    fn allocate_canvas(&mut self, size: PageSize) -> Result<Self::Canvas>;

    /// Draw `page` onto `canvas` with `transform` applied
    fn merge(
        &mut self,
        canvas: Self::Canvas,
        page: &Self::Page,
        transform: Transform,
    ) -> Result<()>;

    /// Register a bookmark for `title` at `page_number`
    fn add_bookmark(&mut self, title: &str, page_number: usize) -> Result<()>;

    /// Compress the content of `canvas`
    fn compress(&mut self, canvas: Self::Canvas) -> Result<()>;

    /// All canvases allocated so far, in page order
    fn canvases(&self) -> Vec<Self::Canvas>;

    /// Produce the finished output
    fn finalize(self) -> Result<Self::Output>;
}
