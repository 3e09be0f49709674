//! Pagination across documents
//!
//! The paginator owns the mutable layout state of a run: the page number
//! the next canvas will get and the canvas pages are currently merged onto.
//! It allocates canvases when a placement asks for one and keeps every
//! document starting on an odd page for double-sided printing.

use crate::document::DocumentSink;
use crate::layout::{FitPolicy, LayoutMode, PageSize, Transform};
use crate::types::*;

/// Mutable state of one combine run
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutState<C> {
    /// Page number the next allocated canvas receives (1-based)
    pub page_number: usize,
    /// Canvas that placements without a new-canvas request go onto
    pub current: Option<C>,
    /// Source pages merged onto the current canvas so far; in slides mode
    /// this is the next free grid cell. Never exceeds the mode's pages per
    /// canvas.
    pub cells_filled: usize,
}

impl<C> Default for LayoutState<C> {
    fn default() -> Self {
        Self {
            page_number: 1,
            current: None,
            cells_filled: 0,
        }
    }
}

pub struct Paginator<C> {
    mode: LayoutMode,
    fit: FitPolicy,
    canvas_size: PageSize,
    state: LayoutState<C>,
    blank_pages_added: usize,
}

impl<C: Copy> Paginator<C> {
    pub fn new(mode: LayoutMode, paper: PaperSize, fit: FitPolicy) -> Self {
        Self {
            mode,
            fit,
            canvas_size: mode.canvas_size(paper),
            state: LayoutState::default(),
            blank_pages_added: 0,
        }
    }

    pub fn state(&self) -> &LayoutState<C> {
        &self.state
    }

    /// Canvas size used for every allocation in this run
    pub fn canvas_size(&self) -> PageSize {
        self.canvas_size
    }

    /// Blank pages inserted by [`Paginator::begin_document`] so far
    pub fn blank_pages_added(&self) -> usize {
        self.blank_pages_added
    }

    /// Number of canvases allocated so far
    pub fn pages_allocated(&self) -> usize {
        self.state.page_number - 1
    }

    /// Prepare for the next input document.
    ///
    /// Inserts a blank canvas when the next page number is even, then
    /// registers a bookmark for `title`. Returns the bookmark's page number,
    /// which is one past the page number at registration time.
    pub fn begin_document<S>(&mut self, sink: &mut S, title: &str) -> Result<usize>
    where
        S: DocumentSink<Canvas = C>,
    {
        if self.state.page_number % 2 == 0 {
            log::debug!(
                "Inserting blank page {} before '{}'",
                self.state.page_number,
                title
            );
            self.allocate(sink)?;
            self.blank_pages_added += 1;
        }

        let bookmark_page = self.state.page_number + 1;
        sink.add_bookmark(title, bookmark_page)?;
        Ok(bookmark_page)
    }

    /// Place the page at `index` within the current document.
    ///
    /// Returns the canvas the page belongs on and the transform to draw it
    /// with, allocating a new canvas when the layout mode asks for one.
    pub fn place<S>(
        &mut self,
        sink: &mut S,
        page: PageSize,
        index: usize,
    ) -> Result<(C, Transform)>
    where
        S: DocumentSink<Canvas = C>,
    {
        let placement = self.mode.place(self.canvas_size, page, index, self.fit);

        let canvas = if placement.starts_canvas() {
            self.allocate(sink)?
        } else {
            self.state.current.ok_or_else(|| {
                CombineError::LayoutInvariant(format!(
                    "page {} placed with no current canvas",
                    index
                ))
            })?
        };

        if self.state.cells_filled >= self.mode.pages_per_canvas() {
            return Err(CombineError::LayoutInvariant(format!(
                "page {} placed onto a full canvas ({} of {} cells used)",
                index,
                self.state.cells_filled,
                self.mode.pages_per_canvas()
            )));
        }
        self.state.cells_filled += 1;
        log::debug!(
            "Page {} -> output page {} (scale {:.3}, offset {:.1},{:.1})",
            index,
            self.state.page_number - 1,
            placement.transform.scale(),
            placement.transform.translate_x,
            placement.transform.translate_y
        );

        Ok((canvas, placement.transform))
    }

    /// Allocate a canvas, make it current and advance the page number.
    fn allocate<S>(&mut self, sink: &mut S) -> Result<C>
    where
        S: DocumentSink<Canvas = C>,
    {
        let canvas = sink.allocate_canvas(self.canvas_size)?;
        self.state.current = Some(canvas);
        self.state.cells_filled = 0;
        self.state.page_number += 1;
        Ok(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sink that only records what it was asked to do
    #[derive(Default)]
    struct LogSink {
        canvases: Vec<PageSize>,
        bookmarks: Vec<(String, usize)>,
    }

    impl DocumentSink for LogSink {
        type Page = ();
        type Canvas = usize;
        type Output = ();

        fn allocate_canvas(&mut self, size: PageSize) -> Result<usize> {
            self.canvases.push(size);
            Ok(self.canvases.len() - 1)
        }

        fn merge(&mut self, _canvas: usize, _page: &(), _transform: Transform) -> Result<()> {
            Ok(())
        }

        fn add_bookmark(&mut self, title: &str, page_number: usize) -> Result<()> {
            self.bookmarks.push((title.to_string(), page_number));
            Ok(())
        }

        fn compress(&mut self, _canvas: usize) -> Result<()> {
            Ok(())
        }

        fn canvases(&self) -> Vec<usize> {
            (0..self.canvases.len()).collect()
        }

        fn finalize(self) -> Result<()> {
            Ok(())
        }
    }

    fn page() -> PageSize {
        PageSize::new(612.0, 792.0)
    }

    #[test]
    fn test_first_document_needs_no_alignment() {
        let mut sink = LogSink::default();
        let mut paginator = Paginator::new(LayoutMode::Single, PaperSize::A4, FitPolicy::Contain);

        let bookmark = paginator.begin_document(&mut sink, "a.pdf").unwrap();
        assert_eq!(bookmark, 2);
        assert!(sink.canvases.is_empty());
        assert_eq!(paginator.state().current, None);
    }

    #[test]
    fn test_even_page_number_inserts_blank() {
        let mut sink = LogSink::default();
        let mut paginator = Paginator::new(LayoutMode::Double, PaperSize::A4, FitPolicy::Contain);

        paginator.begin_document(&mut sink, "a.pdf").unwrap();
        paginator.place(&mut sink, page(), 0).unwrap();
        assert_eq!(paginator.state().page_number, 2);

        let bookmark = paginator.begin_document(&mut sink, "b.pdf").unwrap();
        assert_eq!(bookmark, 4);
        assert_eq!(paginator.blank_pages_added(), 1);
        // Blank canvas uses the mode's landscape orientation
        assert!(sink.canvases[1].is_landscape());
    }

    #[test]
    fn test_new_canvas_advances_page_number() {
        let mut sink = LogSink::default();
        let mut paginator = Paginator::new(LayoutMode::Double, PaperSize::A4, FitPolicy::Contain);

        paginator.begin_document(&mut sink, "a.pdf").unwrap();
        let (first, _) = paginator.place(&mut sink, page(), 0).unwrap();
        let (second, _) = paginator.place(&mut sink, page(), 1).unwrap();
        let (third, _) = paginator.place(&mut sink, page(), 2).unwrap();

        assert_eq!(first, second);
        assert_ne!(second, third);
        assert_eq!(paginator.state().page_number, 3);
        assert_eq!(paginator.pages_allocated(), 2);
        assert_eq!(paginator.state().cells_filled, 1);
    }

    #[test]
    fn test_full_canvas_is_invariant_error() {
        let mut sink = LogSink::default();
        let mut paginator = Paginator::new(LayoutMode::Double, PaperSize::A4, FitPolicy::Contain);

        paginator.begin_document(&mut sink, "a.pdf").unwrap();
        paginator.place(&mut sink, page(), 0).unwrap();
        paginator.place(&mut sink, page(), 1).unwrap();
        assert_eq!(paginator.state().cells_filled, 2);

        // Index 3 would be a third page on the same sheet
        let result = paginator.place(&mut sink, page(), 3);
        assert!(matches!(result, Err(CombineError::LayoutInvariant(_))));
        assert_eq!(sink.canvases.len(), 1);
    }

    #[test]
    fn test_place_without_canvas_is_invariant_error() {
        let mut sink = LogSink::default();
        let mut paginator = Paginator::new(LayoutMode::Slides, PaperSize::A4, FitPolicy::Contain);

        paginator.begin_document(&mut sink, "a.pdf").unwrap();
        let result = paginator.place(&mut sink, page(), 3);
        assert!(matches!(result, Err(CombineError::LayoutInvariant(_))));
    }
}
