//! lopdf-backed document sink
//!
//! Canvases are collected in memory while the layout runs and only become
//! page objects in [`PdfSink::finalize`], so an aborted run never yields a
//! half-built document.

use super::source::LopdfPage;
use crate::constants::{BOOKMARK_COLOR, BOOKMARK_FORMAT, OUTPUT_PDF_VERSION, pt_to_mm};
use crate::document::DocumentSink;
use crate::layout::{PageSize, Transform};
use crate::render::{create_page_xobject, placement_command, render_canvas};
use crate::types::*;
use lopdf::{Bookmark, Dictionary, Document, Object, ObjectId};
use std::collections::HashMap;

/// Handle to a canvas of a [`PdfSink`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanvasId(usize);

impl CanvasId {
    /// Zero-based position of the canvas in the output document
    pub fn index(self) -> usize {
        self.0
    }
}

/// A canvas waiting to be rendered
#[derive(Debug)]
struct Canvas {
    size: PageSize,
    content_ops: Vec<String>,
    xobjects: Dictionary,
    compress: bool,
}

impl Canvas {
    fn new(size: PageSize) -> Self {
        Self {
            size,
            content_ops: Vec::new(),
            xobjects: Dictionary::new(),
            compress: false,
        }
    }
}

/// Builds the combined output document
pub struct PdfSink<'a> {
    output: Document,
    canvases: Vec<Canvas>,
    bookmarks: Vec<(String, usize)>,
    // Source to output object IDs, shared by every page of `cached_source`
    // so fonts and images are copied once per document.
    cached_source: Option<&'a Document>,
    object_cache: HashMap<ObjectId, ObjectId>,
}

impl Default for PdfSink<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfSink<'_> {
    pub fn new() -> Self {
        Self {
            output: Document::with_version(OUTPUT_PDF_VERSION),
            canvases: Vec::new(),
            bookmarks: Vec::new(),
            cached_source: None,
            object_cache: HashMap::new(),
        }
    }

    fn canvas_mut(&mut self, id: CanvasId) -> Result<&mut Canvas> {
        self.canvases.get_mut(id.0).ok_or_else(|| {
            CombineError::LayoutInvariant(format!("canvas {} was never allocated", id.0))
        })
    }
}

impl<'a> DocumentSink for PdfSink<'a> {
    type Page = LopdfPage<'a>;
    type Canvas = CanvasId;
    type Output = Document;

    fn allocate_canvas(&mut self, size: PageSize) -> Result<CanvasId> {
        self.canvases.push(Canvas::new(size));
        log::debug!(
            "Allocated page {} ({:.0} x {:.0} mm)",
            self.canvases.len(),
            pt_to_mm(size.width),
            pt_to_mm(size.height)
        );
        Ok(CanvasId(self.canvases.len() - 1))
    }

    fn merge(
        &mut self,
        canvas: CanvasId,
        page: &LopdfPage<'a>,
        transform: Transform,
    ) -> Result<()> {
        let target = self.canvases.get_mut(canvas.0).ok_or_else(|| {
            CombineError::LayoutInvariant(format!("canvas {} was never allocated", canvas.0))
        })?;

        // Object IDs are only meaningful within one source document
        if !self
            .cached_source
            .is_some_and(|cached| std::ptr::eq(cached, page.document))
        {
            self.cached_source = Some(page.document);
            self.object_cache.clear();
        }

        let xobject_id = create_page_xobject(
            &mut self.output,
            page.document,
            page.page_id,
            &mut self.object_cache,
        )?;

        let xobject_name = format!("P{}", target.content_ops.len());
        target
            .xobjects
            .set(xobject_name.as_bytes(), Object::Reference(xobject_id));
        target
            .content_ops
            .push(placement_command(&xobject_name, &transform));
        Ok(())
    }

    fn add_bookmark(&mut self, title: &str, page_number: usize) -> Result<()> {
        self.bookmarks.push((title.to_string(), page_number));
        Ok(())
    }

    fn compress(&mut self, canvas: CanvasId) -> Result<()> {
        self.canvas_mut(canvas)?.compress = true;
        Ok(())
    }

    fn canvases(&self) -> Vec<CanvasId> {
        (0..self.canvases.len()).map(CanvasId).collect()
    }

    fn finalize(mut self) -> Result<Document> {
        let pages_tree_id = self.output.new_object_id();

        let mut page_ids = Vec::with_capacity(self.canvases.len());
        for canvas in self.canvases {
            page_ids.push(render_canvas(
                &mut self.output,
                pages_tree_id,
                canvas.size,
                &canvas.content_ops,
                canvas.xobjects,
                canvas.compress,
            )?);
        }

        // Create pages tree
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            (
                "Kids",
                Object::Array(page_ids.iter().copied().map(Object::Reference).collect()),
            ),
            ("Count", Object::Integer(page_ids.len() as i64)),
        ]);
        self.output
            .objects
            .insert(pages_tree_id, Object::Dictionary(pages_dict));

        // Create catalog
        let mut catalog = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_tree_id)),
        ]);

        for (title, page_number) in self.bookmarks {
            match bookmark_target(page_number, page_ids.len()) {
                Some(index) => {
                    self.output.add_bookmark(
                        Bookmark::new(title, BOOKMARK_COLOR, BOOKMARK_FORMAT, page_ids[index]),
                        None,
                    );
                }
                None => log::warn!("Dropping bookmark '{}': output has no pages", title),
            }
        }
        if let Some(outline_id) = self.output.build_outline() {
            catalog.set("Outlines", Object::Reference(outline_id));
            catalog.set("PageMode", Object::Name(b"UseOutlines".to_vec()));
        }

        let catalog_id = self.output.add_object(catalog);
        self.output.trailer.set("Root", catalog_id);

        Ok(self.output)
    }
}

/// Index of the output page a bookmark registered at `page_number` points to.
///
/// Bookmarks are registered one past the page number the document's first
/// canvas receives, so they resolve to page `page_number - 1`. Bookmarks of
/// trailing empty documents are clamped to the last page.
fn bookmark_target(page_number: usize, page_count: usize) -> Option<usize> {
    if page_count == 0 {
        return None;
    }
    Some(page_number.saturating_sub(2).min(page_count - 1))
}
