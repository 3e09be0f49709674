use crate::assemble::assemble;
use crate::document::{DocumentSink, PageSource};
use crate::layout::{PageSize, Transform};
use crate::options::CombineOptions;
use crate::types::*;
use std::marker::PhantomData;

/// Calculate statistics for combining `documents` without building a PDF
pub fn calculate_statistics<'a, D>(
    documents: &'a [D],
    options: &CombineOptions,
) -> Result<CombineStatistics>
where
    D: PageSource<'a>,
{
    options.validate_layout()?;

    let options = CombineOptions {
        compress: false,
        ..options.clone()
    };

    let mut sink = CountingSink::<D::Page>::default();
    let stats = assemble(documents, &mut sink, &options)?;

    if stats.source_pages == 0 {
        return Err(CombineError::NoPages);
    }
    debug_assert_eq!(stats.output_pages, sink.canvases);
    Ok(stats)
}

/// Sink that only counts canvases
struct CountingSink<P> {
    canvases: usize,
    _page: PhantomData<P>,
}

impl<P> Default for CountingSink<P> {
    fn default() -> Self {
        Self {
            canvases: 0,
            _page: PhantomData,
        }
    }
}

impl<P> DocumentSink for CountingSink<P> {
    type Page = P;
    type Canvas = usize;
    type Output = usize;

    fn allocate_canvas(&mut self, _size: PageSize) -> Result<usize> {
        self.canvases += 1;
        Ok(self.canvases - 1)
    }

    fn merge(&mut self, _canvas: usize, _page: &P, _transform: Transform) -> Result<()> {
        Ok(())
    }

    fn add_bookmark(&mut self, _title: &str, _page_number: usize) -> Result<()> {
        Ok(())
    }

    fn compress(&mut self, _canvas: usize) -> Result<()> {
        Ok(())
    }

    fn canvases(&self) -> Vec<usize> {
        (0..self.canvases).collect()
    }

    fn finalize(self) -> Result<usize> {
        Ok(self.canvases)
    }
}
