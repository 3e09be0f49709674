use pdf_combine::*;

/// In-memory document made of equally sized pages
struct FakeDocument {
    title: String,
    page_count: usize,
}

impl FakeDocument {
    fn new(title: &str, page_count: usize) -> Self {
        Self {
            title: title.to_string(),
            page_count,
        }
    }
}

impl<'a> PageSource<'a> for FakeDocument {
    type Page = (String, usize);

    fn title(&self) -> &str {
        &self.title
    }

    fn pages(&'a self) -> Result<Vec<SourcePage<(String, usize)>>> {
        Ok((0..self.page_count)
            .map(|index| SourcePage {
                page: (self.title.clone(), index),
                size: PageSize::new(612.0, 792.0),
            })
            .collect())
    }
}

/// Sink that remembers which pages went onto which canvas
#[derive(Default)]
struct RecordingSink {
    canvases: Vec<Vec<(String, usize)>>,
    bookmarks: Vec<(String, usize)>,
    compressed: Vec<usize>,
}

impl DocumentSink for RecordingSink {
    type Page = (String, usize);
    type Canvas = usize;
    type Output = Vec<Vec<(String, usize)>>;

    fn allocate_canvas(&mut self, _size: PageSize) -> Result<usize> {
        self.canvases.push(Vec::new());
        Ok(self.canvases.len() - 1)
    }

    fn merge(
        &mut self,
        canvas: usize,
        page: &(String, usize),
        _transform: Transform,
    ) -> Result<()> {
        self.canvases[canvas].push(page.clone());
        Ok(())
    }

    fn add_bookmark(&mut self, title: &str, page_number: usize) -> Result<()> {
        self.bookmarks.push((title.to_string(), page_number));
        Ok(())
    }

    fn compress(&mut self, canvas: usize) -> Result<()> {
        self.compressed.push(canvas);
        Ok(())
    }

    fn canvases(&self) -> Vec<usize> {
        (0..self.canvases.len()).collect()
    }

    fn finalize(self) -> Result<Self::Output> {
        Ok(self.canvases)
    }
}

fn options(mode: LayoutMode) -> CombineOptions {
    CombineOptions {
        layout_mode: mode,
        ..Default::default()
    }
}

/// Index of the first canvas holding a page of `title`
fn first_canvas_of(canvases: &[Vec<(String, usize)>], title: &str) -> usize {
    canvases
        .iter()
        .position(|pages| pages.iter().any(|(t, _)| t == title))
        .unwrap()
}

#[test]
fn test_single_mode_bookmarks() {
    let documents = vec![FakeDocument::new("a", 3), FakeDocument::new("b", 2)];
    let mut sink = RecordingSink::default();

    let stats = assemble(&documents, &mut sink, &options(LayoutMode::Single)).unwrap();

    assert_eq!(
        sink.bookmarks,
        vec![("a".to_string(), 2), ("b".to_string(), 6)]
    );
    assert_eq!(stats.bookmarks, sink.bookmarks);
    assert_eq!(stats.output_pages, 6);
    assert_eq!(stats.blank_pages_added, 1);

    let canvases = sink.finalize().unwrap();
    // Page 4 is the alignment blank
    assert!(canvases[3].is_empty());
    assert_eq!(canvases[4], vec![("b".to_string(), 0)]);
}

#[test]
fn test_every_canvas_is_compressed() {
    let documents = vec![FakeDocument::new("a", 3)];
    let mut sink = RecordingSink::default();

    assemble(&documents, &mut sink, &options(LayoutMode::Single)).unwrap();
    assert_eq!(sink.compressed, vec![0, 1, 2]);

    let mut sink = RecordingSink::default();
    let no_compress = CombineOptions {
        compress: false,
        ..options(LayoutMode::Single)
    };
    assemble(&documents, &mut sink, &no_compress).unwrap();
    assert!(sink.compressed.is_empty());
}

#[test]
fn test_double_mode_odd_documents_never_share_a_canvas() {
    let orders: [&[(&str, usize)]; 4] = [
        &[("a", 3), ("b", 1)],
        &[("a", 1), ("b", 3)],
        &[("a", 1), ("b", 1), ("c", 5)],
        &[("a", 5), ("b", 3), ("c", 1)],
    ];

    for order in orders {
        let documents: Vec<FakeDocument> = order
            .iter()
            .map(|&(title, pages)| FakeDocument::new(title, pages))
            .collect();
        let mut sink = RecordingSink::default();
        assemble(&documents, &mut sink, &options(LayoutMode::Double)).unwrap();
        let canvases = sink.finalize().unwrap();

        for pages in &canvases {
            assert!(pages.len() <= 2);
            if let [first, second] = &pages[..] {
                assert_eq!(first.0, second.0, "canvas shared in {:?}", order);
                assert_eq!(first.1 % 2, 0);
                assert_eq!(second.1, first.1 + 1);
            }
        }

        for &(title, _) in order {
            let start = first_canvas_of(&canvases, title);
            // Zero-based even index is an odd page number
            assert_eq!(start % 2, 0, "{} starts on page {} in {:?}", title, start + 1, order);
        }
    }
}

#[test]
fn test_slides_mode_fills_six_cells_per_canvas() {
    let documents = vec![FakeDocument::new("deck", 13), FakeDocument::new("notes", 2)];
    let mut sink = RecordingSink::default();

    let stats = assemble(&documents, &mut sink, &options(LayoutMode::Slides)).unwrap();
    let canvases = sink.finalize().unwrap();

    // deck: 6 + 6 + 1, blank before notes, notes: 2
    let sizes: Vec<usize> = canvases.iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![6, 6, 1, 0, 2]);
    assert_eq!(stats.output_pages, 5);
    assert_eq!(stats.source_pages, 15);
}

#[test]
fn test_empty_document_still_gets_a_bookmark() {
    let documents = vec![
        FakeDocument::new("a", 1),
        FakeDocument::new("empty", 0),
        FakeDocument::new("b", 1),
    ];
    let mut sink = RecordingSink::default();

    let stats = assemble(&documents, &mut sink, &options(LayoutMode::Single)).unwrap();

    // a: page 1, blank page 2 before "empty", nothing to align before "b"
    assert_eq!(
        stats.bookmarks,
        vec![
            ("a".to_string(), 2),
            ("empty".to_string(), 4),
            ("b".to_string(), 4),
        ]
    );
    assert_eq!(stats.output_pages, 3);
}

#[test]
fn test_paginator_starts_at_page_one() {
    let paginator: Paginator<usize> =
        Paginator::new(LayoutMode::Single, PaperSize::A4, FitPolicy::Contain);
    assert_eq!(paginator.state().page_number, 1);
    assert_eq!(paginator.state().current, None);
    assert_eq!(paginator.pages_allocated(), 0);
}
