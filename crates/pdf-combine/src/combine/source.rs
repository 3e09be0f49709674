//! lopdf-backed page source

use crate::document::{PageSource, SourcePage};
use crate::render::get_page_size;
use crate::types::*;
use lopdf::{Document, ObjectId};

/// A loaded input document and the title of its bookmark
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub title: String,
    pub document: Document,
}

impl SourceDocument {
    pub fn new(title: impl Into<String>, document: Document) -> Self {
        Self {
            title: title.into(),
            document,
        }
    }

    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }
}

/// A page of a [`SourceDocument`]
#[derive(Debug, Clone, Copy)]
pub struct LopdfPage<'a> {
    pub document: &'a Document,
    pub page_id: ObjectId,
}

impl<'a> PageSource<'a> for SourceDocument {
    type Page = LopdfPage<'a>;

    fn title(&self) -> &str {
        &self.title
    }

    fn pages(&'a self) -> Result<Vec<SourcePage<LopdfPage<'a>>>> {
        self.document
            .get_pages()
            .into_values()
            .map(|page_id| {
                Ok(SourcePage {
                    page: LopdfPage {
                        document: &self.document,
                        page_id,
                    },
                    size: get_page_size(&self.document, page_id)?,
                })
            })
            .collect()
    }
}
