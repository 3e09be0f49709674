//! Document I/O for combining

use super::source::SourceDocument;
use crate::types::*;
use lopdf::Document;
use std::path::{Path, PathBuf};

/// Load a single PDF document, titled with its file name
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<SourceDocument> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    log::debug!("Loaded {} ({} pages)", path.display(), doc.get_pages().len());
    Ok(SourceDocument::new(document_title(&path), doc))
}

/// Load multiple PDF documents, keeping their order
pub async fn load_multiple_pdfs(paths: &[impl AsRef<Path>]) -> Result<Vec<SourceDocument>> {
    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        documents.push(load_pdf(path).await?);
    }
    Ok(documents)
}

/// Save the combined document.
///
/// The bytes go to a sibling temporary file that is renamed over `path`
/// once fully written.
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, CombineError>(writer)
    })
    .await??;

    let partial = partial_path(&path);
    tokio::fs::write(&partial, bytes).await?;
    if let Err(e) = tokio::fs::rename(&partial, &path).await {
        let _ = tokio::fs::remove_file(&partial).await;
        return Err(e.into());
    }
    Ok(())
}

fn document_title(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".partial");
    path.with_file_name(name)
}
