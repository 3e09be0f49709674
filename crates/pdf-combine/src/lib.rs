pub mod assemble;
pub mod combine;
pub mod constants;
pub mod document;
pub mod layout;
mod options;
pub mod paginate;
pub mod render;
mod stats;
mod types;

pub use assemble::assemble;
pub use combine::{SourceDocument, combine, combine_sync, load_multiple_pdfs, load_pdf, save_pdf};
pub use document::{DocumentSink, PageSource, SourcePage};
pub use layout::{FitPolicy, LayoutMode, PageSize, Transform};
pub use options::*;
pub use paginate::{LayoutState, Paginator};
pub use stats::calculate_statistics;
pub use types::*;
