//! PDF rendering modules
//!
//! This module handles all PDF-specific operations:
//! - Reading source page sizes
//! - Creating XObjects from source pages
//! - Building output canvases from placement commands
//! - Deep copying PDF objects

mod page;
mod xobject;

pub use page::{placement_command, render_canvas};
pub use xobject::{copy_object_deep, create_page_xobject, get_page_size};
