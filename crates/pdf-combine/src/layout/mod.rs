//! Layout calculation modules
//!
//! This module handles all the geometric calculations for combining pages:
//! - Scale resolution under a fit policy
//! - Slide grid geometry
//! - Placement of each source page for the three layout modes

mod grid;
mod placement;
mod scale;
mod types;

pub use grid::*;
pub use placement::*;
pub use scale::*;
pub use types::*;
