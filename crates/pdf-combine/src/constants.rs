//! Shared constants for page layout
//!
//! This module centralizes the physical measurements and thresholds used
//! by the layout engine so the slide grid geometry stays auditable.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Scaling
// =============================================================================

/// Fraction of a destination dimension a source page may overflow by
/// before it gets shrunk to fit.
pub const OVERFLOW_TOLERANCE: f32 = 0.1;

// =============================================================================
// Slides Grid
// =============================================================================
//
// +-------------------------------------------------+
// |    25mm top margin                              |
// |<5mm>+-----------+<2mm>+-----------+             |
// |     | 99 x 52mm |     | 99 x 52mm |             |
// |     +-----------+     +-----------+             |
// |     45mm vertical gutter                        |
// |     +-----------+     +-----------+             |
// |     |           |     |           |             |
// |     +-----------+     +-----------+             |
// |     45mm vertical gutter                        |
// |     +-----------+     +-----------+             |
// |     |           |     |           |             |
// |     +-----------+     +-----------+             |
// +-------------------------------------------------+

/// Distance from the left canvas edge to the first column (mm)
pub const SLIDE_LEFT_MARGIN_MM: f32 = 5.0;

/// Distance from the top canvas edge to the first row (mm)
pub const SLIDE_TOP_MARGIN_MM: f32 = 25.0;

/// Width of one slide cell (mm)
pub const SLIDE_CELL_WIDTH_MM: f32 = 99.0;

/// Height of one slide cell (mm)
pub const SLIDE_CELL_HEIGHT_MM: f32 = 52.0;

/// Gap between the two columns (mm)
pub const SLIDE_H_GUTTER_MM: f32 = 2.0;

/// Gap between consecutive rows (mm)
pub const SLIDE_V_GUTTER_MM: f32 = 45.0;

/// Columns in the slide grid
pub const SLIDE_COLUMNS: usize = 2;

/// Rows in the slide grid
pub const SLIDE_ROWS: usize = 3;

/// Slides packed onto one canvas
pub const SLIDES_PER_CANVAS: usize = SLIDE_COLUMNS * SLIDE_ROWS;

// =============================================================================
// Output
// =============================================================================

/// PDF version written for combined documents
pub const OUTPUT_PDF_VERSION: &str = "1.7";

/// Text color of generated bookmarks (RGB)
pub const BOOKMARK_COLOR: [f32; 3] = [0.0, 0.0, 0.0];

/// Bookmark style flags (0 = plain, 1 = italic, 2 = bold)
pub const BOOKMARK_FORMAT: u32 = 0;
