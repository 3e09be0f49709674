//! Slide grid geometry
//!
//! Six slides share one full-size canvas in a fixed 2 x 3 grid. Cell size,
//! margins and gutters are physical measurements and do not depend on the
//! canvas size; only the top edge anchors the grid to the canvas.

use crate::constants::{
    SLIDE_CELL_HEIGHT_MM, SLIDE_CELL_WIDTH_MM, SLIDE_COLUMNS, SLIDE_H_GUTTER_MM,
    SLIDE_LEFT_MARGIN_MM, SLIDE_ROWS, SLIDE_TOP_MARGIN_MM, SLIDE_V_GUTTER_MM, SLIDES_PER_CANVAS,
    mm_to_pt,
};

use super::{GridPosition, Rect};

/// Grid cell for the slide at `index` within its document.
///
/// Cells fill left to right, then top to bottom.
pub fn slide_position(index: usize) -> GridPosition {
    let cell = index % SLIDES_PER_CANVAS;
    GridPosition::new(cell / SLIDE_COLUMNS, cell % SLIDE_COLUMNS)
}

/// Bounds of a slide cell in points on a canvas of `canvas_height_pt`.
pub fn slide_cell_bounds(pos: GridPosition, canvas_height_pt: f32) -> Rect {
    let cell_width = mm_to_pt(SLIDE_CELL_WIDTH_MM);
    let cell_height = mm_to_pt(SLIDE_CELL_HEIGHT_MM);

    let x = pos.col as f32 * (cell_width + mm_to_pt(SLIDE_H_GUTTER_MM))
        + mm_to_pt(SLIDE_LEFT_MARGIN_MM);
    let y = canvas_height_pt
        - mm_to_pt(SLIDE_TOP_MARGIN_MM)
        - pos.row as f32 * (cell_height + mm_to_pt(SLIDE_V_GUTTER_MM))
        - cell_height;

    Rect::new(x, y, cell_width, cell_height)
}

/// Width and height in mm the grid needs, measured from the canvas's left
/// and top edges.
pub fn slide_grid_extent_mm() -> (f32, f32) {
    let columns = SLIDE_COLUMNS as f32;
    let rows = SLIDE_ROWS as f32;
    (
        SLIDE_LEFT_MARGIN_MM + columns * SLIDE_CELL_WIDTH_MM + (columns - 1.0) * SLIDE_H_GUTTER_MM,
        SLIDE_TOP_MARGIN_MM + rows * SLIDE_CELL_HEIGHT_MM + (rows - 1.0) * SLIDE_V_GUTTER_MM,
    )
}
