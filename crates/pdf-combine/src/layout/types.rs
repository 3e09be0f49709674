//! Layout data types
//!
//! These types carry the results of layout calculations between the
//! strategies, the paginator and the document sink.

/// Width and height of a page in points
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The same size with width and height swapped
    pub fn rotated(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    pub fn is_landscape(self) -> bool {
        self.width > self.height
    }
}

/// Position within the slide grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }
}

/// Uniform scale followed by a translation.
///
/// Maps a source point `(x, y)` to `(x * scale_x + translate_x,
/// y * scale_y + translate_y)` on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale_x: f32,
    pub scale_y: f32,
    pub translate_x: f32,
    pub translate_y: f32,
}

impl Transform {
    pub fn new(scale: f32, translate_x: f32, translate_y: f32) -> Self {
        Self {
            scale_x: scale,
            scale_y: scale,
            translate_x,
            translate_y,
        }
    }

    /// Scale factor shared by both axes
    pub fn scale(&self) -> f32 {
        self.scale_x
    }

    /// Area covered by a source page of `size` once transformed
    pub fn apply(&self, size: PageSize) -> Rect {
        Rect::new(
            self.translate_x,
            self.translate_y,
            size.width * self.scale_x,
            size.height * self.scale_y,
        )
    }

    /// The six PDF matrix operands `a b c d e f` for a `cm` operator
    pub fn to_matrix(&self) -> [f32; 6] {
        [
            self.scale_x,
            0.0,
            0.0,
            self.scale_y,
            self.translate_x,
            self.translate_y,
        ]
    }
}

/// Outcome of placing one source page.
///
/// `new_canvas` is set when the page must start a fresh canvas of that size;
/// otherwise the page goes onto the current canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub new_canvas: Option<PageSize>,
    pub transform: Transform,
}

impl Placement {
    pub fn starts_canvas(&self) -> bool {
        self.new_canvas.is_some()
    }
}
