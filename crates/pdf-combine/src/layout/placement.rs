//! Placement of source pages onto canvases
//!
//! Each layout mode decides, for a page at a given index within its
//! document:
//! - Whether the page starts a new canvas (and of what size)
//! - The uniform scale and translation that put the page on the canvas

use crate::constants::{SLIDES_PER_CANVAS, mm_to_pt};
use crate::types::{Orientation, PaperSize};

use super::{
    FitPolicy, PageSize, Placement, Transform, resolve_scale, slide_cell_bounds, slide_position,
};

/// How source pages are packed onto output canvases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutMode {
    /// One page per canvas, centered
    #[default]
    Single,
    /// Two pages side by side on a landscape canvas
    Double,
    /// Six slides per canvas in a fixed 2 x 3 grid
    Slides,
}

impl LayoutMode {
    /// Number of source pages that share one canvas
    pub fn pages_per_canvas(self) -> usize {
        match self {
            LayoutMode::Single => 1,
            LayoutMode::Double => 2,
            LayoutMode::Slides => SLIDES_PER_CANVAS,
        }
    }

    /// Orientation of the canvases this mode allocates
    pub fn orientation(self) -> Orientation {
        match self {
            LayoutMode::Single | LayoutMode::Slides => Orientation::Portrait,
            LayoutMode::Double => Orientation::Landscape,
        }
    }

    /// Canvas size in points for this mode on the given paper
    pub fn canvas_size(self, paper: PaperSize) -> PageSize {
        let (width_mm, height_mm) = paper.dimensions_with_orientation(self.orientation());
        PageSize::new(mm_to_pt(width_mm), mm_to_pt(height_mm))
    }

    /// Whether the page at `index` within its document starts a new canvas
    pub fn starts_canvas(self, index: usize) -> bool {
        index % self.pages_per_canvas() == 0
    }

    /// Place the source page at `index` within its document.
    ///
    /// # Arguments
    /// * `canvas` - Canvas size for this mode (see [`LayoutMode::canvas_size`])
    /// * `page` - Source page size in points
    /// * `index` - Zero-based position of the page within its document
    /// * `policy` - Fit policy (ignored by `Slides`)
    pub fn place(
        self,
        canvas: PageSize,
        page: PageSize,
        index: usize,
        policy: FitPolicy,
    ) -> Placement {
        let transform = match self {
            LayoutMode::Single => place_single(canvas, page, policy),
            LayoutMode::Double => place_double(canvas, page, index, policy),
            LayoutMode::Slides => place_slide(canvas, page, index),
        };

        Placement {
            new_canvas: self.starts_canvas(index).then_some(canvas),
            transform,
        }
    }
}

/// Center the page on the canvas.
fn place_single(canvas: PageSize, page: PageSize, policy: FitPolicy) -> Transform {
    let scale = resolve_scale(page.width, page.height, canvas.width, canvas.height, policy);
    Transform::new(
        scale,
        (canvas.width - scale * page.width) / 2.0,
        (canvas.height - scale * page.height) / 2.0,
    )
}

/// Center the page within its half of the canvas.
fn place_double(canvas: PageSize, page: PageSize, index: usize, policy: FitPolicy) -> Transform {
    let half_width = canvas.width / 2.0;
    let column = (index % 2) as f32;

    let scale = resolve_scale(page.width, page.height, half_width, canvas.height, policy);
    Transform::new(
        scale,
        (half_width - scale * page.width) / 2.0 + column * half_width,
        (canvas.height - scale * page.height) / 2.0,
    )
}

/// Put the slide's origin at its cell origin, scaled to the cell width.
fn place_slide(canvas: PageSize, page: PageSize, index: usize) -> Transform {
    let cell = slide_cell_bounds(slide_position(index), canvas.height);
    Transform::new(cell.width / page.width, cell.x, cell.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter() -> PageSize {
        PageSize::new(612.0, 792.0)
    }

    #[test]
    fn test_single_centers_real_size_page() {
        let placement = LayoutMode::Single.place(
            letter(),
            PageSize::new(200.0, 200.0),
            0,
            FitPolicy::Contain,
        );

        assert_eq!(placement.new_canvas, Some(letter()));
        assert_eq!(placement.transform.scale(), 1.0);
        assert!((placement.transform.translate_x - 206.0).abs() < 0.001);
        assert!((placement.transform.translate_y - 296.0).abs() < 0.001);
    }

    #[test]
    fn test_single_always_starts_canvas() {
        for index in 0..5 {
            let placement =
                LayoutMode::Single.place(letter(), letter(), index, FitPolicy::Contain);
            assert!(placement.starts_canvas());
        }
    }

    #[test]
    fn test_single_center_invariant() {
        let sources = [
            PageSize::new(100.0, 900.0),
            PageSize::new(1500.0, 300.0),
            PageSize::new(595.0, 842.0),
        ];
        for policy in [FitPolicy::Contain, FitPolicy::Cover] {
            for &page in &sources {
                let area = LayoutMode::Single
                    .place(letter(), page, 0, policy)
                    .transform
                    .apply(page);
                assert!((area.x + area.width / 2.0 - 306.0).abs() < 0.01);
                assert!((area.y + area.height / 2.0 - 396.0).abs() < 0.01);
            }
        }
    }

    #[test]
    fn test_double_pairs_pages_on_one_canvas() {
        let canvas = letter().rotated();
        let page = PageSize::new(306.0, 612.0);

        let left = LayoutMode::Double.place(canvas, page, 0, FitPolicy::Contain);
        let right = LayoutMode::Double.place(canvas, page, 1, FitPolicy::Contain);
        let next = LayoutMode::Double.place(canvas, page, 2, FitPolicy::Contain);

        assert!(left.starts_canvas());
        assert!(!right.starts_canvas());
        assert!(next.starts_canvas());

        // Exactly half the canvas: no scaling, columns at 0 and 396
        assert_eq!(left.transform.scale(), 1.0);
        assert!((left.transform.translate_x - 45.0).abs() < 0.001);
        assert!((right.transform.translate_x - 441.0).abs() < 0.001);
        assert!(left.transform.translate_y.abs() < 0.001);
    }

    #[test]
    fn test_double_shrinks_into_half() {
        let canvas = letter().rotated();
        let t = LayoutMode::Double
            .place(canvas, letter(), 1, FitPolicy::Contain)
            .transform;

        // 612 x 792 into 396 x 612: width-limited
        let expected = (612.0_f32 / 792.0).min(396.0 / 612.0);
        assert!((t.scale() - expected).abs() < 0.001);
        let center_x = t.translate_x + t.scale() * 612.0 / 2.0;
        assert!((center_x - 396.0 * 1.5).abs() < 0.01);
    }

    #[test]
    fn test_slides_share_canvas_for_six_pages() {
        let canvas = LayoutMode::Slides.canvas_size(PaperSize::A4);
        let slide = PageSize::new(720.0, 405.0);

        for index in 0..6 {
            let placement = LayoutMode::Slides.place(canvas, slide, index, FitPolicy::Contain);
            assert_eq!(placement.starts_canvas(), index == 0);
        }
        let seventh = LayoutMode::Slides.place(canvas, slide, 6, FitPolicy::Contain);
        assert!(seventh.starts_canvas());
    }

    #[test]
    fn test_slides_first_cell_origin() {
        let canvas = LayoutMode::Slides.canvas_size(PaperSize::A4);
        let slide = PageSize::new(720.0, 405.0);
        let t = LayoutMode::Slides
            .place(canvas, slide, 0, FitPolicy::Contain)
            .transform;

        assert!((t.translate_x - mm_to_pt(5.0)).abs() < 0.01);
        assert!((t.translate_y - (canvas.height - mm_to_pt(25.0) - mm_to_pt(52.0))).abs() < 0.01);
        assert!((t.scale() - mm_to_pt(99.0) / 720.0).abs() < 0.0001);
    }

    #[test]
    fn test_slides_ignore_fit_policy() {
        let canvas = LayoutMode::Slides.canvas_size(PaperSize::A4);
        let slide = PageSize::new(720.0, 405.0);
        let contain = LayoutMode::Slides.place(canvas, slide, 3, FitPolicy::Contain);
        let cover = LayoutMode::Slides.place(canvas, slide, 3, FitPolicy::Cover);
        assert_eq!(contain, cover);
    }

    #[test]
    fn test_canvas_orientation_per_mode() {
        let single = LayoutMode::Single.canvas_size(PaperSize::A4);
        let double = LayoutMode::Double.canvas_size(PaperSize::A4);
        assert!(!single.is_landscape());
        assert!(double.is_landscape());
        assert_eq!(single.rotated(), double);
    }
}
