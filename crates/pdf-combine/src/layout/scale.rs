//! Scale factor resolution for fitting a source page into an area

use crate::constants::OVERFLOW_TOLERANCE;

/// How a source page is scaled into its destination area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FitPolicy {
    /// Keep the real size; shrink only pages that overflow the area by more
    /// than the tolerance
    #[default]
    Contain,
    /// Enlarge to fill the area, unless that overflows by more than the
    /// tolerance, in which case shrink to fit instead
    Cover,
}

/// Calculate the uniform scale factor for placing a `src_width` x `src_height`
/// page into a `dst_width` x `dst_height` area.
///
/// Dimensions must be positive.
pub fn resolve_scale(
    src_width: f32,
    src_height: f32,
    dst_width: f32,
    dst_height: f32,
    policy: FitPolicy,
) -> f32 {
    let shrink_to_fit = (dst_height / src_height).min(dst_width / src_width);

    match policy {
        FitPolicy::Contain => {
            if overflows(src_width, src_height, dst_width, dst_height) {
                shrink_to_fit
            } else {
                1.0
            }
        }
        FitPolicy::Cover => {
            let candidate = (dst_height / src_height).max(dst_width / src_width);
            if overflows(
                src_width * candidate,
                src_height * candidate,
                dst_width,
                dst_height,
            ) {
                shrink_to_fit
            } else {
                candidate
            }
        }
    }
}

/// Whether either dimension exceeds its destination by more than the tolerance
fn overflows(width: f32, height: f32, dst_width: f32, dst_height: f32) -> bool {
    width - dst_width > OVERFLOW_TOLERANCE * dst_width
        || height - dst_height > OVERFLOW_TOLERANCE * dst_height
}
