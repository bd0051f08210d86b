//! Reduction of a masked frequency map to a representative value.

use crate::image::{ImageF32, ImageView};

/// Median of the strictly positive entries of `map`.
///
/// Returns `None` when no entry is positive; the caller decides whether that
/// is an error.
pub fn positive_median(map: &ImageF32) -> Option<f32> {
    let mut values: Vec<f32> = map
        .rows()
        .flat_map(|row| row.iter().copied())
        .filter(|&v| v > 0.0)
        .collect();
    median(&mut values)
}

/// Median of `values`, averaging the two middle elements for even counts.
/// Reorders `values`.
pub fn median(values: &mut [f32]) -> Option<f32> {
    let n = values.len();
    if n == 0 {
        return None;
    }
    values.sort_by(|a, b| a.total_cmp(b));
    let mid = n / 2;
    if n % 2 == 1 {
        Some(values[mid])
    } else {
        Some(((values[mid - 1] as f64 + values[mid] as f64) * 0.5) as f32)
    }
}

/// The scalar median multiplied by the mask, one value per pixel.
///
/// With a non-uniform mask this is a masked grid rather than a scalar; it is
/// what the enhancement stage receives when it expects a per-pixel signal.
pub fn broadcast_median(median: f32, mask: &ImageF32) -> ImageF32 {
    ImageF32::from_fn(mask.w, mask.h, |x, y| median * mask.get(x, y))
}
