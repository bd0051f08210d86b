//! Same-size image rotation about the centre with cubic B-spline resampling.
//!
//! Output pixel `o = (row, col)`, taken relative to the centre
//! `((h-1)/2, (w-1)/2)`, is read from the source at `R·o + centre` with
//! `R = [[cos a, sin a], [-sin a, cos a]]` in `(row, col)` order. On screen
//! (y down) a positive angle turns the content counter-clockwise.
use super::spline::SplineCoefficients;
use crate::angle::cos_sin_deg;
use crate::image::{BorderMode, ImageF32, ImageViewMut};
use nalgebra::{Matrix2, Vector2};

/// Rotate `img` by `degrees` keeping the input dimensions.
pub fn rotate_about_center(img: &ImageF32, degrees: f64, border: BorderMode) -> ImageF32 {
    let mut out = ImageF32::new(img.w, img.h);
    if img.w == 0 || img.h == 0 {
        return out;
    }

    let (c, s) = cos_sin_deg(degrees);
    let rot = Matrix2::new(c, s, -s, c);
    let center = Vector2::new((img.h as f64 - 1.0) / 2.0, (img.w as f64 - 1.0) / 2.0);
    let spline = SplineCoefficients::from_image(img, border);

    out.for_each_row_mut(|row, pixels| {
        for (col, px) in pixels.iter_mut().enumerate() {
            let o = Vector2::new(row as f64, col as f64) - center;
            let src = rot * o + center;
            *px = spline.sample(src[1], src[0]);
        }
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(w: usize, h: usize) -> ImageF32 {
        ImageF32::from_fn(w, h, |x, y| (3 * x + 7 * y) as f32 + 0.25 * (x * y) as f32)
    }

    #[test]
    fn zero_rotation_is_identity() {
        let img = ramp(9, 9);
        let out = rotate_about_center(&img, 0.0, BorderMode::Clamp);
        for (a, b) in out.data.iter().zip(&img.data) {
            assert!((a - b).abs() < 1e-3, "{a} vs {b}");
        }
    }

    #[test]
    fn quarter_turn_maps_columns_from_rows() {
        let img = ramp(8, 8);
        let out = rotate_about_center(&img, 90.0, BorderMode::Clamp);
        // (row, col) reads source (row = col, col = h - 1 - row).
        for r in 0..8 {
            for c in 0..8 {
                let expected = img.get(7 - r, c);
                assert!(
                    (out.get(c, r) - expected).abs() < 1e-3,
                    "({r},{c}): {} vs {expected}",
                    out.get(c, r)
                );
            }
        }
    }

    #[test]
    fn half_turn_flips_both_axes() {
        let img = ramp(6, 6);
        let out = rotate_about_center(&img, 180.0, BorderMode::Clamp);
        for r in 0..6 {
            for c in 0..6 {
                assert!((out.get(c, r) - img.get(5 - c, 5 - r)).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn constant_border_fills_uncovered_corners() {
        let img = ImageF32::new_fill(21, 21, 1.0);
        let out = rotate_about_center(&img, 45.0, BorderMode::Constant(0.0));
        assert!(out.get(0, 0) < 0.1, "corner should read padding, got {}", out.get(0, 0));
        assert!((out.get(10, 10) - 1.0).abs() < 1e-3);

        let clamped = rotate_about_center(&img, 45.0, BorderMode::Clamp);
        assert!((clamped.get(0, 0) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn empty_image_stays_empty() {
        let out = rotate_about_center(&ImageF32::new(0, 4), 30.0, BorderMode::Clamp);
        assert_eq!((out.w, out.h), (0, 4));
    }
}
