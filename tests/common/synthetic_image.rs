use ridge_frequency::ImageF32;
use std::f32::consts::PI;

/// Sinusoidal ridge pattern with the given period (px) and ridge orientation
/// `theta` (radians, 0 = horizontal ridges). Crests pass through `(phase, phase)`.
pub fn ridge_pattern(width: usize, height: usize, period: f32, theta: f32, phase: f32) -> ImageF32 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(period > 0.0, "period must be positive");

    let (s, c) = theta.sin_cos();
    ImageF32::from_fn(width, height, |x, y| {
        let (dx, dy) = (x as f32 - phase, y as f32 - phase);
        let n = -dx * s + dy * c;
        (2.0 * PI * n / period).cos()
    })
}

/// Binary mask that is one inside `[x0, x1) × [y0, y1)` and zero elsewhere.
pub fn rect_mask(width: usize, height: usize, x0: usize, y0: usize, x1: usize, y1: usize) -> ImageF32 {
    ImageF32::from_fn(width, height, |x, y| {
        if (x0..x1).contains(&x) && (y0..y1).contains(&y) {
            1.0
        } else {
            0.0
        }
    })
}
