//! Owned single-channel f32 image in row-major layout (stride == width).
//!
//! Used for intensities, masks, orientation grids and frequency maps alike.
//! Provides row access, a contiguous slice, block crops and the elementwise
//! helpers the frequency pipeline needs.
use crate::error::Error;

#[derive(Clone, Debug, PartialEq)]
pub struct ImageF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of f32 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::new_fill(w, h, 0.0)
    }

    /// Construct a buffer of size `w × h` with every pixel set to `value`.
    pub fn new_fill(w: usize, h: usize, value: f32) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![value; w * h],
        }
    }

    /// Wrap an existing row-major buffer; `data.len()` must equal `w * h`.
    pub fn from_vec(w: usize, h: usize, data: Vec<f32>) -> Result<Self, Error> {
        let expected = w * h;
        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    /// Build an image by evaluating `f(x, y)` at every pixel.
    pub fn from_fn(w: usize, h: usize, mut f: impl FnMut(usize, usize) -> f32) -> Self {
        let mut data = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                data.push(f(x, y));
            }
        }
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }
    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }
    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// `(width, height)` pair, handy for shape comparisons.
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.w, self.h)
    }

    /// Copy the `w × h` window with top-left corner `(x0, y0)`.
    ///
    /// The window is clipped to the image; a window starting outside the
    /// image yields an empty buffer.
    pub fn crop(&self, x0: usize, y0: usize, w: usize, h: usize) -> ImageF32 {
        let x_end = (x0.saturating_add(w)).min(self.w);
        let y_end = (y0.saturating_add(h)).min(self.h);
        let cw = x_end.saturating_sub(x0);
        let ch = y_end.saturating_sub(y0);
        let mut out = ImageF32::new(cw, ch);
        for y in 0..ch {
            let src = self.idx(x0, y0 + y);
            let dst = y * cw;
            out.data[dst..dst + cw].copy_from_slice(&self.data[src..src + cw]);
        }
        out
    }

    /// Multiply every pixel by the matching pixel of `weights` in place.
    pub fn mul_assign(&mut self, weights: &ImageF32) -> Result<(), Error> {
        if self.dims() != weights.dims() {
            return Err(Error::ShapeMismatch {
                expected: self.dims(),
                actual: weights.dims(),
            });
        }
        for y in 0..self.h {
            let start = self.idx(0, y);
            let wrow = &weights.data[weights.idx(0, y)..weights.idx(0, y) + weights.w];
            for (v, &m) in self.data[start..start + self.w].iter_mut().zip(wrow) {
                *v *= m;
            }
        }
        Ok(())
    }

    /// Sum of all pixels, accumulated in f64.
    pub fn sum(&self) -> f64 {
        (0..self.h)
            .map(|y| {
                let start = self.idx(0, y);
                self.data[start..start + self.w]
                    .iter()
                    .map(|&v| v as f64)
                    .sum::<f64>()
            })
            .sum()
    }
}

impl crate::image::traits::ImageView for ImageF32 {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[f32]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}

impl crate::image::traits::ImageViewMut for ImageF32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}
