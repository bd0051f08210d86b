use core::fmt;

/// Errors surfaced by the frequency pipeline.
///
/// Per-block failures are not errors: they resolve to zero frequency. Only
/// configuration problems (detected before any block is processed) and a
/// whole-image result without a single positive estimate are reported.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A raw buffer did not hold `w * h` elements.
    SizeMismatch { expected: usize, actual: usize },
    /// Two grids that must share a shape do not; dimensions are `(w, h)`.
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    /// `block_size` must be positive.
    InvalidBlockSize,
    /// `kernel_size` must be a positive odd integer.
    InvalidKernelSize { kernel_size: usize },
    /// Wavelength bounds must satisfy `0 < min <= max` and be finite.
    InvalidWavelengthRange { min: f32, max: f32 },
    /// The peak-noise threshold must be finite and positive.
    InvalidPeakThreshold { threshold: f32 },
    /// The block-resolution orientation field does not cover the visited
    /// block grid; dimensions are `(blocks_x, blocks_y)`.
    OrientationFieldTooSmall {
        required: (usize, usize),
        actual: (usize, usize),
    },
    /// No block inside the mask produced a positive frequency.
    NoRidgeFrequency,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected}, got {actual}")
            }
            Self::ShapeMismatch { expected, actual } => write!(
                f,
                "shape mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
            Self::InvalidBlockSize => write!(f, "block size must be positive"),
            Self::InvalidKernelSize { kernel_size } => {
                write!(f, "kernel size must be a positive odd integer, got {kernel_size}")
            }
            Self::InvalidWavelengthRange { min, max } => {
                write!(f, "invalid wavelength range [{min}, {max}]")
            }
            Self::InvalidPeakThreshold { threshold } => {
                write!(f, "peak noise threshold must be positive, got {threshold}")
            }
            Self::OrientationFieldTooSmall { required, actual } => write!(
                f,
                "orientation field {}x{} does not cover block grid {}x{}",
                actual.0, actual.1, required.0, required.1
            ),
            Self::NoRidgeFrequency => write!(f, "no ridge frequency detected"),
        }
    }
}

impl std::error::Error for Error {}
