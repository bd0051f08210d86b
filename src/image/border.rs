//! Border handling for samples requested outside an image.
//!
//! `Clamp` replicates the edge pixel (the "nearest" extension), `Constant`
//! fills with a fixed value and `Reflect101` mirrors about the edge pixels
//! without repeating them.
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BorderMode {
    #[default]
    Clamp,
    Constant(f32),
    Reflect101,
}

/// Maps a possibly out-of-range index onto `[0, len)`.
///
/// Returns `None` for `Constant` borders outside the range (the caller
/// substitutes the fill value) and for empty axes.
pub fn map_index(i: isize, len: usize, mode: BorderMode) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if i >= 0 && (i as usize) < len {
        return Some(i as usize);
    }
    match mode {
        BorderMode::Constant(_) => None,
        BorderMode::Clamp => {
            if i < 0 {
                Some(0)
            } else {
                Some(len - 1)
            }
        }
        BorderMode::Reflect101 => {
            if len == 1 {
                return Some(0);
            }
            let period = (2 * len - 2) as isize;
            let r = i.rem_euclid(period) as usize;
            if r < len {
                Some(r)
            } else {
                Some((2 * len - 2) - r)
            }
        }
    }
}
