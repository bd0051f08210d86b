//! Regular block grid over the image.
//!
//! Block origins are `0, bs, 2·bs, …` strictly below `len - bs` on each axis.
//! The last strip is therefore never visited, even when it is a complete
//! block; pixels there keep a zero frequency.
use serde::Serialize;

/// One visited block: grid coordinates plus its pixel origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockCell {
    pub bx: usize,
    pub by: usize,
    pub x: usize,
    pub y: usize,
    pub size: usize,
}

/// Visited block grid for an image of `width × height` pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockGrid {
    pub width: usize,
    pub height: usize,
    pub block_size: usize,
    pub blocks_x: usize,
    pub blocks_y: usize,
}

impl BlockGrid {
    /// `block_size` must be positive; callers validate it beforehand.
    pub fn new(width: usize, height: usize, block_size: usize) -> Self {
        Self {
            width,
            height,
            block_size,
            blocks_x: visited_blocks(width, block_size),
            blocks_y: visited_blocks(height, block_size),
        }
    }

    /// Total number of visited blocks.
    pub fn len(&self) -> usize {
        self.blocks_x * self.blocks_y
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn cell(&self, bx: usize, by: usize) -> BlockCell {
        BlockCell {
            bx,
            by,
            x: bx * self.block_size,
            y: by * self.block_size,
            size: self.block_size,
        }
    }

    /// Blocks of the horizontal band `by`, left to right.
    pub fn band(&self, by: usize) -> impl Iterator<Item = BlockCell> + '_ {
        (0..self.blocks_x).map(move |bx| self.cell(bx, by))
    }

    /// All visited blocks in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = BlockCell> + '_ {
        (0..self.blocks_y).flat_map(move |by| self.band(by))
    }
}

/// Number of block origins `o = k·bs` with `o < len - bs`.
#[inline]
fn visited_blocks(len: usize, block_size: usize) -> usize {
    len.saturating_sub(1) / block_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_strip_is_not_visited() {
        // 64 / 16: origins 0, 16, 32; the block at 48 is skipped.
        let grid = BlockGrid::new(64, 64, 16);
        assert_eq!((grid.blocks_x, grid.blocks_y), (3, 3));

        // 70 / 16: origins 0..=48; the partial strip 64..70 is skipped.
        let grid = BlockGrid::new(70, 65, 16);
        assert_eq!((grid.blocks_x, grid.blocks_y), (4, 4));
    }

    #[test]
    fn small_images_have_no_blocks() {
        assert!(BlockGrid::new(16, 16, 16).is_empty());
        assert!(BlockGrid::new(10, 40, 16).is_empty());
        assert!(BlockGrid::new(0, 0, 16).is_empty());
        assert_eq!(BlockGrid::new(17, 17, 16).len(), 1);
    }

    #[test]
    fn cells_are_row_major_with_pixel_origins() {
        let grid = BlockGrid::new(40, 30, 10);
        let cells: Vec<(usize, usize)> = grid.cells().map(|c| (c.x, c.y)).collect();
        assert_eq!(
            cells,
            vec![(0, 0), (10, 0), (20, 0), (0, 10), (10, 10), (20, 10)]
        );
    }
}
