use super::timing::TimingBreakdown;
use crate::frequency::{BlockEstimate, BlockOutcome};
use crate::image::ImageF32;
use crate::mapper::tiling::{BlockCell, BlockGrid};
use crate::orientation::OrientationResolution;
use serde::Serialize;

/// Result of [`RidgeFrequencyMapBuilder::build_with_diagnostics`](crate::RidgeFrequencyMapBuilder).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyReport {
    /// Masked per-pixel frequency map (cycles per pixel).
    #[serde(skip)]
    pub frequency_map: ImageF32,
    /// Median of the positive masked entries; `None` when there are none.
    pub median: Option<f32>,
    pub trace: FrequencyTrace,
}

impl FrequencyReport {
    /// One-line human readable summary.
    pub fn summary(&self) -> String {
        let median = self
            .median
            .map(|m| format!("{m:.4}"))
            .unwrap_or_else(|| "-".to_string());
        format!(
            "{}x{} blocks={} accepted={} median={} total_ms={:.3}",
            self.trace.input.width,
            self.trace.input.height,
            self.trace.blocks.len(),
            self.trace.accepted_blocks,
            median,
            self.trace.timings.total_ms
        )
    }
}

/// What the run saw and did, block by block.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyTrace {
    pub input: InputDescriptor,
    pub blocks: Vec<BlockSample>,
    pub accepted_blocks: usize,
    /// Map entries that stayed positive after masking.
    pub positive_pixels: usize,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub grid: BlockGrid,
    pub orientation: OrientationResolution,
}

/// Outcome of the estimator on one block.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockSample {
    pub bx: usize,
    pub by: usize,
    pub x: usize,
    pub y: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation_rad: Option<f32>,
    pub peaks: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wavelength: Option<f32>,
    pub frequency: f32,
    pub outcome: BlockOutcome,
}

impl BlockSample {
    pub fn from_estimate(cell: &BlockCell, estimate: &BlockEstimate) -> Self {
        Self {
            bx: cell.bx,
            by: cell.by,
            x: cell.x,
            y: cell.y,
            orientation_rad: estimate.orientation_rad,
            peaks: estimate.peaks.len(),
            wavelength: estimate.wavelength,
            frequency: estimate.frequency,
            outcome: estimate.outcome,
        }
    }
}
