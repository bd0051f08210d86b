//! JSON configuration for the frequency pipeline.
//!
//! All fields are optional and fall back to [`RidgeFreqParams::default`]:
//!
//! ```json
//! { "blockSize": 38, "kernelSize": 5, "minWavelength": 5.0,
//!   "maxWavelength": 15.0, "peakNoiseThreshold": 2.0, "border": "clamp" }
//! ```
use crate::mapper::RidgeFreqParams;
use std::fs;
use std::path::Path;

/// Parse parameters from a JSON string and validate them.
pub fn params_from_json(json: &str) -> Result<RidgeFreqParams, String> {
    let params: RidgeFreqParams =
        serde_json::from_str(json).map_err(|e| format!("Failed to parse params: {e}"))?;
    params
        .validate()
        .map_err(|e| format!("Invalid params: {e}"))?;
    Ok(params)
}

/// Read, parse and validate parameters from a JSON file.
pub fn load_params(path: &Path) -> Result<RidgeFreqParams, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    params_from_json(&contents).map_err(|e| format!("{} ({})", e, path.display()))
}
