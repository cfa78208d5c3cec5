//! Profile JSON parsing and validation

use crate::{LayoutError, LayoutProfile, Result};
use std::path::Path;

/// Parse a profile from a JSON string and validate it
pub fn parse_profile(json: &str) -> Result<LayoutProfile> {
    let profile: LayoutProfile =
        serde_json::from_str(json).map_err(|e| LayoutError::ParseError(e.to_string()))?;
    validate(&profile)?;
    Ok(profile)
}

/// Load and parse a profile from a file
pub fn profile_from_file<P: AsRef<Path>>(path: P) -> Result<LayoutProfile> {
    let json = std::fs::read_to_string(path)?;
    parse_profile(&json)
}

/// Check profile invariants
///
/// Offsets are measured from the top edge, so strictly increasing offsets
/// give strictly decreasing y positions down the page.
pub fn validate(profile: &LayoutProfile) -> Result<()> {
    if profile.anchors.is_empty() {
        return Err(LayoutError::InvalidProfile(
            "profile has no anchors".to_string(),
        ));
    }

    let mut prev: Option<f64> = None;
    for anchor in &profile.anchors {
        if anchor.label.trim().is_empty() {
            return Err(LayoutError::InvalidProfile(
                "anchor has an empty label".to_string(),
            ));
        }
        if !anchor.offset.is_finite() || anchor.offset < 0.0 {
            return Err(LayoutError::InvalidProfile(format!(
                "anchor '{}' has an invalid offset",
                anchor.label
            )));
        }
        if let Some(prev_offset) = prev {
            if anchor.offset <= prev_offset {
                return Err(LayoutError::InvalidProfile(format!(
                    "anchor '{}' does not move down the page",
                    anchor.label
                )));
            }
        }
        prev = Some(anchor.offset);
    }

    Ok(())
}
