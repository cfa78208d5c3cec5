//! Anchor resolution against a page

use crate::parser::validate;
use crate::{Align, LayoutProfile, PageSize, Result};
use log::warn;
use serde::Serialize;

/// Side margin for left/right aligned anchors, in points (1 inch)
pub const SIDE_MARGIN: f64 = 72.0;

/// A resolved anchor with page coordinates
///
/// Coordinates use the PDF convention: origin at the bottom-left corner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedAnchor {
    pub label: String,
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

/// Resolve every anchor of a profile against a page size
///
/// y decreases strictly across the returned anchors. An anchor whose
/// offset exceeds the page height is reported as computed, not clamped.
pub fn resolve(profile: &LayoutProfile, page: PageSize) -> Result<Vec<PlacedAnchor>> {
    validate(profile)?;

    let placed = profile
        .anchors
        .iter()
        .map(|anchor| {
            let x = anchor.x.unwrap_or(match anchor.align {
                Align::Left => SIDE_MARGIN,
                Align::Center => page.center_x(),
                Align::Right => page.width - SIDE_MARGIN,
            });
            let y = page.height - anchor.offset;
            if y < 0.0 {
                warn!(
                    "anchor '{}' resolves below the bottom edge (y = {y:.2})",
                    anchor.label
                );
            }
            PlacedAnchor {
                label: anchor.label.clone(),
                x,
                y,
                font_size: anchor.font_size,
                hint: anchor.hint.clone(),
            }
        })
        .collect();

    Ok(placed)
}
