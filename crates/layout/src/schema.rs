//! Profile schema types

use serde::{Deserialize, Serialize};

/// Embedded JSON Schema for profile validation
/// This schema can be used by IDEs and validators for profile authoring
pub const PROFILE_SCHEMA: &str = include_str!("../data/profile-schema.json");

/// Horizontal alignment of an anchor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    #[default]
    Center,
    Right,
}

/// Page size in points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Horizontal center of the page
    pub fn center_x(&self) -> f64 {
        self.width / 2.0
    }
}

/// A named anchor: a label with a vertical offset from the top edge
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnchorDef {
    pub label: String,

    /// Distance from the top edge, in points
    pub offset: f64,

    #[serde(default)]
    pub align: Align,

    /// Absolute x position; wins over `align` when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u8>,

    /// Display note shown next to the suggested position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

/// Root profile structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutProfile {
    /// Schema version
    pub version: String,

    /// Profile name, shown in the report header
    pub name: String,

    /// Anchors ordered top to bottom
    pub anchors: Vec<AnchorDef>,
}

impl LayoutProfile {
    pub fn new(name: &str) -> Self {
        Self {
            version: "1".to_string(),
            name: name.to_string(),
            anchors: Vec::new(),
        }
    }

    /// Append a centered anchor (fluent)
    pub fn anchor(mut self, label: &str, offset: f64) -> Self {
        self.anchors.push(AnchorDef {
            label: label.to_string(),
            offset,
            align: Align::Center,
            x: None,
            font_size: None,
            hint: None,
        });
        self
    }

    /// The built-in certificate profile
    ///
    /// Offsets and font sizes follow the layout sheet shipped with the
    /// certificate template.
    pub fn certificate() -> Self {
        fn centered(label: &str, offset: f64, font_size: u8, hint: &str) -> AnchorDef {
            AnchorDef {
                label: label.to_string(),
                offset,
                align: Align::Center,
                x: None,
                font_size: Some(font_size),
                hint: Some(hint.to_string()),
            }
        }

        Self {
            version: "1".to_string(),
            name: "certificate".to_string(),
            anchors: vec![
                centered("Student Name", 150.0, 18, "centered, top"),
                centered("Course Title", 200.0, 16, "centered, below name"),
                centered("Completion Text", 250.0, 16, "centered, main text"),
                centered("Score/Percentage", 300.0, 14, "centered"),
                centered("Date", 350.0, 14, "centered, bottom"),
            ],
        }
    }
}
