//! Report formatting for the analyze command

use std::path::PathBuf;

use layout::PlacedAnchor;
use pdf_geom::{DocumentInfo, PageGeometry, Rect};

const POINTS_PER_INCH: f64 = 72.0;

/// Everything the analyze command learned about one template
pub struct Analysis {
    pub template: PathBuf,
    pub page: usize,
    pub page_count: usize,
    pub metadata: DocumentInfo,
    pub geometry: PageGeometry,
    pub profile_name: String,
    pub anchors: Vec<PlacedAnchor>,
}

pub fn print_text(analysis: &Analysis) {
    let width = analysis.geometry.width();
    let height = analysis.geometry.height();

    println!("=== Certificate Template Analysis ===");
    println!("Template: {}", analysis.template.display());
    println!(
        "Page size: {:.2} x {:.2} pt ({:.2} x {:.2} in)",
        width,
        height,
        width / POINTS_PER_INCH,
        height / POINTS_PER_INCH
    );
    println!("Width: {width:.2}");
    println!("Height: {height:.2}");
    println!("Rotation: {}", analysis.geometry.rotation);
    println!("Number of pages: {}", analysis.page_count);
    println!();

    print_metadata(&analysis.metadata);

    println!(
        "=== Suggested Text Positions (profile: {}) ===",
        analysis.profile_name
    );
    println!("Page Center X: {:.2}", width / 2.0);
    println!("Page Height: {height:.2}");
    println!();

    for anchor in &analysis.anchors {
        match &anchor.hint {
            Some(hint) => println!("{}: ({:.2}, {:.2}) - {hint}", anchor.label, anchor.x, anchor.y),
            None => println!("{}: ({:.2}, {:.2})", anchor.label, anchor.x, anchor.y),
        }
    }

    println!();
    println!("Note: These are estimates. Check the exact positions in a viewer");
    println!("that displays coordinates before committing them to a layout.");
}

fn print_metadata(metadata: &DocumentInfo) {
    if metadata.is_empty() {
        return;
    }

    println!("Metadata:");
    if let Some(ref v) = metadata.title {
        println!("  Title: {v}");
    }
    if let Some(ref v) = metadata.author {
        println!("  Author: {v}");
    }
    if let Some(ref v) = metadata.subject {
        println!("  Subject: {v}");
    }
    if let Some(ref v) = metadata.creator {
        println!("  Creator: {v}");
    }
    if let Some(ref v) = metadata.producer {
        println!("  Producer: {v}");
    }
    println!();
}

fn rect_to_json(rect: &Rect) -> serde_json::Value {
    serde_json::json!([rect.x0, rect.y0, rect.x1, rect.y1])
}

pub fn print_json(analysis: &Analysis) -> anyhow::Result<()> {
    let width = analysis.geometry.width();
    let height = analysis.geometry.height();

    let mut page_json = serde_json::json!({
        "number": analysis.page,
        "width": width,
        "height": height,
        "rotation": analysis.geometry.rotation,
        "media_box": rect_to_json(&analysis.geometry.media_box),
    });
    if let Some(ref cb) = analysis.geometry.crop_box {
        page_json["crop_box"] = rect_to_json(cb);
    }

    let mut output = serde_json::json!({
        "template": analysis.template.display().to_string(),
        "pages": analysis.page_count,
        "page": page_json,
        "profile": analysis.profile_name,
        "center_x": width / 2.0,
        "anchors": analysis.anchors,
    });

    let metadata = metadata_json(&analysis.metadata);
    if !metadata.is_empty() {
        output["metadata"] = serde_json::Value::Object(metadata);
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn metadata_json(metadata: &DocumentInfo) -> serde_json::Map<String, serde_json::Value> {
    let mut map = serde_json::Map::new();
    let entries = [
        ("title", &metadata.title),
        ("author", &metadata.author),
        ("subject", &metadata.subject),
        ("creator", &metadata.creator),
        ("producer", &metadata.producer),
    ];
    for (key, value) in entries {
        if let Some(v) = value {
            map.insert(key.to_string(), serde_json::json!(v));
        }
    }
    map
}
