//! Integration tests for profile parsing and resolution

use layout::{parse_profile, resolve, Align, LayoutProfile, PageSize};
use pretty_assertions::assert_eq;

#[test]
fn test_parse_full_profile() {
    let profile_json = r#"{
        "version": "1",
        "name": "diploma",
        "anchors": [
            {
                "label": "Recipient",
                "offset": 180,
                "hint": "centered, below the crest"
            },
            {
                "label": "Programme",
                "offset": 240,
                "fontSize": 16
            },
            {
                "label": "Signature",
                "offset": 430,
                "align": "right"
            },
            {
                "label": "Serial",
                "offset": 470,
                "x": 40
            }
        ]
    }"#;

    let profile = parse_profile(profile_json).unwrap();

    assert_eq!(profile.name, "diploma");
    assert_eq!(profile.anchors.len(), 4);
    assert_eq!(profile.anchors[0].hint.as_deref(), Some("centered, below the crest"));
    assert_eq!(profile.anchors[1].font_size, Some(16));
    assert_eq!(profile.anchors[2].align, Align::Right);
    assert_eq!(profile.anchors[3].x, Some(40.0));
}

#[test]
fn test_parsed_profile_resolves_against_a4() {
    let profile_json = r#"{
        "version": "1",
        "name": "diploma",
        "anchors": [
            { "label": "Recipient", "offset": 180 },
            { "label": "Programme", "offset": 240 },
            { "label": "Signature", "offset": 430, "align": "right" }
        ]
    }"#;

    let profile = parse_profile(profile_json).unwrap();
    let anchors = resolve(&profile, PageSize::new(595.0, 842.0)).unwrap();

    assert_eq!(anchors[0].x, 297.5);
    assert_eq!(anchors[0].y, 662.0);
    assert_eq!(anchors[1].y, 602.0);
    assert_eq!(anchors[2].x, 595.0 - layout::SIDE_MARGIN);
    assert_eq!(anchors[2].y, 412.0);
}

#[test]
fn test_builtin_certificate_matches_template_sheet() {
    let anchors = resolve(&LayoutProfile::certificate(), PageSize::new(612.0, 792.0)).unwrap();

    let labels: Vec<&str> = anchors.iter().map(|a| a.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Student Name",
            "Course Title",
            "Completion Text",
            "Score/Percentage",
            "Date",
        ]
    );

    let ys: Vec<f64> = anchors.iter().map(|a| a.y).collect();
    assert_eq!(ys, vec![642.0, 592.0, 542.0, 492.0, 442.0]);
}

#[test]
fn test_out_of_order_profile_does_not_resolve() {
    let profile_json = r#"{
        "version": "1",
        "name": "bad",
        "anchors": [
            { "label": "Low", "offset": 400 },
            { "label": "High", "offset": 100 }
        ]
    }"#;

    assert!(parse_profile(profile_json).is_err());
}

#[test]
fn test_profile_schema_is_embedded() {
    let schema: serde_json::Value = serde_json::from_str(layout::PROFILE_SCHEMA).unwrap();
    assert_eq!(schema["title"], "certmap layout profile");
}
