use serde_json::json;

use super::*;

// Parsed from text: `json!` would sort object keys before the maps see them.
const ENVELOPE: &str = r##"{
    "data": {
        "markup": [
            {
                "shape": "circle",
                "coordinates": { "unit": "%", "circle": { "cx": 50, "cy": 25.5, "radius": 10 } },
                "color": "#00ff00",
                "comment": "subject is centred",
                "suggested_action": "crop tighter"
            },
            {
                "shape": "rectangle",
                "coordinates": {
                    "unit": "%",
                    "rectangle": { "x": 0, "y": "top", "width": 100, "height": null }
                },
                "comment": "horizon"
            }
        ],
        "analysis": "A well exposed photo.",
        "scores": { "sharpness": 8.5, "composition": 6, "exposure": 9 },
        "suggestions": { "lighting_tips": ["use a reflector"], "framing": [] },
        "extras": { "camera_guess": "DSLR", "exif": { "iso": 100 }, "mood": "calm" }
    }
}"##;

fn envelope() -> AnalysisEnvelope {
    AnalysisEnvelope::from_json_str(ENVELOPE).unwrap()
}

#[test]
fn parses_full_envelope() {
    let env = envelope();
    let r = &env.data;
    assert_eq!(r.markup.len(), 2);
    assert_eq!(r.markup[0].shape, ShapeKind::Circle);
    assert_eq!(r.markup[0].color.as_deref(), Some("#00ff00"));
    assert_eq!(r.markup[0].suggested_action.as_deref(), Some("crop tighter"));
    assert_eq!(r.markup[1].color, None);
    assert_eq!(r.analysis, "A well exposed photo.");
}

#[test]
fn map_sections_keep_emission_order() {
    let env = envelope();
    let keys: Vec<&str> = env.data.scores.keys().map(String::as_str).collect();
    assert_eq!(keys, ["sharpness", "composition", "exposure"]);

    let extras: Vec<(&str, &str)> = env.data.string_extras().collect();
    assert_eq!(extras, [("camera_guess", "DSLR"), ("mood", "calm")]);
}

#[test]
fn non_numeric_coordinates_read_as_zero() {
    let env = envelope();
    let Some(ShapeCoords::Rectangle(rect)) = env.data.markup[1].shape_coords() else {
        panic!("expected rectangle coordinates");
    };
    assert_eq!(rect.x, 0.0);
    assert_eq!(rect.y, 0.0);
    assert_eq!(rect.width, 100.0);
    assert_eq!(rect.height, 0.0);
}

#[test]
fn shape_coords_ignores_mismatched_blocks_and_units() {
    let mismatched: Annotation = serde_json::from_value(json!({
        "shape": "circle",
        "coordinates": { "unit": "%", "rectangle": { "x": 1, "y": 2, "width": 3, "height": 4 } },
        "comment": ""
    }))
    .unwrap();
    assert_eq!(mismatched.shape_coords(), None);

    let pixels: Annotation = serde_json::from_value(json!({
        "shape": "circle",
        "coordinates": { "unit": "px", "circle": { "cx": 1, "cy": 2, "radius": 3 } },
        "comment": ""
    }))
    .unwrap();
    assert_eq!(pixels.shape_coords(), None);

    let unknown: Annotation = serde_json::from_value(json!({
        "shape": "polygon",
        "coordinates": { "unit": "%" },
        "comment": ""
    }))
    .unwrap();
    assert_eq!(unknown.shape, ShapeKind::Unsupported);
    assert_eq!(unknown.shape_coords(), None);
}

#[test]
fn malformed_coordinate_block_degrades_to_none() {
    let a: Annotation = serde_json::from_value(json!({
        "shape": "rectangle",
        "coordinates": { "unit": "%", "rectangle": "everywhere" },
        "comment": ""
    }))
    .unwrap();
    assert_eq!(a.coordinates.rectangle, None);
    assert_eq!(a.shape_coords(), None);
}

#[test]
fn missing_sections_default_to_empty() {
    let env = AnalysisEnvelope::from_json_str(r#"{"data":{}}"#).unwrap();
    assert!(env.data.markup.is_empty());
    assert!(env.data.scores.is_empty());
    assert!(AnalysisEnvelope::from_json_str("{").is_err());
}

#[test]
fn missing_shape_tag_reads_as_unsupported() {
    let env = AnalysisEnvelope::from_json_str(
        r#"{"data":{"markup":[
            {"coordinates":{"unit":"%","circle":{"cx":1,"cy":2,"radius":3}},"comment":"no tag"},
            {"shape":7,"coordinates":{"unit":"%"},"comment":"numeric tag"}
        ],"scores":{"focus":4}}}"#,
    )
    .unwrap();
    assert_eq!(env.data.markup.len(), 2);
    assert_eq!(env.data.markup[0].shape, ShapeKind::Unsupported);
    assert_eq!(env.data.markup[0].comment, "no tag");
    assert_eq!(env.data.markup[0].shape_coords(), None);
    assert_eq!(env.data.markup[1].shape, ShapeKind::Unsupported);
    assert_eq!(env.data.scores.len(), 1);
}

#[test]
fn non_string_unit_draws_no_shape() {
    let env = AnalysisEnvelope::from_json_str(
        r#"{"data":{"markup":[
            {"shape":"circle","coordinates":{"unit":5,"circle":{"cx":1,"cy":2,"radius":3}},"comment":"c"}
        ]}}"#,
    )
    .unwrap();
    let a = &env.data.markup[0];
    assert_eq!(a.coordinates.unit, "");
    assert!(a.coordinates.circle.is_some());
    assert_eq!(a.shape_coords(), None);
}

#[test]
fn null_or_scalar_coordinates_read_as_default() {
    let env = AnalysisEnvelope::from_json_str(
        r#"{"data":{"markup":[
            {"shape":"rectangle","coordinates":null,"comment":"null"},
            {"shape":"circle","coordinates":"center","comment":"scalar","color":12}
        ],"analysis":"kept"}}"#,
    )
    .unwrap();
    assert_eq!(env.data.analysis, "kept");
    for a in &env.data.markup {
        assert_eq!(a.coordinates, Coordinates::default());
        assert_eq!(a.shape_coords(), None);
    }
    assert_eq!(env.data.markup[1].color, None);
}
