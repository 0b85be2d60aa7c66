use super::*;

#[test]
fn label_font_rejects_empty_bytes() {
    assert!(LabelFont::from_bytes(Vec::new()).is_err());
    let font = LabelFont::from_bytes(vec![0, 1, 0, 0]).unwrap();
    assert_eq!(font.bytes(), &[0, 1, 0, 0]);
}

#[test]
fn label_font_missing_file_is_an_error() {
    let err = LabelFont::from_path("definitely/not/here.ttf").unwrap_err();
    assert!(err.to_string().contains("read label font"));
}

#[test]
fn layout_rejects_invalid_size() {
    let mut engine = TextLayoutEngine::new();
    assert!(
        engine
            .layout_line("x", &[], 0.0, TextBrushRgba8::default())
            .is_err()
    );
    assert!(
        engine
            .layout_line("x", &[], f32::NAN, TextBrushRgba8::default())
            .is_err()
    );
}

#[test]
fn layout_rejects_bytes_that_are_not_a_font() {
    let mut engine = TextLayoutEngine::new();
    assert!(
        engine
            .layout_line("x", b"nope", 16.0, TextBrushRgba8::default())
            .is_err()
    );
}
