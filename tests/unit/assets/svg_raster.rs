use super::*;

const SQUARE: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4"><rect width="4" height="4" fill="#0000ff"/></svg>"##;

#[test]
fn parse_svg_ok_and_err() {
    parse_svg(SQUARE).unwrap();
    assert!(parse_svg(b"<svg").is_err());
}

#[test]
fn rasterize_scales_and_fills() {
    let tree = parse_svg(SQUARE).unwrap();
    let img = rasterize_svg(&tree, 2.0).unwrap();
    assert_eq!(img.dimensions(), (8, 8));
    assert_eq!(img.get_pixel(4, 4).0, [0, 0, 255, 255]);
}

#[test]
fn rasterize_rejects_bad_scale() {
    let tree = parse_svg(SQUARE).unwrap();
    assert!(rasterize_svg(&tree, 0.0).is_err());
    assert!(rasterize_svg(&tree, f32::NAN).is_err());
    assert!(rasterize_svg(&tree, 10_000.0).is_err());
}
