use std::io::Cursor;

use super::*;

fn png_bytes(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba(rgba));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_image_png_dimensions_and_premul() {
    let buf = png_bytes(3, 2, [100, 50, 200, 128]);

    let decoded = decode_image(&buf).unwrap();
    assert_eq!(decoded.size, PixelSize::new(3, 2).unwrap());
    assert_eq!(decoded.rgba8_premul.len(), 3 * 2 * 4);
    assert_eq!(
        &decoded.rgba8_premul[..4],
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn decode_garbage_is_a_decode_error() {
    let err = decode_image(b"not an image").unwrap_err();
    assert!(matches!(err, AnnoviewError::Decode(_)));

    let mut decoder = RasterDecoder;
    assert!(decoder.decode(&ImageSource::from_bytes(vec![0u8; 8])).is_err());
}

#[test]
fn image_source_compares_by_value() {
    let a = ImageSource::from_bytes(png_bytes(2, 2, [1, 2, 3, 255]));
    let b = ImageSource::from_bytes(png_bytes(2, 2, [1, 2, 3, 255]));
    let c = ImageSource::from_bytes(png_bytes(2, 2, [9, 9, 9, 255]));
    assert_eq!(a, b);
    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_ne!(a, c);
}

#[test]
fn from_rgba8_validates_length() {
    assert!(DecodedImage::from_rgba8(2, 2, vec![0; 15]).is_err());
    assert!(DecodedImage::from_rgba8(0, 2, vec![]).is_err());
    let img = DecodedImage::from_rgba8(1, 1, vec![10, 20, 30, 255]).unwrap();
    assert_eq!(img.rgba8_premul.as_slice(), &[10, 20, 30, 255]);
}
