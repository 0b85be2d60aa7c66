use super::*;

#[test]
fn new_surface_is_transparent_and_sized() {
    let s = Surface::new(PixelSize::new(7, 3).unwrap()).unwrap();
    assert_eq!(s.size(), PixelSize::new(7, 3).unwrap());
    assert_eq!(s.data().len(), 7 * 3 * 4);
    assert!(s.data().iter().all(|&b| b == 0));
    assert_eq!(s.pixel(6, 2), Some(Rgba8Premul::transparent()));
    assert_eq!(s.pixel(7, 0), None);
    assert_eq!(s.pixel(0, 3), None);
}

#[test]
fn oversized_surfaces_are_rejected() {
    assert!(Surface::new(PixelSize::new(70_000, 1).unwrap()).is_err());
    assert!(Surface::new(PixelSize::new(1, 70_000).unwrap()).is_err());
}

#[test]
fn readback_unpremultiplies() {
    let mut s = Surface::new(PixelSize::new(1, 1).unwrap()).unwrap();
    s.pixmap_mut()
        .data_as_u8_slice_mut()
        .copy_from_slice(&[64, 0, 0, 128]);
    let img = s.to_rgba_image().unwrap();
    assert_eq!(img.get_pixel(0, 0).0, [128, 0, 0, 128]);

    s.clear();
    assert_eq!(s.pixel(0, 0), Some(Rgba8Premul::transparent()));
}
