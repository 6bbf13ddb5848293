use std::io::Cursor;

use super::*;

#[test]
fn decode_png_dimensions_and_premul() {
    let src_rgba = vec![100u8, 50u8, 200u8, 128u8];
    let img = image::RgbaImage::from_raw(1, 1, src_rgba).unwrap();

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();

    let asset = decode_raster(&buf).unwrap();
    assert_eq!(asset.width(), 1);
    assert_eq!(asset.height(), 1);
    assert_eq!(
        asset.pixels_premul(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn garbage_bytes_are_a_decode_error() {
    let err = decode_raster(b"definitely not an image").unwrap_err();
    assert!(matches!(err, WrapError::Decode(_)));
}
