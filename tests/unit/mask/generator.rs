use super::*;

fn uniform(rgb: u8) -> RasterAsset {
    RasterAsset::solid(8, 8, [rgb, rgb, rgb, 255]).unwrap()
}

#[test]
fn white_template_is_fully_covered() {
    let mask = MaskGenerator::new().generate(&uniform(255));
    assert_eq!(mask.canvas(), WRAP_CANVAS);
    assert_eq!(mask.covered_pixels(), WRAP_CANVAS.pixel_count());
    assert!(mask.alpha_plane().iter().all(|&a| a == 255));
}

#[test]
fn black_template_is_fully_uncovered() {
    let mask = MaskGenerator::new().generate(&uniform(0));
    assert_eq!(mask.covered_pixels(), 0);
}

#[test]
fn threshold_is_strict() {
    assert_eq!(MaskGenerator::new().generate(&uniform(200)).covered_pixels(), 0);
    assert_eq!(
        MaskGenerator::new().generate(&uniform(201)).covered_pixels(),
        WRAP_CANVAS.pixel_count()
    );

    // avg = 600 / 3 exactly at the threshold.
    let mixed = RasterAsset::solid(4, 4, [255, 255, 90, 255]).unwrap();
    assert_eq!(MaskGenerator::new().generate(&mixed).covered_pixels(), 0);
    // avg = 601 / 3 just above.
    let mixed = RasterAsset::solid(4, 4, [255, 255, 91, 255]).unwrap();
    assert_eq!(
        MaskGenerator::new().generate(&mixed).covered_pixels(),
        WRAP_CANVAS.pixel_count()
    );
}

#[test]
fn mask_is_canvas_sized_regardless_of_template_resolution() {
    let tiny = RasterAsset::solid(1, 3, [255, 255, 255, 255]).unwrap();
    let mask = MaskGenerator::new().generate(&tiny);
    assert_eq!(mask.alpha_plane().len(), WRAP_CANVAS.pixel_count());
}

#[test]
fn left_white_right_black_template_splits_mask() {
    let mut data = Vec::new();
    for _y in 0..2 {
        data.extend_from_slice(&[255, 255, 255, 255]);
        data.extend_from_slice(&[0, 0, 0, 255]);
    }
    let tmpl = RasterAsset::from_straight_rgba8(2, 2, data).unwrap();
    let mask = MaskGenerator::new()
        .with_sampling(Sampling::Nearest)
        .generate(&tmpl);
    assert_eq!(mask.alpha(0, 0), 255);
    assert_eq!(mask.alpha(511, 700), 255);
    assert_eq!(mask.alpha(512, 700), 0);
    assert_eq!(mask.alpha(1023, 1023), 0);
    assert_eq!(mask.alpha(5000, 0), 0);
    assert_eq!(mask.covered_pixels(), WRAP_CANVAS.pixel_count() / 2);
}

#[test]
fn transparent_template_pixels_are_not_panels() {
    let tmpl = RasterAsset::solid(4, 4, [255, 255, 255, 0]).unwrap();
    assert_eq!(MaskGenerator::new().generate(&tmpl).covered_pixels(), 0);
}

#[test]
fn generation_is_deterministic() {
    let mut data = Vec::new();
    for i in 0..(16 * 16) {
        let v = ((i * 37) % 256) as u8;
        data.extend_from_slice(&[v, 255 - v, v / 2 + 120, 255]);
    }
    let tmpl = RasterAsset::from_straight_rgba8(16, 16, data).unwrap();
    let a = MaskGenerator::new().generate(&tmpl);
    let b = MaskGenerator::new().generate(&tmpl);
    assert_eq!(a, b);
}

#[test]
fn from_alpha_plane_checks_len_and_preview_encodes_coverage() {
    assert!(Mask::from_alpha_plane(vec![0; 10]).is_err());
    let mut plane = vec![0u8; WRAP_CANVAS.pixel_count()];
    plane[0] = 255;
    let m = Mask::from_alpha_plane(plane).unwrap();
    let preview = m.to_rgba8_preview();
    assert_eq!(&preview[0..4], &[255, 255, 255, 255]);
    assert_eq!(&preview[4..8], &[0, 0, 0, 0]);
}
