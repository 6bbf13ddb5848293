use super::*;

#[test]
fn canvas_rejects_empty_dimensions() {
    assert!(Canvas::new(0, 4).is_err());
    assert!(Canvas::new(4, 0).is_err());
    let c = Canvas::new(3, 2).unwrap();
    assert_eq!(c.pixel_count(), 6);
    assert_eq!(c.rgba_len(), 24);
}

#[test]
fn checked_rgba_len_matches_unchecked() {
    assert_eq!(Canvas::checked_rgba_len(7, 5).unwrap(), Canvas::square(1).rgba_len() * 35);
}

#[test]
fn premul_conversion_rounds_to_nearest() {
    let p = Rgba8Premul::from_straight_rgba(255, 128, 0, 128);
    assert_eq!(p.to_array(), [128, 64, 0, 128]);
    assert_eq!(
        Rgba8Premul::from_straight_rgba(10, 20, 30, 0),
        Rgba8Premul::transparent()
    );
    assert_eq!(Rgba8Premul::opaque(1, 2, 3).to_array(), [1, 2, 3, 255]);
}
