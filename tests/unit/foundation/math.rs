use super::*;

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}

#[test]
fn unit_to_u8_clamps_and_rounds() {
    assert_eq!(unit_to_u8(-1.0), 0);
    assert_eq!(unit_to_u8(0.2), 51);
    assert_eq!(unit_to_u8(1.0), 255);
    assert_eq!(unit_to_u8(7.0), 255);
}

#[test]
fn unpremul_inverts_premultiply_for_opaque_and_half() {
    assert_eq!(unpremul_px([10, 20, 30, 255]), [10, 20, 30, 255]);
    assert_eq!(unpremul_px([0, 0, 0, 0]), [0, 0, 0, 0]);

    let mut px = [255u8, 200, 0, 128];
    premultiply_rgba8_in_place(&mut px);
    let back = unpremul_px(px);
    assert_eq!(back[3], 128);
    assert!(back[0] >= 254);
    assert!((i32::from(back[1]) - 200).abs() <= 1);
    assert_eq!(back[2], 0);
}

#[test]
fn premultiply_zero_alpha_clears_color() {
    let mut px = [9u8, 9, 9, 0];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(px, [0, 0, 0, 0]);
}
