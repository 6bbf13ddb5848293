use super::*;
use crate::foundation::core::Point;

#[test]
fn defaults_match_documented_values() {
    let t = TransformState::default();
    assert_eq!(t.scale(), 1.0);
    assert_eq!(t.offset_x(), 0.0);
    assert_eq!(t.offset_y(), 0.0);
    assert_eq!(t.rotation(), 0.0);
    assert_eq!(t.opacity(), 1.0);
    assert!(!t.flip_h());
    assert!(!t.flip_v());
    assert_eq!(t.repeat_mode(), RepeatMode::Tile);
}

#[test]
fn default_layer_transform_centers_origin() {
    let a = TransformState::default().layer_to_canvas();
    assert_eq!(a * Point::ORIGIN, Point::new(512.0, 512.0));
}

#[test]
fn offset_moves_along_flipped_axes() {
    let t = TransformState {
        offset_x: 10.0,
        offset_y: 4.0,
        flip_h: true,
        ..TransformState::default()
    };
    let p = t.layer_to_canvas() * Point::ORIGIN;
    assert_eq!(p, Point::new(502.0, 516.0));
}

#[test]
fn rotation_is_applied_after_translation() {
    let t = TransformState {
        offset_x: 100.0,
        rotation: 90.0,
        ..TransformState::default()
    };
    let a = t.layer_to_canvas();
    // Origin only sees the translation.
    let o = a * Point::ORIGIN;
    assert!((o.x - 612.0).abs() < 1e-9 && (o.y - 512.0).abs() < 1e-9);
    // A local +x unit vector is rotated to +y.
    let p = a * Point::new(1.0, 0.0);
    assert!((p.x - 612.0).abs() < 1e-9 && (p.y - 513.0).abs() < 1e-9);
}

#[test]
fn double_flip_equals_half_turn() {
    let flipped = TransformState {
        flip_h: true,
        flip_v: true,
        ..TransformState::default()
    };
    let rotated = TransformState {
        rotation: 180.0,
        ..TransformState::default()
    };
    let p = Point::new(33.0, -7.0);
    let a = flipped.layer_to_canvas() * p;
    let b = rotated.layer_to_canvas() * p;
    assert!((a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9);
}

#[test]
fn repeat_mode_serde_uses_snake_case() {
    assert_eq!(serde_json::to_string(&RepeatMode::Mirror).unwrap(), "\"mirror\"");
    let m: RepeatMode = serde_json::from_str("\"stretch\"").unwrap();
    assert_eq!(m, RepeatMode::Stretch);
    assert!(serde_json::from_str::<RepeatMode>("\"spiral\"").is_err());
}
