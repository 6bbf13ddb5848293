use super::*;

#[test]
fn set_scale_clamps_to_slider_range() {
    let mut c = TransformController::new();
    c.set_scale(0.0);
    assert_eq!(c.state().scale(), 0.01);
    c.set_scale(7.5);
    assert_eq!(c.state().scale(), 5.0);
    c.set_scale(2.25);
    assert_eq!(c.state().scale(), 2.25);
}

#[test]
fn zoom_clamps_to_wheel_range() {
    let mut c = TransformController::new();
    c.set_scale(5.0);
    for _ in 0..200 {
        c.wheel(WheelDirection::In);
        assert!(c.state().scale() <= 10.0);
    }
    assert_eq!(c.state().scale(), 10.0);
    for _ in 0..500 {
        c.wheel(WheelDirection::Out);
        assert!(c.state().scale() >= 0.01);
    }
    assert_eq!(c.state().scale(), 0.01);
}

#[test]
fn wheel_ticks_multiply_scale() {
    let mut c = TransformController::new();
    c.wheel(WheelDirection::In);
    assert!((c.state().scale() - 1.05).abs() < 1e-12);
    c.wheel(WheelDirection::Out);
    assert!((c.state().scale() - 1.05 * 0.95).abs() < 1e-12);
}

#[test]
fn wheel_direction_from_delta() {
    assert_eq!(WheelDirection::from_delta_y(3.0), WheelDirection::Out);
    assert_eq!(WheelDirection::from_delta_y(-3.0), WheelDirection::In);
    assert_eq!(WheelDirection::from_delta_y(0.0), WheelDirection::In);
}

#[test]
fn rotation_and_opacity_clamp() {
    let mut c = TransformController::new();
    c.set_rotation(-10.0);
    assert_eq!(c.state().rotation(), 0.0);
    c.set_rotation(400.0);
    assert_eq!(c.state().rotation(), 360.0);
    c.set_opacity(1.5);
    assert_eq!(c.state().opacity(), 1.0);
    c.set_opacity(-0.5);
    assert_eq!(c.state().opacity(), 0.0);
}

#[test]
fn non_finite_inputs_are_ignored() {
    let mut c = TransformController::new();
    c.set_scale(f64::NAN);
    c.set_rotation(f64::INFINITY);
    c.set_opacity(f64::NAN);
    c.zoom(f64::NAN);
    c.offset_by(f64::NAN, 3.0);
    assert_eq!(*c.state(), TransformState::default());
}

#[test]
fn nudges_accumulate_like_one_offset() {
    let mut a = TransformController::new();
    for _ in 0..10 {
        a.nudge(Axis::X, 1.0);
    }
    let mut b = TransformController::new();
    b.offset_by(10.0, 0.0);
    assert_eq!(a.state().offset_x(), b.state().offset_x());
    assert_eq!(a.state().offset_x(), 10.0);

    a.nudge(Axis::Y, -1.0);
    assert_eq!(a.state().offset_y(), -1.0);
}

#[test]
fn offsets_are_unbounded() {
    let mut c = TransformController::new();
    c.offset_by(1.0e7, -1.0e7);
    assert_eq!(c.state().offset(), Vec2::new(1.0e7, -1.0e7));
}

#[test]
fn toggles_and_repeat_mode() {
    let mut c = TransformController::new();
    c.toggle_flip_h();
    c.toggle_flip_v();
    c.toggle_flip_v();
    assert!(c.state().flip_h());
    assert!(!c.state().flip_v());
    c.set_repeat_mode(RepeatMode::Mirror);
    assert_eq!(c.state().repeat_mode(), RepeatMode::Mirror);
}

#[test]
fn reset_restores_defaults_bit_for_bit() {
    let mut c = TransformController::new();
    c.set_scale(3.3);
    c.offset_by(-4.5, 9.0);
    c.set_rotation(45.0);
    c.set_opacity(0.25);
    c.toggle_flip_h();
    c.toggle_flip_v();
    c.set_repeat_mode(RepeatMode::Stretch);
    c.begin_drag(Point::new(1.0, 1.0), true);
    c.reset();

    let d = TransformState::default();
    let s = c.state();
    assert_eq!(s.scale().to_bits(), d.scale().to_bits());
    assert_eq!(s.offset_x().to_bits(), d.offset_x().to_bits());
    assert_eq!(s.offset_y().to_bits(), d.offset_y().to_bits());
    assert_eq!(s.rotation().to_bits(), d.rotation().to_bits());
    assert_eq!(s.opacity().to_bits(), d.opacity().to_bits());
    assert_eq!(*s, d);
    assert!(!c.is_dragging());
}

#[test]
fn drag_converts_display_pixels_to_canvas_units() {
    let mut c = TransformController::new();
    c.begin_drag(Point::new(100.0, 100.0), true);
    assert!(c.drag_to(Point::new(110.0, 95.0), Size::new(512.0, 512.0)));
    assert_eq!(c.state().offset(), Vec2::new(20.0, -10.0));
    // Deltas are measured from the previous pointer position.
    c.drag_to(Point::new(111.0, 95.0), Size::new(512.0, 512.0));
    assert_eq!(c.state().offset(), Vec2::new(22.0, -10.0));
    c.end_drag();
    assert!(!c.drag_to(Point::new(500.0, 500.0), Size::new(512.0, 512.0)));
    assert_eq!(c.state().offset(), Vec2::new(22.0, -10.0));
}

#[test]
fn drag_requires_pattern_and_sane_display() {
    let mut c = TransformController::new();
    c.begin_drag(Point::ORIGIN, false);
    assert!(!c.is_dragging());
    assert!(!c.drag_to(Point::new(5.0, 5.0), Size::new(512.0, 512.0)));

    c.begin_drag(Point::ORIGIN, true);
    assert!(!c.drag_to(Point::new(5.0, 5.0), Size::new(0.0, 512.0)));
    assert_eq!(c.state().offset(), Vec2::ZERO);
}

#[test]
fn apply_clamps_external_state() {
    let wild = TransformState {
        scale: 99.0,
        offset_x: 3.0,
        offset_y: -2.0,
        rotation: -1.0,
        opacity: 4.0,
        flip_h: true,
        flip_v: false,
        repeat_mode: RepeatMode::Mirror,
    };
    let mut c = TransformController::new();
    c.apply(&wild);
    let s = c.state();
    assert_eq!(s.scale(), 5.0);
    assert_eq!(s.offset(), Vec2::new(3.0, -2.0));
    assert_eq!(s.rotation(), 0.0);
    assert_eq!(s.opacity(), 1.0);
    assert!(s.flip_h());
    assert_eq!(s.repeat_mode(), RepeatMode::Mirror);
}
