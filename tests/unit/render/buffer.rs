use super::*;

#[test]
fn blank_is_canvas_sized_and_transparent() {
    let b = OutputBuffer::blank();
    assert_eq!(b.canvas(), WRAP_CANVAS);
    assert_eq!(b.data.len(), WRAP_CANVAS.rgba_len());
    assert!(b.is_fully_transparent());
}

#[test]
fn from_premul_checks_len() {
    assert!(OutputBuffer::from_premul_rgba8(2, 2, vec![0; 3]).is_err());
    let b = OutputBuffer::from_premul_rgba8(2, 1, vec![0, 0, 0, 0, 51, 51, 51, 51]).unwrap();
    assert_eq!(b.pixel(1, 0), [51, 51, 51, 51]);
    assert!(!b.is_fully_transparent());
}

#[test]
fn straight_conversion_unpremultiplies() {
    let b = OutputBuffer::from_premul_rgba8(2, 1, vec![0, 0, 0, 0, 51, 51, 51, 51]).unwrap();
    assert_eq!(b.to_straight_rgba8(), vec![0, 0, 0, 0, 255, 255, 255, 51]);
}

#[test]
#[should_panic(expected = "pixel out of bounds")]
fn pixel_out_of_bounds_panics() {
    OutputBuffer::blank().pixel(1024, 0);
}
