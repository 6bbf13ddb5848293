use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::{WrapError, WrapResult};
use crate::foundation::math::{mul_div255_u8, unit_to_u8};

pub type PremulRgba8 = [u8; 4];

/// Premultiplied source-over with a uniform opacity multiplier on `src`.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f64) -> PremulRgba8 {
    let op = u16::from(unit_to_u8(opacity));
    if op == 0 || src[3] == 0 {
        return dst;
    }

    let sa = mul_div255_u8(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255_u8(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), op);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}

/// Scale a premultiplied pixel by `op` (0..=255).
pub fn attenuate(px: PremulRgba8, op: u8) -> PremulRgba8 {
    if op == 255 {
        return px;
    }
    let w = u16::from(op);
    [
        mul_div255_u8(u16::from(px[0]), w),
        mul_div255_u8(u16::from(px[1]), w),
        mul_div255_u8(u16::from(px[2]), w),
        mul_div255_u8(u16::from(px[3]), w),
    ]
}

/// Composite `src` over `dst` for equal-length RGBA8 buffers.
pub fn over_in_place(dst: &mut [u8], src: &[u8], opacity: f64) -> WrapResult<()> {
    check_rgba_pair(dst.len(), src.len(), "over_in_place")?;
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Keep `layer` pixels only where `coverage` is non-zero; everything else becomes transparent.
///
/// `coverage` is an alpha plane with one entry per RGBA8 pixel of `layer`.
pub fn keep_inside_in_place(layer: &mut [u8], coverage: &[u8]) -> WrapResult<()> {
    if layer.len() != coverage.len() * 4 {
        return Err(WrapError::validation(
            "keep_inside_in_place expects one coverage entry per rgba8 pixel",
        ));
    }
    for (px, &c) in layer.chunks_exact_mut(4).zip(coverage) {
        if c == 0 {
            px.fill(0);
        }
    }
    Ok(())
}

/// Replace every pixel of `shape` with `color`, keeping the shape's own alpha as coverage.
pub fn fill_shape_in_place(shape: &mut [u8], color: Rgba8Premul) -> WrapResult<()> {
    if !shape.len().is_multiple_of(4) {
        return Err(WrapError::validation(
            "fill_shape_in_place expects an rgba8 buffer",
        ));
    }
    let c = color.to_array();
    for px in shape.chunks_exact_mut(4) {
        let out = attenuate(c, px[3]);
        px.copy_from_slice(&out);
    }
    Ok(())
}

fn check_rgba_pair(a: usize, b: usize, what: &str) -> WrapResult<()> {
    if a != b || !a.is_multiple_of(4) {
        return Err(WrapError::validation(format!(
            "{what} expects equal-length rgba8 buffers"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
