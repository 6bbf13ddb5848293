use crate::foundation::error::{WrapError, WrapResult};

pub use kurbo::{Affine, Point, Size, Vec2};

/// Raster dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create validated, non-empty dimensions.
    pub fn new(width: u32, height: u32) -> WrapResult<Self> {
        if width == 0 || height == 0 {
            return Err(WrapError::validation("canvas dimensions must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Square canvas with side `size`.
    pub const fn square(size: u32) -> Self {
        Self {
            width: size,
            height: size,
        }
    }

    /// Number of pixels.
    pub fn pixel_count(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Length in bytes of a tightly packed RGBA8 buffer with these dimensions.
    pub fn rgba_len(self) -> usize {
        self.pixel_count() * 4
    }

    /// Checked variant of [`Canvas::rgba_len`] for untrusted dimensions.
    pub(crate) fn checked_rgba_len(width: u32, height: u32) -> WrapResult<usize> {
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| WrapError::validation("rgba buffer size overflow"))
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red channel premultiplied by alpha.
    pub r: u8,
    /// Green channel premultiplied by alpha.
    pub g: u8,
    /// Blue channel premultiplied by alpha.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Opaque color from straight RGB.
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Convert straight-alpha RGBA8 into premultiplied RGBA8.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// Pixel as `[r, g, b, a]`.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
