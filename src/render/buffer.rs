use crate::foundation::config::WRAP_CANVAS;
use crate::foundation::core::Canvas;
use crate::foundation::error::{WrapError, WrapResult};
use crate::foundation::math::unpremul_px;

/// A rendered wrap as RGBA8 pixels.
///
/// Pixels are **premultiplied alpha**. Use [`OutputBuffer::to_straight_rgba8`] at boundaries that
/// expect straight alpha (PNG).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major, premultiplied.
    pub data: Vec<u8>,
}

impl OutputBuffer {
    /// A fully transparent wrap-canvas buffer.
    pub fn blank() -> Self {
        Self::transparent(WRAP_CANVAS)
    }

    /// A fully transparent buffer of arbitrary size.
    pub fn transparent(canvas: Canvas) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            data: vec![0u8; canvas.rgba_len()],
        }
    }

    /// Wrap existing premultiplied bytes.
    pub fn from_premul_rgba8(width: u32, height: u32, data: Vec<u8>) -> WrapResult<Self> {
        if Canvas::checked_rgba_len(width, height)? != data.len() {
            return Err(WrapError::validation(
                "output buffer expects width*height*4 bytes",
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Dimensions as a [`Canvas`].
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Premultiplied pixel at `(x, y)`.
    ///
    /// Panics when out of bounds, like slice indexing.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let i = ((y as usize) * (self.width as usize) + x as usize) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Return `true` when every pixel has zero alpha.
    pub fn is_fully_transparent(&self) -> bool {
        self.data.chunks_exact(4).all(|px| px[3] == 0)
    }

    /// Copy of the pixels converted to straight alpha.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            out.extend_from_slice(&unpremul_px([px[0], px[1], px[2], px[3]]));
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/buffer.rs"]
mod tests;
