use std::sync::Arc;

use crate::foundation::config::Sampling;
use crate::foundation::core::Canvas;
use crate::foundation::error::{WrapError, WrapResult};
use crate::foundation::math::premultiply_rgba8_in_place;

/// Immutable decoded image in premultiplied RGBA8 form.
///
/// Cloning is cheap: pixel storage is shared. No API mutates pixels after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterAsset {
    width: u32,
    height: u32,
    rgba8_premul: Arc<Vec<u8>>,
}

impl RasterAsset {
    /// Build an asset from straight-alpha, row-major RGBA8 bytes.
    pub fn from_straight_rgba8(width: u32, height: u32, mut rgba8: Vec<u8>) -> WrapResult<Self> {
        Self::check_len(width, height, rgba8.len())?;
        premultiply_rgba8_in_place(&mut rgba8);
        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(rgba8),
        })
    }

    /// Build an asset from bytes that are already premultiplied.
    pub fn from_premul_rgba8(width: u32, height: u32, rgba8_premul: Vec<u8>) -> WrapResult<Self> {
        Self::check_len(width, height, rgba8_premul.len())?;
        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(rgba8_premul),
        })
    }

    /// A `width x height` asset filled with one straight-alpha color.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> WrapResult<Self> {
        let len = Canvas::checked_rgba_len(width, height)?;
        let mut data = Vec::with_capacity(len);
        for _ in 0..len / 4 {
            data.extend_from_slice(&rgba);
        }
        Self::from_straight_rgba8(width, height, data)
    }

    fn check_len(width: u32, height: u32, len: usize) -> WrapResult<()> {
        if width == 0 || height == 0 {
            return Err(WrapError::validation("raster dimensions must be > 0"));
        }
        if Canvas::checked_rgba_len(width, height)? != len {
            return Err(WrapError::validation(format!(
                "raster byte len {len} does not match {width}x{height} rgba8"
            )));
        }
        Ok(())
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Dimensions as a [`Canvas`].
    pub fn dimensions(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Row-major premultiplied RGBA8 bytes.
    pub fn pixels_premul(&self) -> &[u8] {
        &self.rgba8_premul
    }

    /// Premultiplied pixel at integer coordinates, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.px(x as usize, y as usize))
    }

    fn px(&self, x: usize, y: usize) -> [u8; 4] {
        let i = (y * self.width as usize + x) * 4;
        let d = &self.rgba8_premul;
        [d[i], d[i + 1], d[i + 2], d[i + 3]]
    }

    /// Sample at continuous image-space coordinates (`0..width`, `0..height`).
    ///
    /// Coordinates are clamped to the image edge; callers decide coverage.
    pub(crate) fn sample(&self, x: f64, y: f64, sampling: Sampling) -> [u8; 4] {
        match sampling {
            Sampling::Nearest => {
                let ix = clamp_index(x.floor(), self.width);
                let iy = clamp_index(y.floor(), self.height);
                self.px(ix, iy)
            }
            Sampling::Bilinear => self.sample_bilinear(x - 0.5, y - 0.5),
        }
    }

    fn sample_bilinear(&self, fx: f64, fy: f64) -> [u8; 4] {
        let x0f = fx.floor();
        let y0f = fy.floor();
        let tx = fx - x0f;
        let ty = fy - y0f;

        let x0 = clamp_index(x0f, self.width);
        let x1 = clamp_index(x0f + 1.0, self.width);
        let y0 = clamp_index(y0f, self.height);
        let y1 = clamp_index(y0f + 1.0, self.height);

        let p00 = self.px(x0, y0);
        let p10 = self.px(x1, y0);
        let p01 = self.px(x0, y1);
        let p11 = self.px(x1, y1);

        let w00 = (1.0 - tx) * (1.0 - ty);
        let w10 = tx * (1.0 - ty);
        let w01 = (1.0 - tx) * ty;
        let w11 = tx * ty;

        let mut out = [0u8; 4];
        for (i, o) in out.iter_mut().enumerate() {
            let v = f64::from(p00[i]) * w00
                + f64::from(p10[i]) * w10
                + f64::from(p01[i]) * w01
                + f64::from(p11[i]) * w11;
            *o = v.round().clamp(0.0, 255.0) as u8;
        }
        // Rounding may push a channel past alpha; keep the premultiplied invariant.
        let a = out[3];
        for c in &mut out[..3] {
            *c = (*c).min(a);
        }
        out
    }

    /// Stretch the whole asset onto a `target`-sized premultiplied buffer.
    pub(crate) fn resample_to(&self, target: Canvas, sampling: Sampling) -> Vec<u8> {
        let mut out = vec![0u8; target.rgba_len()];
        let sx = f64::from(self.width) / f64::from(target.width);
        let sy = f64::from(self.height) / f64::from(target.height);
        for (y, row) in out
            .chunks_exact_mut(target.width as usize * 4)
            .enumerate()
        {
            let src_y = (y as f64 + 0.5) * sy;
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                let src_x = (x as f64 + 0.5) * sx;
                px.copy_from_slice(&self.sample(src_x, src_y, sampling));
            }
        }
        out
    }
}

fn clamp_index(v: f64, len: u32) -> usize {
    let max = f64::from(len.saturating_sub(1));
    v.clamp(0.0, max) as usize
}

#[cfg(test)]
#[path = "../../tests/unit/assets/raster.rs"]
mod tests;
