use crate::assets::raster::RasterAsset;
use crate::foundation::config::{PANEL_LUMA_THRESHOLD, Sampling, WRAP_CANVAS};
use crate::foundation::core::Canvas;
use crate::foundation::error::{WrapError, WrapResult};
use crate::foundation::math::unpremul_px;

/// Alpha-only paintable-panel bitmap, always [`WRAP_CANVAS`] sized.
///
/// Only the alpha plane is stored; downstream compositing never looks at mask color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    alpha: Vec<u8>,
}

impl Mask {
    /// Wrap a precomputed alpha plane. Any non-zero value counts as covered.
    pub fn from_alpha_plane(alpha: Vec<u8>) -> WrapResult<Self> {
        if alpha.len() != WRAP_CANVAS.pixel_count() {
            return Err(WrapError::validation(format!(
                "mask alpha plane must have {} entries, got {}",
                WRAP_CANVAS.pixel_count(),
                alpha.len()
            )));
        }
        Ok(Self { alpha })
    }

    /// Mask dimensions (always the wrap canvas).
    pub fn canvas(&self) -> Canvas {
        WRAP_CANVAS
    }

    /// Row-major alpha plane.
    pub fn alpha_plane(&self) -> &[u8] {
        &self.alpha
    }

    /// Alpha at `(x, y)`; out-of-bounds reads as uncovered.
    pub fn alpha(&self, x: u32, y: u32) -> u8 {
        if x >= WRAP_CANVAS.width || y >= WRAP_CANVAS.height {
            return 0;
        }
        self.alpha[(y as usize) * (WRAP_CANVAS.width as usize) + x as usize]
    }

    /// Number of covered (paintable) pixels.
    pub fn covered_pixels(&self) -> usize {
        self.alpha.iter().filter(|&&a| a > 0).count()
    }

    /// Straight RGBA8 preview: covered pixels white and opaque, the rest transparent.
    pub fn to_rgba8_preview(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.alpha.len() * 4);
        for &a in &self.alpha {
            if a > 0 {
                out.extend_from_slice(&[255, 255, 255, a]);
            } else {
                out.extend_from_slice(&[0, 0, 0, 0]);
            }
        }
        out
    }
}

/// Derives a [`Mask`] from a vehicle template by luminance thresholding.
#[derive(Clone, Copy, Debug)]
pub struct MaskGenerator {
    threshold: u8,
    sampling: Sampling,
}

impl Default for MaskGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MaskGenerator {
    /// Generator using [`PANEL_LUMA_THRESHOLD`] and bilinear resampling.
    pub fn new() -> Self {
        Self {
            threshold: PANEL_LUMA_THRESHOLD,
            sampling: Sampling::Bilinear,
        }
    }

    /// Override the resampling used to bring the template into mask space.
    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Luminance threshold in effect.
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Resample `template` onto the wrap canvas and threshold it.
    ///
    /// A pixel is a panel iff `(r + g + b) / 3 > threshold` on straight-alpha color; a pixel
    /// exactly at the threshold is not a panel.
    #[tracing::instrument(skip(self, template), fields(w = template.width(), h = template.height()))]
    pub fn generate(&self, template: &RasterAsset) -> Mask {
        let resampled = template.resample_to(WRAP_CANVAS, self.sampling);
        let limit = u16::from(self.threshold) * 3;
        let alpha: Vec<u8> = resampled
            .chunks_exact(4)
            .map(|px| {
                let [r, g, b, _] = unpremul_px([px[0], px[1], px[2], px[3]]);
                let sum = u16::from(r) + u16::from(g) + u16::from(b);
                if sum > limit { 255 } else { 0 }
            })
            .collect();
        let mask = Mask { alpha };
        tracing::debug!(covered = mask.covered_pixels(), "mask generated");
        mask
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mask/generator.rs"]
mod tests;
