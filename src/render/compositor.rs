use std::sync::Arc;

use crate::assets::raster::RasterAsset;
use crate::effects::composite::{fill_shape_in_place, keep_inside_in_place, over_in_place};
use crate::foundation::config::{
    OUTLINE_COLOR, RenderOpts, SILHOUETTE_COLOR, SILHOUETTE_OPACITY, WRAP_CANVAS,
};
use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::WrapResult;
use crate::mask::generator::Mask;
use crate::render::buffer::OutputBuffer;
use crate::render::layer::render_pattern_layer;
use crate::transform::state::TransformState;

/// Everything one compositing pass reads, captured together.
#[derive(Clone, Debug, Default)]
pub struct RenderSnapshot {
    /// Vehicle template, if a vehicle is selected and its template decoded.
    pub template: Option<RasterAsset>,
    /// Panel mask derived from `template`.
    pub mask: Option<Arc<Mask>>,
    /// User pattern, if one has been decoded.
    pub pattern: Option<RasterAsset>,
    /// Pattern placement.
    pub transform: TransformState,
    /// Overlay panel outlines on top of the pattern.
    pub show_outlines: bool,
}

/// Stateless render engine: `RenderSnapshot -> OutputBuffer`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PatternCompositor {
    opts: RenderOpts,
}

impl PatternCompositor {
    /// Compositor with the given options.
    pub fn new(opts: RenderOpts) -> Self {
        Self { opts }
    }

    /// Options in effect.
    pub fn opts(&self) -> RenderOpts {
        self.opts
    }

    /// Run one full compositing pass.
    ///
    /// - No template: blank buffer.
    /// - Template without pattern: the template's shape in white at [`SILHOUETTE_OPACITY`].
    /// - Template and pattern: the transformed pattern layer, cut to the mask when one is present,
    ///   optionally topped with the template's shape in [`OUTLINE_COLOR`].
    #[tracing::instrument(skip(self, snap), fields(
        pattern = snap.pattern.is_some(),
        mask = snap.mask.is_some(),
        outlines = snap.show_outlines,
    ))]
    pub fn render(&self, snap: &RenderSnapshot) -> WrapResult<OutputBuffer> {
        let mut out = OutputBuffer::blank();
        let Some(template) = snap.template.as_ref() else {
            return Ok(out);
        };

        let Some(pattern) = snap.pattern.as_ref() else {
            let silhouette = self.template_shape(template, SILHOUETTE_COLOR)?;
            over_in_place(&mut out.data, &silhouette, SILHOUETTE_OPACITY)?;
            return Ok(out);
        };

        let mut layer = render_pattern_layer(pattern, &snap.transform, self.opts.sampling);
        if let Some(mask) = snap.mask.as_deref() {
            keep_inside_in_place(&mut layer, mask.alpha_plane())?;
        }
        over_in_place(&mut out.data, &layer, 1.0)?;

        if snap.show_outlines {
            let outline = self.template_shape(template, OUTLINE_COLOR)?;
            over_in_place(&mut out.data, &outline, 1.0)?;
        }
        Ok(out)
    }

    /// The template's coverage, stretched onto the canvas and flat-filled with `color`.
    fn template_shape(&self, template: &RasterAsset, color: Rgba8Premul) -> WrapResult<Vec<u8>> {
        let mut shape = template.resample_to(WRAP_CANVAS, self.opts.sampling);
        fill_shape_in_place(&mut shape, color)?;
        Ok(shape)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
