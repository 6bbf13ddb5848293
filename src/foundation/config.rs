//! Fixed tuning constants and render options.
//!
//! Every numeric literal that shapes visible output lives here so it can be referenced by tests
//! and tools instead of being repeated inline.

use crate::foundation::core::{Canvas, Rgba8Premul};

/// Side length of the square wrap canvas, the mask, and every output buffer.
pub const CANVAS_SIZE: u32 = 1024;

/// The wrap canvas.
pub const WRAP_CANVAS: Canvas = Canvas::square(CANVAS_SIZE);

/// Template pixels whose `(r + g + b) / 3` is strictly greater than this are paintable panels.
pub const PANEL_LUMA_THRESHOLD: u8 = 200;

/// Extra area tiled beyond every canvas edge so rotated or offset content never shows gaps.
pub const TILE_MARGIN: f64 = 1500.0;

/// Scale multiplier for one wheel tick towards the user (zoom in).
pub const ZOOM_IN_FACTOR: f64 = 1.05;

/// Scale multiplier for one wheel tick away from the user (zoom out).
pub const ZOOM_OUT_FACTOR: f64 = 0.95;

/// Inclusive scale range accepted from the discrete scale control.
pub const SLIDER_SCALE_RANGE: (f64, f64) = (0.01, 5.0);

/// Inclusive scale range reachable through continuous wheel zoom.
pub const WHEEL_SCALE_RANGE: (f64, f64) = (0.01, 10.0);

/// Inclusive rotation range in degrees.
pub const ROTATION_RANGE: (f64, f64) = (0.0, 360.0);

/// Inclusive pattern opacity range.
pub const OPACITY_RANGE: (f64, f64) = (0.0, 1.0);

/// Offset applied by one nudge step, in canvas units.
pub const NUDGE_STEP: f64 = 1.0;

/// Flat fill used for the panel outline overlay (`#2A2A2F`).
pub const OUTLINE_COLOR: Rgba8Premul = Rgba8Premul {
    r: 0x2A,
    g: 0x2A,
    b: 0x2F,
    a: 0xFF,
};

/// Fill used for the placeholder silhouette shown before a pattern is loaded.
pub const SILHOUETTE_COLOR: Rgba8Premul = Rgba8Premul {
    r: 0xFF,
    g: 0xFF,
    b: 0xFF,
    a: 0xFF,
};

/// Opacity of the placeholder silhouette.
pub const SILHOUETTE_OPACITY: f64 = 0.2;

/// Exported files larger than this trigger an advisory warning.
pub const EXPORT_SIZE_LIMIT_BYTES: usize = 1024 * 1024;

/// Longest export file stem accepted by the target device without a warning.
pub const EXPORT_NAME_MAX_CHARS: usize = 30;

/// File stem used when no vehicle is selected.
pub const DEFAULT_EXPORT_STEM: &str = "custom_wrap";

/// Pixel sampling used when resampling templates and patterns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sampling {
    /// Bilinear filtering between the four nearest texels.
    #[default]
    Bilinear,
    /// Nearest texel.
    Nearest,
}

/// Options for a [`crate::PatternCompositor`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RenderOpts {
    /// Sampling for pattern cells and template resampling.
    #[serde(default)]
    pub sampling: Sampling,
}

impl RenderOpts {
    /// Return options with a different sampling mode.
    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }
}
