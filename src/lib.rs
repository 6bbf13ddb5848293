//! Wrapsmith composites user patterns onto flattened vehicle wrap templates.
//!
//! A template image marks paintable panels in near-white. Wrapsmith derives a panel [`Mask`]
//! from it, lays the pattern out with a [`TransformState`] (scale, offset, rotation, opacity,
//! flips, and a [`RepeatMode`]), cuts the result to the panels, and exports a 1024x1024 PNG.
//!
//! - Render directly with [`PatternCompositor::render`] from a [`RenderSnapshot`], or
//! - drive a [`DesignSession`], which owns the assets and transform, discards stale async loads,
//!   and coalesces changes into as few compositing passes as possible.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod effects;
mod encode;
mod foundation;
mod mask;
mod render;
mod scene;
mod session;
mod transform;

pub use crate::foundation::config::{
    CANVAS_SIZE, DEFAULT_EXPORT_STEM, EXPORT_NAME_MAX_CHARS, EXPORT_SIZE_LIMIT_BYTES, NUDGE_STEP,
    OPACITY_RANGE, OUTLINE_COLOR, PANEL_LUMA_THRESHOLD, ROTATION_RANGE, RenderOpts,
    SILHOUETTE_COLOR, SILHOUETTE_OPACITY, SLIDER_SCALE_RANGE, Sampling, TILE_MARGIN,
    WHEEL_SCALE_RANGE, WRAP_CANVAS, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR,
};
pub use crate::foundation::core::{Affine, Canvas, Point, Rgba8Premul, Size, Vec2};
pub use crate::foundation::error::{WrapError, WrapResult};

pub use crate::assets::catalog::{Vehicle, VehicleCatalog, VehicleId};
pub use crate::assets::decode::decode_raster;
pub use crate::assets::raster::RasterAsset;
pub use crate::assets::store::{
    AssetSource, DirAssetSource, normalize_rel_path, preview_rel_path, template_rel_path,
};
pub use crate::encode::png::{
    ExportBlob, ExportWarning, export_png, file_stem_issue, suggested_file_name,
};
pub use crate::mask::generator::{Mask, MaskGenerator};
pub use crate::render::buffer::OutputBuffer;
pub use crate::render::compositor::{PatternCompositor, RenderSnapshot};
pub use crate::scene::design::Design;
pub use crate::session::design_session::{DesignSession, DesignSessionOpts, RenderStats};
pub use crate::session::slot::{LoadTicket, SlotKind, SlotUpdate};
pub use crate::transform::controller::{Axis, TransformController, WheelDirection};
pub use crate::transform::state::{RepeatMode, TransformState};
