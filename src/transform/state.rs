use crate::foundation::config::CANVAS_SIZE;
use crate::foundation::core::{Affine, Vec2};

/// How the pattern cell fills the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepeatMode {
    /// Uniform repetition of the scaled cell.
    #[default]
    Tile,
    /// Repetition with checkerboard per-cell flips.
    Mirror,
    /// One draw stretched over the whole canvas; `scale` is ignored.
    Stretch,
}

impl RepeatMode {
    /// All modes in control order.
    pub const ALL: [RepeatMode; 3] = [RepeatMode::Tile, RepeatMode::Mirror, RepeatMode::Stretch];

    pub(crate) fn tag(self) -> u8 {
        match self {
            RepeatMode::Tile => 0,
            RepeatMode::Mirror => 1,
            RepeatMode::Stretch => 2,
        }
    }
}

/// User-controlled pattern placement.
///
/// Fields are read-only outside the crate; [`crate::TransformController`] is the only mutator and
/// keeps every field inside its documented range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    pub(crate) scale: f64,
    pub(crate) offset_x: f64,
    pub(crate) offset_y: f64,
    pub(crate) rotation: f64,
    pub(crate) opacity: f64,
    pub(crate) flip_h: bool,
    pub(crate) flip_v: bool,
    pub(crate) repeat_mode: RepeatMode,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            rotation: 0.0,
            opacity: 1.0,
            flip_h: false,
            flip_v: false,
            repeat_mode: RepeatMode::Tile,
        }
    }
}

impl TransformState {
    /// Pattern cell scale factor.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Horizontal offset in canvas units.
    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    /// Vertical offset in canvas units.
    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    /// Rotation in degrees, `[0, 360]`.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Layer opacity, `[0, 1]`.
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Horizontal flip of the whole layer.
    pub fn flip_h(&self) -> bool {
        self.flip_h
    }

    /// Vertical flip of the whole layer.
    pub fn flip_v(&self) -> bool {
        self.flip_v
    }

    /// Repeat mode.
    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat_mode
    }

    /// Offset as a vector.
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.offset_x, self.offset_y)
    }

    /// Map from pattern-layer local space to canvas pixels.
    ///
    /// Composition order: move the origin to the canvas center, flip, translate by the offset in
    /// the flipped frame, then rotate. Dragging therefore moves content along the flipped axes and
    /// rotation pivots around the dragged content.
    pub fn layer_to_canvas(&self) -> Affine {
        let center = f64::from(CANVAS_SIZE) / 2.0;
        let fx = if self.flip_h { -1.0 } else { 1.0 };
        let fy = if self.flip_v { -1.0 } else { 1.0 };
        Affine::translate(Vec2::new(center, center))
            * Affine::scale_non_uniform(fx, fy)
            * Affine::translate(self.offset())
            * Affine::rotate(self.rotation.to_radians())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/state.rs"]
mod tests;
