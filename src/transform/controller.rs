use crate::foundation::config::{
    CANVAS_SIZE, NUDGE_STEP, OPACITY_RANGE, ROTATION_RANGE, SLIDER_SCALE_RANGE,
    WHEEL_SCALE_RANGE, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR,
};
use crate::foundation::core::{Point, Size, Vec2};
use crate::transform::state::{RepeatMode, TransformState};

/// Offset axis for nudges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal (`offset_x`).
    X,
    /// Vertical (`offset_y`).
    Y,
}

/// One discrete wheel tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WheelDirection {
    /// Scale up by [`ZOOM_IN_FACTOR`].
    In,
    /// Scale down by [`ZOOM_OUT_FACTOR`].
    Out,
}

impl WheelDirection {
    /// Classify a raw vertical wheel delta: positive scrolls out, zero or negative scrolls in.
    pub fn from_delta_y(delta_y: f64) -> Self {
        if delta_y > 0.0 { Self::Out } else { Self::In }
    }

    /// Scale multiplier for this tick.
    pub fn factor(self) -> f64 {
        match self {
            Self::In => ZOOM_IN_FACTOR,
            Self::Out => ZOOM_OUT_FACTOR,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct DragGesture {
    last: Point,
}

/// Mutates a [`TransformState`] from control input, enforcing its range invariants.
///
/// Non-finite inputs are ignored and leave the state untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformController {
    state: TransformState,
    drag: Option<DragGesture>,
}

impl TransformController {
    /// Controller holding the default transform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current transform.
    pub fn state(&self) -> &TransformState {
        &self.state
    }

    /// Set scale from the discrete control, clamped to [`SLIDER_SCALE_RANGE`].
    pub fn set_scale(&mut self, v: f64) {
        if let Some(v) = finite(v, "scale") {
            self.state.scale = v.clamp(SLIDER_SCALE_RANGE.0, SLIDER_SCALE_RANGE.1);
        }
    }

    /// Multiply scale by `factor`, clamped to the wider [`WHEEL_SCALE_RANGE`].
    pub fn zoom(&mut self, factor: f64) {
        if let Some(f) = finite(factor, "zoom factor") {
            let next = self.state.scale * f;
            self.state.scale = next.clamp(WHEEL_SCALE_RANGE.0, WHEEL_SCALE_RANGE.1);
        }
    }

    /// Apply one wheel tick.
    pub fn wheel(&mut self, dir: WheelDirection) {
        self.zoom(dir.factor());
    }

    /// Set rotation in degrees, clamped to [`ROTATION_RANGE`].
    pub fn set_rotation(&mut self, degrees: f64) {
        if let Some(v) = finite(degrees, "rotation") {
            self.state.rotation = v.clamp(ROTATION_RANGE.0, ROTATION_RANGE.1);
        }
    }

    /// Add `(dx, dy)` to the offset. Offsets are unbounded.
    pub fn offset_by(&mut self, dx: f64, dy: f64) {
        let (Some(dx), Some(dy)) = (finite(dx, "offset dx"), finite(dy, "offset dy")) else {
            return;
        };
        self.state.offset_x += dx;
        self.state.offset_y += dy;
    }

    /// Shift the offset along one axis by `steps` nudge steps.
    pub fn nudge(&mut self, axis: Axis, steps: f64) {
        let d = steps * NUDGE_STEP;
        match axis {
            Axis::X => self.offset_by(d, 0.0),
            Axis::Y => self.offset_by(0.0, d),
        }
    }

    /// Set layer opacity, clamped to [`OPACITY_RANGE`].
    pub fn set_opacity(&mut self, v: f64) {
        if let Some(v) = finite(v, "opacity") {
            self.state.opacity = v.clamp(OPACITY_RANGE.0, OPACITY_RANGE.1);
        }
    }

    /// Toggle the horizontal layer flip.
    pub fn toggle_flip_h(&mut self) {
        self.state.flip_h = !self.state.flip_h;
    }

    /// Toggle the vertical layer flip.
    pub fn toggle_flip_v(&mut self) {
        self.state.flip_v = !self.state.flip_v;
    }

    /// Select the repeat mode.
    pub fn set_repeat_mode(&mut self, mode: RepeatMode) {
        self.state.repeat_mode = mode;
    }

    /// Restore every field to its default and cancel any drag in progress.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Start a drag at `pos` (display pixels). Ignored when `pattern_loaded` is false.
    pub fn begin_drag(&mut self, pos: Point, pattern_loaded: bool) {
        if !pattern_loaded {
            return;
        }
        self.drag = Some(DragGesture { last: pos });
    }

    /// Continue a drag to `pos` on a canvas displayed at `displayed` pixels.
    ///
    /// The pointer delta is converted to canvas units by `CANVAS_SIZE / displayed` per axis and
    /// accumulated into the offset. Returns `true` when the offset changed.
    pub fn drag_to(&mut self, pos: Point, displayed: Size) -> bool {
        let Some(drag) = self.drag.as_mut() else {
            return false;
        };
        let delta: Vec2 = pos - drag.last;
        drag.last = pos;

        let Some(ratio) = display_ratio(displayed) else {
            tracing::debug!(?displayed, "ignoring drag on degenerate display size");
            return false;
        };
        let before = self.state.offset();
        self.offset_by(delta.x * ratio.x, delta.y * ratio.y);
        self.state.offset() != before
    }

    /// Finish the current drag, if any.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Return `true` while a drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Replace the whole state, clamping each field through the setters.
    pub(crate) fn apply(&mut self, t: &TransformState) {
        self.state = TransformState::default();
        self.set_scale(t.scale);
        self.offset_by(t.offset_x, t.offset_y);
        self.set_rotation(t.rotation);
        self.set_opacity(t.opacity);
        self.state.flip_h = t.flip_h;
        self.state.flip_v = t.flip_v;
        self.state.repeat_mode = t.repeat_mode;
    }
}

fn finite(v: f64, what: &str) -> Option<f64> {
    if v.is_finite() {
        Some(v)
    } else {
        tracing::debug!(value = v, what, "ignoring non-finite transform input");
        None
    }
}

fn display_ratio(displayed: Size) -> Option<Vec2> {
    if !(displayed.width.is_finite() && displayed.height.is_finite())
        || displayed.width <= 0.0
        || displayed.height <= 0.0
    {
        return None;
    }
    let canvas = f64::from(CANVAS_SIZE);
    Some(Vec2::new(canvas / displayed.width, canvas / displayed.height))
}

#[cfg(test)]
#[path = "../../tests/unit/transform/controller.rs"]
mod tests;
