//! Pattern layer rasterization.
//!
//! The layer is produced by inverse mapping: every canvas pixel center is mapped back into the
//! layer's local frame, then into the tile grid (or the stretch rectangle), and the pattern is
//! sampled there. Tiles never overlap, so this matches drawing each tile in turn while costing
//! one sample per canvas pixel regardless of how many tiles are visible.

use crate::assets::raster::RasterAsset;
use crate::effects::composite::attenuate;
use crate::foundation::config::{Sampling, TILE_MARGIN, WRAP_CANVAS};
use crate::foundation::core::Point;
use crate::foundation::math::unit_to_u8;
use crate::transform::state::{RepeatMode, TransformState};

/// One axis of the tile grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct TileAxis {
    /// Scaled cell extent in canvas units.
    cell: f64,
    /// `offset % cell`, with the sign of the offset.
    phase: f64,
    /// Number of cells laid out from `-TILE_MARGIN` to `canvas + TILE_MARGIN`.
    count: i64,
    /// Half the canvas extent; local coordinates are centered.
    half_canvas: f64,
}

/// Where a local coordinate lands inside the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct CellHit {
    /// Grid index, `0..count`.
    pub(crate) index: i64,
    /// Position inside the cell, `[0, cell)`.
    pub(crate) within: f64,
}

impl TileAxis {
    pub(crate) fn new(cell: f64, offset: f64, canvas_extent: f64) -> Self {
        let span = canvas_extent + 2.0 * TILE_MARGIN;
        Self {
            cell,
            phase: offset % cell,
            count: (span / cell).ceil() as i64,
            half_canvas: canvas_extent / 2.0,
        }
    }

    /// Locate local coordinate `v` in the grid; `None` outside the tiled region.
    pub(crate) fn locate(&self, v: f64) -> Option<CellHit> {
        let t = v + self.half_canvas - self.phase + TILE_MARGIN;
        let index = (t / self.cell).floor();
        if !index.is_finite() || index < 0.0 || index >= self.count as f64 {
            return None;
        }
        let index = index as i64;
        let within = (t - index as f64 * self.cell).clamp(0.0, self.cell);
        Some(CellHit { index, within })
    }

    /// Whether the cell at `index` is mirrored: the parity of its grid coordinate, taken before
    /// the phase adjustment.
    pub(crate) fn is_odd(&self, index: i64) -> bool {
        let origin = -TILE_MARGIN + index as f64 * self.cell;
        ((origin / self.cell).floor() as i64).rem_euclid(2) == 1
    }
}

/// Rasterize the transformed, repeated, opacity-attenuated pattern onto a transparent
/// wrap-canvas-sized premultiplied buffer.
pub(crate) fn render_pattern_layer(
    pattern: &RasterAsset,
    transform: &TransformState,
    sampling: Sampling,
) -> Vec<u8> {
    let canvas = WRAP_CANVAS;
    let mut out = vec![0u8; canvas.rgba_len()];

    let op = unit_to_u8(transform.opacity());
    if op == 0 {
        return out;
    }

    let inv = transform.layer_to_canvas().inverse();
    let cw = f64::from(canvas.width);
    let ch = f64::from(canvas.height);
    let pw = f64::from(pattern.width());
    let ph = f64::from(pattern.height());

    let sampler = LayerSampler::new(transform, pw, ph, cw, ch);

    for (y, row) in out.chunks_exact_mut(canvas.width as usize * 4).enumerate() {
        for (x, px) in row.chunks_exact_mut(4).enumerate() {
            let local = inv * Point::new(x as f64 + 0.5, y as f64 + 0.5);
            let Some((sx, sy)) = sampler.source_coords(local) else {
                continue;
            };
            let s = pattern.sample(sx, sy, sampling);
            px.copy_from_slice(&attenuate(s, op));
        }
    }
    out
}

enum LayerSampler {
    Stretch {
        half_w: f64,
        half_h: f64,
        sx: f64,
        sy: f64,
    },
    Grid {
        x: TileAxis,
        y: TileAxis,
        mirror: bool,
        sx: f64,
        sy: f64,
    },
}

impl LayerSampler {
    fn new(t: &TransformState, pw: f64, ph: f64, cw: f64, ch: f64) -> Self {
        match t.repeat_mode() {
            RepeatMode::Stretch => LayerSampler::Stretch {
                half_w: cw / 2.0,
                half_h: ch / 2.0,
                sx: pw / cw,
                sy: ph / ch,
            },
            mode @ (RepeatMode::Tile | RepeatMode::Mirror) => {
                let cell_w = pw * t.scale();
                let cell_h = ph * t.scale();
                LayerSampler::Grid {
                    x: TileAxis::new(cell_w, t.offset_x(), cw),
                    y: TileAxis::new(cell_h, t.offset_y(), ch),
                    mirror: mode == RepeatMode::Mirror,
                    sx: pw / cell_w,
                    sy: ph / cell_h,
                }
            }
        }
    }

    /// Map a layer-local point to pattern pixel coordinates, or `None` when uncovered.
    fn source_coords(&self, local: Point) -> Option<(f64, f64)> {
        match *self {
            LayerSampler::Stretch {
                half_w,
                half_h,
                sx,
                sy,
            } => {
                let u = local.x + half_w;
                let v = local.y + half_h;
                if !(0.0..2.0 * half_w).contains(&u) || !(0.0..2.0 * half_h).contains(&v) {
                    return None;
                }
                Some((u * sx, v * sy))
            }
            LayerSampler::Grid {
                x,
                y,
                mirror,
                sx,
                sy,
            } => {
                let hx = x.locate(local.x)?;
                let hy = y.locate(local.y)?;
                let mut u = hx.within;
                let mut v = hy.within;
                if mirror {
                    if x.is_odd(hx.index) {
                        u = x.cell - u;
                    }
                    if y.is_odd(hy.index) {
                        v = y.cell - v;
                    }
                }
                Some((u * sx, v * sy))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/layer.rs"]
mod tests;
