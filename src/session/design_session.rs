use std::collections::HashMap;
use std::sync::Arc;

use crate::assets::catalog::VehicleId;
use crate::assets::decode::decode_raster;
use crate::assets::raster::RasterAsset;
use crate::assets::store::AssetSource;
use crate::encode::png::{ExportBlob, export_png};
use crate::foundation::config::RenderOpts;
use crate::foundation::core::{Point, Size};
use crate::foundation::error::{WrapError, WrapResult};
use crate::mask::generator::{Mask, MaskGenerator};
use crate::render::buffer::OutputBuffer;
use crate::render::compositor::{PatternCompositor, RenderSnapshot};
use crate::session::fingerprint::{SnapshotFingerprint, SnapshotKey, fingerprint_snapshot};
use crate::session::slot::{AssetSlot, LoadTicket, SlotKind, SlotUpdate};
use crate::transform::controller::{TransformController, WheelDirection};
use crate::transform::state::TransformState;

/// Options controlling a [`DesignSession`].
#[derive(Clone, Copy, Debug)]
pub struct DesignSessionOpts {
    /// Compositor options.
    pub render: RenderOpts,
    /// Skip a pass when its inputs fingerprint identically to the last rendered pass.
    pub elide_unchanged: bool,
}

impl Default for DesignSessionOpts {
    fn default() -> Self {
        Self {
            render: RenderOpts::default(),
            elide_unchanged: true,
        }
    }
}

/// Render pass statistics for a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Passes that ran the compositor.
    pub passes_rendered: u64,
    /// Requests answered from the previous output because nothing changed.
    pub passes_elided: u64,
}

#[derive(Clone, Debug)]
struct TemplateEntry {
    template: RasterAsset,
    mask: Arc<Mask>,
}

/// In-memory design session: selected vehicle, loaded assets, transform, and render scheduling.
///
/// Mutations only mark the session dirty. [`DesignSession::render`] takes one consistent
/// snapshot of every input and runs at most one compositing pass for any number of mutations
/// made since the previous call.
///
/// Asset decoding happens outside the session. A load is started with `begin_*_load`, which
/// returns a [`LoadTicket`], and finished with `complete_*_load`. Only the most recently started
/// load of each slot is applied; earlier completions are discarded as stale.
pub struct DesignSession {
    opts: DesignSessionOpts,
    compositor: PatternCompositor,
    mask_gen: MaskGenerator,

    vehicle: Option<VehicleId>,
    template: AssetSlot<TemplateEntry>,
    pattern: AssetSlot<RasterAsset>,
    controller: TransformController,
    show_outlines: bool,
    template_cache: HashMap<VehicleId, TemplateEntry>,

    dirty: bool,
    last: Option<(SnapshotFingerprint, OutputBuffer)>,
    stats: RenderStats,
}

impl Default for DesignSession {
    fn default() -> Self {
        Self::new(DesignSessionOpts::default())
    }
}

impl DesignSession {
    /// Empty session: no vehicle, no pattern, default transform, outlines hidden.
    pub fn new(opts: DesignSessionOpts) -> Self {
        Self {
            opts,
            compositor: PatternCompositor::new(opts.render),
            mask_gen: MaskGenerator::new().with_sampling(opts.render.sampling),
            vehicle: None,
            template: AssetSlot::new(SlotKind::Template),
            pattern: AssetSlot::new(SlotKind::Pattern),
            controller: TransformController::new(),
            show_outlines: false,
            template_cache: HashMap::new(),
            dirty: true,
            last: None,
            stats: RenderStats::default(),
        }
    }

    /// Options in effect.
    pub fn opts(&self) -> DesignSessionOpts {
        self.opts
    }

    /// Currently selected vehicle.
    pub fn vehicle(&self) -> Option<&VehicleId> {
        self.vehicle.as_ref()
    }

    /// Decoded template of the selected vehicle.
    pub fn template(&self) -> Option<&RasterAsset> {
        self.template.get().map(|e| &e.template)
    }

    /// Panel mask of the selected vehicle.
    pub fn mask(&self) -> Option<&Mask> {
        self.template.get().map(|e| e.mask.as_ref())
    }

    /// Loaded pattern.
    pub fn pattern(&self) -> Option<&RasterAsset> {
        self.pattern.get()
    }

    /// Return `true` once a pattern has been loaded.
    pub fn has_pattern(&self) -> bool {
        self.pattern.is_loaded()
    }

    /// Current transform.
    pub fn transform(&self) -> &TransformState {
        self.controller.state()
    }

    /// Whether the panel outline overlay is shown.
    pub fn show_outlines(&self) -> bool {
        self.show_outlines
    }

    /// Return `true` when inputs changed since the last [`DesignSession::render`].
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Render statistics so far.
    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    /// Number of vehicles whose template and mask are cached.
    pub fn cached_templates(&self) -> usize {
        self.template_cache.len()
    }

    /// Drop every cached template. The active template stays loaded.
    pub fn clear_cache(&mut self) {
        self.template_cache.clear();
    }

    // Vehicle / template

    /// Select `vehicle` and start loading its template.
    ///
    /// The previous template and mask are dropped immediately. Returns `None` when the template
    /// is already available (same vehicle, or cached) and nothing needs decoding; otherwise the
    /// caller decodes the template and passes the result to
    /// [`DesignSession::complete_template_load`] with the returned ticket.
    #[tracing::instrument(skip(self, vehicle), fields(vehicle = %vehicle))]
    pub fn begin_template_load(&mut self, vehicle: VehicleId) -> Option<LoadTicket> {
        if self.vehicle.as_ref() == Some(&vehicle) && self.template.is_loaded() {
            return None;
        }
        self.dirty = true;
        if let Some(entry) = self.template_cache.get(&vehicle).cloned() {
            tracing::debug!("template served from cache");
            self.vehicle = Some(vehicle);
            self.template.set(entry);
            return None;
        }
        self.vehicle = Some(vehicle);
        self.template.clear();
        Some(self.template.begin())
    }

    /// Finish a template load started by [`DesignSession::begin_template_load`].
    ///
    /// On success the mask is generated and both are cached for the vehicle. A decode failure is
    /// logged and leaves the template absent. Completions for a superseded selection are
    /// discarded.
    #[tracing::instrument(skip(self, decoded), fields(generation = ticket.generation))]
    pub fn complete_template_load(
        &mut self,
        ticket: LoadTicket,
        decoded: WrapResult<RasterAsset>,
    ) -> SlotUpdate {
        if !self.template.is_current(ticket) {
            tracing::warn!(slot = ?ticket.slot, "discarding stale template load");
            return SlotUpdate::Stale;
        }
        let entry = match decoded {
            Ok(template) => {
                let mask = Arc::new(self.mask_gen.generate(&template));
                Some(TemplateEntry { template, mask })
            }
            Err(e) => {
                tracing::error!(error = %e, "template failed to load");
                None
            }
        };
        if let (Some(vehicle), Some(entry)) = (self.vehicle.as_ref(), entry.as_ref()) {
            self.template_cache.insert(vehicle.clone(), entry.clone());
        }
        self.dirty = true;
        self.template.complete(ticket, entry)
    }

    /// Select `vehicle` and load its template from `source`, blocking.
    pub fn load_template_from(
        &mut self,
        vehicle: VehicleId,
        source: &dyn AssetSource,
    ) -> SlotUpdate {
        let Some(ticket) = self.begin_template_load(vehicle.clone()) else {
            return SlotUpdate::Applied;
        };
        let decoded = source
            .template_bytes(&vehicle)
            .and_then(|bytes| decode_raster(&bytes));
        self.complete_template_load(ticket, decoded)
    }

    /// Select `vehicle` with an already decoded template, superseding any load in flight.
    pub fn set_template(&mut self, vehicle: VehicleId, template: RasterAsset) {
        let mask = Arc::new(self.mask_gen.generate(&template));
        let entry = TemplateEntry { template, mask };
        self.template_cache.insert(vehicle.clone(), entry.clone());
        self.vehicle = Some(vehicle);
        self.template.set(entry);
        self.dirty = true;
    }

    /// Clear the vehicle selection, dropping its template and mask.
    pub fn deselect_vehicle(&mut self) {
        if self.vehicle.is_none() && !self.template.is_loaded() {
            return;
        }
        self.vehicle = None;
        self.template.clear();
        self.dirty = true;
    }

    // Pattern

    /// Start a pattern upload. The current pattern stays visible until the load completes.
    pub fn begin_pattern_load(&mut self) -> LoadTicket {
        self.pattern.begin()
    }

    /// Finish a pattern upload started by [`DesignSession::begin_pattern_load`].
    ///
    /// A decode failure is logged and leaves the pattern absent.
    #[tracing::instrument(skip(self, decoded), fields(generation = ticket.generation))]
    pub fn complete_pattern_load(
        &mut self,
        ticket: LoadTicket,
        decoded: WrapResult<RasterAsset>,
    ) -> SlotUpdate {
        if !self.pattern.is_current(ticket) {
            tracing::warn!(slot = ?ticket.slot, "discarding stale pattern load");
            return SlotUpdate::Stale;
        }
        let value = match decoded {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                tracing::error!(error = %e, "pattern failed to load");
                None
            }
        };
        self.dirty = true;
        self.pattern.complete(ticket, value)
    }

    /// Decode `bytes` as the new pattern, blocking.
    pub fn load_pattern_from(&mut self, bytes: &[u8]) -> SlotUpdate {
        let ticket = self.begin_pattern_load();
        self.complete_pattern_load(ticket, decode_raster(bytes))
    }

    /// Install an already decoded pattern, superseding any upload in flight.
    pub fn set_pattern(&mut self, pattern: RasterAsset) {
        self.pattern.set(pattern);
        self.dirty = true;
    }

    // Transform and overlay

    /// Mutable access to the transform controller for slider, nudge, flip and mode input.
    pub fn transform_mut(&mut self) -> &mut TransformController {
        self.dirty = true;
        &mut self.controller
    }

    /// Apply one wheel tick. Ignored while no pattern is loaded.
    pub fn wheel(&mut self, dir: WheelDirection) {
        if !self.has_pattern() {
            return;
        }
        self.controller.wheel(dir);
        self.dirty = true;
    }

    /// Press: start a drag at display position `pos`. Ignored while no pattern is loaded.
    pub fn begin_drag(&mut self, pos: Point) {
        let loaded = self.has_pattern();
        self.controller.begin_drag(pos, loaded);
    }

    /// Move: continue the drag on a canvas displayed at `displayed` pixels.
    ///
    /// A drag whose pattern has gone away (failed or cleared upload) is cancelled instead.
    pub fn drag_to(&mut self, pos: Point, displayed: Size) {
        if !self.has_pattern() {
            self.controller.end_drag();
            return;
        }
        if self.controller.drag_to(pos, displayed) {
            self.dirty = true;
        }
    }

    /// Release: finish the drag.
    pub fn end_drag(&mut self) {
        self.controller.end_drag();
    }

    /// Flip the outline overlay on or off.
    pub fn toggle_outlines(&mut self) {
        self.set_show_outlines(!self.show_outlines);
    }

    /// Show or hide the outline overlay.
    pub fn set_show_outlines(&mut self, on: bool) {
        if self.show_outlines != on {
            self.show_outlines = on;
            self.dirty = true;
        }
    }

    /// Restore the default transform. Assets and the outline toggle are kept.
    pub fn reset_transform(&mut self) {
        self.controller.reset();
        self.dirty = true;
    }

    // Rendering and export

    /// Capture every render input at once.
    pub fn snapshot(&self) -> RenderSnapshot {
        let entry = self.template.get();
        RenderSnapshot {
            template: entry.map(|e| e.template.clone()),
            mask: entry.map(|e| Arc::clone(&e.mask)),
            pattern: self.pattern.get().cloned(),
            transform: *self.controller.state(),
            show_outlines: self.show_outlines,
        }
    }

    fn fingerprint(&self) -> SnapshotFingerprint {
        fingerprint_snapshot(&SnapshotKey {
            template: self.template.revision(),
            pattern: self.pattern.revision(),
            transform: self.controller.state(),
            show_outlines: self.show_outlines,
        })
    }

    /// Bring the output up to date with the current inputs and return it.
    ///
    /// Runs at most one compositing pass; when nothing that the compositor reads has changed
    /// since the previous pass, the previous output is returned as-is.
    pub fn render(&mut self) -> WrapResult<&OutputBuffer> {
        let fp = self.fingerprint();
        let reuse = self.opts.elide_unchanged
            && self.last.as_ref().is_some_and(|(last_fp, _)| *last_fp == fp);

        if reuse {
            self.stats.passes_elided += 1;
            tracing::debug!("render elided, inputs unchanged");
        } else {
            let buf = self.compositor.render(&self.snapshot())?;
            self.stats.passes_rendered += 1;
            self.last = Some((fp, buf));
        }
        self.dirty = false;

        self.last
            .as_ref()
            .map(|(_, buf)| buf)
            .ok_or_else(|| WrapError::Other(anyhow::anyhow!("render produced no output")))
    }

    /// Render if needed and encode the result as a PNG named after the selected vehicle.
    ///
    /// Fails while no pattern is loaded.
    pub fn export(&mut self) -> WrapResult<ExportBlob> {
        if !self.has_pattern() {
            return Err(WrapError::validation(
                "export requires a loaded pattern",
            ));
        }
        let vehicle = self.vehicle.clone();
        let buf = self.render()?;
        export_png(buf, vehicle.as_ref())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/design_session.rs"]
mod tests;
