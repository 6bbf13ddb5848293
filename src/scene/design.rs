use crate::assets::catalog::VehicleId;
use crate::assets::store::AssetSource;
use crate::foundation::error::{WrapError, WrapResult};
use crate::scene::model::DesignDef;
use crate::session::design_session::DesignSession;
use crate::session::slot::SlotUpdate;
use crate::transform::state::TransformState;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Saved wrap design: vehicle, pattern path, transform, and overlay toggle.
///
/// This is the JSON-facing representation used by the command-line tool, e.g.
///
/// ```json
/// {
///   "vehicle": "model_y",
///   "pattern": "patterns/camo.png",
///   "transform": { "scale": 0.5, "offset": [12, -40], "rotation_deg": 30, "repeat_mode": "mirror" },
///   "show_outlines": true
/// }
/// ```
///
/// Every field is optional. Transform values are clamped when applied, exactly as if they had been
/// entered through the controls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Design {
    def: DesignDef,
}

impl Design {
    /// Parse a design from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> WrapResult<Self> {
        let def: DesignDef = serde_json::from_reader(r)
            .map_err(|e| WrapError::validation(format!("parse design JSON: {e}")))?;
        Ok(Self { def })
    }

    /// Parse a design from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> WrapResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            WrapError::validation(format!("open design JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Selected vehicle, if any.
    pub fn vehicle(&self) -> Option<&VehicleId> {
        self.def.vehicle.as_ref()
    }

    /// Pattern path relative to the asset root, if any.
    pub fn pattern(&self) -> Option<&str> {
        self.def.pattern.as_deref()
    }

    /// Whether the outline overlay is requested.
    pub fn show_outlines(&self) -> bool {
        self.def.show_outlines
    }

    /// The requested transform, before clamping.
    pub fn transform(&self) -> TransformState {
        self.def.transform.to_state()
    }

    /// Load the design's assets from `source` into `session` and apply its settings.
    ///
    /// Fails when a named template or pattern cannot be loaded; the session keeps whatever did
    /// load.
    #[tracing::instrument(skip(self, session, source))]
    pub fn apply(&self, session: &mut DesignSession, source: &dyn AssetSource) -> WrapResult<()> {
        match self.def.vehicle.clone() {
            Some(vehicle) => {
                if session.load_template_from(vehicle.clone(), source) != SlotUpdate::Applied {
                    return Err(WrapError::decode(format!(
                        "template for vehicle '{vehicle}' could not be loaded"
                    )));
                }
            }
            None => session.deselect_vehicle(),
        }

        if let Some(rel) = self.def.pattern.as_deref() {
            let bytes = source.read(rel)?;
            if session.load_pattern_from(&bytes) != SlotUpdate::Applied {
                return Err(WrapError::decode(format!(
                    "pattern '{rel}' could not be decoded"
                )));
            }
        }

        session.transform_mut().apply(&self.transform());
        session.set_show_outlines(self.def.show_outlines);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/design.rs"]
mod tests;
