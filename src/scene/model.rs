use crate::assets::catalog::VehicleId;
use crate::transform::state::{RepeatMode, TransformState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub(crate) struct Vec2Def {
    pub(crate) x: f64,
    pub(crate) y: f64,
}

impl<'de> Deserialize<'de> for Vec2Def {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Arr([f64; 2]),
            Obj { x: f64, y: f64 },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Arr([x, y]) => Ok(Self { x, y }),
            Repr::Obj { x, y } => Ok(Self { x, y }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct TransformDef {
    #[serde(default = "default_one")]
    pub(crate) scale: f64,
    #[serde(default)]
    pub(crate) offset: Vec2Def,
    #[serde(default)]
    pub(crate) rotation_deg: f64,
    #[serde(default = "default_one")]
    pub(crate) opacity: f64,
    #[serde(default)]
    pub(crate) flip_h: bool,
    #[serde(default)]
    pub(crate) flip_v: bool,
    #[serde(default)]
    pub(crate) repeat_mode: RepeatMode,
}

fn default_one() -> f64 {
    1.0
}

impl Default for TransformDef {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2Def::default(),
            rotation_deg: 0.0,
            opacity: 1.0,
            flip_h: false,
            flip_v: false,
            repeat_mode: RepeatMode::Tile,
        }
    }
}

impl TransformDef {
    /// Unclamped state; callers pass it through the controller.
    pub(crate) fn to_state(self) -> TransformState {
        TransformState {
            scale: self.scale,
            offset_x: self.offset.x,
            offset_y: self.offset.y,
            rotation: self.rotation_deg,
            opacity: self.opacity,
            flip_h: self.flip_h,
            flip_v: self.flip_v,
            repeat_mode: self.repeat_mode,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct DesignDef {
    #[serde(default)]
    pub(crate) vehicle: Option<VehicleId>,
    /// Pattern image path relative to the design's asset root.
    #[serde(default)]
    pub(crate) pattern: Option<String>,
    #[serde(default)]
    pub(crate) transform: TransformDef,
    #[serde(default)]
    pub(crate) show_outlines: bool,
}
