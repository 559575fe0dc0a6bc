use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Doors", inline)]
#[serde(default)]
/// Hinge-pair geometry in target-anchored units.
///
/// Each leaf pivots about a hinge `hinge_offset` from the target centre;
/// its panel sits `panel_offset` inward from the hinge.
pub struct DoorOptions {
    /// Distance of each hinge from the target centre along X.
    #[schemars(title = "Hinge Offset", range(min = 0.0, max = 5.0), extend("step" = 0.05))]
    pub hinge_offset: f32,
    /// Distance of each panel centre from its hinge along X.
    #[schemars(title = "Panel Offset", range(min = 0.0, max = 5.0), extend("step" = 0.05))]
    pub panel_offset: f32,
    /// Panel box size (width, height, depth).
    #[schemars(skip)]
    pub panel_size: [f32; 3],
    /// Leaf rotation in radians at progress 1.
    #[schemars(title = "Open Angle", range(min = 0.0, max = 3.14), extend("step" = 0.05))]
    pub open_angle: f32,
}

impl Default for DoorOptions {
    fn default() -> Self {
        Self {
            hinge_offset: 1.5,
            panel_offset: 0.7,
            panel_size: [1.6, 2.0, 0.1],
            open_angle: 1.6,
        }
    }
}
