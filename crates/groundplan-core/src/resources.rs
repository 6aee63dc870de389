//! ECS Resources for the draw-to-place interaction.
//!
//! The controller pose and button state are written by the driver each
//! tick; the rest is shared interaction state and configuration.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Buttons of the drawing controller, tracked through
/// `ButtonInput<ControllerButton>`.
///
/// The driver presses/releases these between ticks; edge state is reset
/// by `clear_input_edges` at the end of every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerButton {
    /// Index trigger: hold to draw.
    Trigger,
    /// Confirm button: finish the drawing.
    Confirm,
}

/// Pose of the tracked drawing controller, written by the driver each
/// tick.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ControllerPose {
    /// World-space position of the controller.
    pub position: Vec3,
    /// World-space pointing direction of the controller.
    pub forward: Dir3,
}

impl Default for ControllerPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            forward: Dir3::NEG_Z,
        }
    }
}

/// Phase of the current draw-confirm cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawPhase {
    /// No stroke yet.
    #[default]
    Idle,
    /// Trigger held, samples being appended.
    Drawing,
    /// Stroke confirmed; terminal until the next trigger press.
    Confirmed,
}

/// Gesture capture state.
///
/// `points` is the point sequence placement reads from; it is cleared
/// only on a fresh trigger press. `display` mirrors it while drawing and
/// is what the host renders; a confirm press clears the mirror but keeps
/// the points.
#[derive(Resource, Debug, Clone, Default)]
pub struct DrawStateRes {
    /// Sampled controller positions, in draw order.
    pub points: Vec<Vec3>,
    /// Renderable polyline mirroring `points` while drawing.
    pub display: Vec<Vec3>,
    /// Current phase of the draw-confirm cycle.
    pub phase: DrawPhase,
}

/// Placement behavior configuration.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct PlacementConfig {
    /// Wire every confirmed drawing directly into a placement request.
    /// Hosts that want a separate explicit "place" action disable this
    /// and send `PlaceObjectEvent` themselves.
    pub auto_place_on_confirm: bool,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            auto_place_on_confirm: true,
        }
    }
}

/// The template new instances are created from.
///
/// Hosts typically load these from a JSON catalog and swap the resource
/// when the user picks a different building.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementTemplate {
    /// Template name, resolved to an asset by the host adapter.
    pub name: String,
    /// Uniform scale applied to new instances.
    #[serde(default = "default_template_scale")]
    pub scale: f32,
}

fn default_template_scale() -> f32 {
    1.0
}

impl Default for PlacementTemplate {
    fn default() -> Self {
        Self {
            name: "building".to_string(),
            scale: 1.0,
        }
    }
}
