//! Bevy plugins for the draw-to-place interaction.
//!
//! Provides:
//! - `GroundplanHeadlessPlugin`: Logic-only plugin (no rendering
//!   dependencies) for host adapters and headless testing
//! - `GroundplanUnifiedPlugin`: `GroundplanHeadlessPlugin` + gizmo
//!   rendering of the live stroke and placed markers

use bevy::prelude::*;

use crate::environment::EnvironmentRes;
use crate::events::{DrawingConfirmedEvent, ObjectPlacedEvent, PlaceObjectEvent};
use crate::resources::{ControllerButton, ControllerPose, DrawStateRes, PlacementConfig, PlacementTemplate};
use crate::state_store::StrokeStore;
use crate::systems;

// ============================================================================
// Headless Plugin (logic only, no rendering dependencies)
// ============================================================================

/// Headless plugin containing the full gesture and placement logic.
///
/// Use this plugin with `MinimalPlugins` to drive the interaction from
/// any tick source — a host adapter polling an XR runtime, or a test
/// writing input resources directly.
#[derive(Default)]
pub struct GroundplanHeadlessPlugin {
    /// Injected environment capabilities; `None` means no environment
    /// (every probe misses, no world lock).
    pub environment: Option<EnvironmentRes>,
    /// Template for placed instances; `None` uses the default template.
    pub template: Option<PlacementTemplate>,
    /// Shared host store; pass a clone kept by the host to poll stroke
    /// and placement state.
    pub stroke_store: Option<StrokeStore>,
}

impl Plugin for GroundplanHeadlessPlugin {
    fn build(&self, app: &mut App) {
        // ====================================================================
        // Resources
        // ====================================================================
        app.init_resource::<ButtonInput<ControllerButton>>()
            .init_resource::<ControllerPose>()
            .init_resource::<DrawStateRes>()
            .init_resource::<PlacementConfig>();

        app.insert_resource(self.environment.clone().unwrap_or_default())
            .insert_resource(self.template.clone().unwrap_or_default())
            .insert_resource(self.stroke_store.clone().unwrap_or_default());

        // ====================================================================
        // Messages
        // ====================================================================
        app.add_message::<DrawingConfirmedEvent>()
            .add_message::<PlaceObjectEvent>()
            .add_message::<ObjectPlacedEvent>();

        // ====================================================================
        // Gesture capture and placement (strict order within a tick:
        // sample, confirm, then any placement triggered by it)
        // ====================================================================
        app.add_systems(
            Update,
            (
                systems::sample_stroke,
                systems::confirm_stroke,
                systems::auto_request_placement,
                systems::handle_place_requests,
            )
                .chain(),
        );

        // ====================================================================
        // Host bridge sync
        // ====================================================================
        app.add_systems(
            PostUpdate,
            (
                systems::sync_stroke_to_store,
                systems::record_confirms,
                systems::record_placements,
            )
                .chain(),
        );

        // Button edges are driver-written; reset them after every tick.
        app.add_systems(Last, systems::clear_input_edges);
    }
}

// ============================================================================
// Unified Plugin (headless + rendering)
// ============================================================================

/// Unified plugin adding gizmo rendering on top of the headless logic.
#[derive(Default)]
pub struct GroundplanUnifiedPlugin {
    /// Injected environment capabilities.
    pub environment: Option<EnvironmentRes>,
    /// Template for placed instances.
    pub template: Option<PlacementTemplate>,
    /// Shared host store.
    pub stroke_store: Option<StrokeStore>,
}

impl Plugin for GroundplanUnifiedPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(GroundplanHeadlessPlugin {
            environment: self.environment.clone(),
            template: self.template.clone(),
            stroke_store: self.stroke_store.clone(),
        });

        app.init_resource::<systems::StrokeGizmoConfig>();

        app.add_systems(
            Update,
            (systems::render_stroke, systems::render_placed_markers),
        );
    }
}
