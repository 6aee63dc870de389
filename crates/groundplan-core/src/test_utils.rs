//! Test utilities for headless Bevy integration tests.
//!
//! Provides `TestApp`, a wrapper around `bevy::app::App` that uses
//! `MinimalPlugins` + `GroundplanHeadlessPlugin`, playing the role of
//! the host driver: it writes the controller pose and button edges and
//! advances the tick.

use bevy::prelude::*;

use crate::components::{PlacedObject, SpatialAnchor};
use crate::environment::EnvironmentRes;
use crate::events::PlaceObjectEvent;
use crate::plugin::GroundplanHeadlessPlugin;
use crate::resources::{ControllerButton, ControllerPose, DrawStateRes};
use crate::state_store::StrokeStore;

/// A headless Bevy app wrapper for testing.
pub(crate) struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Create a test app with no environment (probes always miss).
    pub fn new() -> Self {
        Self::with_environment(EnvironmentRes::default())
    }

    /// Create a test app with the given environment capabilities.
    pub fn with_environment(environment: EnvironmentRes) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(GroundplanHeadlessPlugin {
            environment: Some(environment),
            template: None,
            stroke_store: None,
        });
        // Run one update to initialize all resources and state.
        app.update();
        Self { app }
    }

    /// Run a single tick.
    pub fn update(&mut self) {
        self.app.update();
    }

    /// Move the tracked controller to `position`.
    pub fn set_controller(&mut self, position: Vec3) {
        self.app
            .world_mut()
            .resource_mut::<ControllerPose>()
            .position = position;
    }

    /// Press the draw trigger (stays held until released).
    pub fn press_trigger(&mut self) {
        self.buttons().press(ControllerButton::Trigger);
    }

    /// Release the draw trigger.
    pub fn release_trigger(&mut self) {
        self.buttons().release(ControllerButton::Trigger);
    }

    /// Press the confirm button (stays held until released).
    pub fn press_confirm(&mut self) {
        self.buttons().press(ControllerButton::Confirm);
    }

    /// Release the confirm button.
    pub fn release_confirm(&mut self) {
        self.buttons().release(ControllerButton::Confirm);
    }

    /// Draw a full stroke through the given positions, one tick each,
    /// and release the trigger afterwards.
    pub fn draw_points(&mut self, points: &[Vec3]) {
        let (first, rest) = points.split_first().expect("stroke needs at least one point");
        self.set_controller(*first);
        self.press_trigger();
        self.update();
        for point in rest {
            self.set_controller(*point);
            self.update();
        }
        self.release_trigger();
        self.update();
    }

    /// Send an explicit placement request and run a tick to process it.
    pub fn request_place(&mut self) {
        self.app.world_mut().write_message(PlaceObjectEvent);
        self.update();
    }

    /// Get the current gesture capture state.
    pub fn draw_state(&self) -> &DrawStateRes {
        self.app.world().resource::<DrawStateRes>()
    }

    /// Get a handle to the shared host store.
    pub fn store(&self) -> StrokeStore {
        self.app.world().resource::<StrokeStore>().clone()
    }

    /// Collect every placed instance with its anchor state.
    pub fn placed_instances(&mut self) -> Vec<(Transform, PlacedObject, bool)> {
        let world = self.app.world_mut();
        let mut query = world.query::<(&Transform, &PlacedObject, Option<&SpatialAnchor>)>();
        query
            .iter(world)
            .map(|(transform, object, anchor)| (*transform, object.clone(), anchor.is_some()))
            .collect()
    }

    /// Get a mutable reference to the World.
    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    fn buttons(&mut self) -> Mut<'_, ButtonInput<ControllerButton>> {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<ControllerButton>>()
    }
}
